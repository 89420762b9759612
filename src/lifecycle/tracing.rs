/// Initializes the tracing/logging infrastructure for the application.
///
/// Builders log every accessor at `debug` level with the model and field as
/// structured fields, copies and template spawns at `trace`, and rejected
/// accessors at `warn`. Output uses the compact format without module
/// paths.
///
/// # Environment Variables
///
/// Set `RUST_LOG` to control log verbosity:
/// - `RUST_LOG=info` - Demo milestones only
/// - `RUST_LOG=debug` - Every set/add/build_from/build
/// - `RUST_LOG=trace` - Also every copy spawned from a template
/// - `RUST_LOG=builder_framework=debug` - Debug only for the builder crate
///
/// # Example
///
/// ```ignore
/// setup_tracing();
/// tracing::info!("Application started");
/// ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // model and field are logged as fields already
        .compact()
        .init();
}

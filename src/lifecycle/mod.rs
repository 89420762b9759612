//! # Application Lifecycle
//!
//! Process-wide setup for the demo binary. At the moment this is only the
//! tracing subscriber; see [`setup_tracing`].
//!
//! ```bash
//! RUST_LOG=info cargo run      # Milestones
//! RUST_LOG=debug cargo run     # Every builder operation
//! ```

pub mod tracing;

pub use tracing::*;

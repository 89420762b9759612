//! # Builder Recipe Demo
//!
//! Builds one customer preset, fans it out into two orders, and shows a
//! rejected order.

use builder_framework::BuilderError;
use builder_recipe::lifecycle::setup_tracing;
use builder_recipe::presets;
use tracing::{error, info};

fn main() -> Result<(), BuilderError> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting builder demo");

    let widget = presets::widget()?;
    let alice = presets::customer_orders("Alice", "alice@example.com", "Springfield")?;

    let small = presets::order(&alice, [presets::line(&widget, 2)?], None)?;
    info!(user = %small.user.name, total = small.total(), "Small order built");

    let large = presets::order(
        &alice,
        [presets::line(&widget, 5)?, presets::line(&widget, 10)?],
        Some("leave at the door"),
    )?;
    info!(
        user = %large.user.name,
        lines = large.lines.len(),
        total = large.total(),
        "Large order built"
    );

    // Exceeds the widget's stock, rejected by Order's own validation
    match presets::order(&alice, [presets::line(&widget, 500)?], None) {
        Ok(order) => info!(total = order.total(), "Oversized order built"),
        Err(e) => error!(error = %e, "Order rejected"),
    }

    info!("Demo completed successfully");
    Ok(())
}

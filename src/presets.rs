//! # Preset Templates
//!
//! Shared base configurations for the sample models. Each preset is frozen
//! into a [`Template`], so callers derive as many variants from it as they
//! like without affecting the preset or each other.

use crate::model::{Order, OrderLine, OrderLineBuilder, Product, UserBuilder};
use builder_framework::{Builder, BuilderError, FieldValue, Template};
use tracing::debug;

/// Stock catalog item used by the demo.
pub fn widget() -> Result<Template, BuilderError> {
    let mut base = Builder::of::<Product>();
    base.set("name", "Super Widget")?
        .set("price", 25.5)?
        .set("quantity", 100u32)?
        .add("tags", "hardware")?;
    Ok(base.into_template())
}

/// Orders for one customer: the user is filled in, lines are not.
pub fn customer_orders(name: &str, email: &str, city: &str) -> Result<Template, BuilderError> {
    let mut base = Builder::of::<Order>();
    UserBuilder::from(base.build_from("user")?)
        .set_name(name)?
        .set_email(email)?
        .build_from_address()?
        .set_street("1 Main Street")?
        .set_city(city)?;
    debug!(name, email, city, "Customer order preset");
    Ok(base.into_template())
}

/// A concrete line builder for `quantity` items copied from `product`.
pub fn line(product: &Template, quantity: u32) -> Result<Builder, BuilderError> {
    let mut line = Builder::of::<OrderLine>();
    OrderLineBuilder::from(&mut line)
        .set_product(product.new_copy())?
        .set_quantity(quantity)?;
    Ok(line)
}

/// Derives an order from `customer` with the given lines and note.
pub fn order(
    customer: &Template,
    lines: impl IntoIterator<Item = Builder>,
    note: Option<&str>,
) -> Result<Order, BuilderError> {
    let mut order = customer.new_copy();
    for line in lines {
        order.add("lines", line)?;
    }
    order.set("note", note.map(FieldValue::from))?;
    order.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_preset_builds() {
        let product: Product = widget().unwrap().build().unwrap();
        assert_eq!(product.name, "Super Widget");
        assert_eq!(product.tags, vec!["hardware"]);
    }

    #[test]
    fn customer_preset_fills_nested_user() {
        let customer = customer_orders("Alice", "alice@example.com", "Springfield").unwrap();
        let order = order(&customer, [line(&widget().unwrap(), 2).unwrap()], None).unwrap();
        assert_eq!(order.user.name, "Alice");
        let address = order.user.address.unwrap();
        assert_eq!(address.city, "Springfield");
        assert_eq!(address.postcode, None);
        assert_eq!(order.note, None);
    }
}

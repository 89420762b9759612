use super::{Product, User};
use builder_framework::{schema_model, Describe, FieldDef, Model, ModelSchema, SchemaRef};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

schema_model! {
    /// One product and the quantity ordered.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct OrderLine {
        pub product: Product,
        pub quantity: u32,
    }
}

/// An order placed by a [`User`].
///
/// # Validation
/// Besides the field types, an order must have at least one line, no line may
/// have a zero quantity, and no line may ask for more than the product has in
/// stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub user: User,
    #[serde(default)]
    pub lines: Vec<OrderLine>,
    #[serde(default)]
    pub note: Option<String>,
}

impl Order {
    pub fn total(&self) -> f64 {
        self.lines
            .iter()
            .map(|line| line.product.price * f64::from(line.quantity))
            .sum()
    }
}

impl Model for Order {
    fn schema() -> SchemaRef {
        static SCHEMA: OnceLock<ModelSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            ModelSchema::new::<Order>(
                "Order",
                vec![
                    FieldDef::new("user", User::describe()),
                    FieldDef::new("lines", Vec::<OrderLine>::describe()),
                    FieldDef::new("note", Option::<String>::describe()),
                ],
            )
        })
    }

    fn validate(&self) -> Result<(), String> {
        if self.lines.is_empty() {
            return Err("order has no lines".to_string());
        }
        for line in &self.lines {
            if line.quantity == 0 {
                return Err(format!("line for '{}' has zero quantity", line.product.name));
            }
            if line.quantity > line.product.quantity {
                return Err(format!(
                    "Insufficient stock for '{}': requested {}, available {}",
                    line.product.name, line.quantity, line.product.quantity
                ));
            }
        }
        Ok(())
    }
}

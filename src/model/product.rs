use builder_framework::schema_model;
use serde::{Deserialize, Serialize};

schema_model! {
    /// Represents a product in the catalog.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Product {
        pub name: String,
        pub price: f64,
        pub quantity: u32,
        #[serde(default)]
        pub tags: Vec<String>,
    }
}

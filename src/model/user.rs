use builder_framework::schema_model;
use serde::{Deserialize, Serialize};

schema_model! {
    /// Postal address attached to a [`User`].
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Address {
        pub street: String,
        pub city: String,
        #[serde(default)]
        pub postcode: Option<String>,
    }
}

schema_model! {
    /// A registered customer.
    ///
    /// `address` is optional, so `build_from_address` unwraps the option and
    /// hands out an [`AddressBuilder`].
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct User {
        pub name: String,
        pub email: String,
        #[serde(default)]
        pub address: Option<Address>,
    }
}

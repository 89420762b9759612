//! Sample models used by the demo and the integration tests.
//!
//! [`User`] and [`Product`] are declared with
//! [`schema_model!`](builder_framework::schema_model). [`Order`] implements
//! [`Model`](builder_framework::Model) by hand because it validates its own
//! contents.

pub mod order;
pub mod product;
pub mod user;

pub use order::*;
pub use product::*;
pub use user::*;

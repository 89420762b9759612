//! # Builder Framework
//!
//! This crate provides reflective builders for validated data models. Given a
//! model's field schema, a [`Builder`] accepts `set_<field>`, `add_<field>` and
//! `build_from_<field>` requests, checks them against the schema at runtime,
//! and finally hands the collected values to the model's validating
//! constructor.
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Schema Layer** ([`Model`], [`ModelSchema`]) - field names, declared
//!    types and the validating constructor. Validation lives here and only here.
//! 2. **Builder Layer** ([`Builder`], [`Template`]) - accumulates values,
//!    resolves nested builders, spawns independent copies.
//! 3. **Typed Layer** ([`schema_model!`]) - generated `set_<field>` style
//!    methods on top of the dynamic builder.
//!
//! ## Core Abstractions
//!
//! ### [`Builder`] - The Accumulator
//!
//! ```rust
//! use builder_framework::{schema_model, Builder, BuilderError};
//! use serde::{Deserialize, Serialize};
//!
//! schema_model! {
//!     #[derive(Debug, Serialize, Deserialize)]
//!     pub struct MyModel {
//!         pub a_str: String,
//!         pub a_num: f64,
//!         pub many_nums: Vec<i64>,
//!     }
//! }
//!
//! # fn main() -> Result<(), BuilderError> {
//! let mut builder = Builder::of::<MyModel>();
//! builder
//!     .set("a_str", "foo")?
//!     .set("a_num", 3.14)?
//!     .set("many_nums", vec![1, 2])?
//!     .add("many_nums", 3)?;
//!
//! let model: MyModel = builder.build()?;
//! assert_eq!(model.many_nums, vec![1, 2, 3]);
//! # Ok(())
//! # }
//! ```
//!
//! ### [`Template`] - The Frozen Base
//!
//! [`Builder::template`] freezes a snapshot. Every operation on the template
//! works on a fresh copy, so one base configuration can produce any number of
//! divergent builds without them affecting each other.
//!
//! ## Dynamic Dispatch
//!
//! Accessors can also be addressed by name with [`Builder::invoke`]. The name
//! is parsed into an [`Accessor`] (operation kind plus field) and dispatched;
//! unknown prefixes and unknown fields are reported before anything is
//! written.
//!
//! ## Configuration
//!
//! [`BuilderConfig`] selects when unknown field names are reported: in the
//! accessor ([`FieldCheck::Eager`], the default) or by the constructor at build
//! time ([`FieldCheck::Deferred`]).
//!
//! ## Concurrency Model
//!
//! Builders are plain owned data with no interior mutability. A [`Template`]
//! shares its frozen source behind an `Arc` and never mutates it.

pub mod accessor;
pub mod builder;
pub mod config;
pub mod error;
pub mod macros;
pub mod schema;
pub mod template;
pub mod value;

#[doc(hidden)]
pub use paste;

// Re-export core types for convenience
pub use accessor::{Accessor, AccessorKind, PREFIXES};
pub use builder::Builder;
pub use config::{BuilderConfig, FieldCheck};
pub use error::{BuilderError, ValidationError};
pub use schema::{construct, Describe, FieldDef, FieldMap, FieldType, Model, ModelSchema, SchemaRef};
pub use template::Template;
pub use value::FieldValue;

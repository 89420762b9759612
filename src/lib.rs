#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Builder Recipe
//!
//! > **A Recipe for schema-driven builders in Rust.**
//!
//! This crate shows the [`builder_framework`] crate applied to a small order
//! domain: users with optional addresses, catalog products, and orders made of
//! lines.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Models ([`model`])
//! Plain data structures declared with
//! [`schema_model!`](builder_framework::schema_model). `Order` implements
//! [`Model`](builder_framework::Model) by hand to add its own validation.
//!
//! ### 2. The Presets ([`presets`])
//! Base configurations frozen into templates. One customer preset fans out
//! into any number of orders.
//!
//! ### 3. The Lifecycle ([`lifecycle`])
//! Tracing setup for the demo binary.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run with info logs
//! RUST_LOG=info cargo run
//!
//! # Run tests
//! cargo test
//! ```

pub mod lifecycle;
pub mod model;
pub mod presets;

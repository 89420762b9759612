//! # Builder Configuration
//!
//! Settings carried by every builder and inherited by the nested builders it
//! creates. Configuration is plain data and deserializes with `serde`, so an
//! application can embed it in its own settings file.

use serde::{Deserialize, Serialize};

/// When a field name passed to `set_` or `add_` is checked against the schema.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldCheck {
    /// Unknown fields are rejected by the accessor itself.
    #[default]
    Eager,
    /// Any field name is accepted; the model's constructor rejects unknown
    /// fields when the builder is built.
    Deferred,
}

/// Per-builder settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    pub field_check: FieldCheck,
}

impl BuilderConfig {
    pub fn eager() -> Self {
        Self {
            field_check: FieldCheck::Eager,
        }
    }

    pub fn deferred() -> Self {
        Self {
            field_check: FieldCheck::Deferred,
        }
    }

    pub fn with_field_check(mut self, field_check: FieldCheck) -> Self {
        self.field_check = field_check;
        self
    }
}

//! # Builder Errors
//!
//! This module defines the error types raised by builders and by the schema
//! provider. Every accessor error is raised before the builder is touched, so
//! a rejected call never leaves a half-applied write behind.

use crate::accessor::PREFIXES;

/// Errors raised by the schema provider's validating constructor.
///
/// These surface from [`Builder::build`](crate::Builder::build) unchanged:
/// the builder never wraps or rewrites them.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("'{model}' has no field '{field}'.")]
    UnknownField { model: String, field: String },
    #[error("Invalid '{model}': {source}")]
    Invalid {
        model: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid '{model}': {reason}")]
    Constraint { model: String, reason: String },
    #[error("Could not encode '{model}': {source}")]
    Encode {
        model: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur while driving a builder.
#[derive(Debug, thiserror::Error)]
pub enum BuilderError {
    #[error(
        "Builder has no method '{method}'. Methods must start with {}.",
        prefix_list()
    )]
    UnknownAccessor { method: String },
    #[error("'{model}' has no field '{field}'.")]
    UnknownField { model: String, field: String },
    #[error("Field '{field}' of '{model}' is not a model type, cannot create nested builder.")]
    NotNestable { model: String, field: String },
    #[error(
        "Cannot store a template in field '{field}'. Take a concrete snapshot with `.new_copy()` first."
    )]
    TemplateRejected { field: String },
    #[error("Field '{field}' does not hold a list, cannot add to it.")]
    NotAList { field: String },
    #[error("Field '{field}' expects a builder for '{expected}', got one for '{found}'.")]
    TargetMismatch {
        field: String,
        expected: String,
        found: String,
    },
    #[error("Builder targets '{found}', cannot build '{expected}'.")]
    ModelMismatch { expected: String, found: String },
    #[error("Method '{method}' takes a value.")]
    MissingArgument { method: String },
    #[error("Method '{method}' takes no arguments.")]
    UnexpectedArgument { method: String },
    #[error("Cannot store the non-finite float {value}{}.", in_field(.field))]
    NonFiniteFloat { field: Option<String>, value: f64 },
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

fn in_field(field: &Option<String>) -> String {
    field
        .as_ref()
        .map(|field| format!(" in field '{field}'"))
        .unwrap_or_default()
}

fn prefix_list() -> String {
    let quoted: Vec<String> = PREFIXES.iter().map(|p| format!("'{p}'")).collect();
    match quoted.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{}, or {}", rest.join(", "), last),
        _ => quoted.join(""),
    }
}

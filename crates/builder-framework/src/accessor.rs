//! # Accessor Names
//!
//! Builders accept operations by name: `set_<field>`, `add_<field>` and
//! `build_from_<field>`. This module turns such a name into an explicit
//! operation kind plus field name, which is what the builder actually
//! dispatches on.

use crate::error::BuilderError;
use std::fmt;

/// Recognised accessor prefixes, in matching priority order.
pub const PREFIXES: [&str; 3] = ["set_", "add_", "build_from_"];

/// The operation an accessor name asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorKind {
    /// Store a value, replacing whatever the field held.
    Set,
    /// Append a value to the field's list.
    Add,
    /// Get or create the field's nested builder.
    BuildFrom,
}

impl AccessorKind {
    pub fn prefix(self) -> &'static str {
        match self {
            AccessorKind::Set => PREFIXES[0],
            AccessorKind::Add => PREFIXES[1],
            AccessorKind::BuildFrom => PREFIXES[2],
        }
    }

    /// Whether the operation consumes a value argument.
    pub fn takes_value(self) -> bool {
        !matches!(self, AccessorKind::BuildFrom)
    }
}

/// A parsed accessor: operation kind and target field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor {
    pub kind: AccessorKind,
    pub field: String,
}

impl Accessor {
    pub fn new(kind: AccessorKind, field: impl Into<String>) -> Self {
        Self {
            kind,
            field: field.into(),
        }
    }

    /// Parses `set_<field>`, `add_<field>` or `build_from_<field>`.
    ///
    /// Prefixes are tried in [`PREFIXES`] order, so `set_build_from_x` is a
    /// setter for the field `build_from_x`. The field name is not checked
    /// here; that needs the schema and happens in the builder.
    pub fn parse(method: &str) -> Result<Self, BuilderError> {
        let kinds = [AccessorKind::Set, AccessorKind::Add, AccessorKind::BuildFrom];
        kinds
            .into_iter()
            .find_map(|kind| {
                method
                    .strip_prefix(kind.prefix())
                    .map(|field| Accessor::new(kind, field))
            })
            .ok_or_else(|| BuilderError::UnknownAccessor {
                method: method.to_string(),
            })
    }
}

impl fmt::Display for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.prefix(), self.field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_prefix() {
        assert_eq!(
            Accessor::parse("set_a_str").unwrap(),
            Accessor::new(AccessorKind::Set, "a_str")
        );
        assert_eq!(
            Accessor::parse("add_many_nums").unwrap(),
            Accessor::new(AccessorKind::Add, "many_nums")
        );
        assert_eq!(
            Accessor::parse("build_from_child").unwrap(),
            Accessor::new(AccessorKind::BuildFrom, "child")
        );
    }

    #[test]
    fn earlier_prefix_wins() {
        let accessor = Accessor::parse("set_build_from_child").unwrap();
        assert_eq!(accessor.kind, AccessorKind::Set);
        assert_eq!(accessor.field, "build_from_child");
    }

    #[test]
    fn unknown_prefix_is_rejected() {
        let err = Accessor::parse("get_a_str").unwrap_err();
        assert!(matches!(err, BuilderError::UnknownAccessor { ref method } if method == "get_a_str"));
    }

    #[test]
    fn display_round_trips_the_method_name() {
        assert_eq!(Accessor::parse("add_items").unwrap().to_string(), "add_items");
    }
}

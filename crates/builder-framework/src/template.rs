//! # Builder Templates
//!
//! A `Template` freezes a builder so that one base configuration can fan out
//! into many independent builds:
//!
//! ```rust
//! use builder_framework::{schema_model, BuilderError};
//! use serde::{Deserialize, Serialize};
//!
//! schema_model! {
//!     #[derive(Debug, Serialize, Deserialize)]
//!     pub struct Person {
//!         pub name: String,
//!         pub parent: String,
//!     }
//! }
//!
//! # fn main() -> Result<(), BuilderError> {
//! let mut base = builder_framework::Builder::of::<Person>();
//! base.set("parent", "Alice")?;
//! let children = base.into_template();
//!
//! let bob: Person = children.set("name", "Bob")?.build()?;
//! let carol: Person = children.set("name", "Carol")?.build()?;
//! assert_eq!((bob.name.as_str(), bob.parent.as_str()), ("Bob", "Alice"));
//! assert_eq!((carol.name.as_str(), carol.parent.as_str()), ("Carol", "Alice"));
//! # Ok(())
//! # }
//! ```
//!
//! Every operation starts from a fresh copy of the frozen source; the source
//! itself is never handed out mutably. Accessors return the copy, so a chain
//! that starts on a template continues on a concrete [`Builder`].

use crate::accessor::{Accessor, AccessorKind};
use crate::builder::Builder;
use crate::error::BuilderError;
use crate::schema::Model;
use crate::value::FieldValue;
use serde_json::Value;
use std::sync::Arc;
use tracing::{trace, warn};

/// Immutable base builder that spawns a copy for every operation.
///
/// Cloning a template is cheap and shares the frozen source.
#[derive(Debug, Clone)]
pub struct Template {
    source: Arc<Builder>,
}

impl Template {
    pub fn new(source: Builder) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// The frozen base, read-only.
    pub fn source(&self) -> &Builder {
        &self.source
    }

    pub fn model(&self) -> &'static str {
        self.source.model()
    }

    /// A concrete builder copied from the frozen base.
    pub fn new_copy(&self) -> Builder {
        trace!(model = self.model(), "Spawn from template");
        self.source.new_copy()
    }

    /// Templates do not nest: this is the template itself.
    pub fn template(&self) -> &Template {
        self
    }

    /// Same as [`Template::template`].
    pub fn partial(&self) -> &Template {
        self
    }

    /// Builds from a fresh copy of the base.
    pub fn build<M: Model>(&self) -> Result<M, BuilderError> {
        self.new_copy().build()
    }

    pub fn build_value(&self) -> Result<Value, BuilderError> {
        self.new_copy().build_value()
    }

    /// Copies the base and sets `field` on the copy.
    pub fn set(&self, field: &str, value: impl Into<FieldValue>) -> Result<Builder, BuilderError> {
        let mut copy = self.new_copy();
        copy.set(field, value)?;
        Ok(copy)
    }

    /// Copies the base and appends to `field` on the copy.
    pub fn add(&self, field: &str, value: impl Into<FieldValue>) -> Result<Builder, BuilderError> {
        let mut copy = self.new_copy();
        copy.add(field, value)?;
        Ok(copy)
    }

    /// Copies the base and returns the copy's nested builder for `field`.
    ///
    /// The nested builder is detached from the discarded copy, so it carries
    /// whatever the base had configured for that field.
    pub fn build_from(&self, field: &str) -> Result<Builder, BuilderError> {
        let mut copy = self.new_copy();
        let nested = copy.build_from(field)?;
        Ok(nested.clone())
    }

    /// Dispatches an accessor by name against a fresh copy.
    pub fn invoke(&self, method: &str, arg: Option<FieldValue>) -> Result<Builder, BuilderError> {
        let accessor = Accessor::parse(method).inspect_err(|e| {
            warn!(model = self.model(), method, error = %e, "Accessor rejected");
        })?;
        let mut copy = self.new_copy();
        match accessor.kind {
            AccessorKind::BuildFrom => Ok(copy.apply(&accessor, arg)?.clone()),
            AccessorKind::Set | AccessorKind::Add => {
                copy.apply(&accessor, arg)?;
                Ok(copy)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Describe, FieldDef, FieldType, ModelSchema, SchemaRef};
    use serde::{Deserialize, Serialize};
    use std::sync::OnceLock;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Leaf {
        value: i64,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Tree {
        name: String,
        leaf: Leaf,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Forest {
        names: Vec<String>,
    }

    impl Model for Forest {
        fn schema() -> SchemaRef {
            static SCHEMA: OnceLock<ModelSchema> = OnceLock::new();
            SCHEMA.get_or_init(|| {
                ModelSchema::new::<Forest>("Forest", vec![FieldDef::new("names", Vec::<String>::describe())])
            })
        }
    }

    impl Model for Leaf {
        fn schema() -> SchemaRef {
            static SCHEMA: OnceLock<ModelSchema> = OnceLock::new();
            SCHEMA.get_or_init(|| {
                ModelSchema::new::<Leaf>("Leaf", vec![FieldDef::new("value", i64::describe())])
            })
        }
    }

    impl Model for Tree {
        fn schema() -> SchemaRef {
            static SCHEMA: OnceLock<ModelSchema> = OnceLock::new();
            SCHEMA.get_or_init(|| {
                ModelSchema::new::<Tree>(
                    "Tree",
                    vec![
                        FieldDef::new("name", String::describe()),
                        FieldDef::new("leaf", FieldType::Model(Leaf::schema)),
                    ],
                )
            })
        }
    }

    fn base() -> Template {
        let mut builder = Builder::of::<Tree>();
        builder.set("name", "base").unwrap();
        builder.build_from("leaf").unwrap().set("value", 1i64).unwrap();
        builder.into_template()
    }

    #[test]
    fn template_of_template_is_itself() {
        let template = base();
        assert!(std::ptr::eq(template.template(), &template));
        assert!(std::ptr::eq(template.partial(), &template));
    }

    #[test]
    fn build_from_returns_detached_copy_of_nested_base() {
        let template = base();
        let mut leaf = template.build_from("leaf").unwrap();
        leaf.set("value", 7i64).unwrap();
        assert_eq!(leaf.build::<Leaf>().unwrap(), Leaf { value: 7 });

        let tree: Tree = template.build().unwrap();
        assert_eq!(tree.leaf, Leaf { value: 1 });
    }

    #[test]
    fn invoke_returns_copy_for_setters() {
        let template = base();
        let copy = template.invoke("set_name", Some("copy".into())).unwrap();
        assert_eq!(copy.build::<Tree>().unwrap().name, "copy");
        assert_eq!(template.build::<Tree>().unwrap().name, "base");
    }

    #[test]
    fn invoke_returns_nested_for_build_from() {
        let nested = base().invoke("build_from_leaf", None).unwrap();
        assert_eq!(nested.model(), "Leaf");
    }

    #[test]
    fn invoke_rejects_unknown_accessor() {
        let err = base().invoke("get_name", None).unwrap_err();
        assert!(matches!(err, BuilderError::UnknownAccessor { .. }));
    }

    #[test]
    fn templates_are_rejected_as_values() {
        let template = base();
        let mut other = Builder::of::<Tree>();
        other.set("name", "kept").unwrap();

        let err = other.set("leaf", template.clone()).unwrap_err();
        assert!(matches!(err, BuilderError::TemplateRejected { ref field } if field == "leaf"));
        assert!(other.get("leaf").is_none());
    }

    #[test]
    fn add_appends_on_copy_only() {
        let mut seed = Builder::of::<Forest>();
        seed.add("names", "oak").unwrap();
        let template = seed.into_template();

        let grown = template.add("names", "elm").unwrap();
        assert_eq!(grown.build::<Forest>().unwrap().names, vec!["oak", "elm"]);
        assert_eq!(template.build::<Forest>().unwrap().names, vec!["oak"]);
        assert_eq!(template.source().get("names").unwrap().resolve().unwrap(), serde_json::json!(["oak"]));
    }
}

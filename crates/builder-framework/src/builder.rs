//! # Builder
//!
//! The `Builder` accumulates field values for one instance of a model and
//! constructs it on demand. It is the dynamic half of the crate: fields are
//! addressed by name and checked against the model's schema at runtime.
//!
//! # Operations
//!
//! * **set** – stores a value under a field, replacing whatever was there.
//! * **add** – appends a value to the field's list, creating the list first.
//! * **build_from** – returns the field's nested builder, creating it first.
//! * **build** – resolves nested builders and lists, then runs the model's
//!   validating constructor. The builder itself is left untouched.
//! * **new_copy** – an independent deep copy.
//! * **template** / **partial** – freezes a snapshot into a [`Template`].
//!
//! Each operation is also reachable by name through [`Builder::invoke`],
//! e.g. `invoke("set_a_str", Some("foo".into()))`.
//!
//! Every check runs before the write, so a rejected call leaves the builder
//! exactly as it was.

use crate::accessor::{Accessor, AccessorKind};
use crate::config::{BuilderConfig, FieldCheck};
use crate::error::BuilderError;
use crate::schema::{self, FieldDef, FieldMap, FieldType, Model, SchemaRef};
use crate::template::Template;
use crate::value::FieldValue;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, trace, warn};

/// Mutable accumulator of field values for one model instance.
///
/// Cloning is deep: nested builders and lists are copied, never shared.
#[derive(Debug, Clone)]
pub struct Builder {
    schema: SchemaRef,
    config: BuilderConfig,
    values: BTreeMap<String, FieldValue>,
}

impl Builder {
    /// An empty builder for `M` with the default configuration.
    pub fn of<M: Model>() -> Self {
        Self::for_schema(M::schema())
    }

    pub fn for_schema(schema: SchemaRef) -> Self {
        Self::with_config(schema, BuilderConfig::default())
    }

    pub fn with_config(schema: SchemaRef, config: BuilderConfig) -> Self {
        Self {
            schema,
            config,
            values: BTreeMap::new(),
        }
    }

    pub fn schema(&self) -> SchemaRef {
        self.schema
    }

    /// Name of the model this builder constructs.
    pub fn model(&self) -> &'static str {
        self.schema.name
    }

    pub fn config(&self) -> BuilderConfig {
        self.config
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Dispatches an accessor by name.
    ///
    /// `set_<field>` and `add_<field>` take a value and return this builder;
    /// `build_from_<field>` takes none and returns the nested builder.
    pub fn invoke(
        &mut self,
        method: &str,
        arg: Option<FieldValue>,
    ) -> Result<&mut Builder, BuilderError> {
        let accessor = Accessor::parse(method).map_err(|e| self.rejected(method, e))?;
        self.apply(&accessor, arg)
    }

    /// Applies a parsed accessor. See [`Builder::invoke`].
    ///
    /// The field is checked before the argument count.
    pub fn apply(
        &mut self,
        accessor: &Accessor,
        arg: Option<FieldValue>,
    ) -> Result<&mut Builder, BuilderError> {
        self.check_field(&accessor.field, accessor.kind)
            .map_err(|e| self.rejected(&accessor.field, e))?;
        match (accessor.kind, arg) {
            (AccessorKind::Set, Some(value)) => self.set(&accessor.field, value),
            (AccessorKind::Add, Some(value)) => self.add(&accessor.field, value),
            (AccessorKind::BuildFrom, None) => self.build_from(&accessor.field),
            (kind, _) => {
                let method = accessor.to_string();
                let e = if kind.takes_value() {
                    BuilderError::MissingArgument { method }
                } else {
                    BuilderError::UnexpectedArgument { method }
                };
                Err(self.rejected(&accessor.field, e))
            }
        }
    }

    /// Stores `value` under `field`, replacing any previous value.
    pub fn set(
        &mut self,
        field: &str,
        value: impl Into<FieldValue>,
    ) -> Result<&mut Self, BuilderError> {
        let value = value.into();
        self.check_set(field, &value)
            .map_err(|e| self.rejected(field, e))?;
        debug!(model = self.model(), field, "Set");
        self.values.insert(field.to_string(), value);
        Ok(self)
    }

    /// Appends `value` to the list stored under `field`.
    pub fn add(
        &mut self,
        field: &str,
        value: impl Into<FieldValue>,
    ) -> Result<&mut Self, BuilderError> {
        let value = value.into();
        self.check_add(field, &value)
            .map_err(|e| self.rejected(field, e))?;

        let slot = self
            .values
            .entry(field.to_string())
            .or_insert_with(|| FieldValue::List(Vec::new()));
        let items = slot.as_list_mut().ok_or_else(|| BuilderError::NotAList {
            field: field.to_string(),
        })?;
        items.push(value);
        let len = items.len();
        debug!(model = self.model(), field, len, "Add");
        Ok(self)
    }

    /// Returns the nested builder for `field`, creating it if the field does
    /// not already hold one.
    ///
    /// The field's declared type is unwrapped through optional and union
    /// wrappers and must then be a model type. A fresh nested builder
    /// replaces any plain value the field held before.
    pub fn build_from(&mut self, field: &str) -> Result<&mut Builder, BuilderError> {
        let nested_schema = self
            .lookup(field)
            .and_then(|def| {
                def.ty.nested_schema().ok_or_else(|| BuilderError::NotNestable {
                    model: self.model().to_string(),
                    field: field.to_string(),
                })
            })
            .map_err(|e| self.rejected(field, e))?;

        let existing = matches!(self.values.get(field), Some(FieldValue::Builder(_)));
        debug!(
            model = self.model(),
            field,
            nested = nested_schema.name,
            existing,
            "Build from"
        );
        let config = self.config;
        let slot = self
            .values
            .entry(field.to_string())
            .or_insert(FieldValue::Value(Value::Null));
        Ok(slot.ensure_builder(|| Builder::with_config(nested_schema, config)))
    }

    /// Builds the model instance.
    ///
    /// Fails with `ModelMismatch` if `M` is not the model this builder
    /// targets. Validation errors from the constructor are returned as they
    /// are.
    pub fn build<M: Model>(&self) -> Result<M, BuilderError> {
        let target = M::schema();
        if !std::ptr::eq(target, self.schema) {
            return Err(BuilderError::ModelMismatch {
                expected: target.name.to_string(),
                found: self.model().to_string(),
            });
        }
        let fields = self.resolve()?;
        debug!(model = self.model(), fields = fields.len(), "Build");
        Ok(schema::construct::<M>(fields)?)
    }

    /// Builds the instance through the schema's erased constructor and
    /// returns it encoded as a value. This is how nested builders resolve.
    pub fn build_value(&self) -> Result<Value, BuilderError> {
        let fields = self.resolve()?;
        trace!(model = self.model(), fields = fields.len(), "Build value");
        Ok(self.schema.construct(fields)?)
    }

    /// An independent copy with the same model, configuration and values.
    pub fn new_copy(&self) -> Builder {
        trace!(model = self.model(), fields = self.values.len(), "Copy");
        self.clone()
    }

    /// Freezes a snapshot of this builder into a [`Template`].
    pub fn template(&self) -> Template {
        Template::new(self.clone())
    }

    /// Same as [`Builder::template`].
    pub fn partial(&self) -> Template {
        self.template()
    }

    /// Freezes this builder into a [`Template`] without copying it.
    pub fn into_template(self) -> Template {
        Template::new(self)
    }

    fn resolve(&self) -> Result<FieldMap, BuilderError> {
        self.values
            .iter()
            .map(|(name, value)| value.resolve().map(|resolved| (name.clone(), resolved)))
            .collect()
    }

    fn lookup(&self, field: &str) -> Result<&'static FieldDef, BuilderError> {
        let schema = self.schema;
        schema
            .field(field)
            .ok_or_else(|| BuilderError::UnknownField {
                model: self.model().to_string(),
                field: field.to_string(),
            })
    }

    /// Resolves the field's declaration. `None` means the field is unknown
    /// and the deferred mode lets it through.
    fn check_field(
        &self,
        field: &str,
        kind: AccessorKind,
    ) -> Result<Option<&'static FieldDef>, BuilderError> {
        let deferred = self.config.field_check == FieldCheck::Deferred;
        match self.lookup(field) {
            Ok(def) => Ok(Some(def)),
            Err(_) if deferred && kind != AccessorKind::BuildFrom => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn check_set(&self, field: &str, value: &FieldValue) -> Result<(), BuilderError> {
        let declared = self.check_field(field, AccessorKind::Set)?;
        value.check_storable(field)?;
        match declared {
            Some(def) => self.check_target(field, &def.ty, value),
            None => Ok(()),
        }
    }

    /// Same checks as `set` against the element type, and the field
    /// must not already hold something other than a list.
    fn check_add(&self, field: &str, value: &FieldValue) -> Result<(), BuilderError> {
        let declared = self.check_field(field, AccessorKind::Add)?;
        value.check_storable(field)?;
        if let Some(element) = declared.and_then(|def| def.ty.element_type()) {
            self.check_target(field, element, value)?;
        }
        match self.values.get(field) {
            None | Some(FieldValue::List(_)) | Some(FieldValue::Value(Value::Array(_))) => Ok(()),
            Some(_) => Err(BuilderError::NotAList {
                field: field.to_string(),
            }),
        }
    }

    fn rejected(&self, field: &str, e: BuilderError) -> BuilderError {
        warn!(model = self.model(), field, error = %e, "Accessor rejected");
        e
    }

    /// A concrete builder stored under a field must target the field's model
    /// type. Lists are checked element by element.
    fn check_target(
        &self,
        field: &str,
        declared: &FieldType,
        value: &FieldValue,
    ) -> Result<(), BuilderError> {
        match value {
            FieldValue::Builder(nested) => match declared.nested_schema() {
                Some(expected) if std::ptr::eq(expected, nested.schema) => Ok(()),
                Some(expected) => Err(BuilderError::TargetMismatch {
                    field: field.to_string(),
                    expected: expected.name.to_string(),
                    found: nested.model().to_string(),
                }),
                None if matches!(declared.unwrap_optional(), FieldType::Any) => Ok(()),
                None => Err(BuilderError::NotNestable {
                    model: self.model().to_string(),
                    field: field.to_string(),
                }),
            },
            FieldValue::List(items) => match declared.element_type() {
                Some(element) => items
                    .iter()
                    .try_for_each(|item| self.check_target(field, element, item)),
                None => Ok(()),
            },
            FieldValue::Value(_) | FieldValue::Template(_) | FieldValue::NonFinite(_) => Ok(()),
        }
    }
}

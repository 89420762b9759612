//! # Model Schema Provider
//!
//! The `Model` trait defines the contract a type must satisfy for builders to
//! construct it: an ordered field schema that can be inspected at runtime, and
//! a validating constructor that turns a field-name-to-value mapping into an
//! instance.
//!
//! Validation is owned entirely by this layer. Builders only collect values
//! and hand them over; whatever `serde` and [`Model::validate`] reject comes
//! back to the caller as a [`ValidationError`].
//!
//! # Declared Types
//! [`FieldType`] is the runtime view of a field's declared type. Optional and
//! union wrappers are kept so that [`FieldType::nested_schema`] can unwrap
//! them the same way for every caller: take the first non-null branch, then
//! require a model type.

use crate::builder::Builder;
use crate::error::ValidationError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Resolved field values handed to a model's constructor.
pub type FieldMap = Map<String, Value>;

/// Schemas live for the whole program; models hand out `'static` references.
pub type SchemaRef = &'static ModelSchema;

/// Type-erased validating constructor. Returns the validated instance
/// re-encoded as a value so it can be nested inside another model's fields.
pub type ConstructFn = fn(FieldMap) -> Result<Value, ValidationError>;

/// The declared type of a model field.
#[derive(Debug, Clone)]
pub enum FieldType {
    Str,
    Float,
    Int,
    Bool,
    /// Unconstrained JSON value.
    Any,
    Null,
    List(Box<FieldType>),
    /// String-keyed map.
    Map(Box<FieldType>),
    Optional(Box<FieldType>),
    Union(Vec<FieldType>),
    /// Another model. Stored as a function so that schemas can refer to each
    /// other without being built eagerly.
    Model(fn() -> SchemaRef),
}

impl FieldType {
    /// Strips optional and union wrappers down to the first non-null branch.
    pub fn unwrap_optional(&self) -> &FieldType {
        match self {
            FieldType::Optional(inner) => inner.unwrap_optional(),
            FieldType::Union(branches) => branches
                .iter()
                .find(|branch| !matches!(branch, FieldType::Null))
                .map(FieldType::unwrap_optional)
                .unwrap_or(self),
            other => other,
        }
    }

    /// The model schema a nested builder for this type would target, if any.
    pub fn nested_schema(&self) -> Option<SchemaRef> {
        match self.unwrap_optional() {
            FieldType::Model(schema) => Some(schema()),
            _ => None,
        }
    }

    /// Element type for list-typed fields, looking through optional wrappers.
    pub fn element_type(&self) -> Option<&FieldType> {
        match self.unwrap_optional() {
            FieldType::List(inner) => Some(inner),
            _ => None,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Str => write!(f, "str"),
            FieldType::Float => write!(f, "float"),
            FieldType::Int => write!(f, "int"),
            FieldType::Bool => write!(f, "bool"),
            FieldType::Any => write!(f, "any"),
            FieldType::Null => write!(f, "null"),
            FieldType::List(inner) => write!(f, "list[{inner}]"),
            FieldType::Map(inner) => write!(f, "map[str, {inner}]"),
            FieldType::Optional(inner) => write!(f, "optional[{inner}]"),
            FieldType::Union(branches) => {
                let names: Vec<String> = branches.iter().map(ToString::to_string).collect();
                write!(f, "union[{}]", names.join(", "))
            }
            FieldType::Model(schema) => write!(f, "{}", schema().name),
        }
    }
}

/// One declared field of a model.
#[derive(Debug, Clone)]
pub struct FieldDef {
    pub name: &'static str,
    pub ty: FieldType,
}

impl FieldDef {
    pub fn new(name: &'static str, ty: FieldType) -> Self {
        Self { name, ty }
    }
}

/// Runtime description of a model: its name, its ordered fields and its
/// validating constructor.
pub struct ModelSchema {
    pub name: &'static str,
    fields: Vec<FieldDef>,
    construct: ConstructFn,
}

impl ModelSchema {
    /// Describes `M` with the given fields. The constructor is
    /// [`construct`]`::<M>`.
    pub fn new<M: Model>(name: &'static str, fields: Vec<FieldDef>) -> Self {
        Self {
            name,
            fields,
            construct: construct_value::<M>,
        }
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|field| field.name)
    }

    /// Runs the validating constructor on resolved field values.
    pub fn construct(&self, fields: FieldMap) -> Result<Value, ValidationError> {
        (self.construct)(fields)
    }
}

impl fmt::Debug for ModelSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelSchema")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

/// Trait that any type must implement to be constructed by a [`Builder`].
///
/// Implementations are usually generated by
/// [`schema_model!`](crate::schema_model); implement it by hand when the type
/// needs a [`Model::validate`] hook.
pub trait Model: Serialize + DeserializeOwned + 'static {
    /// The model's schema. Must return the same reference on every call.
    fn schema() -> SchemaRef;

    /// Constraint checks beyond the declared field types.
    /// Runs after deserialization succeeds.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Maps a Rust field type to its declared [`FieldType`].
///
/// `View` is what a typed `build_from_<field>` accessor hands back: the
/// generated typed builder for model types, and a plain `&mut Builder` for
/// everything else (the call itself then fails with `NotNestable`).
pub trait Describe {
    type View<'a>: From<&'a mut Builder>;

    fn describe() -> FieldType;
}

macro_rules! describe_as {
    ($field_type:expr => $($ty:ty),+) => {
        $(
            impl Describe for $ty {
                type View<'a> = &'a mut Builder;

                fn describe() -> FieldType {
                    $field_type
                }
            }
        )+
    };
}

describe_as!(FieldType::Str => String, char);
describe_as!(FieldType::Bool => bool);
describe_as!(FieldType::Float => f32, f64);
describe_as!(FieldType::Int => i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);
describe_as!(FieldType::Any => Value);

impl<T: Describe> Describe for Option<T> {
    type View<'a> = T::View<'a>;

    fn describe() -> FieldType {
        FieldType::Optional(Box::new(T::describe()))
    }
}

impl<T: Describe> Describe for Vec<T> {
    type View<'a> = &'a mut Builder;

    fn describe() -> FieldType {
        FieldType::List(Box::new(T::describe()))
    }
}

impl<T: Describe> Describe for BTreeMap<String, T> {
    type View<'a> = &'a mut Builder;

    fn describe() -> FieldType {
        FieldType::Map(Box::new(T::describe()))
    }
}

impl<T: Describe> Describe for HashMap<String, T> {
    type View<'a> = &'a mut Builder;

    fn describe() -> FieldType {
        FieldType::Map(Box::new(T::describe()))
    }
}

/// Validating constructor: rejects unknown keys, deserializes the mapping
/// (missing fields and type mismatches fail here), then runs
/// [`Model::validate`].
pub fn construct<M: Model>(fields: FieldMap) -> Result<M, ValidationError> {
    let schema = M::schema();
    if let Some(unknown) = fields.keys().find(|key| !schema.has_field(key)) {
        return Err(ValidationError::UnknownField {
            model: schema.name.to_string(),
            field: unknown.clone(),
        });
    }
    let instance: M =
        serde_json::from_value(Value::Object(fields)).map_err(|source| ValidationError::Invalid {
            model: schema.name.to_string(),
            source,
        })?;
    instance
        .validate()
        .map_err(|reason| ValidationError::Constraint {
            model: schema.name.to_string(),
            reason,
        })?;
    Ok(instance)
}

fn construct_value<M: Model>(fields: FieldMap) -> Result<Value, ValidationError> {
    let instance = construct::<M>(fields)?;
    serde_json::to_value(&instance).map_err(|source| ValidationError::Encode {
        model: M::schema().name.to_string(),
        source,
    })
}

//! # Field Values
//!
//! What a builder can hold under a field name. Plain values, lists, nested
//! builders and templates are separate variants, so resolution at build time
//! and the template rejection check are both exhaustive matches.

use crate::builder::Builder;
use crate::error::BuilderError;
use crate::template::Template;
use serde::Serialize;
use serde_json::Value;

/// A value stored (or offered) for a model field.
#[derive(Debug, Clone)]
pub enum FieldValue {
    /// A plain value, passed to the constructor unchanged.
    Value(Value),
    /// A list whose elements are resolved one by one.
    List(Vec<FieldValue>),
    /// A concrete nested builder, built when the parent is built.
    Builder(Builder),
    /// A template. Accepted by the type so that it can be rejected with a
    /// precise error; builders never store one.
    Template(Template),
    /// NaN or an infinite float, which has no plain-value encoding. Rejected
    /// by name like a template, never stored.
    NonFinite(f64),
}

impl FieldValue {
    /// Encodes a concrete model instance (or anything serializable) as a
    /// plain value.
    pub fn of<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(value).map(FieldValue::Value)
    }

    /// Checks that this value may be stored under `field`. Templates and
    /// non-finite floats are rejected at any list depth.
    pub fn check_storable(&self, field: &str) -> Result<(), BuilderError> {
        match self {
            FieldValue::Template(_) => Err(BuilderError::TemplateRejected {
                field: field.to_string(),
            }),
            FieldValue::NonFinite(value) => Err(BuilderError::NonFiniteFloat {
                field: Some(field.to_string()),
                value: *value,
            }),
            FieldValue::List(items) => items.iter().try_for_each(|item| item.check_storable(field)),
            FieldValue::Value(_) | FieldValue::Builder(_) => Ok(()),
        }
    }

    pub fn as_builder(&self) -> Option<&Builder> {
        match self {
            FieldValue::Builder(builder) => Some(builder),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            FieldValue::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Resolves to the plain value handed to a constructor: nested builders
    /// are built, list elements are resolved in order.
    pub fn resolve(&self) -> Result<Value, BuilderError> {
        match self {
            FieldValue::Value(value) => Ok(value.clone()),
            FieldValue::List(items) => items
                .iter()
                .map(FieldValue::resolve)
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            FieldValue::Builder(builder) => builder.build_value(),
            FieldValue::Template(template) => template.build_value(),
            FieldValue::NonFinite(value) => Err(BuilderError::NonFiniteFloat {
                field: None,
                value: *value,
            }),
        }
    }

    /// The list this value holds, if it is one. A plain JSON array is
    /// converted in place so that further elements can be appended.
    pub(crate) fn as_list_mut(&mut self) -> Option<&mut Vec<FieldValue>> {
        if let FieldValue::Value(Value::Array(items)) = self {
            let items = std::mem::take(items);
            *self = FieldValue::List(items.into_iter().map(FieldValue::Value).collect());
        }
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Replaces this value with a builder unless it already is one.
    pub(crate) fn ensure_builder(&mut self, make: impl FnOnce() -> Builder) -> &mut Builder {
        if !matches!(self, FieldValue::Builder(_)) {
            *self = FieldValue::Builder(make());
        }
        match self {
            FieldValue::Builder(builder) => builder,
            _ => unreachable!("slot was just replaced with a builder"),
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        FieldValue::Value(value)
    }
}

impl From<Builder> for FieldValue {
    fn from(builder: Builder) -> Self {
        FieldValue::Builder(builder)
    }
}

impl From<Template> for FieldValue {
    fn from(template: Template) -> Self {
        FieldValue::Template(template)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(items: Vec<T>) -> Self {
        FieldValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Value(Value::Null), Into::into)
    }
}

macro_rules! plain_value {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    FieldValue::Value(Value::from(value))
                }
            }
        )+
    };
}

plain_value!(&str, String, bool, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

macro_rules! float_value {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    let value = f64::from(value);
                    serde_json::Number::from_f64(value)
                        .map_or(FieldValue::NonFinite(value), |n| FieldValue::Value(Value::Number(n)))
                }
            }
        )+
    };
}

float_value!(f32, f64);

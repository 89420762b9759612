//! # Typed Accessors
//!
//! [`schema_model!`](crate::schema_model) declares a model struct and derives
//! everything a builder needs from it: the runtime schema, the [`Model`] and
//! [`Describe`] impls, and a typed view with one `set_<field>`,
//! `add_<field>` and `build_from_<field>` method per field.
//!
//! ```rust
//! use builder_framework::{schema_model, Builder, BuilderError};
//! use serde::{Deserialize, Serialize};
//!
//! schema_model! {
//!     #[derive(Debug, PartialEq, Serialize, Deserialize)]
//!     pub struct Child {
//!         pub a_num: f64,
//!     }
//! }
//!
//! schema_model! {
//!     #[derive(Debug, PartialEq, Serialize, Deserialize)]
//!     pub struct Parent {
//!         pub a_str: String,
//!         pub child: Child,
//!     }
//! }
//!
//! # fn main() -> Result<(), BuilderError> {
//! let mut builder = Builder::of::<Parent>();
//! ParentBuilder::from(&mut builder)
//!     .set_a_str("foo")?
//!     .build_from_child()?
//!     .set_a_num(3.14)?;
//!
//! let parent: Parent = builder.build()?;
//! assert_eq!(parent.child, Child { a_num: 3.14 });
//! # Ok(())
//! # }
//! ```
//!
//! `build_from_<field>` is generated for every field. On a field whose type is
//! not a model it returns a plain `&mut Builder` view and the call fails at
//! runtime with `NotNestable`, the same as the dynamic accessor.
//!
//! [`Model`]: crate::Model
//! [`Describe`]: crate::Describe

/// Declares a model struct with its schema and typed builder view.
///
/// The struct must derive `Serialize` and `Deserialize`; all attributes are
/// passed through unchanged. The view is named `<Struct>Builder`.
#[macro_export]
macro_rules! schema_model {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::Model for $name {
            fn schema() -> $crate::SchemaRef {
                static SCHEMA: ::std::sync::OnceLock<$crate::ModelSchema> =
                    ::std::sync::OnceLock::new();
                SCHEMA.get_or_init(|| {
                    $crate::ModelSchema::new::<$name>(
                        stringify!($name),
                        vec![
                            $(
                                $crate::FieldDef::new(
                                    stringify!($field),
                                    <$ty as $crate::Describe>::describe(),
                                ),
                            )*
                        ],
                    )
                })
            }
        }

        $crate::paste::paste! {
            impl $crate::Describe for $name {
                type View<'a> = [<$name Builder>]<'a>;

                fn describe() -> $crate::FieldType {
                    $crate::FieldType::Model(<$name as $crate::Model>::schema)
                }
            }

            #[doc = concat!("Typed accessors for a [`", stringify!($name), "`] builder.")]
            $vis struct [<$name Builder>]<'a>(&'a mut $crate::Builder);

            impl<'a> ::std::convert::From<&'a mut $crate::Builder> for [<$name Builder>]<'a> {
                fn from(inner: &'a mut $crate::Builder) -> Self {
                    Self(inner)
                }
            }

            #[allow(dead_code)]
            impl<'a> [<$name Builder>]<'a> {
                pub fn into_inner(self) -> &'a mut $crate::Builder {
                    self.0
                }

                pub fn build(&self) -> ::std::result::Result<$name, $crate::BuilderError> {
                    self.0.build::<$name>()
                }

                pub fn template(&self) -> $crate::Template {
                    self.0.template()
                }

                $(
                    pub fn [<set_ $field>](
                        self,
                        value: impl ::std::convert::Into<$crate::FieldValue>,
                    ) -> ::std::result::Result<Self, $crate::BuilderError> {
                        self.0.set(stringify!($field), value)?;
                        Ok(self)
                    }

                    pub fn [<add_ $field>](
                        self,
                        value: impl ::std::convert::Into<$crate::FieldValue>,
                    ) -> ::std::result::Result<Self, $crate::BuilderError> {
                        self.0.add(stringify!($field), value)?;
                        Ok(self)
                    }

                    pub fn [<build_from_ $field>](
                        self,
                    ) -> ::std::result::Result<<$ty as $crate::Describe>::View<'a>, $crate::BuilderError> {
                        self.into_inner()
                            .build_from(stringify!($field))
                            .map(::std::convert::Into::into)
                    }
                )*
            }
        }
    };
}

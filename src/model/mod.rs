//! PIX payment payload models.
//!
//! Every model shares one contract: optional declared fields, a fluent
//! builder, plain getters/setters, an open map of additional string fields
//! for keys the SDK does not know yet, value equality/hashing and a
//! `name=value` text rendering. The contract is written once in
//! [`extensible_model!`] and instantiated per type.

use std::collections::BTreeMap;

/// Wire keys not declared by a model, kept verbatim as strings.
///
/// Ordered so that equality ignores insertion order and hashing and
/// rendering are deterministic.
pub type AdditionalFields = BTreeMap<String, String>;

/// Argument accepted wherever a declared field value is set: the value
/// itself, an `Option` of it, or a `&str` for string fields.
pub trait IntoOptional<T> {
    fn into_optional(self) -> Option<T>;
}

impl<T> IntoOptional<T> for T {
    fn into_optional(self) -> Option<T> {
        Some(self)
    }
}

impl<T> IntoOptional<T> for Option<T> {
    fn into_optional(self) -> Option<T> {
        self
    }
}

impl IntoOptional<String> for &str {
    fn into_optional(self) -> Option<String> {
        Some(self.to_string())
    }
}

/// Behaviour shared by every payload model.
pub trait ExtensibleModel {
    /// Type name used in logs and in the text rendering.
    const TYPE_NAME: &'static str;

    /// Wire names of the statically declared fields, in declaration order.
    const DECLARED_FIELDS: &'static [&'static str];

    /// Returns the additional (undeclared) fields.
    fn additional_fields(&self) -> &AdditionalFields;

    /// Returns the additional fields for in-place edits.
    fn additional_fields_mut(&mut self) -> &mut AdditionalFields;

    /// Number of declared fields currently holding a value.
    fn declared_count(&self) -> usize;

    /// Returns true if the declared field with wire name `key` holds a value.
    fn has_declared_value(&self, key: &str) -> bool;

    /// Additional keys hidden on encode because a declared field with the
    /// same wire name holds a value.
    fn shadowed_additional_fields(&self) -> Vec<&str> {
        self.additional_fields()
            .keys()
            .filter(|key| self.has_declared_value(key))
            .map(String::as_str)
            .collect()
    }

    /// Returns true if `key` is the wire name of a declared field.
    fn is_declared(key: &str) -> bool {
        Self::DECLARED_FIELDS.contains(&key)
    }

    /// Returns true if no declared field is set and there are no additional fields.
    fn is_empty(&self) -> bool {
        self.declared_count() == 0 && self.additional_fields().is_empty()
    }
}

/// Declares a payload model together with its builder.
///
/// Each field is written as `name / setter: Type => "wireName"` and becomes
/// an `Option<Type>`. Doc comments on a field land on its getter.
macro_rules! extensible_model {
    (
        $(#[$meta:meta])*
        pub struct $name:ident / $builder:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident / $setter:ident : $ty:ty => $wire:tt,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, ::serde::Deserialize)]
        pub struct $name {
            $(
                #[serde(rename = $wire, default)]
                $field: Option<$ty>,
            )+
            #[serde(
                flatten,
                deserialize_with = "crate::model::wire::collect_additional_fields"
            )]
            additional_fields: $crate::model::AdditionalFields,
        }

        impl $name {
            /// Creates an instance from every declared field value; additional fields start empty.
            #[allow(clippy::too_many_arguments)]
            pub fn new($($field: impl $crate::model::IntoOptional<$ty>),+) -> Self {
                Self {
                    $($field: $crate::model::IntoOptional::into_optional($field),)+
                    additional_fields: $crate::model::AdditionalFields::new(),
                }
            }

            /// Creates an instance with every field absent.
            pub fn empty() -> Self {
                Self::default()
            }

            /// Returns a builder with every field absent.
            pub fn builder() -> $builder {
                $builder::default()
            }

            $(
                $(#[$field_meta])*
                pub fn $field(&self) -> Option<&$ty> {
                    self.$field.as_ref()
                }

                pub fn $setter(&mut self, value: Option<$ty>) {
                    self.$field = value;
                }
            )+

            pub fn additional_fields(&self) -> &$crate::model::AdditionalFields {
                &self.additional_fields
            }

            pub fn additional_field(&self, key: &str) -> Option<&str> {
                self.additional_fields.get(key).map(String::as_str)
            }

            /// Replaces the additional fields wholesale.
            pub fn set_additional_fields(&mut self, fields: $crate::model::AdditionalFields) {
                self.additional_fields = fields;
            }

            /// Inserts or overwrites one additional field. Declared fields are
            /// never touched, even when `key` matches a declared wire name.
            pub fn set_additional_field(&mut self, key: impl Into<String>, value: impl Into<String>) {
                self.additional_fields.insert(key.into(), value.into());
            }

            pub fn remove_additional_field(&mut self, key: &str) -> Option<String> {
                self.additional_fields.remove(key)
            }
        }

        #[doc = concat!("Fluent builder for [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Default)]
        pub struct $builder {
            $($field: Option<$ty>,)+
            additional_fields: $crate::model::AdditionalFields,
        }

        impl $builder {
            $(
                pub fn $field(mut self, value: impl $crate::model::IntoOptional<$ty>) -> Self {
                    self.$field = $crate::model::IntoOptional::into_optional(value);
                    self
                }
            )+

            pub fn additional_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
                self.additional_fields.insert(key.into(), value.into());
                self
            }

            pub fn build(self) -> $name {
                $name {
                    $($field: self.$field,)+
                    additional_fields: self.additional_fields,
                }
            }
        }

        impl $crate::model::ExtensibleModel for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const DECLARED_FIELDS: &'static [&'static str] = &[$($wire),+];

            fn additional_fields(&self) -> &$crate::model::AdditionalFields {
                &self.additional_fields
            }

            fn additional_fields_mut(&mut self) -> &mut $crate::model::AdditionalFields {
                &mut self.additional_fields
            }

            fn declared_count(&self) -> usize {
                0 $(+ usize::from(self.$field.is_some()))+
            }

            fn has_declared_value(&self, key: &str) -> bool {
                match key {
                    $($wire => self.$field.is_some(),)+
                    _ => false,
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                use ::serde::ser::SerializeMap;

                let mut map = serializer.serialize_map(None)?;
                $(
                    if let Some(value) = &self.$field {
                        map.serialize_entry($wire, value)?;
                    }
                )+
                // A present declared value wins over an additional key of the same name.
                for (key, value) in &self.additional_fields {
                    if !<Self as $crate::model::ExtensibleModel>::has_declared_value(self, key) {
                        map.serialize_entry(key, value)?;
                    }
                }
                map.end()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                use $crate::model::render::FieldValue;

                write!(f, "{}(", stringify!($name))?;
                $(
                    write!(f, "{}=", $wire)?;
                    self.$field.render(f)?;
                    f.write_str(", ")?;
                )+
                f.write_str("additionalFields=")?;
                self.additional_fields.render(f)?;
                f.write_str(")")
            }
        }

        impl $crate::model::render::FieldValue for $name {
            fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(self, f)
            }
        }
    };
}

/// Adds `percentage()`/`set_percentage()` to models carrying `valuePercentage`.
macro_rules! impl_percentage_accessors {
    ($($name:ty),+ $(,)?) => {
        $(
            impl $name {
                /// Parses `valuePercentage` as a decimal, if present.
                pub fn percentage(
                    &self,
                ) -> Option<Result<rust_decimal::Decimal, percentage::PercentageError>> {
                    self.value_percentage().map(|value| percentage::parse_percentage(value))
                }

                /// Stores `value` as a two-digit `valuePercentage` string.
                pub fn set_percentage(&mut self, value: rust_decimal::Decimal) {
                    self.set_value_percentage(Some(percentage::format_percentage(value)));
                }
            }
        )+
    };
}

mod charge_value;
mod discount;
mod fees;
mod fine;
mod interest;
pub mod percentage;
mod reduction;
pub(crate) mod render;
pub(crate) mod wire;

pub use charge_value::{ChargeValue, ChargeValueBuilder};
pub use discount::{Discount, DiscountBuilder, FixedDateDiscount, FixedDateDiscountBuilder};
pub use fees::{Fees, FeesBuilder};
pub use fine::{Fine, FineBuilder};
pub use interest::{Interest, InterestBuilder};
pub use percentage::{PercentageError, format_percentage, parse_percentage};
pub use reduction::{Reduction, ReductionBuilder};

impl_percentage_accessors!(Fees, Fine, Interest, Reduction, Discount, FixedDateDiscount);

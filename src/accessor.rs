//! Field setters with a loosely-typed value boundary.
//!
//! Record fields are normally assigned through ordinary field paths. When
//! the field is only known at run time (named by parsed metadata, say), a
//! [`FieldSetter`] generated by [`field_setter!`](crate::field_setter) gives
//! a reusable assignment: the field access is resolved at compile time and
//! only the [`Value`] → field type conversion happens per call.
//!
//! ```rust
//! use record_marshal::{Value, field_setters};
//!
//! #[derive(Default)]
//! struct Entry {
//!     key: u32,
//!     flags: u8,
//!     name: String,
//! }
//!
//! let setters = field_setters!(Entry { key, flags, name });
//! let mut entry = Entry::default();
//!
//! setters.get("key").unwrap().set(&mut entry, 7u64).unwrap();
//! setters.get("name").unwrap().set(&mut entry, "root").unwrap();
//! assert!(setters.get("flags").unwrap().set(&mut entry, Value::U64(300)).is_err());
//!
//! assert_eq!(entry.key, 7);
//! assert_eq!(entry.name, "root");
//! assert_eq!(entry.flags, 0);
//! ```

use crate::error::{Error, Result};
use serde::de::{self, DeserializeOwned, IntoDeserializer, Visitor};
use std::fmt;

/// A loosely-typed scalar handed to a [`FieldSetter`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Unit,
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    Char(char),
    Str(String),
    Bytes(Vec<u8>),
}

macro_rules! value_from {
    ($variant:ident: $($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v.into())
                }
            }
        )*
    };
}

value_from!(Bool: bool);
value_from!(I64: i8, i16, i32, i64);
value_from!(U64: u8, u16, u32, u64);
value_from!(F64: f32, f64);
value_from!(Char: char);
value_from!(Str: String, &str);
value_from!(Bytes: Vec<u8>, &[u8]);

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Unit
    }
}

/// Convert `value` to the declared type `F` of `field`.
///
/// Integers are range checked, so `Value::U64(300)` does not fit a `u8`.
/// Any failure is reported as [`Error::IncompatibleValue`].
pub fn convert<F: DeserializeOwned>(field: &'static str, value: Value) -> Result<F> {
    F::deserialize(value.into_deserializer()).map_err(|e| Error::IncompatibleValue {
        field,
        reason: e.to_string(),
    })
}

// ── Value as a serde Deserializer ──────────────────────────────────────────

/// Deserializer yielding the single value it wraps.
pub struct ValueDeserializer(Value);

impl<'de> IntoDeserializer<'de, Error> for Value {
    type Deserializer = ValueDeserializer;

    fn into_deserializer(self) -> ValueDeserializer {
        ValueDeserializer(self)
    }
}

impl<'de> de::Deserializer<'de> for ValueDeserializer {
    type Error = Error;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        match self.0 {
            Value::Unit => visitor.visit_unit(),
            Value::Bool(v) => visitor.visit_bool(v),
            Value::I64(v) => visitor.visit_i64(v),
            Value::U64(v) => visitor.visit_u64(v),
            Value::F64(v) => visitor.visit_f64(v),
            Value::Char(v) => visitor.visit_char(v),
            Value::Str(v) => visitor.visit_string(v),
            Value::Bytes(v) => visitor.visit_byte_buf(v),
        }
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        match self.0 {
            Value::Unit => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_newtype_struct(self)
    }

    serde::forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map struct enum
        identifier ignored_any
    }
}

// ── Setters ────────────────────────────────────────────────────────────────

/// Assigns a [`Value`] into one field of a `T`, in place.
///
/// Build one with [`field_setter!`](crate::field_setter).
pub struct FieldSetter<T> {
    name: &'static str,
    assign: fn(&mut T, Value) -> Result<()>,
}

impl<T> FieldSetter<T> {
    pub const fn new(name: &'static str, assign: fn(&mut T, Value) -> Result<()>) -> Self {
        FieldSetter { name, assign }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Convert `value` to the field's type and store it in `record`. On
    /// failure the record is left unchanged.
    pub fn set(&self, record: &mut T, value: impl Into<Value>) -> Result<()> {
        (self.assign)(record, value.into())
    }
}

impl<T> Clone for FieldSetter<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldSetter<T> {}

impl<T> fmt::Debug for FieldSetter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSetter")
            .field("record", &std::any::type_name::<T>())
            .field("field", &self.name)
            .finish()
    }
}

/// Setters for several fields of `T`, looked up by field name.
pub struct FieldSetters<T> {
    setters: Vec<FieldSetter<T>>,
}

impl<T> FieldSetters<T> {
    pub fn new(setters: Vec<FieldSetter<T>>) -> Self {
        FieldSetters { setters }
    }

    pub fn get(&self, name: &str) -> Option<&FieldSetter<T>> {
        self.setters.iter().find(|setter| setter.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.setters.iter().map(|setter| setter.name)
    }

    pub fn len(&self) -> usize {
        self.setters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.setters.is_empty()
    }
}

impl<T> fmt::Debug for FieldSetters<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.setters).finish()
    }
}

/// Build a [`FieldSetter`] for `$field` of record type `$ty`.
///
/// The field's declared type is inferred from the assignment, so it needs
/// only to implement `serde::Deserialize`.
#[macro_export]
macro_rules! field_setter {
    ($ty:ty, $field:ident) => {
        $crate::accessor::FieldSetter::<$ty>::new(stringify!($field), |record, value| {
            record.$field = $crate::accessor::convert(stringify!($field), value)?;
            ::core::result::Result::Ok(())
        })
    };
}

/// Build a [`FieldSetters`] table for the listed fields of `$ty`.
#[macro_export]
macro_rules! field_setters {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        $crate::accessor::FieldSetters::<$ty>::new(::std::vec![
            $($crate::field_setter!($ty, $field)),*
        ])
    };
}

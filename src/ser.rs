//! Native layout serializer
//!
//! The [`Serializer`] is generic over any `W: std::io::Write`, enabling both
//! in-memory serialization (`to_bytes`) and streaming serialization (`to_writer`).
//!
//! ## Layout summary
//! - Host byte order, no conversion
//! - Fields encoded consecutively with no alignment gaps
//! - bool: 1 byte (0 or 1); char: 4-byte scalar value
//! - Fixed arrays, tuples, structs: elements back to back, no count prefix
//! - Strings, bytes, sequences, maps, options and enums have no fixed size
//!   and are rejected with [`Error::Unsupported`]

use crate::error::{Error, Result};
use serde::ser::{self, Impossible, Serialize};
use std::io::Write;

// ── Public entry points ────────────────────────────────────────────────────

/// Serialize `value` into a freshly allocated `Vec<u8>` of native layout bytes.
pub fn to_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut ser = Serializer::new(Vec::new());
    value.serialize(&mut ser)?;
    Ok(ser.into_writer())
}

/// Serialize `value` as native layout bytes, writing directly into `writer`.
pub fn to_writer<W: Write, T: Serialize + ?Sized>(mut writer: W, value: &T) -> Result<()> {
    let mut ser = Serializer::new(&mut writer);
    value.serialize(&mut ser)
}

// ── Serializer ─────────────────────────────────────────────────────────────

/// The native layout serializer. Generic over any `W: Write`.
///
/// ```rust
/// use record_marshal::ser::Serializer;
/// use serde::Serialize;
///
/// let mut buf = Vec::new();
/// let mut ser = Serializer::new(&mut buf);
/// 42u32.serialize(&mut ser).unwrap();
/// assert_eq!(buf, 42u32.to_ne_bytes());
/// ```
pub struct Serializer<W: Write> {
    writer: W,
}

impl<W: Write> Serializer<W> {
    /// Create a new serializer that writes into `writer`.
    pub fn new(writer: W) -> Self {
        Serializer { writer }
    }

    /// Consume the serializer and return the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer.write_all(bytes).map_err(Error::from)
    }
}

macro_rules! serialize_native {
    ($($method:ident($ty:ty);)*) => {
        $(
            fn $method(self, v: $ty) -> Result<()> {
                self.write_all(&v.to_ne_bytes())
            }
        )*
    };
}

// ── serde::Serializer impl ─────────────────────────────────────────────────

impl<W: Write> ser::Serializer for &mut Serializer<W> {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = Impossible<(), Error>;
    type SerializeTuple = Self;
    type SerializeTupleStruct = Self;
    type SerializeTupleVariant = Impossible<(), Error>;
    type SerializeMap = Impossible<(), Error>;
    type SerializeStruct = Self;
    type SerializeStructVariant = Impossible<(), Error>;

    fn serialize_bool(self, v: bool) -> Result<()> {
        self.write_all(&[v as u8])
    }

    serialize_native! {
        serialize_i8(i8);
        serialize_i16(i16);
        serialize_i32(i32);
        serialize_i64(i64);
        serialize_i128(i128);
        serialize_u8(u8);
        serialize_u16(u16);
        serialize_u32(u32);
        serialize_u64(u64);
        serialize_u128(u128);
        serialize_f32(f32);
        serialize_f64(f64);
    }

    /// char → 4-byte Unicode scalar value
    fn serialize_char(self, v: char) -> Result<()> {
        self.write_all(&(v as u32).to_ne_bytes())
    }

    fn serialize_str(self, _v: &str) -> Result<()> {
        Err(Error::Unsupported("str"))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<()> {
        Err(Error::Unsupported("bytes"))
    }

    fn serialize_none(self) -> Result<()> {
        Err(Error::Unsupported("Option"))
    }

    fn serialize_some<T: Serialize + ?Sized>(self, _value: &T) -> Result<()> {
        Err(Error::Unsupported("Option"))
    }

    fn serialize_unit(self) -> Result<()> {
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<()> {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<()> {
        Err(Error::Unsupported("enum"))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<()> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<()> {
        Err(Error::Unsupported("enum"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(Error::Unsupported("variable-length sequence"))
    }

    /// Fixed-length array / tuple — elements without a length prefix
    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Ok(self)
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Ok(self)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::Unsupported("enum"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Error::Unsupported("map"))
    }

    /// Structure — fields encoded consecutively, no names, no count prefix
    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Ok(self)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::Unsupported("enum"))
    }

    fn is_human_readable(&self) -> bool {
        false
    }
}

// ── Compound serializer impls ──────────────────────────────────────────────

impl<W: Write> ser::SerializeTuple for &mut Serializer<W> {
    type Ok = ();
    type Error = Error;
    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        value.serialize(&mut **self)
    }
    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl<W: Write> ser::SerializeTupleStruct for &mut Serializer<W> {
    type Ok = ();
    type Error = Error;
    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        value.serialize(&mut **self)
    }
    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl<W: Write> ser::SerializeStruct for &mut Serializer<W> {
    type Ok = ();
    type Error = Error;
    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        _key: &'static str,
        value: &T,
    ) -> Result<()> {
        value.serialize(&mut **self)
    }
    fn end(self) -> Result<()> {
        Ok(())
    }
}

//! Native layout deserializer
//!
//! Reads a fixed-layout record from a byte slice: fields back to back, in
//! declaration order, host byte order, no alignment gaps. Only shapes with a
//! size that does not depend on the value are accepted.

use crate::error::{Error, Result};
use serde::de::{self, Deserialize, DeserializeOwned, SeqAccess, Visitor};

/// Deserialize a record from its native layout bytes.
///
/// Trailing bytes after the record are ignored; use [`from_bytes_partial`]
/// to get them back.
pub fn from_bytes<T: DeserializeOwned>(input: &[u8]) -> Result<T> {
    let mut de = Deserializer::new(input);
    T::deserialize(&mut de)
}

/// Deserialize a record, also returning the unconsumed bytes.
pub fn from_bytes_partial<'de, T: Deserialize<'de>>(input: &'de [u8]) -> Result<(T, &'de [u8])> {
    let mut de = Deserializer::new(input);
    let value = T::deserialize(&mut de)?;
    Ok((value, de.remaining()))
}

// Backing bytes for size measurement; as wide as the largest primitive.
static ZEROS: [u8; 16] = [0; 16];
static ONES: [u8; 16] = [0xFF; 16];
static ONE_LE: [u8; 16] = [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
static ONE_BE: [u8; 16] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1];

/// Value every primitive reads as while a type is being measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Fill {
    /// All bits clear.
    Zero,
    /// Integers read as 1, `bool` as true, `char` as U+0001.
    One,
    /// All bits set.
    Ones,
}

impl Fill {
    fn bytes(self, n: usize) -> &'static [u8] {
        match self {
            Fill::Zero => &ZEROS[..n],
            Fill::Ones => &ONES[..n],
            Fill::One if cfg!(target_endian = "little") => &ONE_LE[..n],
            Fill::One => &ONE_BE[ONE_BE.len() - n..],
        }
    }
}

enum Input<'de> {
    Slice(&'de [u8]),
    /// An endless run of one primitive pattern, used to measure a type
    /// without any real input.
    Fill(Fill),
}

/// The native layout deserializer. Reads from a byte slice, maintaining a
/// cursor position.
pub struct Deserializer<'de> {
    input: Input<'de>,
    pos: usize,
}

impl<'de> Deserializer<'de> {
    pub fn new(input: &'de [u8]) -> Self {
        Deserializer {
            input: Input::Slice(input),
            pos: 0,
        }
    }

    /// A deserializer over an endless `fill` pattern. After a value has
    /// been deserialized, [`position`](Self::position) is its encoded size.
    pub(crate) fn measuring(fill: Fill) -> Self {
        Deserializer {
            input: Input::Fill(fill),
            pos: 0,
        }
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the unconsumed portion of the input buffer.
    pub fn remaining(&self) -> &'de [u8] {
        match self.input {
            Input::Slice(input) => &input[self.pos..],
            Input::Fill(_) => &[],
        }
    }

    /// Consume exactly `n` bytes, returning a slice. Fails with TruncatedStream.
    fn take(&mut self, n: usize) -> Result<&'de [u8]> {
        let bytes = match self.input {
            Input::Slice(input) => {
                let available = input.len() - self.pos;
                if n > available {
                    return Err(Error::TruncatedStream {
                        expected: n,
                        available,
                    });
                }
                &input[self.pos..self.pos + n]
            }
            Input::Fill(fill) => fill.bytes(n),
        };
        self.pos += n;
        Ok(bytes)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }
}

// ── Main Deserializer impl ─────────────────────────────────────────────────

macro_rules! deserialize_native {
    ($($method:ident => $visit:ident($ty:ty);)*) => {
        $(
            fn $method<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
                visitor.$visit(<$ty>::from_ne_bytes(self.take_array()?))
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for &mut Deserializer<'de> {
    type Error = Error;

    fn deserialize_any<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        Err(Error::Unsupported(
            "deserialize_any (native layout is not self-describing)",
        ))
    }

    fn deserialize_bool<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        let [v] = self.take_array::<1>()?;
        match v {
            0 => visitor.visit_bool(false),
            1 => visitor.visit_bool(true),
            _ => Err(Error::InvalidBool(v)),
        }
    }

    deserialize_native! {
        deserialize_i8 => visit_i8(i8);
        deserialize_i16 => visit_i16(i16);
        deserialize_i32 => visit_i32(i32);
        deserialize_i64 => visit_i64(i64);
        deserialize_i128 => visit_i128(i128);
        deserialize_u8 => visit_u8(u8);
        deserialize_u16 => visit_u16(u16);
        deserialize_u32 => visit_u32(u32);
        deserialize_u64 => visit_u64(u64);
        deserialize_u128 => visit_u128(u128);
        deserialize_f32 => visit_f32(f32);
        deserialize_f64 => visit_f64(f64);
    }

    fn deserialize_char<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        let v = u32::from_ne_bytes(self.take_array()?);
        let c = char::from_u32(v).ok_or(Error::InvalidChar(v))?;
        visitor.visit_char(c)
    }

    fn deserialize_str<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        Err(Error::Unsupported("str"))
    }

    fn deserialize_string<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        Err(Error::Unsupported("String"))
    }

    fn deserialize_bytes<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        Err(Error::Unsupported("bytes"))
    }

    fn deserialize_byte_buf<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        Err(Error::Unsupported("byte buffer"))
    }

    fn deserialize_option<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        Err(Error::Unsupported("Option"))
    }

    fn deserialize_unit<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_unit()
    }

    fn deserialize_unit_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_unit()
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        Err(Error::Unsupported("variable-length sequence"))
    }

    fn deserialize_tuple<V: Visitor<'de>>(self, len: usize, visitor: V) -> Result<V::Value> {
        visitor.visit_seq(SeqDeserializer::new(self, len))
    }

    fn deserialize_tuple_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        len: usize,
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_seq(SeqDeserializer::new(self, len))
    }

    fn deserialize_map<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        Err(Error::Unsupported("map"))
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value> {
        // Fields in declaration order, no names, no count prefix
        visitor.visit_seq(SeqDeserializer::new(self, fields.len()))
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        _visitor: V,
    ) -> Result<V::Value> {
        Err(Error::Unsupported("enum"))
    }

    fn deserialize_identifier<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        Err(Error::Unsupported("identifier"))
    }

    fn deserialize_ignored_any<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        Err(Error::Unsupported(
            "deserialize_ignored_any (native layout is not self-describing)",
        ))
    }

    fn is_human_readable(&self) -> bool {
        false
    }
}

// ── SeqDeserializer: fixed count ───────────────────────────────────────────

struct SeqDeserializer<'a, 'de: 'a> {
    de: &'a mut Deserializer<'de>,
    remaining: usize,
}

impl<'a, 'de> SeqDeserializer<'a, 'de> {
    fn new(de: &'a mut Deserializer<'de>, count: usize) -> Self {
        SeqDeserializer {
            de,
            remaining: count,
        }
    }
}

impl<'de> SeqAccess<'de> for SeqDeserializer<'_, 'de> {
    type Error = Error;

    fn next_element_seed<T: de::DeserializeSeed<'de>>(
        &mut self,
        seed: T,
    ) -> Result<Option<T::Value>> {
        if self.remaining == 0 {
            return Ok(None);
        }
        self.remaining -= 1;
        seed.deserialize(&mut *self.de).map(Some)
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.remaining)
    }
}

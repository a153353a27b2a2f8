//! Record writer, the encoding side of [`RecordReader`](crate::RecordReader).

use crate::error::{Error, Result};
use crate::ser::to_writer;
use crate::text::TextEncoding;
use crate::{ARRAY_ALIGNMENT, LENGTH_PREFIX_LEN, padding_len};
use byteorder::{NativeEndian, WriteBytesExt};
use serde::Serialize;
use std::io::Write;

/// Encodes records, arrays and strings onto a byte stream.
pub struct RecordWriter<W> {
    inner: W,
    pos: u64,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(inner: W) -> Self {
        RecordWriter { inner, pos: 0 }
    }

    /// Bytes written since the stream was wrapped.
    pub fn position(&self) -> u64 {
        self.pos
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush().map_err(Error::from)
    }

    /// Write one record in its native layout.
    pub fn write_record<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let bytes = encode_elements(std::slice::from_ref(value))?;
        self.write_bytes(&bytes)
    }

    /// Write `values` as a length-prefixed array: the payload byte count as
    /// an 8-byte signed integer, the payload, then zero bytes up to the next
    /// 8-byte boundary.
    pub fn write_padded_array<T: Serialize>(&mut self, values: &[T]) -> Result<()> {
        let payload = encode_elements(values)?;
        let byte_count = i64::try_from(payload.len()).map_err(|_| Error::LengthOverflow {
            max: i64::MAX as u64,
            got: payload.len() as u64,
        })?;

        self.inner.write_i64::<NativeEndian>(byte_count)?;
        self.pos += LENGTH_PREFIX_LEN as u64;
        self.write_bytes(&payload)?;
        self.write_bytes(&[0u8; ARRAY_ALIGNMENT][..padding_len(byte_count)])
    }

    /// Write `values` back to back, with no prefix and no padding.
    pub fn write_fixed_array<T: Serialize>(&mut self, values: &[T]) -> Result<()> {
        let payload = encode_elements(values)?;
        self.write_bytes(&payload)
    }

    /// Write `text` as UTF-8 followed by a single zero byte.
    pub fn write_cstring(&mut self, text: &str) -> Result<()> {
        self.write_cstring_with(text, TextEncoding::Utf8)
    }

    /// Write `text` under `encoding` followed by a single zero byte.
    ///
    /// Nothing is written if the text cannot be encoded or contains a NUL,
    /// since the terminator would cut it short on read.
    pub fn write_cstring_with(&mut self, text: &str, encoding: TextEncoding) -> Result<()> {
        let bytes = encoding.encode(text)?;
        if let Some(offset) = bytes.iter().position(|&b| b == 0) {
            return Err(Error::InvalidEncoding {
                encoding: encoding.name(),
                detail: format!("interior NUL at offset {}", offset),
            });
        }
        self.write_bytes(&bytes)?;
        self.inner.write_u8(0)?;
        self.pos += 1;
        Ok(())
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner.write_all(bytes)?;
        self.pos += bytes.len() as u64;
        Ok(())
    }
}

/// Encode every element into one buffer so a failure leaves the stream
/// untouched.
fn encode_elements<T: Serialize>(values: &[T]) -> Result<Vec<u8>> {
    let mut payload = Vec::new();
    for value in values {
        to_writer(&mut payload, value)?;
    }
    Ok(payload)
}

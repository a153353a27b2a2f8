//! Record reader
//!
//! [`RecordReader`] wraps any `std::io::Read` and decodes the stream's binary
//! contract: fixed-layout records, length-prefixed arrays padded to an 8-byte
//! boundary, fixed-count arrays and null-terminated strings. Every operation
//! consumes bytes from the current position and advances it.
//!
//! Reads are issued directly against the inner stream; wrap unbuffered
//! sources such as `File` in a `BufReader`, since C-strings are read one byte
//! at a time.

use crate::config::Limits;
use crate::de::from_bytes;
use crate::error::{Error, Result};
use crate::size::size_of;
use crate::text::TextEncoding;
use crate::{LENGTH_PREFIX_LEN, padding_len};
use byteorder::{ByteOrder, NativeEndian, ReadBytesExt};
use serde::de::DeserializeOwned;
use std::io::{self, Read};

/// Decodes records, arrays and strings from a byte stream.
///
/// ```rust
/// use record_marshal::RecordReader;
///
/// let mut bytes = 4i64.to_ne_bytes().to_vec();
/// bytes.extend([1, 2, 3, 4, 0, 0, 0, 0]);
///
/// let mut reader = RecordReader::new(bytes.as_slice());
/// let values: Vec<u8> = reader.read_padded_array().unwrap();
/// assert_eq!(values, [1, 2, 3, 4]);
/// assert_eq!(reader.position(), 16);
/// ```
pub struct RecordReader<R> {
    inner: R,
    limits: Limits,
    pos: u64,
}

impl<R: Read> RecordReader<R> {
    /// Wrap `inner` with the default, unbounded [`Limits`].
    pub fn new(inner: R) -> Self {
        Self::with_limits(inner, Limits::default())
    }

    pub fn with_limits(inner: R, limits: Limits) -> Self {
        RecordReader {
            inner,
            limits,
            pos: 0,
        }
    }

    /// Offset from where the stream was wrapped. Padding skipped past the
    /// end of the stream is counted, as a relative seek would count it.
    pub fn position(&self) -> u64 {
        self.pos
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    // ── Records and arrays ─────────────────────────────────────────────────

    /// Read exactly `size_of::<T>()` bytes and decode them as one `T`.
    pub fn read_record<T: DeserializeOwned + 'static>(&mut self) -> Result<T> {
        let size = size_of::<T>()?;
        let bytes = self.read_bytes(size)?;
        from_bytes(&bytes)
    }

    /// Read a length-prefixed array.
    ///
    /// Layout: an 8-byte signed byte count in host order, that many payload
    /// bytes, then `(0 - byte_count) & 7` padding bytes which are skipped
    /// without inspection. A stream that ends inside that padding is still
    /// read successfully.
    pub fn read_padded_array<T: DeserializeOwned + 'static>(&mut self) -> Result<Vec<T>> {
        let size = size_of::<T>()?;

        let prefix = self.read_bytes(LENGTH_PREFIX_LEN)?;
        let byte_count = NativeEndian::read_i64(&prefix);
        if byte_count < 0 {
            return Err(Error::InvalidLength(byte_count));
        }
        let len = self.check_array_len(byte_count as u64)?;

        let payload = self.read_bytes(len)?;
        let misaligned = if size == 0 { len != 0 } else { len % size != 0 };
        if misaligned {
            return Err(Error::MisalignedPayload {
                len,
                element_size: size,
            });
        }
        let count = if size == 0 { 0 } else { len / size };

        self.skip_padding(padding_len(byte_count))?;

        decode_elements(&payload, size, count)
    }

    /// Read exactly `count` records laid out back to back, with no length
    /// prefix and no padding.
    pub fn read_fixed_array<T: DeserializeOwned + 'static>(
        &mut self,
        count: usize,
    ) -> Result<Vec<T>> {
        let size = size_of::<T>()?;
        let wanted = size as u128 * count as u128;
        let len = match u64::try_from(wanted) {
            Ok(wanted) => self.check_array_len(wanted)?,
            Err(_) => {
                // The product does not even fit u64; report it saturated.
                return Err(Error::LengthOverflow {
                    max: self.limits.max_array_bytes.min(isize::MAX as usize) as u64,
                    got: u64::MAX,
                });
            }
        };

        let payload = self.read_bytes(len)?;
        decode_elements(&payload, size, count)
    }

    // ── Strings ────────────────────────────────────────────────────────────

    /// Read a null-terminated UTF-8 string. The terminator is consumed but
    /// not returned.
    pub fn read_cstring(&mut self) -> Result<String> {
        self.read_cstring_with(TextEncoding::Utf8)
    }

    /// Read a null-terminated string under `encoding`.
    pub fn read_cstring_with(&mut self, encoding: TextEncoding) -> Result<String> {
        let mut bytes = Vec::new();
        loop {
            let b = match self.inner.read_u8() {
                Ok(b) => b,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    return Err(Error::UnterminatedString);
                }
                Err(e) => return Err(e.into()),
            };
            self.pos += 1;
            if b == 0 {
                break;
            }
            if bytes.len() == self.limits.max_cstring_len {
                return Err(Error::LengthOverflow {
                    max: self.limits.max_cstring_len as u64,
                    got: bytes.len() as u64 + 1,
                });
            }
            bytes.push(b);
        }
        encoding.decode(bytes)
    }

    // ── Internal helpers ───────────────────────────────────────────────────

    /// A byte count must fit the configured limit and a single allocation.
    fn check_array_len(&self, len: u64) -> Result<usize> {
        let max = self.limits.max_array_bytes.min(isize::MAX as usize);
        match usize::try_from(len) {
            Ok(len) if len <= max => Ok(len),
            _ => Err(Error::LengthOverflow {
                max: max as u64,
                got: len,
            }),
        }
    }

    /// Consume exactly `len` bytes. Fails with TruncatedStream, after
    /// consuming whatever was left.
    fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.inner.by_ref().take(len as u64).read_to_end(&mut buf)?;
        self.pos += buf.len() as u64;
        if buf.len() < len {
            return Err(Error::TruncatedStream {
                expected: len,
                available: buf.len(),
            });
        }
        Ok(buf)
    }

    /// Advance over `len` padding bytes. Padding cut short by the end of the
    /// stream is not an error; the position still moves by `len`.
    fn skip_padding(&mut self, len: usize) -> Result<()> {
        io::copy(&mut self.inner.by_ref().take(len as u64), &mut io::sink())?;
        self.pos += len as u64;
        Ok(())
    }
}

fn decode_elements<T: DeserializeOwned>(payload: &[u8], size: usize, count: usize) -> Result<Vec<T>> {
    (0..count)
        .map(|i| from_bytes(&payload[i * size..(i + 1) * size]))
        .collect()
}

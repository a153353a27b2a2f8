//! # record-marshal
//!
//! Binary marshalling primitives for archive and storage formats that store
//! raw, fixed-layout records. Built on top of the `serde` framework: any type
//! deriving `Deserialize`/`Serialize` whose shape has a constant size can be
//! read straight off a byte stream.
//!
//! ## Wire contract
//!
//! | Item | Layout |
//! |------|--------|
//! | Fixed record | `size_of::<T>()` bytes, fields back to back, host byte order, no gaps |
//! | Padded array | 8-byte signed byte count + payload + 0-7 padding bytes to the next multiple of 8 |
//! | Fixed array | `count * size_of::<T>()` bytes, no prefix, no padding |
//! | C-string | non-zero bytes + one zero byte, in a caller-chosen text encoding |
//!
//! ## Record type mapping
//!
//! | Rust / serde type | Native layout |
//! |-------------------|---------------|
//! | `bool`            | 1 byte: 0 (false) or 1 (true) |
//! | `i8`..`i128`, `u8`..`u128` | 1, 2, 4, 8 or 16 bytes, host order |
//! | `f32`, `f64`      | 4 or 8 bytes IEEE 754, host order |
//! | `char`            | 4-byte Unicode scalar value |
//! | `()` / unit struct | 0 bytes |
//! | `[T; N]`, tuples, structs | elements consecutively, no count prefix |
//! | strings, `Vec`, maps, `Option`, enums | not fixed-size, rejected |
//!
//! ## Example
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use record_marshal::{RecordReader, RecordWriter, size_of};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct IndexEntry {
//!     key: [u8; 9],
//!     offset: u32,
//!     size: u32,
//! }
//!
//! assert_eq!(size_of::<IndexEntry>().unwrap(), 17);
//!
//! let entries = vec![
//!     IndexEntry { key: [0xAB; 9], offset: 0, size: 100 },
//!     IndexEntry { key: [0xCD; 9], offset: 100, size: 28 },
//! ];
//!
//! let mut writer = RecordWriter::new(Vec::new());
//! writer.write_padded_array(&entries).unwrap();
//! writer.write_cstring("data.001").unwrap();
//! let bytes = writer.into_inner();
//! // 8 (prefix) + 34 (payload) + 6 (padding) + 9 (string)
//! assert_eq!(bytes.len(), 57);
//!
//! let mut reader = RecordReader::new(bytes.as_slice());
//! let decoded: Vec<IndexEntry> = reader.read_padded_array().unwrap();
//! assert_eq!(decoded, entries);
//! assert_eq!(reader.read_cstring().unwrap(), "data.001");
//! ```

pub mod accessor;
pub mod config;
pub mod de;
pub mod error;
pub mod reader;
pub mod ser;
pub mod size;
pub mod text;
pub mod writer;

pub use accessor::{FieldSetter, FieldSetters, Value};
pub use config::Limits;
pub use de::{Deserializer, from_bytes, from_bytes_partial};
pub use error::{Error, Result};
pub use reader::RecordReader;
pub use ser::{Serializer, to_bytes, to_writer};
pub use size::{register_size, size_of};
pub use text::{TextEncoding, bytes_to_hex, hex_to_bytes};
pub use writer::RecordWriter;

pub use serde::{Deserialize, Serialize};

/// Width of the signed byte count that prefixes a padded array.
pub const LENGTH_PREFIX_LEN: usize = 8;

/// Boundary a padded array realigns the stream to.
pub const ARRAY_ALIGNMENT: usize = 8;

/// Padding bytes that follow a padded array payload of `byte_count` bytes:
/// `(0 - byte_count) & 7`, always in `0..8`.
///
/// ```rust
/// use record_marshal::padding_len;
///
/// assert_eq!(padding_len(0), 0);
/// assert_eq!(padding_len(4), 4);
/// assert_eq!(padding_len(8), 0);
/// assert_eq!(padding_len(13), 3);
/// ```
pub fn padding_len(byte_count: i64) -> usize {
    (byte_count.wrapping_neg() & (ARRAY_ALIGNMENT as i64 - 1)) as usize
}

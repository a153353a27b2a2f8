use serde::{de, ser};
use std::fmt;
use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while marshalling records, arrays and strings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A custom error message from serde
    #[error("{0}")]
    Message(String),

    /// Fewer bytes remained in the stream than the read required
    #[error("truncated stream: expected {expected} bytes, {available} available")]
    TruncatedStream { expected: usize, available: usize },

    /// A length-prefixed payload is not a whole number of elements
    #[error("payload of {len} bytes is not a multiple of the {element_size}-byte element size")]
    MisalignedPayload { len: usize, element_size: usize },

    /// The stream ended before the terminating zero byte of a C-string
    #[error("stream ended before the string terminator")]
    UnterminatedString,

    /// Bytes were not valid text (or text not representable) in the encoding
    #[error("invalid {encoding} text: {detail}")]
    InvalidEncoding {
        encoding: &'static str,
        detail: String,
    },

    /// Hex text had an odd digit count or a non-hex character
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    /// A dynamic value could not be converted to a field's declared type
    #[error("value is not compatible with field `{field}`: {reason}")]
    IncompatibleValue { field: &'static str, reason: String },

    /// A length prefix was negative
    #[error("invalid length prefix: {0}")]
    InvalidLength(i64),

    /// Data exceeded the configured maximum length
    #[error("length {got} exceeds maximum {max}")]
    LengthOverflow { max: u64, got: u64 },

    /// The boolean encoding was neither 0 nor 1
    #[error("invalid boolean encoding: {0} (must be 0 or 1)")]
    InvalidBool(u8),

    /// A char field did not hold a Unicode scalar value
    #[error("invalid char encoding: {0:#x}")]
    InvalidChar(u32),

    /// The native record layout has no fixed-size encoding for this type
    #[error("fixed-layout records do not support type: {0}")]
    Unsupported(&'static str),

    /// An I/O error occurred on the underlying stream
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

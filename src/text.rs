//! Text encodings for C-strings, and hex-string helpers.

use crate::error::{Error, Result};
use std::borrow::Cow;

/// Character encoding applied to C-string bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    #[default]
    Utf8,
    /// 7-bit ASCII; any byte above 0x7F is malformed.
    Ascii,
    /// ISO-8859-1; every byte is the code point of the same value.
    Latin1,
}

impl TextEncoding {
    pub fn name(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "UTF-8",
            TextEncoding::Ascii => "ASCII",
            TextEncoding::Latin1 => "ISO-8859-1",
        }
    }

    /// Decode `bytes` into text, failing with [`Error::InvalidEncoding`] on
    /// a malformed sequence.
    pub fn decode(self, bytes: Vec<u8>) -> Result<String> {
        match self {
            TextEncoding::Utf8 => {
                String::from_utf8(bytes).map_err(|e| self.invalid(e.utf8_error().to_string()))
            }
            TextEncoding::Ascii => {
                if let Some(offset) = bytes.iter().position(|b| !b.is_ascii()) {
                    return Err(self.invalid(format!(
                        "byte {:#04x} at offset {}",
                        bytes[offset], offset
                    )));
                }
                Ok(bytes.iter().map(|&b| b as char).collect())
            }
            TextEncoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
        }
    }

    /// Encode `text`, failing with [`Error::InvalidEncoding`] if a character
    /// has no representation in this encoding.
    pub fn encode(self, text: &str) -> Result<Cow<'_, [u8]>> {
        match self {
            TextEncoding::Utf8 => Ok(Cow::Borrowed(text.as_bytes())),
            TextEncoding::Ascii => match text.chars().find(|c| !c.is_ascii()) {
                Some(c) => Err(self.unrepresentable(c)),
                None => Ok(Cow::Borrowed(text.as_bytes())),
            },
            TextEncoding::Latin1 => text
                .chars()
                .map(|c| u8::try_from(u32::from(c)).map_err(|_| self.unrepresentable(c)))
                .collect::<Result<Vec<u8>>>()
                .map(Cow::Owned),
        }
    }

    fn invalid(self, detail: String) -> Error {
        Error::InvalidEncoding {
            encoding: self.name(),
            detail,
        }
    }

    fn unrepresentable(self, c: char) -> Error {
        self.invalid(format!("character U+{:04X} is not representable", u32::from(c)))
    }
}

/// Convert a hex-digit string into bytes, most-significant nibble first.
///
/// Space characters are removed first, so `"DE AD BE EF"` and `"DEADBEEF"`
/// decode the same. An odd digit count or a non-hex character fails with
/// [`Error::InvalidHex`].
pub fn hex_to_bytes(text: &str) -> Result<Vec<u8>> {
    let digits: String = text.chars().filter(|&c| c != ' ').collect();
    hex::decode(digits).map_err(|e| Error::InvalidHex(e.to_string()))
}

/// Upper-case hex digits for `bytes`, no separators.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

//! Read limits.

/// Suggested cap on a length-prefixed array payload (256 MiB).
pub const STRICT_MAX_ARRAY_BYTES: usize = 256 * 1024 * 1024;

/// Suggested cap on a C-string, terminator excluded (1 MiB).
pub const STRICT_MAX_CSTRING_LEN: usize = 1024 * 1024;

/// Upper bounds a [`RecordReader`](crate::RecordReader) enforces before
/// allocating, so a corrupt length prefix cannot exhaust memory.
///
/// The default accepts anything the address space can hold; caps are opt-in
/// through [`Limits::strict`] or the builder setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Largest payload accepted by the array reads, in bytes.
    pub max_array_bytes: usize,
    /// Longest C-string accepted, terminator excluded.
    pub max_cstring_len: usize,
}

impl Limits {
    /// Limits that accept anything the address space can hold.
    pub fn unbounded() -> Self {
        Limits {
            max_array_bytes: usize::MAX,
            max_cstring_len: usize::MAX,
        }
    }

    /// [`STRICT_MAX_ARRAY_BYTES`] and [`STRICT_MAX_CSTRING_LEN`], for input
    /// that may be hostile.
    pub fn strict() -> Self {
        Limits {
            max_array_bytes: STRICT_MAX_ARRAY_BYTES,
            max_cstring_len: STRICT_MAX_CSTRING_LEN,
        }
    }

    pub fn with_max_array_bytes(mut self, max: usize) -> Self {
        self.max_array_bytes = max;
        self
    }

    pub fn with_max_cstring_len(mut self, max: usize) -> Self {
        self.max_cstring_len = max;
        self
    }
}

impl Default for Limits {
    fn default() -> Self {
        Limits::unbounded()
    }
}

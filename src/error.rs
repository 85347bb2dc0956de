//! Error types for ledgerwire.

use thiserror::Error;

/// Main error type for all ledgerwire encode/decode operations.
///
/// Every variant is a hard failure: a failed encode leaves the writer in an
/// unspecified state and a failed decode yields no partial record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerwireError {
    /// A fixed-size field was handed a buffer of the wrong length on encode.
    #[error("field `{field}` must be exactly {expected} bytes, got {actual}")]
    FixedSizeMismatch {
        /// Name of the offending field.
        field: &'static str,
        /// Required length in bytes.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },

    /// A length-prefixed field exceeded the 255-byte limit on encode.
    #[error("field `{field}` is {len} bytes, exceeds the 255-byte length prefix")]
    OversizedField {
        /// Name of the offending field.
        field: &'static str,
        /// Length actually supplied.
        len: usize,
    },

    /// The buffer ran out of bytes before a field completed on decode.
    #[error("buffer underrun: needed {needed} bytes, {remaining} remaining")]
    Underrun {
        /// Bytes the current field still required.
        needed: usize,
        /// Bytes left in the buffer.
        remaining: usize,
    },

    /// Bytes remained after the last field of a whole-message decode.
    #[error("trailing data: {remaining} unconsumed bytes after message")]
    TrailingData {
        /// Unconsumed byte count.
        remaining: usize,
    },

    /// A length-prefixed string field did not hold valid UTF-8 on decode.
    #[error("field `{field}` is not valid UTF-8")]
    InvalidUtf8 {
        /// Name of the offending field.
        field: &'static str,
    },
}

/// Result type alias using LedgerwireError.
pub type Result<T> = std::result::Result<T, LedgerwireError>;

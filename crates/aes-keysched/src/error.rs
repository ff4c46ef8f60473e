//! Errors raised when building a cipher key.

use thiserror::Error;

/// Precondition failures for key construction and expansion.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyError {
    /// The key does not contain exactly 16 elements.
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// Required length in bytes.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },
    /// An integer key element does not fit in a byte.
    #[error("invalid byte value {value} at index {index}: must be in 0..=255")]
    InvalidByteValue {
        /// Position of the offending element.
        index: usize,
        /// The out-of-range value.
        value: i64,
    },
}

//! Error types for the fluctuational core
//!
//! Every error is fatal to the current call. The core never retries,
//! coerces shapes, or emits NaN-laden results in place of failing.

use thiserror::Error;

/// Errors produced by core construction and stepping.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// A vector's length disagrees with the configured dimensionality.
    #[error("shape mismatch: expected {expected} dims, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// A scalar argument is outside its valid range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

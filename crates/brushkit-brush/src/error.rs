//! Error types for brush operations.

use brushkit_math::MathError;
use thiserror::Error;

/// Errors that can occur while building or transforming brushes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BrushError {
    /// An argument was outside the accepted range.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Error message.
        message: String,
    },

    /// Vector algebra failed (zero-length normalization).
    #[error(transparent)]
    Math(#[from] MathError),
}

impl BrushError {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Result type for brush operations.
pub type Result<T> = std::result::Result<T, BrushError>;

//! Error types for map record parsing.

use brushkit_brush::BrushError;
use thiserror::Error;

/// Errors that can occur while reading face records and brush blocks.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapError {
    /// Lexer error: malformed token.
    #[error("Lexer error at line {line}, column {col}: {message}")]
    Lexer {
        /// Line number (1-indexed).
        line: usize,
        /// Column number (1-indexed).
        col: usize,
        /// Error message.
        message: String,
    },

    /// Parser error: unexpected token or missing field.
    #[error("Parser error at line {line}: {message}")]
    Parser {
        /// Line of the offending token (1-indexed).
        line: usize,
        /// Error message.
        message: String,
    },

    /// The parsed faces do not form a brush.
    #[error(transparent)]
    Brush(#[from] BrushError),
}

impl MapError {
    /// Create a lexer error.
    pub fn lexer(line: usize, col: usize, message: impl Into<String>) -> Self {
        Self::Lexer {
            line,
            col,
            message: message.into(),
        }
    }

    /// Create a parser error.
    pub fn parser(line: usize, message: impl Into<String>) -> Self {
        Self::Parser {
            line,
            message: message.into(),
        }
    }
}

/// Result type for map operations.
pub type Result<T> = std::result::Result<T, MapError>;

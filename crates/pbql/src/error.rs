//! Error types for pbQL parsing.

use thiserror::Error;

/// Errors that can occur while validating a pbQL query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PbqlError {
    /// A statement stopped being valid at a specific position.
    #[error("Unexpected token at {line}:{column}")]
    SyntaxError {
        /// 1-based index of the statement within the query.
        line: usize,
        /// 1-based character offset within that statement.
        column: usize,
    },
}

impl PbqlError {
    /// Creates a syntax error at `line:column`.
    pub fn syntax(line: usize, column: usize) -> Self {
        PbqlError::SyntaxError { line, column }
    }

    /// Returns the `(line, column)` the error points at.
    pub fn position(&self) -> (usize, usize) {
        match self {
            PbqlError::SyntaxError { line, column } => (*line, *column),
        }
    }
}

/// Result type for pbQL operations.
pub type PbqlResult<T> = std::result::Result<T, PbqlError>;

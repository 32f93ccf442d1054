//! Error types for slipview-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in slipview-core
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// Column index out of bounds
    #[error("Column index {0} out of bounds (columns: {1})")]
    ColumnOutOfBounds(usize, usize),

    /// Column not found by name or footer label
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// Two columns share a name
    #[error("Column name already exists: {0}")]
    DuplicateColumn(String),

    /// Footer labels do not line up with the schema
    #[error("Footer has {footer} labels but the table has {columns} columns")]
    FooterMismatch { footer: usize, columns: usize },

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}

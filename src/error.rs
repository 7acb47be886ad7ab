//! Error types for parsing and table mutation

use thiserror::Error;

/// Errors raised while building a table from text
#[derive(Debug, Error)]
pub enum ParseError {
    /// Header field count differs from the schema's column count
    #[error("Invalid header format: expected {expected} fields, found {found}")]
    InvalidHeaderFormat { expected: usize, found: usize },

    /// A data line's field count differs from the schema's column count
    #[error("Invalid row format on line {line}: expected {expected} fields, found {found}")]
    InvalidRowFormat {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Failed to read the source file
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by index-based table mutation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Row index outside the valid range for the operation
    #[error("Row index {index} out of range for table with {len} rows")]
    IndexOutOfRange { index: usize, len: usize },
}

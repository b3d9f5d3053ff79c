//! Error types for the data-loader crate.
//!
//! Every failure while reading a ratings export ends up here:
//! - the file is missing or unreadable
//! - the header lacks a required column
//! - a row carries a value that violates the record invariants

use thiserror::Error;

/// Errors that can occur while loading a ratings export
///
/// The `#[derive(Error)]` macro from thiserror implements `std::error::Error`
/// and `Display` from the `#[error(...)]` attributes.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found at the attempted path
    #[error("Cannot find file '{path}'")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader rejected the input (unbalanced quotes, ragged rows, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The header row does not name a required column
    #[error("Missing required column '{column}' in header")]
    MissingColumn { column: String },

    /// A field in a data row couldn't be parsed
    ///
    /// `line` is the 1-based line of the row in the file (the header is line 1)
    #[error("Parse error at line {line}, field '{field}': {reason}")]
    ParseError {
        line: usize,
        field: String,
        reason: String,
    },

    /// The file bytes are not valid in the requested encoding
    #[error("File is not valid {encoding}")]
    Encoding { encoding: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;

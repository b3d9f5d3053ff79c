//! Error types for rendering reports.

use pipeline::PipelineError;
use thiserror::Error;

/// Errors that can occur while preparing or rendering a report
#[derive(Error, Debug)]
pub enum ReportError {
    /// No translation table exists for the requested language
    #[error("Unsupported language '{language}' (available: {available})")]
    UnsupportedLanguage { language: String, available: String },

    /// No color scheme exists with the requested name
    #[error("Unsupported color scheme '{scheme}' (available: {available})")]
    UnsupportedScheme { scheme: String, available: String },

    /// An aggregate needed by the report failed
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// I/O error while reading a config file or writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON file could not be read or written
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ReportError>;

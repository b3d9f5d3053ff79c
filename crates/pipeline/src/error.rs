//! Error types for filtering and aggregation.

use thiserror::Error;

/// Errors raised while building filters or aggregating records
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// A filter specification such as "5-7" could not be parsed
    #[error("Invalid specification '{spec}': {reason}")]
    InvalidSpec { spec: String, reason: String },

    /// An aggregate that needs at least one record was given none
    #[error("Cannot aggregate an empty set of records")]
    EmptyInput,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, PipelineError>;

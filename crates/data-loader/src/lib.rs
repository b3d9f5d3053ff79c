//! # Data Loader Crate
//!
//! This crate loads an IMDb ratings export (`ratings.csv`) into memory.
//!
//! ## Main Components
//!
//! - **types**: `Record` and the options that control loading
//! - **parser**: decode the file and parse CSV rows into records
//! - **error**: error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{load, LoadOptions};
//! use std::path::Path;
//!
//! let records = load(Path::new("ratings.csv"), LoadOptions::default())?;
//! println!("Loaded {} ratings", records.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use parser::{load, parse_str};
pub use types::{
    DATE_FORMAT,
    MAX_RATING,
    MIN_RATING,
    DateColumn,
    Encoding,
    LoadOptions,
    Record,
};

//! Core domain types for an IMDb ratings export.
//!
//! This module defines the record produced by the loader and the options
//! that control how an export is read.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Rating bounds
// =============================================================================

/// Lowest rating IMDb lets a user give
pub const MIN_RATING: u8 = 1;

/// Highest rating IMDb lets a user give
pub const MAX_RATING: u8 = 10;

/// Date format used by every date column in the export
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Record
// =============================================================================

/// One rating entry from the export.
///
/// Records are built once by the loader and never mutated afterwards.
/// Filters hand out new collections, aggregators only borrow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub title: String,
    /// User rating, always within `MIN_RATING..=MAX_RATING`
    pub rating: u8,
    /// Release date or rating date, depending on `DateColumn`
    pub date: NaiveDate,
    /// Genre labels in export order, trimmed
    pub genres: Vec<String>,
    /// Category such as "movie" or "tvEpisode", when the export has the column
    pub title_type: Option<String>,
}

impl Record {
    /// Year of the record's date
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Whether a rating value lies within the valid range
    pub fn is_valid_rating(rating: u8) -> bool {
        (MIN_RATING..=MAX_RATING).contains(&rating)
    }
}

// =============================================================================
// Load options
// =============================================================================

/// Text encoding of the export file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// ISO-8859-1, the encoding IMDb writes its exports in
    #[default]
    Latin1,
    /// For exports that were re-saved by a spreadsheet tool
    Utf8,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Latin1 => write!(f, "ISO-8859-1"),
            Encoding::Utf8 => write!(f, "UTF-8"),
        }
    }
}

/// Which column supplies `Record::date`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateColumn {
    #[default]
    ReleaseDate,
    DateRated,
}

impl DateColumn {
    /// Header name of the column in the export
    pub fn header(&self) -> &'static str {
        match self {
            DateColumn::ReleaseDate => "Release Date",
            DateColumn::DateRated => "Date Rated",
        }
    }
}

/// Options for `load`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadOptions {
    pub encoding: Encoding,
    pub date_column: DateColumn,
}

impl LoadOptions {
    pub fn with_date_column(mut self, date_column: DateColumn) -> Self {
        self.date_column = date_column;
        self
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(Record::is_valid_rating(1));
        assert!(Record::is_valid_rating(10));
        assert!(!Record::is_valid_rating(0));
        assert!(!Record::is_valid_rating(11));
    }

    #[test]
    fn test_record_year() {
        let record = Record {
            title: "Heat".to_string(),
            rating: 9,
            date: NaiveDate::from_ymd_opt(1995, 12, 15).unwrap(),
            genres: vec!["Crime".to_string(), "Drama".to_string()],
            title_type: Some("movie".to_string()),
        };
        assert_eq!(record.year(), 1995);
    }

    #[test]
    fn test_default_options() {
        let options = LoadOptions::default();
        assert_eq!(options.encoding, Encoding::Latin1);
        assert_eq!(options.date_column.header(), "Release Date");
    }
}

//! Parser for IMDb ratings exports.
//!
//! The export is a CSV file with a header row. Columns are looked up by
//! name, never by position:
//! - `Title`, `Your Rating`, `Genres` are always required
//! - `Release Date` or `Date Rated` is required depending on `DateColumn`
//! - `Title Type` is optional
//!
//! The file is ISO-8859-1 encoded, not UTF-8.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use chrono::NaiveDate;
use csv::StringRecord;
use std::collections::HashMap;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

const TITLE: &str = "Title";
const RATING: &str = "Your Rating";
const GENRES: &str = "Genres";
const TITLE_TYPE: &str = "Title Type";

/// Load a ratings export from disk.
///
/// Reads the whole file, decodes it with `options.encoding` and parses
/// every data row into a `Record`. Records come back in file order.
pub fn load(path: &Path, options: LoadOptions) -> Result<Vec<Record>> {
    let bytes = read_bytes(path)?;
    let content = decode(&bytes, options.encoding)?;
    let records = parse_str(&content, options)?;

    tracing::info!(
        "Loaded {} records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// Decode raw file bytes.
///
/// ISO-8859-1 is a single-byte encoding where each byte maps directly to the
/// Unicode code point of the same value, so decoding never fails.
pub fn decode(bytes: &[u8], encoding: Encoding) -> Result<String> {
    match encoding {
        Encoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
        Encoding::Utf8 => {
            let text = std::str::from_utf8(bytes).map_err(|_| DataLoadError::Encoding {
                encoding: encoding.to_string(),
            })?;
            Ok(text.trim_start_matches('\u{feff}').to_string())
        }
    }
}

/// Maps required header names to their column index
struct Columns {
    title: usize,
    rating: usize,
    date: usize,
    genres: usize,
    title_type: Option<usize>,
}

impl Columns {
    fn from_header(header: &StringRecord, date_column: DateColumn) -> Result<Self> {
        let indexes: HashMap<&str, usize> = header
            .iter()
            .enumerate()
            .map(|(idx, name)| (name, idx))
            .collect();

        let require = |column: &str| {
            indexes
                .get(column)
                .copied()
                .ok_or_else(|| DataLoadError::MissingColumn {
                    column: column.to_string(),
                })
        };

        Ok(Self {
            title: require(TITLE)?,
            rating: require(RATING)?,
            date: require(date_column.header())?,
            genres: require(GENRES)?,
            title_type: indexes.get(TITLE_TYPE).copied(),
        })
    }
}

/// Parse already-decoded export text into records
pub fn parse_str(content: &str, options: LoadOptions) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let columns = Columns::from_header(reader.headers()?, options.date_column)?;
    let date_header = options.date_column.header();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let line_no = row
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(records.len() + 2);

        let field = |idx: usize, name: &str| {
            row.get(idx).ok_or_else(|| DataLoadError::ParseError {
                line: line_no,
                field: name.to_string(),
                reason: "Missing field".to_string(),
            })
        };

        let title = field(columns.title, TITLE)?;
        if title.is_empty() {
            return Err(DataLoadError::ParseError {
                line: line_no,
                field: TITLE.to_string(),
                reason: "Empty title".to_string(),
            });
        }

        let record = Record {
            title: title.to_string(),
            rating: parse_rating(field(columns.rating, RATING)?, line_no)?,
            date: parse_date(field(columns.date, date_header)?, date_header, line_no)?,
            genres: parse_genres(field(columns.genres, GENRES)?),
            title_type: columns
                .title_type
                .and_then(|idx| row.get(idx))
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        };

        records.push(record);
    }

    tracing::debug!("Parsed {} rows", records.len());
    Ok(records)
}

/// Parse a rating cell, enforcing the 1..=10 range
fn parse_rating(s: &str, line: usize) -> Result<u8> {
    let rating: u8 = s.parse().map_err(|e| DataLoadError::ParseError {
        line,
        field: RATING.to_string(),
        reason: format!("Invalid rating '{}': {}", s, e),
    })?;

    if !Record::is_valid_rating(rating) {
        return Err(DataLoadError::ParseError {
            line,
            field: RATING.to_string(),
            reason: format!(
                "Rating {} outside {}..={}",
                rating, MIN_RATING, MAX_RATING
            ),
        });
    }
    Ok(rating)
}

fn parse_date(s: &str, field: &str, line: usize) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|e| DataLoadError::ParseError {
        line,
        field: field.to_string(),
        reason: format!("Invalid date '{}': {}", s, e),
    })
}

/// Parse comma-separated genres
///
/// Example: "Action, Adventure, Sci-Fi" -> ["Action", "Adventure", "Sci-Fi"]
fn parse_genres(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|genre| !genre.is_empty())
        .map(str::to_string)
        .collect()
}

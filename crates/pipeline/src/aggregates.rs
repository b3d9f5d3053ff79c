//! Aggregate statistics over record collections.
//!
//! Every function here is read-only: it borrows a slice of records
//! (filtered or not) and computes a summary without touching the input.

use crate::error::{PipelineError, Result};
use data_loader::{MAX_RATING, MIN_RATING, Record};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

const RATING_SLOTS: usize = (MAX_RATING - MIN_RATING + 1) as usize;

/// Percentage of `count` in `total`; zero when `total` is zero
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

// =============================================================================
// Rating histogram
// =============================================================================

/// Number of records at each rating value.
///
/// Every rating from 1 to 10 has a slot, even when its count is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RatingHistogram {
    counts: [usize; RATING_SLOTS],
}

impl RatingHistogram {
    /// Build a histogram from raw counts, index 0 holding rating 1
    pub fn from_counts(counts: [usize; RATING_SLOTS]) -> Self {
        Self { counts }
    }

    /// Count for a rating; out-of-range ratings have a count of zero
    pub fn count(&self, rating: u8) -> usize {
        if Record::is_valid_rating(rating) {
            self.counts[usize::from(rating - MIN_RATING)]
        } else {
            0
        }
    }

    /// `(rating, count)` pairs from 1 to 10
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        (MIN_RATING..=MAX_RATING).zip(self.counts.iter().copied())
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        RATING_SLOTS
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Count records at each rating value
pub fn rating_histogram(records: &[Record]) -> RatingHistogram {
    let mut counts = [0; RATING_SLOTS];
    for record in records {
        if Record::is_valid_rating(record.rating) {
            counts[usize::from(record.rating - MIN_RATING)] += 1;
        }
    }
    RatingHistogram { counts }
}

// =============================================================================
// Genre counts
// =============================================================================

/// Occurrences of each genre label, in order of first appearance
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GenreCounts {
    entries: Vec<(String, usize)>,
}

impl GenreCounts {
    pub fn get(&self, genre: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(name, _)| name == genre)
            .map(|(_, count)| *count)
    }

    /// Sum of all genre occurrences (not the number of records)
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(genre, count)` pairs in order of first appearance
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.entries
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
    }

    /// Pairs sorted by descending count; ties keep first-appearance order
    pub fn sorted_by_count(&self) -> Vec<(&str, usize)> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }
}

/// Count genre occurrences across every record's genre list.
///
/// A record with three genres contributes to three counts.
pub fn genre_counts(records: &[Record]) -> GenreCounts {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<(String, usize)> = Vec::new();

    for genre in records.iter().flat_map(|record| record.genres.iter()) {
        match positions.get(genre.as_str()) {
            Some(&idx) => entries[idx].1 += 1,
            None => {
                positions.insert(genre.as_str(), entries.len());
                entries.push((genre.clone(), 1));
            }
        }
    }

    GenreCounts { entries }
}

// =============================================================================
// Year counts
// =============================================================================

/// Number of records in one year and their share of the collection
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
    /// Share of the whole collection, 0.0 to 100.0
    pub percentage: f64,
}

/// Count records per year, ascending by year
pub fn year_counts(records: &[Record]) -> Vec<YearCount> {
    let mut per_year: BTreeMap<i32, usize> = BTreeMap::new();
    for record in records {
        *per_year.entry(record.year()).or_insert(0) += 1;
    }

    per_year
        .into_iter()
        .map(|(year, count)| YearCount {
            year,
            count,
            percentage: percentage(count, records.len()),
        })
        .collect()
}

// =============================================================================
// Top rated per year
// =============================================================================

/// For each year, the records that share that year's highest rating.
///
/// Ties are all included and keep their relative order from the input.
pub fn top_rated_per_year(records: &[Record]) -> BTreeMap<i32, Vec<&Record>> {
    let mut best: HashMap<i32, u8> = HashMap::new();
    for record in records {
        let max = best.entry(record.year()).or_insert(record.rating);
        *max = (*max).max(record.rating);
    }

    let mut top: BTreeMap<i32, Vec<&Record>> = BTreeMap::new();
    for record in records {
        let year = record.year();
        if best.get(&year) == Some(&record.rating) {
            top.entry(year).or_default().push(record);
        }
    }
    top
}

// =============================================================================
// Averages
// =============================================================================

/// Arithmetic mean of the ratings.
///
/// Fails with `EmptyInput` when there are no records.
pub fn average(records: &[Record]) -> Result<f64> {
    mean_rating(records.iter())
}

fn mean_rating<'a>(records: impl Iterator<Item = &'a Record>) -> Result<f64> {
    let (sum, count) = records.fold((0u64, 0usize), |(sum, count), record| {
        (sum + u64::from(record.rating), count + 1)
    });
    if count == 0 {
        return Err(PipelineError::EmptyInput);
    }
    Ok(sum as f64 / count as f64)
}

/// Mean rating of the records from one year
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearAverage {
    pub year: i32,
    pub average: f64,
}

/// Mean rating per year, ascending by year
pub fn yearly_average(records: &[Record]) -> Vec<YearAverage> {
    let mut per_year: BTreeMap<i32, Vec<&Record>> = BTreeMap::new();
    for record in records {
        per_year.entry(record.year()).or_default().push(record);
    }

    per_year
        .into_iter()
        .filter_map(|(year, group)| {
            mean_rating(group.into_iter())
                .ok()
                .map(|average| YearAverage { year, average })
        })
        .collect()
}

/// True when every record carries the same rating (or there are none)
pub fn has_uniform_rating(records: &[Record]) -> bool {
    records.windows(2).all(|pair| pair[0].rating == pair[1].rating)
}

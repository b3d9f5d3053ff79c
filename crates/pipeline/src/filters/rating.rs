//! Filter to keep records with selected ratings.

use crate::traits::{Filter, sort_by_title};
use data_loader::Record;
use std::collections::BTreeSet;

/// Keeps records whose rating is in the given set.
///
/// The result is sorted by title (stable). Later reports rely on that
/// order, so it is part of this filter's contract.
pub struct RatingFilter {
    ratings: BTreeSet<u8>,
}

impl RatingFilter {
    pub fn new(ratings: impl IntoIterator<Item = u8>) -> Self {
        Self {
            ratings: ratings.into_iter().collect(),
        }
    }
}

impl Filter for RatingFilter {
    fn name(&self) -> &str {
        "RatingFilter"
    }

    fn apply(&self, records: Vec<Record>) -> Vec<Record> {
        let mut filtered: Vec<Record> = records
            .into_iter()
            .filter(|record| self.ratings.contains(&record.rating))
            .collect();
        sort_by_title(&mut filtered);
        filtered
    }
}

//! Filter to keep records from selected years.

use crate::range_spec::RangeSpec;
use crate::traits::{Filter, sort_by_title};
use data_loader::Record;

/// Keeps records whose year falls in any of the given ranges.
///
/// Like `RatingFilter`, the result is sorted by title.
pub struct YearFilter {
    ranges: Vec<RangeSpec>,
}

impl YearFilter {
    pub fn new(ranges: impl IntoIterator<Item = RangeSpec>) -> Self {
        Self {
            ranges: ranges.into_iter().collect(),
        }
    }
}

impl Filter for YearFilter {
    fn name(&self) -> &str {
        "YearFilter"
    }

    fn apply(&self, records: Vec<Record>) -> Vec<Record> {
        let mut filtered: Vec<Record> = records
            .into_iter()
            .filter(|record| {
                let year = record.year();
                self.ranges.iter().any(|range| range.contains(year))
            })
            .collect();
        sort_by_title(&mut filtered);
        filtered
    }
}

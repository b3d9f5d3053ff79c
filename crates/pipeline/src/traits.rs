//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! independent filters to be applied to record collections.

use data_loader::Record;

/// Core trait for filtering records.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - Filters take ownership of the Vec<Record> and return a new Vec
/// - Filters are infallible: specifications are validated when the
///   filter is built, not when it runs
/// - An empty input yields an empty output
pub trait Filter {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of records.
    fn apply(&self, records: Vec<Record>) -> Vec<Record>;
}

/// Sort records by title, keeping file order for equal titles
pub(crate) fn sort_by_title(records: &mut [Record]) {
    records.sort_by(|a, b| a.title.cmp(&b.title));
}

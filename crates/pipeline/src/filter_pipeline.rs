//! Ordered composition of record filters.
//!
//! Every stage receives the output of the one before it, so a pipeline
//! keeps exactly the records that pass all of its filters.

use crate::traits::Filter;
use data_loader::Record;

/// Filters applied one after another, in the order they were added.
///
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(TitleFilter::new(["star wars"]))
///     .add_filter(RatingFilter::new([8, 9, 10]));
///
/// let kept = pipeline.apply(records);
/// ```
pub struct FilterPipeline {
    stages: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a filter as the last stage
    pub fn add_filter(self, filter: impl Filter + 'static) -> Self {
        self.add_boxed(Box::new(filter))
    }

    /// Append a filter chosen at runtime
    pub fn add_boxed(mut self, filter: Box<dyn Filter>) -> Self {
        self.stages.push(filter);
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Stage names in application order
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Run the records through every stage.
    pub fn apply(&self, records: Vec<Record>) -> Vec<Record> {
        self.stages.iter().fold(records, |records, stage| {
            let before = records.len();
            let kept = stage.apply(records);
            tracing::debug!(filter = stage.name(), before, after = kept.len(), "filter stage");
            kept
        })
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

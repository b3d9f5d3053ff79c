//! Filter to drop records of unwanted title types (episodes, games, ...).

use crate::traits::Filter;
use data_loader::Record;
use std::collections::HashSet;

/// Removes records whose title type is in the exclusion set.
///
/// Comparison ignores case. Records without a title type are kept.
pub struct TitleTypeFilter {
    excluded: HashSet<String>,
}

impl TitleTypeFilter {
    pub fn new<I, S>(excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            excluded: excluded
                .into_iter()
                .map(|kind| kind.as_ref().to_lowercase())
                .collect(),
        }
    }
}

impl Filter for TitleTypeFilter {
    fn name(&self) -> &str {
        "TitleTypeFilter"
    }

    fn apply(&self, records: Vec<Record>) -> Vec<Record> {
        records
            .into_iter()
            .filter(|record| match &record.title_type {
                Some(kind) => !self.excluded.contains(&kind.to_lowercase()),
                None => true,
            })
            .collect()
    }
}

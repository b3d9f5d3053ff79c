//! Filter to keep titles matching any of a set of phrases.

use crate::traits::Filter;
use data_loader::Record;

/// Keeps records whose title contains at least one needle.
///
/// ## Algorithm
/// Needles are lowercased once at construction; each title is lowercased
/// and checked for a substring match against every needle (logical OR).
/// Record order is preserved.
pub struct TitleFilter {
    needles: Vec<String>,
}

impl TitleFilter {
    pub fn new<I, S>(needles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            needles: needles
                .into_iter()
                .map(|needle| needle.as_ref().to_lowercase())
                .collect(),
        }
    }

    fn matches(&self, record: &Record) -> bool {
        let title = record.title.to_lowercase();
        self.needles.iter().any(|needle| title.contains(needle.as_str()))
    }
}

impl Filter for TitleFilter {
    fn name(&self) -> &str {
        "TitleFilter"
    }

    fn apply(&self, records: Vec<Record>) -> Vec<Record> {
        records
            .into_iter()
            .filter(|record| self.matches(record))
            .collect()
    }
}

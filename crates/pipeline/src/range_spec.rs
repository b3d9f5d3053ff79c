//! Parsing of value specifications used by the rating and year filters.
//!
//! A specification is either a single integer (`"7"`) or an inclusive
//! range (`"5-7"`). Reversed ranges such as `"9-5"` are rejected rather
//! than silently producing an empty set.

use crate::error::{PipelineError, Result};
use data_loader::{MAX_RATING, MIN_RATING};
use std::collections::BTreeSet;
use std::str::FromStr;

/// An inclusive range of integers parsed from `"start-end"` or `"value"`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSpec {
    pub start: i32,
    pub end: i32,
}

impl RangeSpec {
    /// Range holding a single value
    pub fn single(value: i32) -> Self {
        Self {
            start: value,
            end: value,
        }
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.start..=self.end).contains(&value)
    }

    /// Expand the range into the set of integers it covers.
    ///
    /// Allocates one entry per value; only use on ranges with known bounds.
    pub fn values(&self) -> BTreeSet<i32> {
        (self.start..=self.end).collect()
    }
}

impl FromStr for RangeSpec {
    type Err = PipelineError;

    fn from_str(spec: &str) -> Result<Self> {
        let invalid = |reason: &str| PipelineError::InvalidSpec {
            spec: spec.to_string(),
            reason: reason.to_string(),
        };
        let number = |part: &str| {
            part.trim()
                .parse::<i32>()
                .map_err(|_| invalid(&format!("'{}' is not a number", part.trim())))
        };

        let trimmed = spec.trim();
        if trimmed.is_empty() {
            return Err(invalid("empty specification"));
        }

        match trimmed.split_once('-') {
            Some((start, end)) => {
                let start = number(start)?;
                let end = number(end)?;
                if start > end {
                    return Err(invalid("range start is greater than its end"));
                }
                Ok(Self { start, end })
            }
            None => Ok(Self::single(number(trimmed)?)),
        }
    }
}

/// Parse a rating specification into the set of ratings it names.
///
/// Every value must lie within the valid rating range.
pub fn parse_rating_spec(spec: &str) -> Result<BTreeSet<u8>> {
    let range: RangeSpec = spec.parse()?;
    let min = i32::from(MIN_RATING);
    let max = i32::from(MAX_RATING);

    if range.start < min || range.end > max {
        return Err(PipelineError::InvalidSpec {
            spec: spec.to_string(),
            reason: format!("ratings must be within {}-{}", MIN_RATING, MAX_RATING),
        });
    }

    Ok(range
        .values()
        .into_iter()
        .filter_map(|v| u8::try_from(v).ok())
        .collect())
}

/// Parse a year specification.
///
/// Years are kept as bounds, so arbitrarily wide ranges cost nothing.
pub fn parse_year_spec(spec: &str) -> Result<RangeSpec> {
    spec.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_expands_inclusively() {
        let spec: RangeSpec = "5-7".parse().unwrap();
        assert_eq!(spec.values(), BTreeSet::from([5, 6, 7]));
    }

    #[test]
    fn test_single_value() {
        let spec: RangeSpec = "7".parse().unwrap();
        assert_eq!(spec.values(), BTreeSet::from([7]));

        let spec: RangeSpec = " 7 - 7 ".parse().unwrap();
        assert_eq!(spec.values(), BTreeSet::from([7]));
    }

    #[test]
    fn test_reversed_range_fails_validation() {
        let err = "9-5".parse::<RangeSpec>().unwrap_err();
        assert!(matches!(err, PipelineError::InvalidSpec { ref spec, .. } if spec == "9-5"));
    }

    #[test]
    fn test_malformed_specs() {
        for spec in ["", "seven", "5-", "-5", "5-x", "1.5"] {
            assert!(
                spec.parse::<RangeSpec>().is_err(),
                "'{}' should be rejected",
                spec
            );
        }
    }

    #[test]
    fn test_rating_spec_bounds() {
        assert_eq!(parse_rating_spec("8-10").unwrap(), BTreeSet::from([8, 9, 10]));
        assert!(parse_rating_spec("0-3").is_err());
        assert!(parse_rating_spec("11").is_err());
    }

    #[test]
    fn test_year_spec() {
        let spec = parse_year_spec("1999-2001").unwrap();
        assert_eq!(
            spec,
            RangeSpec {
                start: 1999,
                end: 2001
            }
        );
        assert!(spec.contains(1999));
        assert!(spec.contains(2001));
        assert!(!spec.contains(2002));
    }

    #[test]
    fn test_wide_year_spec_is_not_expanded() {
        let spec = parse_year_spec("1-2000000000").unwrap();

        assert!(spec.contains(1));
        assert!(spec.contains(1999));
        assert!(spec.contains(2_000_000_000));
        assert!(!spec.contains(0));
    }
}

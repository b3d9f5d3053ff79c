//! What one run of the tool does: configuration, filters, final action.
//!
//! Parsed arguments are turned into an `Invocation` once. Filters and the
//! terminal action are plain enums, so executing a run is a `match`, not a
//! lookup by command name.

use data_loader::{DateColumn, LoadOptions};
use pipeline::filters::{RatingFilter, TitleFilter, TitleTypeFilter, YearFilter};
use pipeline::{Filter, FilterPipeline, RangeSpec};
use reports::{ColorSchemes, Localizer, ReportContext, Styler};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Options that apply to the whole run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub path: PathBuf,
    pub language: String,
    pub scheme: String,
    pub date_column: DateColumn,
    pub schemes_file: Option<PathBuf>,
    pub translations_file: Option<PathBuf>,
    /// Style output when writing to a terminal
    pub styled: bool,
}

impl ReportConfig {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions::default().with_date_column(self.date_column)
    }

    /// Resolve language, color scheme and styling.
    ///
    /// Fails on an unknown language or color scheme.
    pub fn report_context(&self) -> reports::Result<ReportContext> {
        let localizer = match &self.translations_file {
            Some(path) => Localizer::from_json_file(path)?,
            None => Localizer::new(&self.language)?,
        };
        let schemes = match &self.schemes_file {
            Some(path) => ColorSchemes::from_json_file(path)?,
            None => ColorSchemes::builtin(),
        };
        let scheme = schemes.get(&self.scheme)?.clone();
        let styler = if self.styled {
            Styler::detect()
        } else {
            Styler::plain()
        };

        Ok(ReportContext::new(localizer, styler, scheme))
    }
}

/// One narrowing step applied to the loaded records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterSpec {
    Title(Vec<String>),
    Rating(BTreeSet<u8>),
    Year(Vec<RangeSpec>),
    ExcludeType(Vec<String>),
}

impl FilterSpec {
    pub fn to_filter(&self) -> Box<dyn Filter> {
        match self {
            FilterSpec::Title(needles) => Box::new(TitleFilter::new(needles)),
            FilterSpec::Rating(ratings) => Box::new(RatingFilter::new(ratings.iter().copied())),
            FilterSpec::Year(ranges) => Box::new(YearFilter::new(ranges.iter().copied())),
            FilterSpec::ExcludeType(types) => Box::new(TitleTypeFilter::new(types)),
        }
    }
}

/// The single report produced at the end of a run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TerminalAction {
    /// Listing of titles and ratings followed by a summary
    #[default]
    Summary,
    /// Ratings by popularity
    Ratings,
    Genres,
    Years,
    /// Mean rating per year
    YearlyAverage,
    TopPerYear,
    /// ASCII bar chart in the terminal
    Plot,
    /// Chart series saved as JSON
    SavePlot(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub config: ReportConfig,
    pub filters: Vec<FilterSpec>,
    pub action: TerminalAction,
}

impl Invocation {
    /// Build the filter pipeline, one stage per filter spec in order
    pub fn pipeline(&self) -> FilterPipeline {
        self.filters
            .iter()
            .fold(FilterPipeline::new(), |pipeline, spec| {
                pipeline.add_boxed(spec.to_filter())
            })
    }
}

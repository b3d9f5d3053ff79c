//! Command-line arguments.

use crate::invocation::{FilterSpec, Invocation, ReportConfig, TerminalAction};
use clap::{Parser, Subcommand};
use data_loader::DateColumn;
use pipeline::{RangeSpec, parse_rating_spec, parse_year_spec};
use reports::DEFAULT_SCHEME;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// ReelStats - summaries and charts of an IMDb ratings export
#[derive(Parser, Debug)]
#[command(name = "reel-stats")]
#[command(about = "Summaries and charts of an IMDb ratings export", long_about = None)]
pub struct Cli {
    /// Path to the ratings export (ratings.csv)
    #[arg(short, long, default_value = "ratings.csv", env = "REEL_STATS_PATH")]
    pub path: PathBuf,

    /// Language used in output (en, pl)
    #[arg(
        short,
        long,
        visible_alias = "lang",
        default_value = "en",
        env = "REEL_STATS_LANGUAGE"
    )]
    pub language: String,

    /// Color scheme used in chart output (gruvbox, nord, solarized)
    #[arg(
        long,
        visible_aliases = ["color-scheme", "colors"],
        default_value = DEFAULT_SCHEME,
        env = "REEL_STATS_SCHEME"
    )]
    pub scheme: String,

    /// JSON file with additional color schemes
    #[arg(long, value_name = "FILE")]
    pub schemes_file: Option<PathBuf>,

    /// JSON translation file, overrides --language
    #[arg(long, value_name = "FILE")]
    pub translations: Option<PathBuf>,

    /// Use the date a title was rated instead of its release date
    #[arg(long)]
    pub rating_date: bool,

    /// Keep only titles containing PHRASE (case-insensitive, repeatable)
    #[arg(short = 't', long, visible_alias = "wt", value_name = "PHRASE")]
    pub with_title: Vec<String>,

    /// Keep only titles rated SPEC, e.g. 7 or 5-7 (repeatable)
    #[arg(
        short = 'r',
        long,
        visible_alias = "wr",
        value_name = "SPEC",
        value_parser = parse_rating_spec
    )]
    pub with_rating: Vec<BTreeSet<u8>>,

    /// Keep only titles from year SPEC, e.g. 1999 or 1990-1999 (repeatable)
    #[arg(
        short = 'y',
        long,
        visible_alias = "wy",
        value_name = "SPEC",
        value_parser = parse_year_spec
    )]
    pub with_year: Vec<RangeSpec>,

    /// Drop titles of TYPE, e.g. tvEpisode (repeatable)
    #[arg(short = 'x', long, value_name = "TYPE")]
    pub exclude_type: Vec<String>,

    /// Never style output, even on a terminal
    #[arg(long)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print matching titles with a summary (default)
    #[command(visible_alias = "s")]
    Summary,

    /// Print ratings ordered by popularity
    #[command(visible_alias = "r")]
    Ratings,

    /// Print genre statistics
    #[command(visible_alias = "g")]
    Genres,

    /// Print how many titles come from each year
    #[command(visible_alias = "y")]
    Years {
        /// Print the mean rating of each year instead
        #[arg(short, long)]
        average: bool,
    },

    /// Print the best rated titles of every year
    #[command(visible_alias = "t")]
    Top,

    /// Draw a bar chart of ratings in the terminal
    #[command(visible_alias = "p")]
    Plot,

    /// Save the bar chart data of ratings as JSON
    #[command(visible_alias = "sp")]
    SavePlot {
        /// Where to write the chart series
        path: PathBuf,
    },
}

impl Cli {
    /// Resolve parsed arguments into a run description.
    ///
    /// Repeated specs of one kind are merged into a single filter; filters
    /// run in the order title, rating, year, title type.
    pub fn into_invocation(self) -> Invocation {
        let mut filters = Vec::new();

        if !self.with_title.is_empty() {
            filters.push(FilterSpec::Title(self.with_title));
        }
        if !self.with_rating.is_empty() {
            let ratings = self.with_rating.into_iter().flatten().collect();
            filters.push(FilterSpec::Rating(ratings));
        }
        if !self.with_year.is_empty() {
            filters.push(FilterSpec::Year(self.with_year));
        }
        if !self.exclude_type.is_empty() {
            filters.push(FilterSpec::ExcludeType(self.exclude_type));
        }

        let action = match self.command.unwrap_or(Command::Summary) {
            Command::Summary => TerminalAction::Summary,
            Command::Ratings => TerminalAction::Ratings,
            Command::Genres => TerminalAction::Genres,
            Command::Years { average: false } => TerminalAction::Years,
            Command::Years { average: true } => TerminalAction::YearlyAverage,
            Command::Top => TerminalAction::TopPerYear,
            Command::Plot => TerminalAction::Plot,
            Command::SavePlot { path } => TerminalAction::SavePlot(path),
        };

        let date_column = if self.rating_date {
            DateColumn::DateRated
        } else {
            DateColumn::ReleaseDate
        };

        Invocation {
            config: ReportConfig {
                path: self.path,
                language: self.language,
                scheme: self.scheme,
                date_column,
                schemes_file: self.schemes_file,
                translations_file: self.translations,
                styled: !self.plain,
            },
            filters,
            action,
        }
    }
}

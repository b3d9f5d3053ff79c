//! # Reports Crate
//!
//! Renders filtered records and their aggregates as text or chart data.
//!
//! ## Components
//!
//! - **table**: title/rating listing and the summary banner
//! - **stats**: rating popularity, genre, year, yearly average and top-rated
//!   breakdowns
//! - **chart**: ASCII bar chart and the chart series for external plotting
//! - **i18n**, **style**, **scheme**: language, terminal styling and palettes,
//!   bundled into a `ReportContext`
//!
//! Reporters return strings; writing them out is left to the caller, so a
//! failing report never leaves partial output behind.
//!
//! ## Example Usage
//!
//! ```ignore
//! use reports::{ReportContext, table, summary};
//!
//! let ctx = ReportContext::plain();
//! let listing = table(&records);
//! print!("{}", listing.text);
//! print!("\n{}", summary(&records, listing.max_line_length, &ctx)?);
//! ```

pub mod chart;
pub mod context;
pub mod error;
pub mod i18n;
pub mod scheme;
pub mod stats;
pub mod style;
pub mod table;

pub use chart::{
    AsciiRenderer, BarChartSeries, ChartRenderer, JsonSeriesRenderer, ascii_bar_chart,
    bar_chart_series,
};
pub use context::ReportContext;
pub use error::{ReportError, Result};
pub use i18n::Localizer;
pub use scheme::{ColorScheme, ColorSchemes, DEFAULT_SCHEME};
pub use stats::{
    genre_report, popularity_report, top_rated_report, year_report, yearly_average_report,
};
pub use style::Styler;
pub use table::{Table, summary, summary_header, table};

//! Pipeline for filtering and aggregating rating records.
//!
//! This crate provides:
//! - Filter trait and implementations for record filtering
//! - FilterPipeline for composing filters
//! - Range specifications ("5-7") for the rating and year filters
//! - Aggregates: histograms, genre and year counts, averages
//!
//! ## Architecture
//! Records flow through the pipeline in stages:
//! 1. Filters narrow the collection (title, rating, year, title type)
//! 2. Aggregates summarize whatever is left
//! 3. The reports crate renders the summaries
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::FilterPipeline;
//! use pipeline::filters::*;
//! use pipeline::aggregates::rating_histogram;
//!
//! let pipeline = FilterPipeline::new()
//!     .add_filter(TitleFilter::new(["star wars"]))
//!     .add_filter(RatingFilter::new(parse_rating_spec("8-10")?));
//!
//! let filtered = pipeline.apply(records);
//! let histogram = rating_histogram(&filtered);
//! ```

pub mod aggregates;
pub mod error;
pub mod filter_pipeline;
pub mod filters;
pub mod range_spec;
pub mod traits;

// Re-export main types
pub use aggregates::{GenreCounts, RatingHistogram, YearAverage, YearCount};
pub use error::{PipelineError, Result};
pub use filter_pipeline::FilterPipeline;
pub use range_spec::{RangeSpec, parse_rating_spec, parse_year_spec};
pub use traits::Filter;

//! Filter implementations for the record pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod rating;
pub mod title;
pub mod title_type;
pub mod year;

// Re-export for convenience
pub use rating::RatingFilter;
pub use title::TitleFilter;
pub use title_type::TitleTypeFilter;
pub use year::YearFilter;

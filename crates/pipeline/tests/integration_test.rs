//! Integration tests for the pipeline.
//!
//! These tests verify that parsed records, filters and aggregates work
//! together in a realistic scenario.

use data_loader::{LoadOptions, Record, parse_str};
use pipeline::aggregates::{
    average, genre_counts, rating_histogram, top_rated_per_year, yearly_average,
};
use pipeline::filters::*;
use pipeline::{FilterPipeline, PipelineError, parse_rating_spec, parse_year_spec};
use pretty_assertions::assert_eq;

const EXPORT: &str = "\
Title,Your Rating,Release Date,Genres,Title Type
The Dark Knight,10,2008-07-18,\"Action, Crime, Drama\",movie
Batman Begins,8,2005-06-15,\"Action, Crime\",movie
Batman Returns,6,1992-06-19,\"Action, Crime, Fantasy\",movie
The Batman,8,2022-03-04,\"Action, Crime, Drama\",movie
Batman: The Animated Series,9,1992-09-05,\"Animation, Action\",tvSeries
Heat,9,1995-12-15,\"Action, Crime, Drama\",movie
Joker,7,2019-10-04,\"Crime, Drama\",movie
";

fn records() -> Vec<Record> {
    parse_str(EXPORT, LoadOptions::default()).unwrap()
}

fn titles(records: &[Record]) -> Vec<&str> {
    records.iter().map(|r| r.title.as_str()).collect()
}

#[test]
fn test_full_pipeline_filters_correctly() {
    let pipeline = FilterPipeline::new()
        .add_filter(TitleFilter::new(["batman"]))
        .add_filter(RatingFilter::new(parse_rating_spec("8-10").unwrap()))
        .add_filter(TitleTypeFilter::new(["tvSeries"]));

    let filtered = pipeline.apply(records());

    assert_eq!(titles(&filtered), vec!["Batman Begins", "The Batman"]);
}

#[test]
fn test_year_filter_then_aggregates() {
    let pipeline =
        FilterPipeline::new().add_filter(YearFilter::new([parse_year_spec("1992").unwrap()]));

    let filtered = pipeline.apply(records());
    assert_eq!(
        titles(&filtered),
        vec!["Batman Returns", "Batman: The Animated Series"]
    );

    let histogram = rating_histogram(&filtered);
    assert_eq!(histogram.count(6), 1);
    assert_eq!(histogram.count(9), 1);
    assert_eq!(histogram.total(), 2);

    let avg = average(&filtered).unwrap();
    assert!((avg - 7.5).abs() < 1e-9);
}

#[test]
fn test_genres_across_collection() {
    let all = records();
    let counts = genre_counts(&all);

    assert_eq!(counts.get("Action"), Some(6));
    assert_eq!(counts.get("Crime"), Some(6));
    assert_eq!(counts.get("Drama"), Some(4));
    assert_eq!(counts.sorted_by_count()[0], ("Action", 6));
}

#[test]
fn test_top_rated_per_year_from_export() {
    let all = records();
    let top = top_rated_per_year(&all);

    assert_eq!(top[&1992].len(), 1);
    assert_eq!(top[&1992][0].title, "Batman: The Animated Series");
    assert_eq!(top.len(), 6);
}

#[test]
fn test_yearly_average_from_export() {
    let all = records();
    let averages = yearly_average(&all);

    let years: Vec<i32> = averages.iter().map(|entry| entry.year).collect();
    assert_eq!(years, vec![1992, 1995, 2005, 2008, 2019, 2022]);
    assert!((averages[0].average - 7.5).abs() < 1e-9);
    assert!((averages[3].average - 10.0).abs() < 1e-9);
}

#[test]
fn test_everything_filtered_out() {
    let pipeline = FilterPipeline::new().add_filter(TitleFilter::new(["superman"]));
    let filtered = pipeline.apply(records());

    assert!(filtered.is_empty());
    assert_eq!(average(&filtered), Err(PipelineError::EmptyInput));
    assert_eq!(rating_histogram(&filtered).total(), 0);
}

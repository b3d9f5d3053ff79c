//! Benchmarks for record aggregation
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses a synthetic collection sized like a large personal export.

use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use data_loader::Record;
use pipeline::aggregates::{genre_counts, rating_histogram, top_rated_per_year, year_counts};
use pipeline::filters::{RatingFilter, TitleFilter};
use pipeline::{Filter, FilterPipeline};

const GENRES: [&str; 6] = ["Action", "Comedy", "Drama", "Horror", "Romance", "Thriller"];

fn synthetic_records(n: usize) -> Vec<Record> {
    let start = NaiveDate::from_ymd_opt(1950, 1, 1).unwrap();
    (0..n)
        .map(|i| Record {
            title: format!("Title {}", i),
            rating: (i % 10) as u8 + 1,
            date: start + chrono::Days::new((i * 37 % 27_000) as u64),
            genres: GENRES
                .iter()
                .skip(i % GENRES.len())
                .take(3)
                .map(|g| g.to_string())
                .collect(),
            title_type: None,
        })
        .collect()
}

fn bench_aggregates(c: &mut Criterion) {
    let records = synthetic_records(5_000);

    c.bench_function("rating_histogram", |b| {
        b.iter(|| black_box(rating_histogram(black_box(&records))))
    });
    c.bench_function("genre_counts", |b| {
        b.iter(|| black_box(genre_counts(black_box(&records))))
    });
    c.bench_function("year_counts", |b| {
        b.iter(|| black_box(year_counts(black_box(&records))))
    });
    c.bench_function("top_rated_per_year", |b| {
        b.iter(|| black_box(top_rated_per_year(black_box(&records)).len()))
    });
}

fn bench_filters(c: &mut Criterion) {
    let records = synthetic_records(5_000);
    let pipeline = FilterPipeline::new()
        .add_filter(TitleFilter::new(["1"]))
        .add_filter(RatingFilter::new(5..=8));

    c.bench_function("title_then_rating", |b| {
        b.iter(|| black_box(pipeline.apply(records.clone())))
    });
    c.bench_function("rating_only", |b| {
        let filter = RatingFilter::new([7]);
        b.iter(|| black_box(filter.apply(records.clone())))
    });
}

criterion_group!(benches, bench_aggregates, bench_filters);
criterion_main!(benches);

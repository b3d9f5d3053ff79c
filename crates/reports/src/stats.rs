//! Text breakdowns of ratings, genres and years.

use crate::context::ReportContext;
use data_loader::Record;
use pipeline::aggregates::percentage;
use pipeline::{GenreCounts, RatingHistogram, YearAverage, YearCount};
use std::collections::BTreeMap;

/// Ratings ordered by how often they were given.
///
/// One `rating:\tcount\tpercent%` line per rating value, most frequent
/// first. Ratings with equal counts keep ascending rating order.
pub fn popularity_report(histogram: &RatingHistogram) -> String {
    let total = histogram.total();
    let mut rows: Vec<(u8, usize)> = histogram.iter().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));

    rows.into_iter()
        .map(|(rating, count)| {
            format!("{}:\t{}\t{:.1}%\n", rating, count, percentage(count, total))
        })
        .collect()
}

/// Genres ordered by occurrence count.
///
/// Percentages are relative to all genre occurrences, so they add up to
/// 100 even though most records carry several genres.
pub fn genre_report(counts: &GenreCounts) -> String {
    let total = counts.total();
    let width = counts
        .iter()
        .map(|(genre, _)| genre.chars().count())
        .max()
        .unwrap_or(0)
        + 2;

    counts
        .sorted_by_count()
        .into_iter()
        .map(|(genre, count)| {
            let share = format!("{:.2}", percentage(count, total));
            format!("{:<width$}{:>4}  {:>5}%\n", genre, count, share, width = width)
        })
        .collect()
}

/// One line per year: count and share of the collection
pub fn year_report(years: &[YearCount]) -> String {
    years
        .iter()
        .map(|entry| {
            format!(
                "{}  {:>4}  {:>6.2}%\n",
                entry.year, entry.count, entry.percentage
            )
        })
        .collect()
}

/// Mean rating per year under a heading naming the year span.
///
/// ```text
/// Average ratings across years (1995-2001)
/// 1995  9.00
/// 2001  7.50
/// ```
pub fn yearly_average_report(averages: &[YearAverage], ctx: &ReportContext) -> String {
    let title = ctx.translate("Average ratings across years");
    let mut text = match (averages.first(), averages.last()) {
        (Some(first), Some(last)) => format!(
            "{}\n",
            ctx.styler.bold(&format!("{} ({}-{})", title, first.year, last.year))
        ),
        _ => format!("{}\n", ctx.styler.bold(title)),
    };
    for entry in averages {
        text.push_str(&format!("{}  {:.2}\n", entry.year, entry.average));
    }
    text
}

/// Best rated titles for every year, under an underlined year heading
pub fn top_rated_report(top: &BTreeMap<i32, Vec<&Record>>, ctx: &ReportContext) -> String {
    let width = top
        .values()
        .flatten()
        .map(|record| record.title.chars().count())
        .max()
        .unwrap_or(0)
        + 2;

    let mut text = format!("{}\n", ctx.styler.bold(ctx.translate("Top rated")));
    for (year, records) in top {
        text.push_str(&ctx.styler.underline(&year.to_string()));
        text.push('\n');
        for record in records {
            text.push_str(&format!(
                "  {:<width$}{}\n",
                record.title,
                record.rating,
                width = width
            ));
        }
    }
    text
}

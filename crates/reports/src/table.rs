//! Title/rating listing and the summary banner printed under it.

use crate::context::ReportContext;
use crate::error::Result;
use data_loader::Record;
use pipeline::aggregates::{average, has_uniform_rating};

/// Space between the longest title and its rating
const GUTTER: usize = 2;

/// Smallest number of `=` characters around the summary title
const MIN_BANNER: usize = 6;

/// A rendered listing and the width of its longest line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub text: String,
    /// Length in characters of the longest rendered line
    pub max_line_length: usize,
}

/// One line per record: the title padded to the longest title plus a
/// two-space gutter, then the rating.
pub fn table(records: &[Record]) -> Table {
    let width = records
        .iter()
        .map(|record| record.title.chars().count())
        .max()
        .unwrap_or(0)
        + GUTTER;

    let mut text = String::new();
    let mut max_line_length = 0;
    for record in records {
        let line = format!("{:<width$}{}", record.title, record.rating, width = width);
        max_line_length = max_line_length.max(line.chars().count());
        text.push_str(&line);
        text.push('\n');
    }

    Table {
        text,
        max_line_length,
    }
}

/// Banner sized to the table, followed by the count and, when given,
/// the average rating.
///
/// ```text
/// ====== SUMMARY ======
/// Found: 3
/// Average rating: 7.67 / 10
/// ```
pub fn summary_header(
    count: usize,
    average: Option<f64>,
    max_line_length: usize,
    ctx: &ReportContext,
) -> String {
    let title = ctx.translate("SUMMARY");
    let length = max_line_length
        .saturating_sub(title.chars().count() + 2)
        .max(MIN_BANNER);
    let (left, right) = (length / 2, length / 2 + length % 2);

    let mut text = format!(
        "{} {} {}\n",
        "=".repeat(left),
        ctx.styler.bold(title),
        "=".repeat(right)
    );
    text.push_str(&format!("{}: {}\n", ctx.translate("Found"), count));

    if let Some(avg) = average {
        text.push_str(&format!(
            "{}: {:.2} / 10\n",
            ctx.translate("Average rating"),
            avg
        ));
    }
    text
}

/// Summary of a record collection.
///
/// The average is left out when every record has the same rating, since
/// it would only repeat that rating.
pub fn summary(records: &[Record], max_line_length: usize, ctx: &ReportContext) -> Result<String> {
    let avg = if has_uniform_rating(records) {
        None
    } else {
        Some(average(records)?)
    };
    Ok(summary_header(records.len(), avg, max_line_length, ctx))
}

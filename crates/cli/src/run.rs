//! Executes an `Invocation`: load, filter, aggregate, report.

use crate::invocation::{Invocation, TerminalAction};
use anyhow::{Context, Result};
use data_loader::Record;
use pipeline::aggregates::{
    genre_counts, rating_histogram, top_rated_per_year, year_counts, yearly_average,
};
use reports::{
    AsciiRenderer, ChartRenderer, JsonSeriesRenderer, ReportContext, bar_chart_series,
    genre_report, popularity_report, summary, table, top_rated_report, year_report,
    yearly_average_report,
};
use std::io::Write;
use std::path::Path;

/// How a run ended when nothing went wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Reported,
    /// Every record was removed by the filters
    FilteredOut,
}

/// Run one invocation, writing the report to `out`.
///
/// The report is built in full before anything is written, so a failure
/// never leaves partial output behind.
pub fn run<W: Write>(invocation: &Invocation, out: &mut W) -> Result<Outcome> {
    let ctx = invocation
        .config
        .report_context()
        .context("Invalid report options")?;

    let records = data_loader::load(&invocation.config.path, invocation.config.load_options())
        .context("Failed to load ratings export")?;

    let pipeline = invocation.pipeline();
    let records = pipeline.apply(records);
    tracing::debug!(
        "{} records left after filters {:?}",
        records.len(),
        pipeline.stage_names()
    );

    if records.is_empty() {
        writeln!(out, "{}", ctx.translate("All entries have been filtered out"))?;
        return Ok(Outcome::FilteredOut);
    }

    let report = render(&invocation.action, &records, &ctx)?;
    out.write_all(report.as_bytes())?;
    out.flush()?;
    Ok(Outcome::Reported)
}

/// Build the text for a terminal action over a non-empty record set
fn render(action: &TerminalAction, records: &[Record], ctx: &ReportContext) -> Result<String> {
    let text = match action {
        TerminalAction::Summary => {
            let listing = table(records);
            format!(
                "{}\n{}",
                listing.text,
                summary(records, listing.max_line_length, ctx)?
            )
        }
        TerminalAction::Ratings => popularity_report(&rating_histogram(records)),
        TerminalAction::Genres => genre_report(&genre_counts(records)),
        TerminalAction::Years => year_report(&year_counts(records)),
        TerminalAction::YearlyAverage => yearly_average_report(&yearly_average(records), ctx),
        TerminalAction::TopPerYear => top_rated_report(&top_rated_per_year(records), ctx),
        TerminalAction::Plot => {
            let histogram = rating_histogram(records);
            let series = bar_chart_series(&histogram, ctx);
            let mut buffer = Vec::new();
            AsciiRenderer::new(&mut buffer, ctx.styler).render(&series, &histogram)?;
            String::from_utf8(buffer).context("Chart output is not valid UTF-8")?
        }
        TerminalAction::SavePlot(path) => save_plot(path, records, ctx)?,
    };
    Ok(text)
}

fn save_plot(path: &Path, records: &[Record], ctx: &ReportContext) -> Result<String> {
    let histogram = rating_histogram(records);
    let series = bar_chart_series(&histogram, ctx);

    JsonSeriesRenderer::new(path)
        .render(&series, &histogram)
        .with_context(|| format!("Failed to save chart to '{}'", path.display()))?;

    Ok(format!(
        "{} {}\n",
        ctx.translate("Saved chart series to"),
        path.display()
    ))
}

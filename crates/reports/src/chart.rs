//! Bar charts of the rating histogram.
//!
//! Two outputs share the same histogram:
//! - `ascii_bar_chart` draws block-character bars straight into the terminal
//! - `bar_chart_series` builds the data an external plotting backend needs
//!   (bars, colors, axis bounds, labels), which `JsonSeriesRenderer` saves

use crate::context::ReportContext;
use crate::error::Result;
use crate::scheme::Shades;
use crate::style::Styler;
use pipeline::RatingHistogram;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Width in cells of the longest bar
pub const BAR_WIDTH: usize = 25;

/// Partial cells for 1/8 to 7/8 of a block
const EIGHTHS: [char; 7] = ['▏', '▎', '▍', '▌', '▋', '▊', '▉'];
const FULL_BLOCK: char = '█';

/// Number of color bands the bars are split into
const COLOR_BANDS: usize = 3;

/// Gridline spacing on the y axis
const Y_STEP: usize = 5;

/// Draw a bar `cells` wide with 1/8-cell precision
fn bar(cells: f64) -> String {
    let eighths = (cells * 8.0).round() as usize;
    let mut bar: String = std::iter::repeat_n(FULL_BLOCK, eighths / 8).collect();
    if eighths % 8 > 0 {
        bar.push(EIGHTHS[eighths % 8 - 1]);
    }
    bar
}

/// One line per rating, 1 to 10, with a bar scaled so that the most
/// frequent rating spans `BAR_WIDTH` cells.
pub fn ascii_bar_chart(histogram: &RatingHistogram) -> String {
    let max = histogram.max_count();
    let unit = max as f64 / BAR_WIDTH as f64;

    histogram
        .iter()
        .map(|(rating, count)| {
            let bar = if max == 0 { String::new() } else { bar(count as f64 / unit) };
            format!(
                "{:>2} │{:<width$} {}\n",
                rating,
                bar,
                count,
                width = BAR_WIDTH
            )
        })
        .collect()
}

/// Everything an external renderer needs to draw the rating bar chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChartSeries {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Ratings 1 to 10
    pub x: Vec<u8>,
    /// Count for each rating in `x`
    pub y: Vec<usize>,
    /// Fill color for each bar
    pub colors: Vec<String>,
    /// Smallest multiple of 5 strictly greater than the largest count
    pub y_max: usize,
    pub y_ticks: Vec<usize>,
    pub background: Shades,
    pub foreground: Shades,
    pub value_color: String,
}

/// Build the chart series for a histogram.
///
/// Bars are split into three color bands across the chart: bar `i` of `n`
/// takes palette entry `i * 3 / n`.
pub fn bar_chart_series(histogram: &RatingHistogram, ctx: &ReportContext) -> BarChartSeries {
    let (x, y): (Vec<u8>, Vec<usize>) = histogram.iter().unzip();
    let bar_count = x.len();

    let colors = (0..bar_count)
        .map(|i| ctx.scheme.bar_color(i * COLOR_BANDS / bar_count).to_string())
        .collect();

    let y_max = Y_STEP * (histogram.max_count() / Y_STEP + 1);
    let y_ticks = (0..=y_max).step_by(Y_STEP).collect();

    BarChartSeries {
        title: ctx.translate("IMDB Ratings").to_string(),
        x_label: ctx.translate("Rating").to_string(),
        y_label: ctx.translate("Rating count").to_string(),
        x,
        y,
        colors,
        y_max,
        y_ticks,
        background: ctx.scheme.background.clone(),
        foreground: ctx.scheme.foreground.clone(),
        value_color: ctx.scheme.bar_value.clone(),
    }
}

/// Something that can present a rating bar chart
pub trait ChartRenderer {
    fn render(&mut self, series: &BarChartSeries, histogram: &RatingHistogram) -> Result<()>;
}

/// Draws the chart as block characters into a writer
pub struct AsciiRenderer<W: Write> {
    out: W,
    styler: Styler,
}

impl<W: Write> AsciiRenderer<W> {
    pub fn new(out: W, styler: Styler) -> Self {
        Self { out, styler }
    }
}

impl<W: Write> ChartRenderer for AsciiRenderer<W> {
    fn render(&mut self, series: &BarChartSeries, histogram: &RatingHistogram) -> Result<()> {
        let text = format!(
            "{}\n{}",
            self.styler.bold(&series.title),
            ascii_bar_chart(histogram)
        );
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }
}

/// Saves the chart series as pretty-printed JSON
pub struct JsonSeriesRenderer {
    path: PathBuf,
}

impl JsonSeriesRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ChartRenderer for JsonSeriesRenderer {
    fn render(&mut self, series: &BarChartSeries, _histogram: &RatingHistogram) -> Result<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, series)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        tracing::info!("Saved chart series to {}", self.path.display());
        Ok(())
    }
}

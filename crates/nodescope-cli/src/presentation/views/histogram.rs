use nodescope_engine::FeeBucket;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt;
use std::io;

use super::Palette;
use crate::presentation::CsvRecords;

const BAR_WIDTH: usize = 40;

/// Fee distribution, one bar per distinct fee.
#[derive(Debug, Serialize)]
pub struct HistogramView<'a> {
    pub buckets: &'a [FeeBucket],
    #[serde(skip)]
    palette: Palette,
}

impl<'a> HistogramView<'a> {
    pub fn new(buckets: &'a [FeeBucket]) -> Self {
        Self {
            buckets,
            palette: Palette::for_stdout(),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}

/// Bar length for `count`, never zero for a non-empty bucket.
fn bar_len(count: usize, max: usize) -> usize {
    if max == 0 || count == 0 {
        return 0;
    }
    (count * BAR_WIDTH).div_ceil(max)
}

impl fmt::Display for HistogramView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.palette;

        if self.buckets.is_empty() {
            return writeln!(f, "{}", "No nodes loaded.".style(p.muted));
        }

        writeln!(f, "{}", "Fee distribution".style(p.header))?;

        let label_width = self
            .buckets
            .iter()
            .map(|b| b.fee_label.chars().count())
            .max()
            .unwrap_or(0);
        let max = self.buckets.iter().map(|b| b.count).max().unwrap_or(0);

        for bucket in self.buckets {
            let bar = "█".repeat(bar_len(bucket.count, max));
            writeln!(
                f,
                "  {:>label_width$} │ {} {}",
                bucket.fee_label,
                bar.style(p.accent),
                bucket.count,
                label_width = label_width
            )?;
        }
        Ok(())
    }
}

impl CsvRecords for HistogramView<'_> {
    fn write_csv<W: io::Write>(&self, writer: &mut csv::Writer<W>) -> csv::Result<()> {
        for bucket in self.buckets {
            writer.serialize(bucket)?;
        }
        Ok(())
    }
}

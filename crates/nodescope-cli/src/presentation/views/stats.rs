use nodescope_engine::NodeStats;
use nodescope_types::record::format_fee;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt;
use std::io;

use super::Palette;
use crate::presentation::CsvRecords;

#[derive(Debug, Serialize)]
pub struct StatsView {
    #[serde(flatten)]
    pub stats: NodeStats,
    #[serde(skip)]
    palette: Palette,
}

impl StatsView {
    pub fn new(stats: NodeStats) -> Self {
        Self {
            stats,
            palette: Palette::for_stdout(),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}

impl fmt::Display for StatsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.palette;
        let s = &self.stats;

        writeln!(f, "{}", "Node summary".style(p.header))?;
        writeln!(f, "  {:<15}{}", "Total nodes", s.total_nodes.style(p.accent))?;
        writeln!(f, "  {:<15}{}", "Active", s.active_nodes.style(p.active))?;
        writeln!(f, "  {:<15}{}", "Inactive", s.inactive_nodes().style(p.inactive))?;
        writeln!(f, "  {:<15}{:.2}%", "Avg uptime", s.avg_uptime)?;
        writeln!(f, "  {:<15}{}%", "Avg fee", format_fee(s.avg_fee))
    }
}

impl CsvRecords for StatsView {
    fn write_csv<W: io::Write>(&self, writer: &mut csv::Writer<W>) -> csv::Result<()> {
        writer.serialize(self.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NodeStats {
        NodeStats {
            total_nodes: 3,
            active_nodes: 2,
            avg_uptime: 80.27,
            avg_fee: 3.0,
        }
    }

    #[test]
    fn test_plain_summary() {
        let text = StatsView::new(sample()).with_palette(Palette::plain()).to_string();
        assert!(text.contains("Total nodes    3"));
        assert!(text.contains("Inactive       1"));
        assert!(text.contains("Avg uptime     80.27%"));
        assert!(text.contains("Avg fee        3%"));
    }

    #[test]
    fn test_json_is_flat() {
        let value = serde_json::to_value(StatsView::new(sample())).unwrap();
        insta::assert_json_snapshot!(value, @r#"
        {
          "active_nodes": 2,
          "avg_fee": 3.0,
          "avg_uptime": 80.27,
          "total_nodes": 3
        }
        "#);
    }
}

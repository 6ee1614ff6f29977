use nodescope_engine::PageInfo;
use nodescope_types::{NodeRecord, SortDirection, ViewState};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt;
use std::io;

use super::Palette;
use crate::presentation::CsvRecords;

const MIN_OPERATOR_WIDTH: usize = 8;

/// `Page X of Y · showing A-B of N`
pub fn page_footer(info: &PageInfo) -> String {
    match info.visible_range() {
        Some((first, last)) => format!(
            "Page {} of {} · showing {}-{} of {}",
            info.page, info.total_pages, first, last, info.total_count
        ),
        None => format!(
            "Page {} of {} · showing 0 of {}",
            info.page, info.total_pages, info.total_count
        ),
    }
}

/// One page of the node list.
#[derive(Debug, Serialize)]
pub struct NodeListView<'a> {
    pub nodes: Vec<&'a NodeRecord>,
    pub page: PageInfo,
    pub state: ViewState,
    #[serde(skip)]
    palette: Palette,
}

impl<'a> NodeListView<'a> {
    pub fn new(nodes: Vec<&'a NodeRecord>, page: PageInfo, state: ViewState) -> Self {
        Self {
            nodes,
            page,
            state,
            palette: Palette::for_stdout(),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    fn column_title(&self, title: &'static str, key: &'static str) -> String {
        if self.state.sort.key.as_str() != key {
            return title.to_string();
        }
        match self.state.sort.direction {
            SortDirection::Asc => format!("{} ↑", title),
            SortDirection::Desc => format!("{} ↓", title),
        }
    }
}

impl fmt::Display for NodeListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.palette;

        if self.nodes.is_empty() {
            if self.state.search_term.is_empty() {
                writeln!(f, "{}", "No nodes loaded.".style(p.muted))?;
            } else {
                writeln!(
                    f,
                    "{}",
                    format!("No nodes match '{}'.", self.state.search_term).style(p.muted)
                )?;
            }
        } else {
            let width = self
                .nodes
                .iter()
                .map(|n| n.operator.chars().count())
                .max()
                .unwrap_or(0)
                .max(MIN_OPERATOR_WIDTH);

            let header = format!(
                "{:<width$}  {:<8}  {:>9}  {:>7}",
                self.column_title("OPERATOR", "operator"),
                self.column_title("STATUS", "status"),
                self.column_title("UPTIME", "uptime"),
                self.column_title("FEE", "fee"),
                width = width
            );
            writeln!(f, "{}", header.style(p.header))?;

            for node in &self.nodes {
                writeln!(
                    f,
                    "{:<width$}  {:<8}  {:>9}  {:>7}",
                    node.operator,
                    node.status_label().style(p.status(node.status)),
                    node.uptime_label(),
                    node.fee_label(),
                    width = width
                )?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", page_footer(&self.page).style(p.muted))?;
        if !self.state.search_term.is_empty() {
            write!(
                f,
                "{}",
                format!(" · search '{}'", self.state.search_term).style(p.muted)
            )?;
        }
        writeln!(f)
    }
}

#[derive(Serialize)]
struct NodeCsvRow<'a> {
    operator: &'a str,
    status: &'static str,
    uptime: f64,
    fee: f64,
}

impl CsvRecords for NodeListView<'_> {
    fn write_csv<W: io::Write>(&self, writer: &mut csv::Writer<W>) -> csv::Result<()> {
        for node in &self.nodes {
            writer.serialize(NodeCsvRow {
                operator: &node.operator,
                status: node.status_label(),
                uptime: node.uptime,
                fee: node.fee,
            })?;
        }
        Ok(())
    }
}

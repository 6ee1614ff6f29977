use chrono::{DateTime, Local, Utc};
use nodescope_engine::{FeeBucket, NodeStats};
use nodescope_runtime::Clock;
use nodescope_types::record::format_fee;
use nodescope_types::{NodeRecord, SortDirection, SortKey};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Gauge, Paragraph, Row, Table, TableState},
};

use super::app::{DashboardApp, InputMode};
use crate::presentation::views::page_footer;
use crate::types::ViewMode;

const CARD_WIDTH: u16 = 30;
const CARD_HEIGHT: u16 = 5;

pub(crate) fn draw<C: Clock>(f: &mut Frame, app: &DashboardApp<C>) {
    let view = app.controller().view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(9),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    let loaded_at = app.controller().store().snapshot().loaded_at();
    render_header(f, chunks[0], &app.source, loaded_at, &view.stats);
    render_histogram(f, chunks[1], view.histogram);
    render_search(f, chunks[2], app, view.pending_search.is_some());

    match app.view_mode {
        ViewMode::List => render_table(f, chunks[3], &view.rows, app),
        ViewMode::Grid => render_grid(f, chunks[3], &view.rows, app.selected),
    }

    let footer = match &app.load_error {
        Some(err) => Line::from(Span::styled(
            format!(" Could not load nodes: {}", err),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(vec![
            Span::raw(format!(" {}", page_footer(&view.page))),
            Span::styled(
                "  / search  1-4 sort  n/p page  s size  v layout  q quit",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    };
    f.render_widget(Paragraph::new(footer), chunks[4]);
}

fn render_header(
    f: &mut Frame,
    area: Rect,
    source: &str,
    loaded_at: Option<DateTime<Utc>>,
    stats: &NodeStats,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let summary = Line::from(vec![
        Span::styled("Nodes ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            stats.total_nodes.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Avg uptime ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{:.2}%", stats.avg_uptime)),
        Span::styled("  Avg fee ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}%", format_fee(stats.avg_fee))),
    ]);
    let title = match loaded_at {
        Some(at) => format!(
            " nodescope · {} · {} ",
            source,
            at.with_timezone(&Local).format("%H:%M:%S")
        ),
        None => format!(" nodescope · {} ", source),
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    f.render_widget(Paragraph::new(summary).block(block), columns[0]);

    let ratio = if stats.total_nodes == 0 {
        0.0
    } else {
        stats.active_nodes as f64 / stats.total_nodes as f64
    };
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Active "))
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(ratio)
        .label(format!("{}/{}", stats.active_nodes, stats.total_nodes));
    f.render_widget(gauge, columns[1]);
}

fn render_histogram(f: &mut Frame, area: Rect, buckets: &[FeeBucket]) {
    let bars: Vec<Bar> = buckets
        .iter()
        .map(|b| {
            Bar::default()
                .label(Line::from(b.fee_label.clone()))
                .value(b.count as u64)
        })
        .collect();

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(" Fee distribution "))
        .data(BarGroup::default().bars(&bars))
        .bar_width(5)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));
    f.render_widget(chart, area);
}

fn render_search<C: Clock>(f: &mut Frame, area: Rect, app: &DashboardApp<C>, pending: bool) {
    let editing = app.input_mode == InputMode::Search;
    let border = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title = if pending { " Search (typing…) " } else { " Search " };

    let mut spans = vec![Span::raw(app.search_input.as_str())];
    if editing {
        spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
    } else if app.search_input.is_empty() {
        spans.push(Span::styled(
            "press / to filter by operator",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(title),
    );
    f.render_widget(paragraph, area);
}

fn column_title<C: Clock>(app: &DashboardApp<C>, key: SortKey) -> String {
    let sort = app.controller().state().sort;
    let index = SortKey::ALL.iter().position(|k| *k == key).unwrap_or(0) + 1;
    if sort.key != key {
        return format!("{} [{}]", key.label(), index);
    }
    let arrow = match sort.direction {
        SortDirection::Asc => "▲",
        SortDirection::Desc => "▼",
    };
    format!("{} {} [{}]", key.label(), arrow, index)
}

fn status_style(node: &NodeRecord) -> Style {
    if node.status {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Red)
    }
}

fn render_table<C: Clock>(f: &mut Frame, area: Rect, rows: &[&NodeRecord], app: &DashboardApp<C>) {
    let header = Row::new(SortKey::ALL.iter().map(|&key| Cell::from(column_title(app, key))))
        .style(Style::default().add_modifier(Modifier::BOLD));

    let body = rows.iter().map(|node| {
        Row::new(vec![
            Cell::from(node.operator.clone()),
            Cell::from(node.status_label()).style(status_style(node)),
            Cell::from(node.uptime_label()),
            Cell::from(node.fee_label()),
        ])
    });

    let widths = [
        Constraint::Min(20),
        Constraint::Length(14),
        Constraint::Length(14),
        Constraint::Length(10),
    ];
    let table = Table::new(body, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(" Nodes "))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default().with_selected(if rows.is_empty() {
        None
    } else {
        Some(app.selected)
    });
    f.render_stateful_widget(table, area, &mut state);
}

fn render_grid(f: &mut Frame, area: Rect, rows: &[&NodeRecord], selected: usize) {
    let block = Block::default().borders(Borders::ALL).title(" Nodes ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = (inner.width / CARD_WIDTH).max(1);
    let visible_rows = (inner.height / CARD_HEIGHT).max(1);
    let per_screen = (columns * visible_rows) as usize;
    // Keep the selected card on screen
    let first = (selected / per_screen) * per_screen;

    for (offset, node) in rows.iter().skip(first).take(per_screen).enumerate() {
        let offset = offset as u16;
        let card = Rect {
            x: inner.x + (offset % columns) * CARD_WIDTH,
            y: inner.y + (offset / columns) * CARD_HEIGHT,
            width: CARD_WIDTH.min(inner.width),
            height: CARD_HEIGHT.min(inner.height),
        };

        let border = if first + offset as usize == selected {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let lines = vec![
            Line::from(Span::styled(node.status_label(), status_style(node))),
            Line::from(format!("Uptime {}", node.uptime_label())),
            Line::from(format!("Fee {}", node.fee_label())),
        ];
        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(node.operator.as_str()),
        );
        f.render_widget(paragraph, card);
    }
}

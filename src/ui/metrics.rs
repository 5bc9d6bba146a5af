//! Live metrics rendering.
//!
//! Four primary widgets across the top, then the secondary figures and a
//! history table with sparklines.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use coe_metrics::reference::GLOBAL_REGIONS;
use coe_metrics::MetricKind;

use crate::app::App;
use crate::data::duration::format_duration;
use crate::ui::common::{panel, render_sparkline, trend_span};

/// Metrics shown as large widgets.
const PRIMARY: [MetricKind; 4] = [
    MetricKind::SystemUptime,
    MetricKind::ActiveUsers,
    MetricKind::ProcessingSpeed,
    MetricKind::DataProcessed,
];

/// Render the Metrics view.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let [widgets_area, secondary_area, history_area] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(4),
        Constraint::Min(4),
    ])
    .areas(area);

    let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(widgets_area);
    for (kind, column) in PRIMARY.iter().zip(columns.iter()) {
        render_widget(frame, app, *kind, *column);
    }

    render_secondary(frame, app, secondary_area);
    render_history(frame, app, history_area);
}

/// A single metric card: value, unit, change since the last tick.
fn render_widget(frame: &mut Frame, app: &App, kind: MetricKind, area: Rect) {
    let value = app
        .data
        .as_ref()
        .and_then(|d| d.reading(kind))
        .map(|r| r.display.clone())
        .unwrap_or_else(|| "--".to_string());

    let lines = vec![
        Line::from(Span::styled(value, app.theme.value)),
        Line::from(vec![Span::raw("change "), trend_span(app, kind)]),
    ];
    let title = format!(" {} ", kind.label());
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(panel(app, &title));
    frame.render_widget(paragraph, area);
}

fn render_secondary(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);

    let reading = |kind: MetricKind| {
        app.data
            .as_ref()
            .and_then(|d| d.reading(kind))
            .map(|r| r.display.clone())
            .unwrap_or_else(|| "--".to_string())
    };

    let cards = [
        (MetricKind::ErrorRate.label(), reading(MetricKind::ErrorRate)),
        (MetricKind::ResponseTime.label(), reading(MetricKind::ResponseTime)),
        ("Global Regions", GLOBAL_REGIONS.to_string()),
    ];

    for ((label, value), column) in cards.into_iter().zip(columns.iter()) {
        let title = format!(" {} ", label);
        let paragraph = Paragraph::new(Line::from(Span::styled(value, app.theme.value)))
            .alignment(Alignment::Center)
            .block(panel(app, &title));
        frame.render_widget(paragraph, *column);
    }
}

fn render_history(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec![
        Cell::from("Metric"),
        Cell::from("Current"),
        Cell::from("Average"),
        Cell::from("Change"),
        Cell::from("History"),
    ])
    .style(app.theme.header);

    let rows: Vec<Row> = MetricKind::ALL
        .iter()
        .map(|&kind| {
            let current = app
                .data
                .as_ref()
                .and_then(|d| d.reading(kind))
                .map(|r| r.display.clone())
                .unwrap_or_default();
            let average = app
                .history
                .average(kind)
                .map(|v| kind.format(v))
                .unwrap_or_default();

            Row::new(vec![
                Cell::from(kind.label()),
                Cell::from(current),
                Cell::from(Span::styled(average, Style::default().fg(app.theme.muted))),
                Cell::from(trend_span(app, kind)),
                Cell::from(Span::styled(
                    render_sparkline(&app.history.sparkline(kind)),
                    Style::default().fg(app.theme.highlight),
                )),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(18),
        Constraint::Length(14),
        Constraint::Length(14),
        Constraint::Length(10),
        Constraint::Fill(1),
    ];

    let title = match app.history.window() {
        Some(window) if app.history.len() > 1 => format!(
            " History ({} samples over {}) ",
            app.history.len(),
            format_duration(window)
        ),
        _ => format!(" History ({} samples) ", app.history.len()),
    };
    let table = Table::new(rows, widths)
        .header(header)
        .block(panel(app, &title));
    frame.render_widget(table, area);
}

//! Performance trend chart.
//!
//! Plots the applications and users series of the static trend dataset.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    symbols,
    text::{Line, Span},
    widgets::{Axis, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use coe_metrics::reference::{performance_trends, TrendPoint};

use crate::app::App;
use crate::ui::common::{format_count, panel};

/// Render the Trends view.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let [legend_area, chart_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(6)]).areas(area);

    let legend = Line::from(vec![
        Span::styled(" ● ", Style::default().fg(app.theme.series_primary)),
        Span::raw("Applications  "),
        Span::styled("● ", Style::default().fg(app.theme.series_secondary)),
        Span::raw("Users"),
    ]);
    frame.render_widget(Paragraph::new(legend), legend_area);

    let points = performance_trends();
    let applications = series(points, |p| p.applications);
    let users = series(points, |p| p.users);

    let datasets = vec![
        Dataset::default()
            .name("Applications")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(app.theme.series_primary))
            .data(&applications),
        Dataset::default()
            .name("Users")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(app.theme.series_secondary))
            .data(&users),
    ];

    let y_max = y_axis_max(points);
    let x_labels: Vec<Span> = points.iter().map(|p| Span::raw(p.label)).collect();
    let y_labels: Vec<Span> = [0.0, y_max / 2.0, y_max]
        .iter()
        .map(|&v| Span::raw(format_count(v as u64)))
        .collect();

    let chart = Chart::new(datasets)
        .block(panel(app, " Performance Trends "))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(app.theme.muted))
                .bounds([0.0, (points.len().saturating_sub(1)) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(app.theme.muted))
                .bounds([0.0, y_max])
                .labels(y_labels),
        );

    frame.render_widget(chart, chart_area);
}

/// Turn one field of the trend points into chart coordinates.
fn series(points: &[TrendPoint], field: impl Fn(&TrendPoint) -> u32) -> Vec<(f64, f64)> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, f64::from(field(p))))
        .collect()
}

/// Upper y bound: the largest value rounded up to the next thousand.
fn y_axis_max(points: &[TrendPoint]) -> f64 {
    let max = points
        .iter()
        .flat_map(|p| [p.applications, p.users])
        .max()
        .unwrap_or(0);
    (f64::from(max) / 1000.0).ceil().max(1.0) * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_uses_index_as_x() {
        let applications = series(performance_trends(), |p| p.applications);
        assert_eq!(applications.len(), 6);
        assert_eq!(applications[0], (0.0, 4000.0));
        assert_eq!(applications[5], (5.0, 2390.0));
    }

    #[test]
    fn test_y_axis_max_rounds_up() {
        assert_eq!(y_axis_max(performance_trends()), 10_000.0);
        assert_eq!(y_axis_max(&[]), 1000.0);
    }
}

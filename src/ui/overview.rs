//! Overview rendering.
//!
//! Headline figures (active users, uptime) next to the applications trend.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Sparkline, Wrap},
    Frame,
};

use coe_metrics::reference::performance_trends;
use coe_metrics::MetricKind;

use crate::app::App;
use crate::ui::common::{panel, trend_span};

/// Render the Overview view.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let [intro_area, system_area] =
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(area);

    render_intro(frame, app, intro_area);
    render_system_overview(frame, app, system_area);
}

fn render_intro(frame: &mut Frame, app: &App, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            "Enterprise-Grade Solutions",
            Style::default().fg(app.theme.highlight),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Application",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("Center of Excellence", app.theme.header)),
        Line::from(""),
        Line::from(Span::styled(
            "Business applications, real-time analytics and infrastructure \
             management in one place.",
            Style::default().fg(app.theme.muted),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(panel(app, " Overview "));
    frame.render_widget(paragraph, area);
}

fn render_system_overview(frame: &mut Frame, app: &App, area: Rect) {
    let block = panel(app, " System Overview ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(ref data) = app.data else {
        frame.render_widget(Paragraph::new("Waiting for metrics..."), inner);
        return;
    };

    let [figures_area, chart_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).areas(inner);
    let figure_columns =
        Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).split(figures_area);

    for (kind, column) in [MetricKind::ActiveUsers, MetricKind::SystemUptime]
        .into_iter()
        .zip(figure_columns.iter())
    {
        let Some(reading) = data.reading(kind) else {
            continue;
        };
        let lines = vec![
            Line::from(Span::styled(reading.display.clone(), app.theme.value)),
            Line::from(Span::styled(kind.label(), Style::default().fg(app.theme.muted))),
            Line::from(trend_span(app, kind)),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            *column,
        );
    }

    let applications: Vec<u64> =
        performance_trends().iter().map(|p| u64::from(p.applications)).collect();
    let sparkline = Sparkline::default()
        .data(&applications)
        .style(Style::default().fg(app.theme.series_primary));
    frame.render_widget(sparkline, chart_area);
}

//! Common UI components shared across views.
//!
//! This module contains the header bar, tab bar, status bar, and help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use coe_metrics::MetricKind;

use crate::app::{App, View};
use crate::data::TrendDirection;

/// Sparkline characters (8 levels of height).
const SPARKLINE_CHARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Render the header bar with the live indicator and headline figures.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref data) = app.data else {
        let line = Line::from(vec![
            Span::styled(
                " APPLICATION CoE ",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("| Loading..."),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    };

    let live_style = if app.load_error.is_some() {
        Style::default().fg(app.theme.negative)
    } else {
        Style::default().fg(app.theme.positive)
    };

    let mut spans = vec![
        Span::styled(" ● ", live_style),
        Span::styled("APPLICATION CoE ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled("Center of Excellence ", Style::default().add_modifier(Modifier::DIM)),
        Span::raw("│ "),
    ];

    for kind in [MetricKind::ActiveUsers, MetricKind::SystemUptime] {
        if let Some(reading) = data.reading(kind) {
            spans.push(Span::styled(reading.display.clone(), app.theme.value));
            spans.push(Span::raw(format!(" {} ", short_label(kind))));
            spans.push(trend_span(app, kind));
            spans.push(Span::raw(" │ "));
        }
    }
    spans.push(Span::styled(
        if app.load_error.is_some() { "Stale" } else { "Live" },
        live_style,
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn short_label(kind: MetricKind) -> &'static str {
    match kind {
        MetricKind::ActiveUsers => "users",
        MetricKind::SystemUptime => "uptime",
        MetricKind::ProcessingSpeed => "speed",
        MetricKind::DataProcessed => "processed",
        MetricKind::ErrorRate => "errors",
        MetricKind::ResponseTime => "latency",
    }
}

/// Arrow plus absolute percentage change, coloured by direction.
pub fn trend_span(app: &App, kind: MetricKind) -> Span<'static> {
    match app.history.trend_percent(kind) {
        Some(percent) => {
            let direction = TrendDirection::from_percent(percent);
            Span::styled(
                format!("{} {:.1}%", direction.arrow(), percent.abs()),
                app.theme.trend_style(direction),
            )
        }
        None => Span::styled("–", Style::default().fg(app.theme.muted)),
    }
}

/// Render a sparkline from normalized 0-7 levels.
pub fn render_sparkline(levels: &[u8]) -> String {
    levels.iter().map(|&v| SPARKLINE_CHARS[v.min(7) as usize]).collect()
}

/// Format a count for display (e.g., 1234 -> "1.2K", 1234567 -> "1.2M").
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Title drawn for a view in the tab bar.
pub fn tab_title(view: View) -> String {
    format!(" {}:{} ", view.index() + 1, view.label())
}

/// Render the tab bar showing available views.
///
/// Highlights the currently active view.
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = View::ALL.iter().map(|&v| Line::from(tab_title(v))).collect();

    let tabs = Tabs::new(titles)
        .select(app.current_view.index())
        .style(app.theme.tab_inactive)
        .highlight_style(app.theme.tab_active)
        .padding("", "")
        .divider("|");

    frame.render_widget(tabs, area);
}

/// Render the status bar at the bottom.
///
/// Shows: data source, time since last update, available controls.
/// Also displays temporary status messages and errors.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let controls = "Tab:switch 1-4:view e:export ?:help q:quit";

    let status = if let Some(ref err) = app.load_error {
        format!(" Error: {} | {}", err, controls)
    } else if let Some(ref data) = app.data {
        format!(
            " {} | Updated {:.1}s ago | {}",
            app.source_description(),
            data.received_at.elapsed().as_secs_f64(),
            controls,
        )
    } else {
        " Loading... | q:quit".to_string()
    };

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the current view.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from(vec![Span::styled(" Navigation", bold)]),
        Line::from("  ←/→ h/l     Switch views"),
        Line::from("  Tab         Next view"),
        Line::from("  1-4         Jump to view"),
        Line::from("  Esc         Back to overview"),
        Line::from(""),
        Line::from(vec![Span::styled(" General", bold)]),
        Line::from("  e           Export to JSON"),
        Line::from("  q           Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 40u16.min(area.width.saturating_sub(4));
    let help_height = 15u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}

/// A bordered block in the theme's style.
pub fn panel<'a>(app: &App, title: &'a str) -> Block<'a> {
    Block::default()
        .title(title)
        .title_style(app.theme.header)
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border))
}

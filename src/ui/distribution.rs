//! Resource distribution rendering.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

use coe_metrics::reference::{resource_distribution, ResourceShare};

use crate::app::App;
use crate::ui::common::panel;

/// Render the Distribution view: one gauge per share plus a legend.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = panel(app, " Resource Distribution ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let shares = resource_distribution();
    let mut constraints: Vec<Constraint> = shares.iter().map(|_| Constraint::Length(2)).collect();
    constraints.push(Constraint::Min(0));
    let rows = Layout::vertical(constraints).split(inner);

    for (share, row) in shares.iter().zip(rows.iter()) {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(share_color(share, app)))
            .percent(u16::from(share.percent))
            .label(format!("{} {}%", share.label, share.percent));
        frame.render_widget(gauge, Rect { height: 1, ..*row });
    }

    if let Some(legend_area) = rows.last() {
        let legend: Vec<Line> = shares
            .iter()
            .map(|share| {
                Line::from(vec![
                    Span::styled(" ● ", Style::default().fg(share_color(share, app))),
                    Span::raw(format!("{:<16}", share.label)),
                    Span::styled(format!("{:>3}%", share.percent), app.theme.value),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(legend), *legend_area);
    }
}

fn share_color(share: &ResourceShare, app: &App) -> Color {
    share
        .rgb()
        .map(|(r, g, b)| Color::Rgb(r, g, b))
        .unwrap_or(app.theme.highlight)
}

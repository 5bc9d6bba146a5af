//! Terminal UI rendering using ratatui.
//!
//! Each view is implemented in its own submodule with a `render` function.
//!
//! ## Submodules
//!
//! - [`overview`]: Headline figures and the applications trend
//! - [`metrics`]: Live metric widgets, secondary figures and history table
//! - [`trends`]: Two-series performance chart
//! - [`distribution`]: Resource distribution gauges
//! - [`common`]: Shared components (header, tabs, status bar, help overlay)
//! - [`theme`]: Light/dark theme support with terminal auto-detection
//!
//! ## Rendering Architecture
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Header (common::render_header)       │
//! ├──────────────────────────────────────┤
//! │ Tabs (common::render_tabs)           │
//! ├──────────────────────────────────────┤
//! │                                      │
//! │ View Content (render)                │
//! │                                      │
//! ├──────────────────────────────────────┤
//! │ Status Bar (common::render_status)   │
//! └──────────────────────────────────────┘
//!         ↑
//!    Help overlay rendered on top
//! ```

pub mod common;
pub mod distribution;
pub mod metrics;
pub mod overview;
pub mod theme;
pub mod trends;

pub use theme::Theme;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, View};

/// Minimum terminal size for usable display
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 12;

/// Row of the tab bar, used for mouse hit-testing.
pub const TAB_ROW: u16 = 1;

/// Draw a full frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = format!(
            "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );
        let paragraph = Paragraph::new(msg)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow));
        let top = (area.height / 2).saturating_sub(2);
        let centered = Rect::new(0, top, area.width, 5.min(area.height - top));
        frame.render_widget(paragraph, centered);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header bar
        Constraint::Length(1), // Tabs
        Constraint::Min(8),    // Content
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    common::render_header(frame, app, chunks[0]);
    common::render_tabs(frame, app, chunks[1]);

    match app.current_view {
        View::Overview => overview::render(frame, app, chunks[2]),
        View::Metrics => metrics::render(frame, app, chunks[2]),
        View::Trends => trends::render(frame, app, chunks[2]),
        View::Distribution => distribution::render(frame, app, chunks[2]),
    }

    common::render_status_bar(frame, app, chunks[3]);

    if app.show_help {
        common::render_help(frame, app, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ChannelSource;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn loaded_app() -> App {
        let (_tx, source) = ChannelSource::create("test");
        let mut app = App::new(Box::new(source), Theme::dark());
        app.reload_data();
        app
    }

    #[test]
    fn test_every_view_renders() {
        let mut app = loaded_app();
        for view in View::ALL {
            app.set_view(view);
            let screen = render_to_string(&app, 100, 30);
            assert!(screen.contains("APPLICATION CoE"), "header missing in {:?}", view);
        }
    }

    #[test]
    fn test_metrics_view_shows_values() {
        let mut app = loaded_app();
        app.set_view(View::Metrics);
        let screen = render_to_string(&app, 120, 30);
        assert!(screen.contains("99.75%"));
        assert!(screen.contains("Global Regions"));
        assert!(screen.contains("47"));
    }

    #[test]
    fn test_distribution_view_lists_shares() {
        let mut app = loaded_app();
        app.set_view(View::Distribution);
        let screen = render_to_string(&app, 100, 30);
        assert!(screen.contains("Applications"));
        assert!(screen.contains("Infrastructure"));
    }

    #[test]
    fn test_small_terminal_shows_notice() {
        let app = loaded_app();
        let screen = render_to_string(&app, 40, 10);
        assert!(screen.contains("Terminal too small"));
    }

    #[test]
    fn test_help_overlay_renders() {
        let mut app = loaded_app();
        app.toggle_help();
        let screen = render_to_string(&app, 100, 30);
        assert!(screen.contains("Keyboard Shortcuts"));
    }

    #[test]
    fn test_renders_before_first_snapshot() {
        let (_tx, source) = ChannelSource::create("test");
        let app = App::new(Box::new(source), Theme::dark());
        let screen = render_to_string(&app, 100, 30);
        assert!(screen.contains("Loading"));
    }
}

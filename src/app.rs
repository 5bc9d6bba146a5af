//! Application state and navigation logic.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::data::{DashboardData, History};
use crate::export;
use crate::source::DataSource;
use crate::ui::Theme;

/// How long a status message stays in the status bar.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// The current view/tab in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Headline figures and the applications trend.
    Overview,
    /// All live metrics with change indicators and sparklines.
    Metrics,
    /// Two-series performance trend chart.
    Trends,
    /// Resource distribution breakdown.
    Distribution,
}

impl View {
    /// All views in tab order.
    pub const ALL: [View; 4] = [View::Overview, View::Metrics, View::Trends, View::Distribution];

    /// Cycle to the next view.
    pub fn next(self) -> Self {
        match self {
            View::Overview => View::Metrics,
            View::Metrics => View::Trends,
            View::Trends => View::Distribution,
            View::Distribution => View::Overview,
        }
    }

    /// Cycle to the previous view.
    pub fn prev(self) -> Self {
        match self {
            View::Overview => View::Distribution,
            View::Metrics => View::Overview,
            View::Trends => View::Metrics,
            View::Distribution => View::Trends,
        }
    }

    /// Returns the display label for this view.
    pub fn label(&self) -> &'static str {
        match self {
            View::Overview => "Overview",
            View::Metrics => "Metrics",
            View::Trends => "Trends",
            View::Distribution => "Distribution",
        }
    }

    /// Position in the tab bar.
    pub fn index(self) -> usize {
        match self {
            View::Overview => 0,
            View::Metrics => 1,
            View::Trends => 2,
            View::Distribution => 3,
        }
    }
}

/// Main application state.
///
/// Owns the display session's data source; the current snapshot lives here
/// and is handed to the renderers explicitly.
pub struct App {
    pub running: bool,
    pub current_view: View,
    pub show_help: bool,

    // Data source
    source: Box<dyn DataSource>,
    pub data: Option<DashboardData>,
    pub history: History,
    pub load_error: Option<String>,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App with the given data source and theme.
    pub fn new(source: Box<dyn DataSource>, theme: Theme) -> Self {
        Self {
            running: true,
            current_view: View::Overview,
            show_help: false,
            source,
            data: None,
            history: History::new(),
            load_error: None,
            theme,
            status_message: None,
        }
    }

    /// Returns a description of the current data source.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired.
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < STATUS_MESSAGE_TTL {
                return Some(msg);
            }
        }
        None
    }

    /// Poll the data source for new data.
    ///
    /// Returns true if a new snapshot replaced the current one.
    pub fn reload_data(&mut self) -> bool {
        if let Some(err) = self.source.error() {
            self.load_error = Some(err.to_string());
            return false;
        }

        match self.source.poll() {
            Some(snapshot) => {
                let data = DashboardData::from_snapshot(snapshot);
                self.history.record(&data);
                self.data = Some(data);
                self.load_error = None;
                true
            }
            None => false,
        }
    }

    /// Switch to the next view.
    pub fn next_view(&mut self) {
        self.current_view = self.current_view.next();
    }

    /// Switch to the previous view.
    pub fn prev_view(&mut self) {
        self.current_view = self.current_view.prev();
    }

    /// Switch to a specific view.
    pub fn set_view(&mut self, view: View) {
        self.current_view = view;
    }

    /// Navigate back: close help first, then return to Overview.
    pub fn go_back(&mut self) {
        if self.show_help {
            self.show_help = false;
        } else {
            self.current_view = View::Overview;
        }
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Export the current snapshot and reference data to a file.
    pub fn export_state(&self, path: &Path) -> Result<()> {
        let Some(ref data) = self.data else {
            anyhow::bail!("No data to export");
        };

        let document = export::build(&data.snapshot, self.source_description());
        export::write(path, &document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ChannelSource;
    use coe_metrics::MetricKind;

    fn test_app() -> (tokio::sync::watch::Sender<coe_metrics::MetricsSnapshot>, App) {
        let (tx, source) = ChannelSource::create("test");
        (tx, App::new(Box::new(source), Theme::dark()))
    }

    #[test]
    fn test_view_cycle() {
        let mut view = View::Overview;
        for expected in [View::Metrics, View::Trends, View::Distribution, View::Overview] {
            view = view.next();
            assert_eq!(view, expected);
        }
        for v in View::ALL {
            assert_eq!(v.next().prev(), v);
            assert_eq!(View::ALL[v.index()], v);
        }
    }

    #[test]
    fn test_reload_updates_data_and_history() {
        let (tx, mut app) = test_app();
        assert!(app.data.is_none());

        assert!(app.reload_data());
        assert_eq!(app.data.as_ref().unwrap().snapshot.active_users, 2750);
        assert!(!app.reload_data());

        let mut next = app.data.as_ref().unwrap().snapshot;
        next.active_users = 3025;
        tx.send(next).unwrap();

        assert!(app.reload_data());
        assert_eq!(app.history.len(), 2);
        let trend = app.history.trend_percent(MetricKind::ActiveUsers).unwrap();
        assert!((trend - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_closed_source_sets_error() {
        let (tx, mut app) = test_app();
        app.reload_data();
        drop(tx);

        // First poll after close notices the closed channel
        app.reload_data();
        app.reload_data();
        assert_eq!(app.load_error.as_deref(), Some("sender closed"));
        // Last good snapshot stays on screen
        assert!(app.data.is_some());
    }

    #[test]
    fn test_go_back_closes_help_first() {
        let (_tx, mut app) = test_app();
        app.set_view(View::Trends);
        app.toggle_help();

        app.go_back();
        assert!(!app.show_help);
        assert_eq!(app.current_view, View::Trends);

        app.go_back();
        assert_eq!(app.current_view, View::Overview);
    }

    #[test]
    fn test_status_message() {
        let (_tx, mut app) = test_app();
        assert!(app.get_status_message().is_none());
        app.set_status_message("saved".to_string());
        assert_eq!(app.get_status_message(), Some("saved"));
    }

    #[test]
    fn test_export_requires_data() {
        let (_tx, mut app) = test_app();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");
        assert!(app.export_state(&path).is_err());

        app.reload_data();
        app.export_state(&path).unwrap();
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["snapshot"]["active_users"], 2750);
    }
}

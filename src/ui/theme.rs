//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::config::ThemeChoice;
use crate::data::TrendDirection;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Color for rising values and the live indicator.
    pub positive: Color,
    /// Color for falling values.
    pub negative: Color,
    /// Color for unchanged values and secondary text.
    pub muted: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Color of the "applications" series in charts.
    pub series_primary: Color,
    /// Color of the "users" series in charts.
    pub series_secondary: Color,
    /// Style for large headline numbers.
    pub value: Style,
    /// Style for section headers.
    pub header: Style,
    /// Style for the active tab.
    pub tab_active: Style,
    /// Style for inactive tabs.
    pub tab_inactive: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            positive: Color::Green,
            negative: Color::Red,
            muted: Color::Gray,
            border: Color::Gray,
            series_primary: Color::Rgb(0x3b, 0x82, 0xf6),
            series_secondary: Color::Rgb(0x10, 0xb9, 0x81),
            value: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::Gray),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            positive: Color::Green,
            negative: Color::Red,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            series_primary: Color::Rgb(0x1e, 0x40, 0xaf),
            series_secondary: Color::Rgb(0x05, 0x96, 0x69),
            value: Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::DarkGray),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Resolve a configured choice.
    pub fn from_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Auto => Self::auto_detect(),
            ThemeChoice::Dark => Self::dark(),
            ThemeChoice::Light => Self::light(),
        }
    }

    /// Get style for a change indicator
    pub fn trend_style(&self, direction: TrendDirection) -> Style {
        match direction {
            TrendDirection::Up => Style::default().fg(self.positive),
            TrendDirection::Down => Style::default().fg(self.negative),
            TrendDirection::Flat => Style::default().fg(self.muted),
        }
    }
}

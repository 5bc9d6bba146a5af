//! # coe-dash
//!
//! A terminal dashboard for the Application Center of Excellence live
//! metrics.
//!
//! The metrics are simulated by [`coe_metrics`]: a background feed draws a
//! fresh random snapshot on a fixed interval and this crate renders it, along
//! with the static trend and distribution datasets.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │(history) │    │(render) │    │         │ │
//! │  └────┬────┘    └──────────┘    └─────────┘    └─────────┘ │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  ┌─────────┐                                                │
//! │  │ source  │◀── SimulatorSource | ChannelSource             │
//! │  │ (input) │                                                │
//! │  └─────────┘                                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state and view navigation
//! - **[`source`]**: Data source abstraction ([`DataSource`] trait) with the
//!   simulated feed and a channel-backed source
//! - **[`data`]**: Display readings and history for sparklines and trends
//! - **[`ui`]**: Terminal rendering using ratatui
//! - **[`config`]**: Layered configuration (defaults, TOML file, environment)
//! - **[`export`]**: JSON export of the current snapshot
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Refresh every 3 seconds (default)
//! coe-dash
//!
//! # Faster refresh with a reproducible sequence
//! coe-dash --interval 500ms --seed 42
//!
//! # Write one snapshot to JSON and exit
//! coe-dash --export metrics.json
//! ```
//!
//! ### As a library with the simulated source
//!
//! ```no_run
//! use std::time::Duration;
//! use coe_dash::{App, SimulatorSource, Theme};
//! use coe_metrics::MetricRanges;
//!
//! # tokio_test::block_on(async {
//! let source = SimulatorSource::spawn(Duration::from_secs(3), MetricRanges::default(), None)
//!     .unwrap();
//! let app = App::new(Box::new(source), Theme::dark());
//! # });
//! ```
//!
//! ### As a library with a channel source
//!
//! ```
//! use coe_dash::{App, ChannelSource, Theme};
//!
//! let (tx, source) = ChannelSource::create("replay");
//! let app = App::new(Box::new(source), Theme::dark());
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod events;
pub mod export;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, View};
pub use config::{DashConfig, ThemeChoice};
pub use data::{DashboardData, History, MetricReading};
pub use source::{ChannelSource, DataSource, SimulatorSource};
pub use ui::Theme;

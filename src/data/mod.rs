//! Data models and processing for metrics snapshots.
//!
//! ## Submodules
//!
//! - [`dashboard`]: Display-ready readings ([`DashboardData`], [`MetricReading`])
//! - [`duration`]: Parsing and formatting of duration strings (e.g., "3s", "500ms")
//! - [`history`]: Recent values for sparklines and change indicators
//!
//! ## Data Flow
//!
//! ```text
//! MetricsSnapshot (from the feed)
//!        │
//!        ▼
//! DashboardData::from_snapshot()
//!        │
//!        ├──▶ MetricReading (formatted per metric)
//!        │
//!        └──▶ History::record() (for sparklines and trends)
//! ```

pub mod dashboard;
pub mod duration;
pub mod history;

pub use dashboard::{DashboardData, MetricReading, TrendDirection};
pub use history::History;

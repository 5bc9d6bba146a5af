//! # coe-metrics
//!
//! Simulated live metrics for the Application CoE dashboard.
//!
//! Nothing here talks to a real system: every value comes from a random
//! source mapped linearly onto a configurable range, and is republished on a
//! fixed interval purely for display.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coe_metrics::{feed, std_source, MetricsGenerator};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let generator = MetricsGenerator::new(std_source(None));
//!
//!     // Initial snapshot arrives immediately, then one every 3 seconds
//!     let handle = feed::start(Duration::from_secs(3), generator, |snapshot| {
//!         println!("uptime {:.2}%", snapshot.system_uptime);
//!     })
//!     .unwrap();
//!
//!     tokio::time::sleep(Duration::from_secs(10)).await;
//!     handle.stop();
//! }
//! ```
//!
//! ## Features
//!
//! - `tokio` (default): the timer-driven [`feed`]
//! - `serde`: serialization of snapshots, ranges and reference data

mod error;
mod generator;
mod random;
mod ranges;
mod snapshot;

#[cfg(feature = "tokio")]
pub mod feed;

pub mod reference;

pub use error::{FeedError, RangeError};
pub use generator::{generate, MetricsGenerator};
pub use random::{std_source, FixedSource, RandomSource};
pub use ranges::{MetricRange, MetricRanges};
pub use snapshot::{MetricKind, MetricsSnapshot};

#[cfg(feature = "tokio")]
pub use feed::FeedHandle;

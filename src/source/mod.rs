//! Data source abstraction for receiving metrics snapshots.
//!
//! The TUI event loop is synchronous, so sources expose a non-blocking
//! [`DataSource::poll`] rather than a stream.

mod channel;
mod simulator;

pub use channel::ChannelSource;
pub use simulator::SimulatorSource;

use std::fmt::Debug;

use coe_metrics::MetricsSnapshot;

/// Trait for receiving metrics snapshots.
///
/// # Example
///
/// ```
/// use coe_dash::{ChannelSource, DataSource};
///
/// let (_tx, mut source) = ChannelSource::create("demo");
/// if let Some(snapshot) = source.poll() {
///     println!("{} active users", snapshot.active_users);
/// }
/// ```
pub trait DataSource: Send + Debug {
    /// Poll for the latest snapshot.
    ///
    /// Returns `Some(snapshot)` if a snapshot arrived since the last poll,
    /// `None` otherwise. Never blocks.
    fn poll(&mut self) -> Option<MetricsSnapshot>;

    /// Human-readable description, shown in the status bar.
    fn description(&self) -> &str;

    /// The last error the source hit, if any.
    fn error(&self) -> Option<&str>;
}

//! Simulated data source.
//!
//! Runs the metrics feed in the background and exposes its latest snapshot
//! through the polling interface.

use std::time::Duration;

use anyhow::{Context, Result};
use coe_metrics::{feed, std_source, FeedHandle, MetricRanges, MetricsGenerator, MetricsSnapshot};
use tokio::sync::watch;

use super::DataSource;

/// A data source backed by the random metrics feed.
///
/// The feed stops when the source is dropped, which ends the display
/// session's snapshot stream.
#[derive(Debug)]
pub struct SimulatorSource {
    receiver: watch::Receiver<MetricsSnapshot>,
    handle: FeedHandle,
    description: String,
    initial_returned: bool,
}

impl SimulatorSource {
    /// Start the feed and wrap it as a source.
    ///
    /// Must be called within a tokio runtime context.
    ///
    /// # Arguments
    ///
    /// * `interval` - Time between snapshots
    /// * `ranges` - Sampling ranges, validated before the feed starts
    /// * `seed` - Fixed seed for a reproducible sequence
    pub fn spawn(interval: Duration, ranges: MetricRanges, seed: Option<u64>) -> Result<Self> {
        ranges.validate().context("invalid metric ranges")?;

        let generator = MetricsGenerator::with_ranges(std_source(seed), ranges);
        let (handle, receiver) =
            feed::start_watch(interval, generator).context("failed to start metrics feed")?;

        let description = match seed {
            Some(seed) => format!("simulated every {:?} (seed {})", interval, seed),
            None => format!("simulated every {:?}", interval),
        };
        tracing::info!(%description, "simulator source started");

        Ok(Self {
            receiver,
            handle,
            description,
            initial_returned: false,
        })
    }

    /// Stop the underlying feed. Further polls return nothing new.
    pub fn stop(&self) {
        self.handle.stop();
    }
}

impl DataSource for SimulatorSource {
    fn poll(&mut self) -> Option<MetricsSnapshot> {
        if !self.initial_returned {
            self.initial_returned = true;
            self.receiver.mark_changed();
        }

        if self.receiver.has_changed().unwrap_or(false) {
            Some(*self.receiver.borrow_and_update())
        } else {
            None
        }
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        // The simulator cannot fail once started
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coe_metrics::MetricRange;

    #[tokio::test(start_paused = true)]
    async fn polls_initial_then_each_tick() {
        let mut source =
            SimulatorSource::spawn(Duration::from_secs(3), MetricRanges::default(), Some(5))
                .unwrap();

        assert!(source.poll().is_some());
        assert!(source.poll().is_none());

        tokio::time::sleep(Duration::from_millis(3100)).await;
        assert!(source.poll().is_some());
        assert!(source.poll().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn stop_ends_updates() {
        let mut source =
            SimulatorSource::spawn(Duration::from_secs(1), MetricRanges::default(), None)
                .unwrap();
        assert!(source.poll().is_some());

        source.stop();
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(source.poll().is_none());
    }

    #[tokio::test]
    async fn rejects_invalid_ranges() {
        let ranges = MetricRanges {
            system_uptime: MetricRange::new(100.0, 99.5),
            ..Default::default()
        };
        let err = SimulatorSource::spawn(Duration::from_secs(1), ranges, None).unwrap_err();
        assert!(err.to_string().contains("invalid metric ranges"));
    }

    #[tokio::test]
    async fn rejects_zero_interval() {
        let result = SimulatorSource::spawn(Duration::ZERO, MetricRanges::default(), None);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn description_mentions_seed() {
        let source =
            SimulatorSource::spawn(Duration::from_secs(3), MetricRanges::default(), Some(9))
                .unwrap();
        assert_eq!(source.description(), "simulated every 3s (seed 9)");
    }
}

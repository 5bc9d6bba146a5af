//! Channel-based data source.
//!
//! Receives snapshots through a tokio watch channel. Useful when something
//! other than the built-in simulator drives the dashboard.

use coe_metrics::{FixedSource, MetricsGenerator, MetricsSnapshot};
use tokio::sync::watch;

use super::DataSource;

/// A data source fed by a watch channel.
///
/// # Example
///
/// ```
/// use coe_dash::ChannelSource;
///
/// let (tx, source) = ChannelSource::create("replay");
/// ```
#[derive(Debug)]
pub struct ChannelSource {
    receiver: watch::Receiver<MetricsSnapshot>,
    description: String,
    closed: bool,
    /// Track if we've returned the initial value yet
    initial_returned: bool,
}

impl ChannelSource {
    /// Wrap an existing receiver.
    pub fn new(receiver: watch::Receiver<MetricsSnapshot>, source_description: &str) -> Self {
        Self {
            receiver,
            description: format!("channel: {}", source_description),
            closed: false,
            initial_returned: false,
        }
    }

    /// Create a channel pair, seeded with the midpoint snapshot.
    pub fn create(source_description: &str) -> (watch::Sender<MetricsSnapshot>, Self) {
        let seed = MetricsGenerator::new(FixedSource::new(0.5)).generate();
        let (tx, rx) = watch::channel(seed);
        (tx, Self::new(rx, source_description))
    }
}

impl DataSource for ChannelSource {
    fn poll(&mut self) -> Option<MetricsSnapshot> {
        // Return the current value on first poll
        if !self.initial_returned {
            self.initial_returned = true;
            self.receiver.mark_changed();
        }

        match self.receiver.has_changed() {
            Ok(true) => Some(*self.receiver.borrow_and_update()),
            Ok(false) => None,
            Err(_) => {
                self.closed = true;
                None
            }
        }
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        self.closed.then_some("sender closed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_source_poll() {
        let (tx, mut source) = ChannelSource::create("test");

        // Initially returns the seeded snapshot
        let snapshot = source.poll().unwrap();
        assert_eq!(snapshot.active_users, 2750);

        // No change, so poll returns None
        assert!(source.poll().is_none());

        let mut next = snapshot;
        next.active_users = 2600;
        tx.send(next).unwrap();

        assert_eq!(source.poll().unwrap().active_users, 2600);
        assert!(source.error().is_none());
    }

    #[test]
    fn test_closed_sender_reports_error() {
        let (tx, mut source) = ChannelSource::create("test");
        assert!(source.poll().is_some());

        drop(tx);
        assert!(source.poll().is_none());
        assert_eq!(source.error(), Some("sender closed"));
        assert_eq!(source.description(), "channel: test");
    }
}

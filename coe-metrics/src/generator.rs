//! Snapshot generation.

use crate::random::RandomSource;
use crate::ranges::MetricRanges;
use crate::snapshot::MetricsSnapshot;

/// Produces fresh snapshots from a random source and a set of ranges.
///
/// Every field is drawn independently; no state carries over between calls
/// other than the random source's own position.
///
/// # Example
///
/// ```rust
/// use coe_metrics::{std_source, MetricsGenerator, MetricRanges};
///
/// let mut generator = MetricsGenerator::new(std_source(Some(1)));
/// let snapshot = generator.generate();
/// assert!(MetricRanges::default().system_uptime.contains(snapshot.system_uptime));
/// ```
#[derive(Debug, Clone)]
pub struct MetricsGenerator<R> {
    source: R,
    ranges: MetricRanges,
}

impl<R: RandomSource> MetricsGenerator<R> {
    /// Create a generator using the default ranges.
    pub fn new(source: R) -> Self {
        Self::with_ranges(source, MetricRanges::default())
    }

    /// Create a generator with custom ranges.
    ///
    /// Ranges are expected to have passed [`MetricRanges::validate`].
    pub fn with_ranges(source: R, ranges: MetricRanges) -> Self {
        Self { source, ranges }
    }

    /// Draw a new snapshot.
    pub fn generate(&mut self) -> MetricsSnapshot {
        let ranges = self.ranges;
        MetricsSnapshot {
            system_uptime: ranges.system_uptime.sample_real(self.source.next_unit()),
            active_users: ranges.active_users.sample_integer(self.source.next_unit()),
            processing_speed: ranges.processing_speed.sample_real(self.source.next_unit()),
            data_processed: ranges.data_processed.sample_integer(self.source.next_unit()),
            error_rate: ranges.error_rate.sample_real(self.source.next_unit()),
            response_time: ranges.response_time.sample_real(self.source.next_unit()),
        }
    }
}

/// Draw a snapshot from the thread-local RNG with the default ranges.
pub fn generate() -> MetricsSnapshot {
    MetricsGenerator::new(rand::thread_rng()).generate()
}

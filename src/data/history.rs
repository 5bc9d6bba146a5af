//! Historical data tracking for sparklines and trend indicators.

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use coe_metrics::MetricKind;

use super::dashboard::DashboardData;

/// Maximum number of historical snapshots to keep.
const MAX_HISTORY_SIZE: usize = 60;

/// Tracks recent values of every metric.
///
/// Each snapshot is independent, so the history is purely a display aid:
/// it feeds the sparklines and the change indicator next to each value.
#[derive(Debug, Clone)]
pub struct History {
    /// Recent values per metric, oldest first.
    pub values: HashMap<MetricKind, VecDeque<f64>>,
    /// Arrival times of the recorded snapshots.
    timestamps: VecDeque<Instant>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            timestamps: VecDeque::new(),
        }
    }

    /// Record a new data snapshot
    pub fn record(&mut self, data: &DashboardData) {
        for kind in MetricKind::ALL {
            let values = self.values.entry(kind).or_default();
            values.push_back(data.snapshot.value(kind));
            if values.len() > MAX_HISTORY_SIZE {
                values.pop_front();
            }
        }

        self.timestamps.push_back(data.received_at);
        if self.timestamps.len() > MAX_HISTORY_SIZE {
            self.timestamps.pop_front();
        }
    }

    /// Number of snapshots currently held.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Time between the oldest and newest recorded snapshot.
    pub fn window(&self) -> Option<Duration> {
        let first = self.timestamps.front()?;
        let last = self.timestamps.back()?;
        Some(last.saturating_duration_since(*first))
    }

    /// Get sparkline data (normalized to 0-7 for 8 bar levels).
    ///
    /// Returns an empty Vec if there's not enough history.
    pub fn sparkline(&self, kind: MetricKind) -> Vec<u8> {
        let Some(values) = self.values.get(&kind) else {
            return Vec::new();
        };

        if values.len() < 2 {
            return Vec::new();
        }

        let max = values.iter().copied().fold(f64::MIN, f64::max);
        let min = values.iter().copied().fold(f64::MAX, f64::min);
        let range = max - min;

        values
            .iter()
            .map(|&v| {
                if range <= 0.0 {
                    return 0;
                }
                let normalized = ((v - min) / range * 7.0) as u8;
                normalized.min(7)
            })
            .collect()
    }

    /// Percentage change between the last two snapshots.
    ///
    /// Returns None with fewer than two snapshots or when the previous
    /// value is zero.
    pub fn trend_percent(&self, kind: MetricKind) -> Option<f64> {
        let values = self.values.get(&kind)?;
        if values.len() < 2 {
            return None;
        }

        let current = *values.back()?;
        let previous = *values.get(values.len() - 2)?;
        if previous == 0.0 {
            return None;
        }

        Some((current - previous) / previous * 100.0)
    }

    /// Mean of the recorded values for a metric.
    pub fn average(&self, kind: MetricKind) -> Option<f64> {
        let values = self.values.get(&kind)?;
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

//! Display-ready view of a metrics snapshot.

use std::time::Instant;

use coe_metrics::{MetricKind, MetricsSnapshot};

/// The snapshot currently on screen, plus when it arrived.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub snapshot: MetricsSnapshot,
    pub readings: Vec<MetricReading>,
    pub received_at: Instant,
}

/// One formatted metric value.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricReading {
    pub kind: MetricKind,
    pub value: f64,
    /// Value with precision and unit applied, e.g. "99.75%".
    pub display: String,
}

impl DashboardData {
    /// Build display data from a freshly received snapshot.
    pub fn from_snapshot(snapshot: MetricsSnapshot) -> Self {
        let readings = MetricKind::ALL
            .iter()
            .map(|&kind| {
                let value = snapshot.value(kind);
                MetricReading {
                    kind,
                    value,
                    display: kind.format(value),
                }
            })
            .collect();

        Self {
            snapshot,
            readings,
            received_at: Instant::now(),
        }
    }

    /// Look up the reading for one metric.
    pub fn reading(&self, kind: MetricKind) -> Option<&MetricReading> {
        self.readings.iter().find(|r| r.kind == kind)
    }
}

/// Direction of change since the previous snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

impl TrendDirection {
    /// Classify a percentage change. Changes under 0.05% count as flat.
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 0.05 {
            TrendDirection::Up
        } else if percent <= -0.05 {
            TrendDirection::Down
        } else {
            TrendDirection::Flat
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            TrendDirection::Up => "↑",
            TrendDirection::Down => "↓",
            TrendDirection::Flat => "–",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coe_metrics::{FixedSource, MetricsGenerator};

    #[test]
    fn test_readings_cover_every_metric() {
        let snapshot = MetricsGenerator::new(FixedSource::new(0.5)).generate();
        let data = DashboardData::from_snapshot(snapshot);

        assert_eq!(data.readings.len(), MetricKind::ALL.len());
        assert_eq!(data.reading(MetricKind::SystemUptime).unwrap().display, "99.75%");
        assert_eq!(data.reading(MetricKind::ActiveUsers).unwrap().display, "2750");
        assert_eq!(data.reading(MetricKind::ErrorRate).unwrap().display, "0.050%");
        assert_eq!(data.reading(MetricKind::ResponseTime).unwrap().display, "175 ms");
    }

    #[test]
    fn test_trend_direction() {
        assert_eq!(TrendDirection::from_percent(12.5), TrendDirection::Up);
        assert_eq!(TrendDirection::from_percent(-2.1), TrendDirection::Down);
        assert_eq!(TrendDirection::from_percent(0.01), TrendDirection::Flat);
        assert_eq!(TrendDirection::Up.arrow(), "↑");
    }
}

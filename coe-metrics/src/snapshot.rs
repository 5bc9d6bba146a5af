//! Snapshot - one immutable set of simulated metric values.

use core::fmt;

/// A point-in-time set of the six simulated metrics.
///
/// Snapshots are replaced wholesale on every tick of the feed; nothing
/// mutates an individual field once it has been published.
///
/// # Example
///
/// ```rust
/// use coe_metrics::{FixedSource, MetricsGenerator};
///
/// let mut generator = MetricsGenerator::new(FixedSource::new(0.5));
/// let snapshot = generator.generate();
/// assert_eq!(snapshot.active_users, 2750);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricsSnapshot {
    /// Uptime percentage.
    pub system_uptime: f64,
    /// Concurrent user count.
    pub active_users: u32,
    /// Relative processing speed ("x faster").
    pub processing_speed: f64,
    /// Data processed, in terabytes.
    pub data_processed: u32,
    /// Error rate percentage.
    pub error_rate: f64,
    /// Average response time in milliseconds.
    pub response_time: f64,
}

impl MetricsSnapshot {
    /// Read a single metric as a float.
    pub fn value(&self, kind: MetricKind) -> f64 {
        match kind {
            MetricKind::SystemUptime => self.system_uptime,
            MetricKind::ActiveUsers => f64::from(self.active_users),
            MetricKind::ProcessingSpeed => self.processing_speed,
            MetricKind::DataProcessed => f64::from(self.data_processed),
            MetricKind::ErrorRate => self.error_rate,
            MetricKind::ResponseTime => self.response_time,
        }
    }
}

/// Identifies one of the six snapshot fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MetricKind {
    SystemUptime,
    ActiveUsers,
    ProcessingSpeed,
    DataProcessed,
    ErrorRate,
    ResponseTime,
}

impl MetricKind {
    /// All metrics in display order.
    pub const ALL: [MetricKind; 6] = [
        MetricKind::SystemUptime,
        MetricKind::ActiveUsers,
        MetricKind::ProcessingSpeed,
        MetricKind::DataProcessed,
        MetricKind::ErrorRate,
        MetricKind::ResponseTime,
    ];

    /// Human-readable title.
    pub fn label(self) -> &'static str {
        match self {
            MetricKind::SystemUptime => "System Uptime",
            MetricKind::ActiveUsers => "Active Users",
            MetricKind::ProcessingSpeed => "Processing Speed",
            MetricKind::DataProcessed => "Data Processed",
            MetricKind::ErrorRate => "Error Rate",
            MetricKind::ResponseTime => "Avg Response Time",
        }
    }

    /// Unit suffix shown after the value (may be empty).
    pub fn unit(self) -> &'static str {
        match self {
            MetricKind::SystemUptime | MetricKind::ErrorRate => "%",
            MetricKind::ActiveUsers => "",
            MetricKind::ProcessingSpeed => "x faster",
            MetricKind::DataProcessed => "TB",
            MetricKind::ResponseTime => "ms",
        }
    }

    /// Number of decimals used when displaying the value.
    pub fn decimals(self) -> usize {
        match self {
            MetricKind::SystemUptime => 2,
            MetricKind::ErrorRate => 3,
            MetricKind::ProcessingSpeed => 1,
            MetricKind::ActiveUsers | MetricKind::DataProcessed | MetricKind::ResponseTime => 0,
        }
    }

    /// Whether the field holds an integer count.
    pub fn is_integral(self) -> bool {
        matches!(self, MetricKind::ActiveUsers | MetricKind::DataProcessed)
    }

    /// Field name as used in configuration and JSON.
    pub fn key(self) -> &'static str {
        match self {
            MetricKind::SystemUptime => "system_uptime",
            MetricKind::ActiveUsers => "active_users",
            MetricKind::ProcessingSpeed => "processing_speed",
            MetricKind::DataProcessed => "data_processed",
            MetricKind::ErrorRate => "error_rate",
            MetricKind::ResponseTime => "response_time",
        }
    }

    /// Format a value with this metric's precision and unit.
    pub fn format(self, value: f64) -> String {
        let unit = self.unit();
        let number = format!("{:.*}", self.decimals(), value);
        match unit {
            "" => number,
            "%" => format!("{}%", number),
            _ => format!("{} {}", number, unit),
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MetricsSnapshot {
        MetricsSnapshot {
            system_uptime: 99.75,
            active_users: 2750,
            processing_speed: 9.0,
            data_processed: 1250,
            error_rate: 0.05,
            response_time: 175.0,
        }
    }

    #[test]
    fn value_reads_each_field() {
        let snapshot = sample();
        assert_eq!(snapshot.value(MetricKind::SystemUptime), 99.75);
        assert_eq!(snapshot.value(MetricKind::ActiveUsers), 2750.0);
        assert_eq!(snapshot.value(MetricKind::ProcessingSpeed), 9.0);
        assert_eq!(snapshot.value(MetricKind::DataProcessed), 1250.0);
        assert_eq!(snapshot.value(MetricKind::ErrorRate), 0.05);
        assert_eq!(snapshot.value(MetricKind::ResponseTime), 175.0);
    }

    #[test]
    fn format_uses_precision_and_unit() {
        assert_eq!(MetricKind::SystemUptime.format(99.756), "99.76%");
        assert_eq!(MetricKind::ActiveUsers.format(2750.0), "2750");
        assert_eq!(MetricKind::ProcessingSpeed.format(9.04), "9.0 x faster");
        assert_eq!(MetricKind::DataProcessed.format(1250.0), "1250 TB");
        assert_eq!(MetricKind::ErrorRate.format(0.0512), "0.051%");
        assert_eq!(MetricKind::ResponseTime.format(175.4), "175 ms");
    }

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<_> = MetricKind::ALL.iter().map(|k| k.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), MetricKind::ALL.len());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_with_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["active_users"], 2750);
        assert_eq!(json["response_time"], 175.0);
    }
}

//! Sampling ranges for each simulated metric.
//!
//! The bounds are presentation choices with no business meaning; they are
//! kept as plain configurable values rather than baked into the generator.

use crate::error::RangeError;
use crate::snapshot::MetricKind;

/// Half-open interval `[min, max)` a metric is sampled from.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricRange {
    pub min: f64,
    pub max: f64,
}

impl MetricRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Width of the interval.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Whether `value` lies inside `[min, max)`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }

    /// Map a unit sample `u ∈ [0, 1)` linearly onto the interval.
    pub fn sample_real(&self, u: f64) -> f64 {
        let value = self.min + u * self.span();
        // Rounding near u = 1 can land exactly on the excluded bound.
        if value >= self.max {
            just_below(self.max).max(self.min)
        } else {
            value
        }
    }

    /// Map a unit sample onto the integers of the interval.
    pub fn sample_integer(&self, u: f64) -> u32 {
        let offset = (u * self.span()).floor();
        let value = self.min + offset;
        if value >= self.max {
            (self.max - 1.0) as u32
        } else {
            value as u32
        }
    }

    fn validate(&self, kind: MetricKind) -> Result<(), RangeError> {
        let field = kind.key();
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(RangeError::NonFinite { field });
        }
        if self.min >= self.max {
            return Err(RangeError::Empty {
                field,
                min: self.min,
                max: self.max,
            });
        }
        if kind.is_integral() {
            let integral = |v: f64| v.fract() == 0.0 && v >= 0.0 && v <= f64::from(u32::MAX);
            if !integral(self.min) || !integral(self.max) {
                return Err(RangeError::NotIntegral { field });
            }
        }
        Ok(())
    }
}

/// Largest f64 strictly below `x`.
fn just_below(x: f64) -> f64 {
    if x > 0.0 {
        f64::from_bits(x.to_bits() - 1)
    } else if x == 0.0 {
        -f64::from_bits(1)
    } else {
        f64::from_bits(x.to_bits() + 1)
    }
}

/// One range per snapshot field.
///
/// `Default` yields the stock dashboard ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MetricRanges {
    pub system_uptime: MetricRange,
    pub active_users: MetricRange,
    pub processing_speed: MetricRange,
    pub data_processed: MetricRange,
    pub error_rate: MetricRange,
    pub response_time: MetricRange,
}

impl MetricRanges {
    pub const SYSTEM_UPTIME: MetricRange = MetricRange::new(99.5, 100.0);
    pub const ACTIVE_USERS: MetricRange = MetricRange::new(2500.0, 3000.0);
    pub const PROCESSING_SPEED: MetricRange = MetricRange::new(8.0, 10.0);
    pub const DATA_PROCESSED: MetricRange = MetricRange::new(1200.0, 1300.0);
    pub const ERROR_RATE: MetricRange = MetricRange::new(0.0, 0.1);
    pub const RESPONSE_TIME: MetricRange = MetricRange::new(150.0, 200.0);

    /// Range for a single metric.
    pub fn get(&self, kind: MetricKind) -> MetricRange {
        match kind {
            MetricKind::SystemUptime => self.system_uptime,
            MetricKind::ActiveUsers => self.active_users,
            MetricKind::ProcessingSpeed => self.processing_speed,
            MetricKind::DataProcessed => self.data_processed,
            MetricKind::ErrorRate => self.error_rate,
            MetricKind::ResponseTime => self.response_time,
        }
    }

    /// Check every range is non-empty and finite, and that count fields
    /// have whole-number bounds.
    pub fn validate(&self) -> Result<(), RangeError> {
        MetricKind::ALL
            .iter()
            .try_for_each(|&kind| self.get(kind).validate(kind))
    }
}

impl Default for MetricRanges {
    fn default() -> Self {
        Self {
            system_uptime: Self::SYSTEM_UPTIME,
            active_users: Self::ACTIVE_USERS,
            processing_speed: Self::PROCESSING_SPEED,
            data_processed: Self::DATA_PROCESSED,
            error_rate: Self::ERROR_RATE,
            response_time: Self::RESPONSE_TIME,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ranges_are_valid() {
        assert!(MetricRanges::default().validate().is_ok());
    }

    #[test]
    fn sample_real_is_linear() {
        let range = MetricRange::new(150.0, 200.0);
        assert_eq!(range.sample_real(0.0), 150.0);
        assert_eq!(range.sample_real(0.5), 175.0);
        assert_eq!(range.sample_real(0.25), 162.5);
    }

    #[test]
    fn sample_real_never_reaches_max() {
        let range = MetricRange::new(99.5, 100.0);
        let almost_one = 1.0 - f64::EPSILON / 2.0;
        let value = range.sample_real(almost_one);
        assert!(value < 100.0);
        assert!(range.contains(value));
    }

    #[test]
    fn sample_integer_floors() {
        let range = MetricRange::new(2500.0, 3000.0);
        assert_eq!(range.sample_integer(0.0), 2500);
        assert_eq!(range.sample_integer(0.5), 2750);
        assert_eq!(range.sample_integer(0.9999), 2999);
    }

    #[test]
    fn empty_range_is_rejected() {
        let ranges = MetricRanges {
            response_time: MetricRange::new(200.0, 150.0),
            ..Default::default()
        };
        assert!(matches!(
            ranges.validate(),
            Err(RangeError::Empty { field: "response_time", .. })
        ));
    }

    #[test]
    fn non_finite_range_is_rejected() {
        let ranges = MetricRanges {
            error_rate: MetricRange::new(0.0, f64::INFINITY),
            ..Default::default()
        };
        assert_eq!(
            ranges.validate(),
            Err(RangeError::NonFinite { field: "error_rate" })
        );
    }

    #[test]
    fn fractional_count_range_is_rejected() {
        let ranges = MetricRanges {
            active_users: MetricRange::new(10.5, 20.0),
            ..Default::default()
        };
        assert_eq!(
            ranges.validate(),
            Err(RangeError::NotIntegral { field: "active_users" })
        );
    }

    #[test]
    fn just_below_handles_zero_and_negatives() {
        assert!(just_below(0.0) < 0.0);
        assert!(just_below(-1.0) < -1.0);
        assert!(just_below(1.0) < 1.0);
    }
}

//! Dashboard configuration.
//!
//! Settings are layered, later sources winning:
//!
//! 1. built-in defaults
//! 2. an optional TOML file (`--config`)
//! 3. `COE_*` environment variables, `__` separating nested keys
//! 4. command-line flags (applied by the binary)
//!
//! ```toml
//! refresh = "3s"
//! seed = 42
//! theme = "dark"
//!
//! [ranges.active_users]
//! min = 2500
//! max = 4000
//! ```
//!
//! The equivalent environment override is `COE_RANGES__ACTIVE_USERS__MAX=4000`.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use coe_metrics::MetricRanges;
use config::{Config, Environment, File, Map};
use serde::{Deserialize, Serialize};

use crate::data::duration::parse_duration;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "COE";

/// Terminal colour scheme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    /// Detect from the terminal background.
    #[default]
    Auto,
    Dark,
    Light,
}

/// Resolved dashboard settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashConfig {
    /// Refresh interval as a duration string, e.g. "3s".
    pub refresh: String,
    /// Seed for a reproducible metrics sequence.
    pub seed: Option<u64>,
    pub theme: ThemeChoice,
    pub ranges: MetricRanges,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            refresh: "3s".to_string(),
            seed: None,
            theme: ThemeChoice::Auto,
            ranges: MetricRanges::default(),
        }
    }
}

impl DashConfig {
    /// Load configuration from defaults, an optional file and the process
    /// environment.
    ///
    /// The result is not validated, so command-line overrides can still
    /// replace a bad value; call [`DashConfig::validate`] once they are applied.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_from(path, None)
    }

    /// Load with an explicit environment map instead of the process
    /// environment.
    fn load_from(path: Option<&Path>, env: Option<Map<String, String>>) -> Result<Self> {
        let defaults = Config::try_from(&DashConfig::default())?;

        let mut builder = Config::builder().add_source(defaults);
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let config: DashConfig = builder
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("invalid configuration")?;

        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Check the refresh interval and metric ranges.
    pub fn validate(&self) -> Result<()> {
        self.refresh_interval()?;
        self.ranges.validate().context("invalid metric ranges")?;
        Ok(())
    }

    /// The refresh interval as a [`Duration`]. Must be non-zero.
    pub fn refresh_interval(&self) -> Result<Duration> {
        let interval = parse_duration(&self.refresh)
            .with_context(|| format!("invalid refresh interval {:?}", self.refresh))?;
        if interval.is_zero() {
            anyhow::bail!("refresh interval must be greater than zero");
        }
        Ok(interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> Option<Map<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_defaults_without_file() {
        let config = DashConfig::load_from(None, env(&[])).unwrap();
        assert_eq!(config, DashConfig::default());
        assert_eq!(config.refresh_interval().unwrap(), Duration::from_secs(3));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "refresh = \"500ms\"\nseed = 42\ntheme = \"light\"\n\n[ranges.active_users]\nmin = 100\nmax = 200"
        )
        .unwrap();

        let config = DashConfig::load_from(Some(file.path()), env(&[])).unwrap();
        assert_eq!(config.refresh_interval().unwrap(), Duration::from_millis(500));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.theme, ThemeChoice::Light);
        assert_eq!(config.ranges.active_users.min, 100.0);
        assert_eq!(config.ranges.active_users.max, 200.0);
        // Untouched ranges keep their defaults
        assert_eq!(config.ranges.response_time, MetricRanges::RESPONSE_TIME);
    }

    #[test]
    fn test_environment_overrides() {
        let config = DashConfig::load_from(
            None,
            env(&[
                ("COE_REFRESH", "1s"),
                ("COE_SEED", "7"),
                ("COE_RANGES__DATA_PROCESSED__MAX", "1500"),
            ]),
        )
        .unwrap();

        assert_eq!(config.refresh_interval().unwrap(), Duration::from_secs(1));
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.ranges.data_processed.max, 1500.0);
        assert_eq!(config.ranges.data_processed.min, 1200.0);
    }

    #[test]
    fn test_invalid_range_is_rejected() {
        let config =
            DashConfig::load_from(None, env(&[("COE_RANGES__ERROR_RATE__MIN", "0.5")])).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_refresh_can_be_overridden() {
        let mut config = DashConfig::load_from(None, env(&[("COE_REFRESH", "0s")])).unwrap();
        assert!(config.validate().is_err());

        config.refresh = "2s".to_string();
        config.validate().unwrap();
        assert_eq!(config.refresh_interval().unwrap(), Duration::from_secs(2));
    }

    #[test]
    fn test_zero_refresh_is_rejected() {
        let config = DashConfig {
            refresh: "0s".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = DashConfig::load_from(Some(Path::new("/nonexistent/coe.toml")), env(&[]));
        assert!(result.is_err());
    }
}

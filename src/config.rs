//! Analysis configuration.
//!
//! Thresholds and bounds for one analysis run, loadable from a YAML file
//! and overridable from the command line.

use std::path::Path;

use color_eyre::eyre::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default minimum ring length. Self-loops and mutual 2-cycles are common
/// legitimate patterns and are never treated as rings.
pub const DEFAULT_MIN_CYCLE_LENGTH: usize = 3;
/// Default maximum ring length; the cycle search prunes longer paths.
pub const DEFAULT_MAX_CYCLE_LENGTH: usize = 5;
/// Default distinct-counterparty threshold for fan-in/fan-out hubs.
pub const DEFAULT_FAN_THRESHOLD: usize = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid cycle window: min_cycle_length must be at least 2 (got {0})")]
    MinCycleLengthTooSmall(usize),

    #[error("Invalid cycle window: max_cycle_length {max} is below min_cycle_length {min}")]
    EmptyCycleWindow { min: usize, max: usize },

    #[error("Invalid fan threshold: must be at least 1")]
    ZeroFanThreshold,
}

/// Tunable parameters for one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Minimum ring length (node count), inclusive.
    pub min_cycle_length: usize,
    /// Maximum ring length (node count), inclusive.
    pub max_cycle_length: usize,
    /// Distinct-counterparty threshold for hub detection.
    pub fan_threshold: usize,
    /// Optional cap on emitted cycles. When hit, the report is marked
    /// truncated instead of the search running without bound.
    pub max_cycles: Option<usize>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_cycle_length: DEFAULT_MIN_CYCLE_LENGTH,
            max_cycle_length: DEFAULT_MAX_CYCLE_LENGTH,
            fan_threshold: DEFAULT_FAN_THRESHOLD,
            max_cycles: None,
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.min_cycle_length < 2 {
            return Err(ConfigError::MinCycleLengthTooSmall(self.min_cycle_length));
        }
        if self.max_cycle_length < self.min_cycle_length {
            return Err(ConfigError::EmptyCycleWindow {
                min: self.min_cycle_length,
                max: self.max_cycle_length,
            });
        }
        if self.fan_threshold == 0 {
            return Err(ConfigError::ZeroFanThreshold);
        }
        Ok(())
    }
}

/// Load an analysis configuration from a YAML file.
pub fn load_config(path: &Path) -> Result<AnalysisConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    let config: AnalysisConfig = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;

    config
        .validate()
        .with_context(|| format!("Invalid configuration in {}", path.display()))?;

    log::info!("Loaded analysis configuration from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.min_cycle_length, 3);
        assert_eq!(config.max_cycle_length, 5);
        assert_eq!(config.fan_threshold, 10);
        assert_eq!(config.max_cycles, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_windows() {
        let config = AnalysisConfig {
            min_cycle_length: 1,
            ..AnalysisConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MinCycleLengthTooSmall(1))
        ));

        let config = AnalysisConfig {
            min_cycle_length: 4,
            max_cycle_length: 3,
            ..AnalysisConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyCycleWindow { min: 4, max: 3 })
        ));

        let config = AnalysisConfig {
            fan_threshold: 0,
            ..AnalysisConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroFanThreshold)
        ));
    }

    #[test]
    fn test_load_yaml_with_partial_fields() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "fan_threshold: 25").unwrap();
        writeln!(file, "max_cycles: 10000").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.fan_threshold, 25);
        assert_eq!(config.max_cycles, Some(10000));
        // Unspecified fields fall back to defaults.
        assert_eq!(config.min_cycle_length, 3);
        assert_eq!(config.max_cycle_length, 5);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "min_cycle_length: 6").unwrap();
        writeln!(file, "max_cycle_length: 4").unwrap();

        assert!(load_config(file.path()).is_err());
    }
}

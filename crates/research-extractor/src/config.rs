//! Configuration for the Extractor

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable windows and thresholds used by the extraction heuristics.
///
/// All sizes are counted in characters, not bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Characters taken on each side of a statistic match when inferring its name
    pub context_window: usize,

    /// Minimum value for a plain number to be reported, before any unit is considered
    pub large_number_threshold: f64,

    /// Characters following a number that are searched for a unit marker
    pub unit_lookahead: usize,

    /// Maximum gap between a metric name and a following value
    pub metric_forward_span: usize,

    /// Maximum gap between a value and a following metric name
    pub metric_backward_span: usize,

    /// Characters before a date token included in its window
    pub timeline_window_before: usize,

    /// Characters after a date token included in its window
    pub timeline_window_after: usize,

    /// Maximum description length following a date token
    pub timeline_description_len: usize,

    /// Inputs longer than this are truncated before scanning
    pub max_text_length: usize,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.context_window == 0 {
            return Err("context_window must be greater than 0".to_string());
        }
        if !self.large_number_threshold.is_finite() || self.large_number_threshold < 0.0 {
            return Err("large_number_threshold must be a non-negative finite number".to_string());
        }
        if self.unit_lookahead == 0 {
            return Err("unit_lookahead must be greater than 0".to_string());
        }
        if self.timeline_description_len == 0 {
            return Err("timeline_description_len must be greater than 0".to_string());
        }
        if self.timeline_window_after < self.timeline_description_len {
            return Err(
                "timeline_window_after cannot be smaller than timeline_description_len".to_string(),
            );
        }
        if self.max_text_length == 0 {
            return Err("max_text_length must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: ExtractorConfig = toml::from_str(toml_str)?;
        config.validate().map_err(ExtractorError::Config)?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ExtractorError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            context_window: 50,
            large_number_threshold: 10_000.0,
            unit_lookahead: 10,
            metric_forward_span: 50,
            metric_backward_span: 30,
            timeline_window_before: 30,
            timeline_window_after: 70,
            timeline_description_len: 60,
            max_text_length: 1_000_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_context_window() {
        let mut config = ExtractorConfig::default();
        config.context_window = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_threshold() {
        let mut config = ExtractorConfig::default();
        config.large_number_threshold = f64::NAN;
        assert!(config.validate().is_err());
        config.large_number_threshold = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_description_longer_than_window() {
        let mut config = ExtractorConfig::default();
        config.timeline_description_len = config.timeline_window_after + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed = ExtractorConfig::from_toml("context_window = 20\n").unwrap();
        assert_eq!(parsed.context_window, 20);
        assert_eq!(parsed.metric_forward_span, 50);
    }

    #[test]
    fn test_invalid_toml_values_rejected() {
        let result = ExtractorConfig::from_toml("unit_lookahead = 0\n");
        assert!(matches!(result, Err(ExtractorError::Config(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "large_number_threshold = 500.0").unwrap();
        let config = ExtractorConfig::from_file(file.path()).unwrap();
        assert_eq!(config.large_number_threshold, 500.0);
    }

    #[test]
    fn test_missing_file() {
        let result = ExtractorConfig::from_file("/nonexistent/extractor.toml");
        assert!(matches!(result, Err(ExtractorError::Io(_))));
    }
}

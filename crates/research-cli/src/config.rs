//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use research_extractor::ExtractorConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Extraction windows and thresholds
    #[serde(default)]
    pub extractor: ExtractorConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Terminal table
    Table,
    /// JSON format
    Json,
    /// Markdown pipe tables
    Markdown,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".research-extract").join("config.toml"))
    }

    /// Load from the default path, or defaults when no file exists.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.extractor.validate().map_err(CliError::Config)?;
        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert_eq!(config.extractor, ExtractorConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.settings.format = OutputFormat::Markdown;
        config.extractor.context_window = 25;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.settings.format, OutputFormat::Markdown);
        assert_eq!(loaded.extractor.context_window, 25);
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[settings]\nformat = \"json\"\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.settings.format, OutputFormat::Json);
        assert!(loaded.settings.color);
        assert_eq!(loaded.extractor.metric_backward_span, 30);
    }

    #[test]
    fn test_invalid_extractor_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[extractor]\nunit_lookahead = 0\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(CliError::Config(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = Config::load_from(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}

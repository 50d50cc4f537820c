//! Error types for the Extractor

use thiserror::Error;

/// Errors surfaced by the extractor's configuration and serialization layers.
///
/// The extraction passes themselves never fail; they return empty results.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed to read a configuration file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize configuration to TOML
    #[error("Failed to serialize config TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::Json(e.to_string())
    }
}

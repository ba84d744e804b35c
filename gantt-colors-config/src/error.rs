//! Error types for loading persisted color mode state

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a `ColorModeState`
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An explicitly requested configuration file does not exist
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Configuration file format not supported
    #[error("Unsupported configuration file format: {format}")]
    UnsupportedFormat { format: String },

    /// Configuration parsing failed
    #[error("Failed to parse configuration: {source}")]
    ParseError { source: figment::Error },

    /// Configuration validation failed
    #[error("Configuration validation failed: {message}")]
    ValidationError { message: String },
}

impl ConfigError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        ConfigError::ParseError { source: error }
    }
}

/// Result type for configuration loading
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

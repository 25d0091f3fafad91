//! Error handling for the CLI application

use recsplit_core::ConfigError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// File not found or inaccessible
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Invalid file pattern
    #[error("Invalid file pattern: {0}")]
    InvalidPattern(String),

    /// Configuration file could not be parsed
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Splitter settings were rejected
    #[error("Invalid splitter settings: {0}")]
    Splitter(#[from] ConfigError),
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

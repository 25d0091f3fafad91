//! Error types for the splitter

use thiserror::Error;

/// Invalid splitter configuration, reported at construction time
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `chunk_size` was zero
    #[error("chunk size must be greater than 0 (chunk_size = {value})")]
    InvalidChunkSize {
        /// The rejected chunk size
        value: usize,
    },

    /// `overlap_size` was not smaller than `chunk_size`
    #[error(
        "overlap size must be less than chunk size (overlap_size = {overlap_size}, chunk_size = {chunk_size})"
    )]
    OverlapTooLarge {
        /// The rejected overlap size
        overlap_size: usize,
        /// The configured chunk size
        chunk_size: usize,
    },
}

impl ConfigError {
    /// Name of the configuration field at fault
    pub fn field(&self) -> &'static str {
        match self {
            ConfigError::InvalidChunkSize { .. } => "chunk_size",
            ConfigError::OverlapTooLarge { .. } => "overlap_size",
        }
    }
}

/// Crate-level error
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for splitter operations
pub type Result<T> = std::result::Result<T, Error>;

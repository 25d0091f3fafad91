//! Splitter configuration and builder

use crate::error::ConfigError;
use crate::splitter::RecursiveSplitter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Default configuration constants
pub mod defaults {
    /// Overlap size when none is given
    pub const OVERLAP_SIZE: usize = 0;

    /// The character-level separator: splits text into individual characters
    pub const CHARACTER_SEPARATOR: &str = "";
}

/// Length function used for every size comparison
pub type LenFn = Arc<dyn Fn(&str) -> usize + Send + Sync>;

/// Chunk ID generator: `(original_id, split_index) -> chunk_id`
pub type IdGenerator = Arc<dyn Fn(&str, usize) -> String + Send + Sync>;

/// Where a separator ends up after splitting on it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeepType {
    /// Discard the separator
    #[default]
    None,
    /// Prepend the separator to the following part
    Start,
    /// Append the separator to the preceding part
    End,
}

impl KeepType {
    /// All keep types, in declaration order
    pub const ALL: [KeepType; 3] = [KeepType::None, KeepType::Start, KeepType::End];

    /// Lowercase name, as used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            KeepType::None => "none",
            KeepType::Start => "start",
            KeepType::End => "end",
        }
    }
}

impl fmt::Display for KeepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeepType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(KeepType::None),
            "start" => Ok(KeepType::Start),
            "end" => Ok(KeepType::End),
            other => Err(format!(
                "unknown keep type '{other}' (expected none, start or end)"
            )),
        }
    }
}

/// Default length function: Unicode scalar values, not bytes
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Splitter configuration
///
/// Built with [`Config::builder`]; validated again by [`RecursiveSplitter::new`].
#[derive(Clone)]
pub struct Config {
    pub(crate) chunk_size: usize,
    pub(crate) overlap_size: usize,
    pub(crate) separators: Vec<String>,
    pub(crate) keep_type: KeepType,
    pub(crate) len_fn: Option<LenFn>,
    pub(crate) id_generator: Option<IdGenerator>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("chunk_size", &self.chunk_size)
            .field("overlap_size", &self.overlap_size)
            .field("separators", &self.separators)
            .field("keep_type", &self.keep_type)
            .field("len_fn", &self.len_fn.as_ref().map(|_| "<fn>"))
            .field("id_generator", &self.id_generator.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Target maximum chunk size
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Overlap budget between consecutive chunks
    pub fn overlap_size(&self) -> usize {
        self.overlap_size
    }

    /// Separators, coarsest first
    pub fn separators(&self) -> &[String] {
        &self.separators
    }

    /// Separator retention policy
    pub fn keep_type(&self) -> KeepType {
        self.keep_type
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::InvalidChunkSize {
                value: self.chunk_size,
            });
        }

        if self.overlap_size > 0 && self.overlap_size >= self.chunk_size {
            return Err(ConfigError::OverlapTooLarge {
                overlap_size: self.overlap_size,
                chunk_size: self.chunk_size,
            });
        }

        Ok(())
    }
}

/// Fluent builder for [`Config`]
#[derive(Default)]
pub struct ConfigBuilder {
    chunk_size: Option<usize>,
    overlap_size: Option<usize>,
    separators: Vec<String>,
    keep_type: KeepType,
    len_fn: Option<LenFn>,
    id_generator: Option<IdGenerator>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target maximum chunk size (required)
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = Some(size);
        self
    }

    /// Set the overlap size
    pub fn overlap_size(mut self, size: usize) -> Self {
        self.overlap_size = Some(size);
        self
    }

    /// Set the separators, coarsest first
    pub fn separators<I, S>(mut self, separators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.separators = separators.into_iter().map(Into::into).collect();
        self
    }

    /// Append one separator after the ones already set
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separators.push(separator.into());
        self
    }

    /// Set the separator retention policy
    pub fn keep_type(mut self, keep_type: KeepType) -> Self {
        self.keep_type = keep_type;
        self
    }

    /// Set a custom length function
    pub fn len_fn<F>(mut self, len_fn: F) -> Self
    where
        F: Fn(&str) -> usize + Send + Sync + 'static,
    {
        self.len_fn = Some(Arc::new(len_fn));
        self
    }

    /// Set a chunk ID generator
    pub fn id_generator<F>(mut self, generator: F) -> Self
    where
        F: Fn(&str, usize) -> String + Send + Sync + 'static,
    {
        self.id_generator = Some(Arc::new(generator));
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, ConfigError> {
        let config = Config {
            chunk_size: self.chunk_size.unwrap_or(0),
            overlap_size: self.overlap_size.unwrap_or(defaults::OVERLAP_SIZE),
            separators: self.separators,
            keep_type: self.keep_type,
            len_fn: self.len_fn,
            id_generator: self.id_generator,
        };

        config.validate()?;
        Ok(config)
    }

    /// Build a splitter directly
    pub fn build_splitter(self) -> Result<RecursiveSplitter, ConfigError> {
        RecursiveSplitter::new(self.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_chunk_size_is_rejected() {
        let err = Config::builder().build().unwrap_err();
        assert_eq!(err, ConfigError::InvalidChunkSize { value: 0 });
    }

    #[test]
    fn test_overlap_equal_to_chunk_size_is_rejected() {
        let err = Config::builder()
            .chunk_size(5)
            .overlap_size(5)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::OverlapTooLarge {
                overlap_size: 5,
                chunk_size: 5
            }
        );
    }

    #[test]
    fn test_defaults() {
        let config = Config::builder().chunk_size(10).build().unwrap();
        assert_eq!(config.chunk_size(), 10);
        assert_eq!(config.overlap_size(), 0);
        assert!(config.separators().is_empty());
        assert_eq!(config.keep_type(), KeepType::None);
        assert!(config.len_fn.is_none());
        assert!(config.id_generator.is_none());
    }

    #[test]
    fn test_separator_appends() {
        let config = Config::builder()
            .chunk_size(10)
            .separators(["\n\n"])
            .separator("\n")
            .separator(defaults::CHARACTER_SEPARATOR)
            .build()
            .unwrap();
        assert_eq!(config.separators(), ["\n\n", "\n", ""]);
    }

    #[test]
    fn test_keep_type_parsing() {
        assert_eq!("start".parse::<KeepType>(), Ok(KeepType::Start));
        assert_eq!("END".parse::<KeepType>(), Ok(KeepType::End));
        assert!("middle".parse::<KeepType>().is_err());
        for keep in KeepType::ALL {
            assert_eq!(keep.as_str().parse::<KeepType>(), Ok(keep));
        }
    }

    #[test]
    fn test_keep_type_serde_names() {
        let json = serde_json::to_string(&KeepType::Start).unwrap();
        assert_eq!(json, "\"start\"");
        let parsed: KeepType = serde_json::from_str("\"end\"").unwrap();
        assert_eq!(parsed, KeepType::End);
    }

    #[test]
    fn test_char_len_counts_scalars_not_bytes() {
        assert_eq!(char_len("héllo"), 5);
        assert_eq!(char_len("日本語"), 3);
        assert_eq!(char_len(""), 0);
    }

    #[test]
    fn test_debug_hides_closures() {
        let config = Config::builder()
            .chunk_size(3)
            .id_generator(|id, i| format!("{id}-{i}"))
            .build()
            .unwrap();
        let debug = format!("{config:?}");
        assert!(debug.contains("chunk_size: 3"));
        assert!(debug.contains("<fn>"));
    }
}

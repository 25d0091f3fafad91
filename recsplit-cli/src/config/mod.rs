//! Configuration module

use crate::error::CliError;
use recsplit_core::{Config, KeepType};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Splitter configuration
    #[serde(default)]
    pub splitter: SplitterSettings,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl CliConfig {
    /// Load a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let content = fs::read_to_string(path)
            .map_err(|_| CliError::FileNotFound(path.display().to_string()))?;
        Self::from_toml(&content)
    }

    /// Parse a configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, CliError> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))
    }
}

/// Splitter-related configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SplitterSettings {
    /// Target maximum chunk size in characters
    pub chunk_size: usize,

    /// Overlap budget between consecutive chunks
    pub overlap_size: usize,

    /// Separators, coarsest first ("" splits into characters)
    pub separators: Vec<String>,

    /// Where separators are kept: none, start or end
    pub keep_type: KeepType,

    /// Chunk ID template with `{id}` and `{index}` placeholders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_template: Option<String>,
}

impl Default for SplitterSettings {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            overlap_size: 200,
            separators: vec![
                "\n\n".to_string(),
                "\n".to_string(),
                " ".to_string(),
                String::new(),
            ],
            keep_type: KeepType::None,
            id_template: None,
        }
    }
}

impl SplitterSettings {
    /// Build a validated splitter configuration
    pub fn to_config(&self) -> Result<Config, CliError> {
        let mut builder = Config::builder()
            .chunk_size(self.chunk_size)
            .overlap_size(self.overlap_size)
            .separators(self.separators.iter().cloned())
            .keep_type(self.keep_type);

        if let Some(template) = self.id_template.clone() {
            builder = builder.id_generator(move |id, index| render_id(&template, id, index));
        }

        Ok(builder.build()?)
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Fill an ID template
pub fn render_id(template: &str, id: &str, index: usize) -> String {
    template
        .replace("{id}", id)
        .replace("{index}", &index.to_string())
}

/// Expand `\n`, `\r`, `\t` and `\\` in a separator given on the command line
pub fn unescape_separator(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}

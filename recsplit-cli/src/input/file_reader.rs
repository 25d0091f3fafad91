//! File reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use recsplit_core::Document;
use std::fs;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read a file into a document identified by its path
    ///
    /// The path is also recorded under the `source` metadata key.
    pub fn read_document(path: &Path) -> Result<Document> {
        let content = Self::read_text(path)?;
        let id = path.display().to_string();

        Ok(Document::new(id.clone(), content).with_metadata("source", id))
    }
}

//! Document type consumed and produced by transformers

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Open metadata attached to a document
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// A unit of text with an identifier and free-form metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document identifier (may be empty)
    #[serde(default)]
    pub id: String,
    /// Text payload
    pub content: String,
    /// Metadata copied onto every chunk derived from this document
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: Metadata,
}

impl Document {
    /// Create a document with an identifier and content
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            metadata: Metadata::new(),
        }
    }

    /// Create a document with content only (empty identifier)
    pub fn from_content(content: impl Into<String>) -> Self {
        Self::new(String::new(), content)
    }

    /// Attach a metadata entry
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Derive a chunk of this document: new id and content, same metadata
    pub(crate) fn derive(&self, id: String, content: String) -> Self {
        Self {
            id,
            content,
            metadata: self.metadata.clone(),
        }
    }
}

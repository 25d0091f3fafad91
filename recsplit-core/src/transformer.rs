//! Document transformer interface

use crate::document::Document;
use crate::error::Result;
use crate::splitter::RecursiveSplitter;

/// Turns a batch of documents into another batch of documents
///
/// Implementations must be safe to share between threads; each call works on
/// its own batch and returns a fresh vector.
pub trait Transformer: Send + Sync {
    /// Transform a batch of documents
    fn transform(&self, documents: &[Document]) -> Result<Vec<Document>>;
}

impl Transformer for RecursiveSplitter {
    fn transform(&self, documents: &[Document]) -> Result<Vec<Document>> {
        Ok(self.split_documents(documents))
    }
}

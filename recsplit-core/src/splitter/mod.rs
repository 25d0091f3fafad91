//! Recursive text splitter
//!
//! Splits text on the coarsest separator present, merges the resulting parts
//! greedily up to the chunk size and recurses into finer separators for any
//! part that is still too large.

mod merge;
mod separator;


use crate::config::{char_len, defaults, Config, IdGenerator, KeepType, LenFn};
use crate::document::Document;
use crate::error::ConfigError;
use std::fmt;
use std::sync::Arc;

use separator::split_on_separator;

/// Recursive, separator-aware text splitter
///
/// Stateless after construction: one instance can serve any number of
/// `split_documents` calls, from any number of threads.
#[derive(Clone)]
pub struct RecursiveSplitter {
    chunk_size: usize,
    overlap_size: usize,
    separators: Vec<String>,
    keep_type: KeepType,
    len_fn: LenFn,
    id_generator: Option<IdGenerator>,
}

impl fmt::Debug for RecursiveSplitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecursiveSplitter")
            .field("chunk_size", &self.chunk_size)
            .field("overlap_size", &self.overlap_size)
            .field("separators", &self.separators)
            .field("keep_type", &self.keep_type)
            .field("id_generator", &self.id_generator.is_some())
            .finish()
    }
}

impl RecursiveSplitter {
    /// Create a splitter from a configuration
    ///
    /// Fails when `chunk_size` is zero or `overlap_size` is not smaller than
    /// `chunk_size`. An empty separator list means character-level splitting.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let separators = if config.separators.is_empty() {
            vec![defaults::CHARACTER_SEPARATOR.to_string()]
        } else {
            config.separators
        };

        Ok(Self {
            chunk_size: config.chunk_size,
            overlap_size: config.overlap_size,
            separators,
            keep_type: config.keep_type,
            len_fn: config.len_fn.unwrap_or_else(|| Arc::new(char_len) as LenFn),
            id_generator: config.id_generator,
        })
    }

    /// Target maximum chunk size
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Overlap budget between consecutive chunks
    pub fn overlap_size(&self) -> usize {
        self.overlap_size
    }

    /// Effective separators, coarsest first
    pub fn separators(&self) -> &[String] {
        &self.separators
    }

    /// Separator retention policy
    pub fn keep_type(&self) -> KeepType {
        self.keep_type
    }

    /// Split every document into chunks, preserving document order.
    ///
    /// Chunks inherit the source document's metadata. IDs come from the
    /// configured generator (index restarts at 0 per document) or are copied
    /// from the source document.
    pub fn split_documents(&self, documents: &[Document]) -> Vec<Document> {
        let mut output = Vec::new();

        for doc in documents {
            let chunks = self.split_text(&doc.content);
            log::debug!(
                "split document '{}' ({} bytes) into {} chunk(s)",
                doc.id,
                doc.content.len(),
                chunks.len()
            );

            for (index, content) in chunks.into_iter().enumerate() {
                let id = match &self.id_generator {
                    Some(generate) => generate(&doc.id, index),
                    None => doc.id.clone(),
                };
                output.push(doc.derive(id, content));
            }
        }

        output
    }

    /// Split a single text into chunks
    pub fn split_text(&self, text: &str) -> Vec<String> {
        self.split_recursive(text, &self.separators)
    }

    fn split_recursive(&self, text: &str, separators: &[String]) -> Vec<String> {
        let (separator, finer) = select_separator(text, separators);
        let parts = split_on_separator(text, separator, self.keep_type);
        let merge_separator = match self.keep_type {
            KeepType::None => separator,
            KeepType::Start | KeepType::End => "",
        };

        let mut chunks = Vec::new();
        let mut pending: Vec<&str> = Vec::new();

        for part in parts {
            if self.measure(part) <= self.chunk_size {
                pending.push(part);
                continue;
            }

            if !pending.is_empty() {
                chunks.extend(self.merge_parts(&pending, merge_separator));
                pending.clear();
            }

            if finer.is_empty() {
                log::debug!(
                    "no finer separator for part of size {}, emitting it unsplit",
                    self.measure(part)
                );
                chunks.push(part.to_string());
            } else {
                chunks.extend(self.split_recursive(part, finer));
            }
        }

        if !pending.is_empty() {
            chunks.extend(self.merge_parts(&pending, merge_separator));
        }

        chunks
    }

    fn measure(&self, text: &str) -> usize {
        (self.len_fn)(text)
    }
}

/// Pick the first separator that is empty or occurs in `text`.
///
/// Returns the separator and the finer separators after it. When none occurs
/// the last separator is returned with no finer ones, which leaves `text` as a
/// single part.
fn select_separator<'s>(text: &str, separators: &'s [String]) -> (&'s str, &'s [String]) {
    for (i, separator) in separators.iter().enumerate() {
        if separator.is_empty() || text.contains(separator.as_str()) {
            return (separator.as_str(), &separators[i + 1..]);
        }
    }

    let last = separators
        .last()
        .map_or(defaults::CHARACTER_SEPARATOR, String::as_str);
    (last, &[])
}

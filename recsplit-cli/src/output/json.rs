//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use recsplit_core::{Document, Metadata};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs chunks as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    chunks: Vec<ChunkData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct ChunkData {
    /// Chunk identifier
    pub id: String,
    /// Position of the chunk in the output
    pub index: usize,
    /// The chunk text
    pub content: String,
    /// Length of the chunk in characters
    pub length: usize,
    /// Metadata inherited from the source document
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            chunks: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_chunk(&mut self, chunk: &Document) -> Result<()> {
        self.chunks.push(ChunkData {
            id: chunk.id.clone(),
            index: self.chunks.len(),
            content: chunk.content.clone(),
            length: chunk.content.chars().count(),
            metadata: chunk.metadata.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.chunks)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.chunks)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

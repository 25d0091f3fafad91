//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use recsplit_core::Document;
use std::io::Write;

/// Markdown formatter - one section per chunk
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    chunk_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            chunk_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_chunk(&mut self, chunk: &Document) -> Result<()> {
        self.chunk_count += 1;
        if chunk.id.is_empty() {
            writeln!(self.writer, "### Chunk {}", self.chunk_count)?;
        } else {
            writeln!(self.writer, "### Chunk {} (`{}`)", self.chunk_count, chunk.id)?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", chunk.content)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total chunks: {}*", self.chunk_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

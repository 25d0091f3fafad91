//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use recsplit_core::Document;
use std::io::{self, Write};

/// Plain text formatter - writes each chunk followed by a newline
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_chunk(&mut self, chunk: &Document) -> Result<()> {
        writeln!(self.writer, "{}", chunk.content)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

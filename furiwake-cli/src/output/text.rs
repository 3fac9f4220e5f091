//! Plain text output formatter

use super::{aozora, AnnotatedEntry, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one annotated word per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_entry(&mut self, entry: &AnnotatedEntry) -> Result<()> {
        writeln!(self.writer, "{}", aozora(&entry.segments))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

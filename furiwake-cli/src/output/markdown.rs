//! Markdown output formatter

use super::{aozora, AnnotatedEntry, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs entries as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    entry_count: usize,
    annotated_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            entry_count: 0,
            annotated_count: 0,
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn format_entry(&mut self, entry: &AnnotatedEntry) -> Result<()> {
        self.entry_count += 1;
        if entry.segments.iter().any(|s| s.is_annotated()) {
            self.annotated_count += 1;
        }

        if entry.reading.is_empty() {
            writeln!(
                self.writer,
                "{}. **{}**: {}",
                self.entry_count,
                entry.word,
                aozora(&entry.segments)
            )?;
        } else {
            writeln!(
                self.writer,
                "{}. **{}** ({}): {}",
                self.entry_count,
                entry.word,
                entry.reading,
                aozora(&entry.segments)
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total entries: {} ({} annotated)*",
            self.entry_count, self.annotated_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

//! Output formatting module

use anyhow::Result;
use furiwake_core::Segment;
use serde::{Deserialize, Serialize};

/// An entry together with its furigana segments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedEntry {
    /// Word as written
    pub word: String,
    /// Kana reading as supplied
    pub reading: String,
    /// Ordered `[furigana, text]` segments
    pub segments: Vec<Segment>,
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single annotated entry
    fn format_entry(&mut self, entry: &AnnotatedEntry) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per entry in Aozora Bunko ruby notation
    #[default]
    Text,
    /// JSON array of entries with their segments
    Json,
    /// Markdown numbered list
    Markdown,
}

impl OutputFormat {
    /// Name used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }
}

/// Render segments in Aozora Bunko notation: `｜世《せ》`
pub fn aozora(segments: &[Segment]) -> String {
    let mut rendered = String::new();
    for segment in segments {
        if segment.is_annotated() {
            rendered.push('｜');
            rendered.push_str(&segment.text);
            rendered.push('《');
            rendered.push_str(&segment.furigana);
            rendered.push('》');
        } else {
            rendered.push_str(&segment.text);
        }
    }
    rendered
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

//! Dictionary entry parsing
//!
//! Two line-oriented formats are accepted:
//! - TSV: `word<TAB>reading<TAB>furi`, reading and furi optional, furi in
//!   the compact `"idx:reading;..."` form
//! - JSON Lines: `{"word": ..., "reading": ..., "furi": "1:せ" | {"1": "せ"}}`

use crate::error::CliError;
use furiwake_core::FuriData;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Pick by file extension (.jsonl/.json/.ndjson → jsonl, else tsv)
    #[default]
    Auto,
    /// Tab-separated word, reading, furigana data
    Tsv,
    /// One JSON object per line
    Jsonl,
}

impl InputFormat {
    /// Resolve `Auto` against a file name
    pub fn resolve(self, path: Option<&Path>) -> InputFormat {
        match self {
            InputFormat::Auto => {
                let extension = path
                    .and_then(Path::extension)
                    .and_then(|ext| ext.to_str())
                    .map(str::to_ascii_lowercase);
                match extension.as_deref() {
                    Some("jsonl" | "json" | "ndjson") => InputFormat::Jsonl,
                    _ => InputFormat::Tsv,
                }
            }
            explicit => explicit,
        }
    }

    /// Name used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            InputFormat::Auto => "auto",
            InputFormat::Tsv => "tsv",
            InputFormat::Jsonl => "jsonl",
        }
    }
}

/// One dictionary entry to annotate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Word as written
    #[serde(default, deserialize_with = "null_as_empty")]
    pub word: String,
    /// Kana reading, empty when unknown
    #[serde(default, deserialize_with = "null_as_empty")]
    pub reading: String,
    /// Explicit furigana data
    #[serde(
        default,
        alias = "furiData",
        alias = "furi_data",
        skip_serializing_if = "Option::is_none"
    )]
    pub furi: Option<FuriData>,
}

impl Entry {
    /// Create an entry
    pub fn new(word: impl Into<String>, reading: impl Into<String>, furi: Option<FuriData>) -> Self {
        Self {
            word: word.into(),
            reading: reading.into(),
            furi,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Entry or parse failure, tagged with its 1-based line number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryLine {
    /// 1-based line number in the source
    pub line: usize,
    /// Parsed entry
    pub entry: Result<Entry, CliError>,
}

/// Line-oriented entry parser
#[derive(Debug, Clone)]
pub struct EntryReader {
    format: InputFormat,
    comment_prefix: String,
}

impl EntryReader {
    /// Create a reader for a concrete format
    pub fn new(format: InputFormat, comment_prefix: impl Into<String>) -> Self {
        Self {
            format,
            comment_prefix: comment_prefix.into(),
        }
    }

    /// Parse every non-blank, non-comment line of `content`
    pub fn parse(&self, content: &str) -> Vec<EntryLine> {
        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !self.is_skipped(line))
            .map(|(index, line)| EntryLine {
                line: index + 1,
                entry: self.parse_line(line),
            })
            .collect()
    }

    fn is_skipped(&self, line: &str) -> bool {
        let trimmed = line.trim();
        trimmed.is_empty()
            || (!self.comment_prefix.is_empty() && trimmed.starts_with(&self.comment_prefix))
    }

    /// Parse a single line
    pub fn parse_line(&self, line: &str) -> Result<Entry, CliError> {
        match self.format {
            InputFormat::Jsonl => parse_jsonl(line),
            InputFormat::Tsv | InputFormat::Auto => parse_tsv(line),
        }
    }
}

fn parse_tsv(line: &str) -> Result<Entry, CliError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let mut fields = line.split('\t');

    // Full-width spaces belong to the word; furigana indices count them.
    let word = trim_ascii(fields.next().unwrap_or_default());
    if word.is_empty() {
        return Err(CliError::InvalidEntry("missing word".to_string()));
    }
    let reading = trim_ascii(fields.next().unwrap_or_default());
    let furi = fields
        .next()
        .map(str::trim)
        .filter(|furi| !furi.is_empty())
        .map(FuriData::from);

    if fields.next().is_some() {
        log::debug!("ignoring extra columns after furigana data for '{word}'");
    }

    Ok(Entry::new(word, reading, furi))
}

fn trim_ascii(field: &str) -> &str {
    field.trim_matches(|c: char| c.is_ascii_whitespace())
}

fn parse_jsonl(line: &str) -> Result<Entry, CliError> {
    let entry: Entry = serde_json::from_str(line.trim())
        .map_err(|e| CliError::InvalidEntry(e.to_string()))?;
    if entry.word.is_empty() {
        return Err(CliError::InvalidEntry("missing word".to_string()));
    }
    Ok(entry)
}

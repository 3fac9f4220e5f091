//! Explicit furigana data parsing
//!
//! Upstream dictionary data may pin readings to character offsets of a
//! word, either as a compact string (`"1:せ;2:じ"`) or as an index-keyed
//! mapping (`{"1": "せ", "2": "じ"}`). Both encodings normalize into the
//! same ordered list of [`Anchor`]s; nothing downstream sees the raw form.

use crate::error::{AnchorError, Result};
use std::collections::{BTreeMap, HashMap};

/// Separator between encoded entries
pub const ENTRY_SEPARATOR: char = ';';

/// Separator between index and reading inside an encoded entry
pub const INDEX_SEPARATOR: char = ':';

/// Known reading pinned to a character offset of the word
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Anchor {
    /// Character offset of the first kanji covered by the reading
    pub position: usize,
    /// Furigana for the kanji starting at `position`
    pub reading: String,
}

impl Anchor {
    /// Create a new anchor
    pub fn new(position: usize, reading: impl Into<String>) -> Self {
        Self {
            position,
            reading: reading.into(),
        }
    }
}

/// Explicit furigana data as supplied by the dictionary layer
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum FuriData {
    /// Compact `"idx:reading;idx:reading"` form
    Encoded(String),
    /// Index-keyed mapping; keys are parsed as integers
    Mapping(
        #[cfg_attr(feature = "serde", serde(deserialize_with = "string_readings"))]
        BTreeMap<String, String>,
    ),
}

/// Deserialize a mapping, dropping pairs whose reading is not a string
#[cfg(feature = "serde")]
fn string_readings<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<String, String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum Reading {
        Text(String),
        Other(#[allow(dead_code)] serde::de::IgnoredAny),
    }

    let raw: BTreeMap<String, Reading> = serde::Deserialize::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(index, reading)| match reading {
            Reading::Text(reading) => Some((index, reading)),
            Reading::Other(_) => {
                log::debug!("dropping furigana entry: reading at index '{index}' is not a string");
                None
            }
        })
        .collect())
}

impl FuriData {
    /// Whether the data carries no entries at all
    pub fn is_empty(&self) -> bool {
        match self {
            FuriData::Encoded(encoded) => encoded.trim().is_empty(),
            FuriData::Mapping(mapping) => mapping.is_empty(),
        }
    }

    /// Raw `(index, reading)` pairs in input order
    fn raw_entries(&self) -> Vec<RawEntry<'_>> {
        match self {
            FuriData::Encoded(encoded) => encoded
                .split(ENTRY_SEPARATOR)
                .map(str::trim)
                .filter(|piece| !piece.is_empty())
                .map(|piece| match piece.split_once(INDEX_SEPARATOR) {
                    Some((index, reading)) => RawEntry::Pair(index, reading),
                    None => RawEntry::Malformed(piece),
                })
                .collect(),
            FuriData::Mapping(mapping) => mapping
                .iter()
                .map(|(index, reading)| RawEntry::Pair(index.as_str(), reading.as_str()))
                .collect(),
        }
    }
}

impl From<&str> for FuriData {
    fn from(encoded: &str) -> Self {
        FuriData::Encoded(encoded.to_string())
    }
}

impl From<String> for FuriData {
    fn from(encoded: String) -> Self {
        FuriData::Encoded(encoded)
    }
}

impl From<BTreeMap<usize, String>> for FuriData {
    fn from(mapping: BTreeMap<usize, String>) -> Self {
        mapping.into_iter().collect()
    }
}

impl From<HashMap<usize, String>> for FuriData {
    fn from(mapping: HashMap<usize, String>) -> Self {
        mapping.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<(usize, S)> for FuriData {
    fn from_iter<I: IntoIterator<Item = (usize, S)>>(iter: I) -> Self {
        FuriData::Mapping(
            iter.into_iter()
                .map(|(index, reading)| (index.to_string(), reading.into()))
                .collect(),
        )
    }
}

enum RawEntry<'a> {
    Pair(&'a str, &'a str),
    Malformed(&'a str),
}

/// Parse a single `index`/`reading` pair against a word of `word_len` characters
pub fn parse_entry(index: &str, reading: &str, word_len: usize) -> Result<Anchor> {
    let index = index.trim();
    if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AnchorError::InvalidIndex {
            index: index.to_string(),
        });
    }
    let position: usize = index.parse().map_err(|_| AnchorError::InvalidIndex {
        index: index.to_string(),
    })?;

    if position >= word_len {
        return Err(AnchorError::OutOfRange { position, word_len });
    }

    let reading = reading.trim();
    if reading.is_empty() {
        return Err(AnchorError::EmptyReading { position });
    }

    Ok(Anchor::new(position, reading))
}

/// Parse every entry, keeping rejected ones as errors, in input order
pub fn parse_entries(furi_data: Option<&FuriData>, word_len: usize) -> Vec<Result<Anchor>> {
    let Some(data) = furi_data else {
        return Vec::new();
    };

    data.raw_entries()
        .into_iter()
        .map(|entry| match entry {
            RawEntry::Pair(index, reading) => parse_entry(index, reading, word_len),
            RawEntry::Malformed(piece) => Err(AnchorError::MissingSeparator {
                entry: piece.to_string(),
            }),
        })
        .collect()
}

/// Normalize furigana data into anchors sorted by position
///
/// Rejected entries are dropped. When two entries share a position the
/// later one wins.
pub fn parse(furi_data: Option<&FuriData>, word_len: usize) -> Vec<Anchor> {
    let mut by_position = BTreeMap::new();

    for entry in parse_entries(furi_data, word_len) {
        match entry {
            Ok(anchor) => {
                by_position.insert(anchor.position, anchor.reading);
            }
            Err(error) => log::debug!("dropping furigana entry: {error}"),
        }
    }

    by_position
        .into_iter()
        .map(|(position, reading)| Anchor { position, reading })
        .collect()
}

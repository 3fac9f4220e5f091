//! Error types for furigana data parsing
//!
//! Alignment itself never fails. These errors only describe why a single
//! explicit furigana entry was rejected; the parser drops such entries and
//! keeps going.

use thiserror::Error;

/// Reason a furigana entry was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnchorError {
    /// Encoded entry without an `index:reading` separator
    #[error("missing ':' separator in entry '{entry}'")]
    MissingSeparator {
        /// The offending entry
        entry: String,
    },

    /// Index is not a non-negative integer
    #[error("invalid index '{index}'")]
    InvalidIndex {
        /// The index text as written
        index: String,
    },

    /// Index does not point inside the word
    #[error("index {position} is outside the word (length {word_len})")]
    OutOfRange {
        /// Parsed position
        position: usize,
        /// Word length in characters
        word_len: usize,
    },

    /// Reading is empty
    #[error("empty reading at index {position}")]
    EmptyReading {
        /// Parsed position
        position: usize,
    },
}

/// Result type for anchor parsing
pub type Result<T> = std::result::Result<T, AnchorError>;

//! Character classification for furigana alignment
//!
//! Alignment only needs to know whether a character is part of a kanji
//! block (and therefore may carry a reading) or is something the reader
//! already understands: kana, Latin letters, digits, punctuation.

/// Classification of a single character
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharacterClass {
    /// Ideograph that may carry a furigana reading
    Kanji,
    /// Kana, Latin, digits, punctuation and everything else
    Other,
}

/// Pure character classification logic
pub trait CharacterClassifier: Send + Sync {
    /// Classify a character
    fn classify(&self, ch: char) -> CharacterClass;

    /// Check if character belongs to a kanji block
    fn is_kanji(&self, ch: char) -> bool {
        matches!(self.classify(ch), CharacterClass::Kanji)
    }

    /// Check if a string contains at least one kanji
    fn contains_kanji(&self, text: &str) -> bool {
        text.chars().any(|ch| self.is_kanji(ch))
    }
}

/// Default classifier based on the CJK ideograph blocks used by dictionary kanji
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KanjiClassifier;

impl KanjiClassifier {
    /// Creates a new classifier
    pub fn new() -> Self {
        Self
    }
}

impl CharacterClassifier for KanjiClassifier {
    fn classify(&self, ch: char) -> CharacterClass {
        classify(ch)
    }
}

/// Classify a character with the default block table
pub fn classify(ch: char) -> CharacterClass {
    if is_kanji(ch) {
        CharacterClass::Kanji
    } else {
        CharacterClass::Other
    }
}

/// True for CJK ideographs and the kanji iteration/closing marks
pub fn is_kanji(ch: char) -> bool {
    matches!(ch,
        '\u{4E00}'..='\u{9FFF}'     // CJK Unified Ideographs
        | '\u{3400}'..='\u{4DBF}'   // CJK Extension A
        | '\u{20000}'..='\u{2EBEF}' // CJK Extensions B-F
        | '\u{F900}'..='\u{FAFF}'   // CJK Compatibility Ideographs
        | '\u{3005}'                // 々
        | '\u{3006}'                // 〆
    )
}

/// Check if a string contains at least one kanji
pub fn contains_kanji(text: &str) -> bool {
    text.chars().any(is_kanji)
}

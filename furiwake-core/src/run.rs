//! Run segmentation
//!
//! A run is a maximal slice of a word whose characters share one
//! [`CharacterClass`]. Offsets are character offsets, `end` exclusive.

use crate::classifier::{CharacterClass, CharacterClassifier, KanjiClassifier};

/// Maximal contiguous slice of a word with one classification
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Run {
    /// Classification shared by every character of the run
    pub kind: CharacterClass,
    /// Character offset of the first character
    pub start: usize,
    /// Character offset one past the last character
    pub end: usize,
    /// Literal text of the run
    pub text: String,
}

impl Run {
    /// Number of characters in the run
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Runs produced by [`segment`] are never empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether this run is a kanji block
    pub fn is_kanji(&self) -> bool {
        self.kind == CharacterClass::Kanji
    }

    /// Whether a character offset falls inside `[start, end)`
    pub fn contains(&self, position: usize) -> bool {
        (self.start..self.end).contains(&position)
    }

    /// Slice the run by character offsets relative to the whole word
    ///
    /// Offsets are clamped to the run.
    pub fn slice(&self, from: usize, to: usize) -> &str {
        let from = from.clamp(self.start, self.end) - self.start;
        let to = to.clamp(self.start, self.end) - self.start;
        if from >= to {
            return "";
        }

        let mut indices = self
            .text
            .char_indices()
            .map(|(byte, _)| byte)
            .chain(std::iter::once(self.text.len()));
        let begin = indices.nth(from).unwrap_or(self.text.len());
        let finish = indices.nth(to - from - 1).unwrap_or(self.text.len());
        &self.text[begin..finish]
    }
}

/// Split a word into runs using the default kanji classifier
pub fn segment(word: &str) -> Vec<Run> {
    segment_with(word, &KanjiClassifier)
}

/// Split a word into runs using a custom classifier
pub fn segment_with<C: CharacterClassifier + ?Sized>(word: &str, classifier: &C) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();

    for (offset, ch) in word.chars().enumerate() {
        let kind = classifier.classify(ch);
        match runs.last_mut() {
            Some(run) if run.kind == kind => {
                run.end = offset + 1;
                run.text.push(ch);
            }
            _ => runs.push(Run {
                kind,
                start: offset,
                end: offset + 1,
                text: ch.to_string(),
            }),
        }
    }

    runs
}

/// Whether any run is a kanji block
pub fn has_kanji_run(runs: &[Run]) -> bool {
    runs.iter().any(Run::is_kanji)
}

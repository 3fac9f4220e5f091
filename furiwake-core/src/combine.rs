//! Entry point dispatching between the trivial cases and the two aligners

use crate::anchor::{self, FuriData};
use crate::classifier::{CharacterClassifier, KanjiClassifier};
use crate::segment::Segment;
use crate::{explicit, fallback, run};

/// Split `word` into ruby segments
///
/// Explicit `furi_data` always wins over `reading`. Callers without a
/// reading pass `""`. The concatenated `text` of the result always equals
/// `word`.
///
/// ```rust
/// use furiwake_core::{combine_furi, Segment};
///
/// let segments = combine_furi("お世辞", "おせじ", Some(&"1:せ;2:じ".into()));
/// assert_eq!(
///     segments,
///     vec![Segment::plain("お"), Segment::new("せ", "世"), Segment::new("じ", "辞")]
/// );
/// ```
pub fn combine_furi(word: &str, reading: &str, furi_data: Option<&FuriData>) -> Vec<Segment> {
    combine_furi_with(&KanjiClassifier, word, reading, furi_data)
}

/// Same as [`combine_furi`] but returns `(furigana, text)` pairs
pub fn combine_furi_pairs(
    word: &str,
    reading: &str,
    furi_data: Option<&FuriData>,
) -> Vec<(String, String)> {
    combine_furi(word, reading, furi_data)
        .into_iter()
        .map(Segment::into_pair)
        .collect()
}

/// [`combine_furi`] with a custom character classifier
pub fn combine_furi_with<C: CharacterClassifier + ?Sized>(
    classifier: &C,
    word: &str,
    reading: &str,
    furi_data: Option<&FuriData>,
) -> Vec<Segment> {
    if word.is_empty() {
        return Vec::new();
    }

    if !classifier.contains_kanji(word) {
        return vec![Segment::plain(word)];
    }

    let runs = run::segment_with(word, classifier);
    let word_len = runs.last().map_or(0, |r| r.end);
    let anchors = anchor::parse(furi_data, word_len);

    if !anchors.is_empty() {
        log::trace!("'{word}': explicit alignment with {} anchors", anchors.len());
        return explicit::align(&runs, &anchors);
    }

    if word == reading {
        return vec![Segment::plain(word)];
    }

    log::trace!("'{word}': fallback alignment against '{reading}'");
    fallback::align(&runs, reading, word)
}

//! Alignment derived from the reading string
//!
//! Without explicit anchors the reading is diffed against the run
//! structure of the word: kana runs are assumed to appear literally in the
//! reading, and each kanji run receives whatever lies between the previous
//! kana and the leftmost occurrence of the next kana run.
//!
//! Leftmost matching is a heuristic. When the following kana recurs
//! earlier in the reading than its true position the preceding kanji run
//! receives a reading that is too short.

use crate::run::{has_kanji_run, Run};
use crate::segment::Segment;

/// Derive per-kanji-run furigana by walking the reading left to right
pub fn align(runs: &[Run], reading: &str, word: &str) -> Vec<Segment> {
    if word == reading || !has_kanji_run(runs) {
        return vec![Segment::plain(word)];
    }

    let mut segments = Vec::with_capacity(runs.len());
    // Byte offset into `reading`, always on a char boundary
    let mut pos = 0;

    for (i, run) in runs.iter().enumerate() {
        if !run.is_kanji() {
            segments.push(Segment::plain(run.text.as_str()));
            pos = advance_chars(reading, pos, run.len());
            continue;
        }

        let rest = &reading[pos..];
        let furigana = match runs.get(i + 1).and_then(|next| rest.find(next.text.as_str())) {
            Some(j) => {
                pos += j;
                &rest[..j]
            }
            None => {
                if runs.get(i + 1).is_some() {
                    log::trace!(
                        "'{}' not found in reading '{}', giving the remainder to '{}'",
                        runs[i + 1].text,
                        reading,
                        run.text
                    );
                }
                pos = reading.len();
                rest
            }
        };

        segments.push(Segment::new(furigana, run.text.as_str()));
    }

    segments
}

/// Move a byte offset forward by `chars` characters, clamped to the end
fn advance_chars(s: &str, pos: usize, chars: usize) -> usize {
    s[pos..]
        .char_indices()
        .nth(chars)
        .map_or(s.len(), |(offset, _)| pos + offset)
}

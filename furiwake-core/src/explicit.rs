//! Alignment driven by explicit anchors
//!
//! Anchors are matched against run offsets rather than run identity, so a
//! single anchor at the start of a kanji block covers the whole block
//! (今日 → きょう) while several anchors inside one block split it
//! (世 → せ, 辞 → じ).

use crate::anchor::Anchor;
use crate::run::Run;
use crate::segment::Segment;

/// Split kanji runs at anchor boundaries and attach the anchored readings
///
/// `anchors` must be sorted ascending by position, as produced by
/// [`crate::anchor::parse`]. Anchors pointing into non-kanji runs are
/// ignored. A kanji run without any anchor is emitted unannotated.
pub fn align(runs: &[Run], anchors: &[Anchor]) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(runs.len() + anchors.len());

    for run in runs {
        if !run.is_kanji() {
            segments.push(Segment::plain(run.text.as_str()));
            continue;
        }

        let first = anchors.partition_point(|a| a.position < run.start);
        let last = anchors.partition_point(|a| a.position < run.end);
        let inside = &anchors[first..last];

        let Some(head) = inside.first() else {
            log::trace!("no anchor inside kanji run '{}'", run.text);
            segments.push(Segment::plain(run.text.as_str()));
            continue;
        };

        // Characters before the first anchor have no known reading.
        if head.position > run.start {
            segments.push(Segment::plain(run.slice(run.start, head.position)));
        }

        for (i, anchor) in inside.iter().enumerate() {
            let sub_end = inside.get(i + 1).map_or(run.end, |next| next.position);
            segments.push(Segment::new(
                anchor.reading.as_str(),
                run.slice(anchor.position, sub_end),
            ));
        }
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run::segment;

    fn pairs(segments: Vec<Segment>) -> Vec<(String, String)> {
        segments.into_iter().map(Segment::into_pair).collect()
    }

    fn p(f: &str, t: &str) -> (String, String) {
        (f.to_string(), t.to_string())
    }

    #[test]
    fn test_per_character_anchors() {
        let runs = segment("お世辞");
        let anchors = vec![Anchor::new(1, "せ"), Anchor::new(2, "じ")];
        assert_eq!(
            pairs(align(&runs, &anchors)),
            vec![p("", "お"), p("せ", "世"), p("じ", "辞")]
        );
    }

    #[test]
    fn test_single_anchor_covers_block() {
        let runs = segment("今日");
        let anchors = vec![Anchor::new(0, "きょう")];
        assert_eq!(pairs(align(&runs, &anchors)), vec![p("きょう", "今日")]);
    }

    #[test]
    fn test_sub_block_split() {
        // 一 + 人前 as two sub-blocks
        let runs = segment("一人前");
        let anchors = vec![Anchor::new(0, "いち"), Anchor::new(1, "にんまえ")];
        assert_eq!(
            pairs(align(&runs, &anchors)),
            vec![p("いち", "一"), p("にんまえ", "人前")]
        );
    }

    #[test]
    fn test_run_without_anchor_is_plain() {
        let runs = segment("漢字と仮名");
        let anchors = vec![Anchor::new(0, "かんじ")];
        assert_eq!(
            pairs(align(&runs, &anchors)),
            vec![p("かんじ", "漢字"), p("", "と"), p("", "仮名")]
        );
    }

    #[test]
    fn test_leading_unanchored_characters_kept() {
        let runs = segment("大人気");
        let anchors = vec![Anchor::new(1, "にんき")];
        assert_eq!(
            pairs(align(&runs, &anchors)),
            vec![p("", "大"), p("にんき", "人気")]
        );
    }

    #[test]
    fn test_anchor_on_kana_ignored() {
        let runs = segment("お世辞");
        let anchors = vec![Anchor::new(0, "お"), Anchor::new(1, "せじ")];
        assert_eq!(
            pairs(align(&runs, &anchors)),
            vec![p("", "お"), p("せじ", "世辞")]
        );
    }

    #[test]
    fn test_multiple_kanji_runs() {
        let runs = segment("食べ物");
        let anchors = vec![Anchor::new(0, "た"), Anchor::new(2, "もの")];
        assert_eq!(
            pairs(align(&runs, &anchors)),
            vec![p("た", "食"), p("", "べ"), p("もの", "物")]
        );
    }
}

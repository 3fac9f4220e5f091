//! Property tests for the invariants every furigana result must satisfy

use furiwake_core::{anchor, classifier, combine_furi, segment::base_text, FuriData};
use proptest::prelude::*;

const POOL: &[char] = &[
    '漢', '字', '世', '辞', '見', '舞', '大', '人', '々', 'お', 'い', 'し', 'の', 'か', 'ん',
    'カ', 'ー', 'a', 'Z', '1', '・',
];

fn word_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(POOL), 0..10)
        .prop_map(|chars| chars.into_iter().collect())
}

fn kana_word_strategy() -> impl Strategy<Value = String> {
    "[あ-んア-ンa-z0-9]{1,8}"
}

fn reading_strategy() -> impl Strategy<Value = String> {
    "[あ-ん]{0,10}"
}

fn encoded_strategy() -> impl Strategy<Value = String> {
    "([0-9x]{0,2}:?[あ-ん]{0,3};?){0,4}"
}

/// Non-empty word plus encoded furigana data whose entries are all in range
fn anchored_word_strategy() -> impl Strategy<Value = (String, String)> {
    prop::collection::vec(prop::sample::select(POOL), 1..10).prop_flat_map(|chars| {
        let len = chars.len();
        let word: String = chars.into_iter().collect();
        prop::collection::vec((0..len, "[あ-ん]{1,3}"), 1..5).prop_map(move |entries| {
            let encoded = entries
                .iter()
                .map(|(index, reading)| format!("{index}:{reading}"))
                .collect::<Vec<_>>()
                .join(";");
            (word.clone(), encoded)
        })
    })
}

proptest! {
    #[test]
    fn concatenation_reproduces_word(
        word in word_strategy(),
        reading in reading_strategy(),
        encoded in encoded_strategy(),
    ) {
        let data = FuriData::from(encoded);
        prop_assert_eq!(base_text(&combine_furi(&word, &reading, Some(&data))), word.clone());
        prop_assert_eq!(base_text(&combine_furi(&word, &reading, None)), word);
    }

    #[test]
    fn deterministic(
        word in word_strategy(),
        reading in reading_strategy(),
        encoded in encoded_strategy(),
    ) {
        let data = FuriData::from(encoded);
        prop_assert_eq!(
            combine_furi(&word, &reading, Some(&data)),
            combine_furi(&word, &reading, Some(&data))
        );
    }

    #[test]
    fn kana_word_is_single_plain_segment(
        word in kana_word_strategy(),
        reading in reading_strategy(),
        encoded in encoded_strategy(),
    ) {
        prop_assume!(!classifier::contains_kanji(&word));
        let data = FuriData::from(encoded);
        let segments = combine_furi(&word, &reading, Some(&data));
        prop_assert_eq!(segments.len(), 1);
        prop_assert_eq!(segments[0].furigana.as_str(), "");
        prop_assert_eq!(segments[0].text.as_str(), word.as_str());
    }

    #[test]
    fn explicit_data_overrides_reading(
        (word, encoded) in anchored_word_strategy(),
        first in reading_strategy(),
        second in reading_strategy(),
    ) {
        let data = FuriData::from(encoded);
        prop_assert!(!anchor::parse(Some(&data), word.chars().count()).is_empty());
        prop_assert_eq!(
            combine_furi(&word, &first, Some(&data)),
            combine_furi(&word, &second, Some(&data))
        );
    }

    #[test]
    fn invalid_entries_do_not_change_result(
        word in word_strategy(),
        reading in reading_strategy(),
        encoded in encoded_strategy(),
    ) {
        let clean = FuriData::from(encoded.clone());
        let noisy = FuriData::from(format!("{encoded};99:ざ;x:ざ;ざ;3:;"));
        let padded = FuriData::from(format!("99:ざ;{encoded}"));
        let expected = combine_furi(&word, &reading, Some(&clean));
        prop_assert_eq!(combine_furi(&word, &reading, Some(&noisy)), expected.clone());
        prop_assert_eq!(combine_furi(&word, &reading, Some(&padded)), expected);
    }

    #[test]
    fn encodings_normalize_identically(
        entries in prop::collection::vec((0usize..12, "[あ-ん]{1,3}"), 0..6),
    ) {
        let encoded = entries
            .iter()
            .map(|(index, reading)| format!("{index}:{reading}"))
            .collect::<Vec<_>>()
            .join(";");
        // Mapping keeps one reading per key, matching last-wins on the encoded side
        let mapping: FuriData = entries.iter().cloned().collect();
        prop_assert_eq!(
            anchor::parse(Some(&FuriData::from(encoded)), 12),
            anchor::parse(Some(&mapping), 12)
        );
    }
}

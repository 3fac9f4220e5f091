//! Furigana alignment for ruby-text rendering
//!
//! Given a Japanese word, its kana reading and optional explicit furigana
//! data, this crate splits the word into an ordered sequence of
//! `(furigana, text)` segments. Concatenating the `text` of every segment
//! always reproduces the word.
//!
//! # Architecture
//!
//! The pipeline is a composition of pure functions:
//! - [`classifier`]: kanji versus everything else
//! - [`run`]: maximal runs of one character class
//! - [`anchor`]: explicit furigana data normalized into sorted anchors
//! - [`explicit`]: alignment when anchors exist
//! - [`fallback`]: alignment diffed against the reading otherwise
//! - [`combine_furi`]: dispatch between the trivial cases and the aligners
//!
//! # Example
//!
//! ```rust
//! use furiwake_core::combine_furi_pairs;
//!
//! let pairs = combine_furi_pairs("お見舞い", "おみまい", None);
//! let expected = [("", "お"), ("みま", "見舞"), ("", "い")];
//! assert_eq!(pairs.len(), expected.len());
//! for ((furigana, text), (f, t)) in pairs.iter().zip(expected) {
//!     assert_eq!((furigana.as_str(), text.as_str()), (f, t));
//! }
//! ```

pub mod anchor;
pub mod cache;
pub mod classifier;
pub mod combine;
pub mod error;
pub mod explicit;
pub mod fallback;
pub mod run;
pub mod segment;

pub use anchor::{Anchor, FuriData};
pub use cache::FuriganaCache;
pub use classifier::{CharacterClass, CharacterClassifier, KanjiClassifier};
pub use combine::{combine_furi, combine_furi_pairs, combine_furi_with};
pub use error::{AnchorError, Result};
pub use run::Run;
pub use segment::Segment;

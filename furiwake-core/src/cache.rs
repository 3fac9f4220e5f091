//! Memoization of furigana results
//!
//! [`combine_furi`] is referentially transparent, so results can be shared
//! between callers keyed by `(word, reading, furi_data)`. Dictionary
//! exports repeat the same entries often enough for this to matter when
//! annotating in bulk.

use crate::anchor::FuriData;
use crate::combine::combine_furi;
use crate::segment::Segment;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// Default number of stored results
pub const DEFAULT_CAPACITY: usize = 4096;

type CacheKey = (String, String, Option<FuriData>);

/// Thread-safe bounded memo for [`combine_furi`]
///
/// Once `capacity` results are stored, further results are computed but
/// not inserted. A capacity of zero disables storage.
#[derive(Debug)]
pub struct FuriganaCache {
    entries: RwLock<HashMap<CacheKey, Arc<[Segment]>>>,
    capacity: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl Default for FuriganaCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl FuriganaCache {
    /// Create a cache with the default capacity
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cache storing at most `capacity` results
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            capacity,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Look up or compute the segments for an entry
    pub fn get_or_compute(
        &self,
        word: &str,
        reading: &str,
        furi_data: Option<&FuriData>,
    ) -> Arc<[Segment]> {
        let key: CacheKey = (word.to_string(), reading.to_string(), furi_data.cloned());

        if let Ok(entries) = self.entries.read() {
            if let Some(found) = entries.get(&key) {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return Arc::clone(found);
            }
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let computed: Arc<[Segment]> = combine_furi(word, reading, furi_data).into();

        if self.capacity > 0 {
            if let Ok(mut entries) = self.entries.write() {
                if entries.len() < self.capacity {
                    entries.insert(key, Arc::clone(&computed));
                }
            }
        }

        computed
    }

    /// Maximum number of stored results
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of stored results
    pub fn len(&self) -> usize {
        self.entries.read().map_or(0, |entries| entries.len())
    }

    /// Whether nothing is stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of lookups answered from the cache
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Number of lookups that had to compute
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Drop every stored result and reset the counters
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_hit_after_miss() {
        let cache = FuriganaCache::new();
        let first = cache.get_or_compute("大人しい", "おとなしい", None);
        let second = cache.get_or_compute("大人しい", "おとなしい", None);

        assert_eq!(first, second);
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_furi_data_is_part_of_key() {
        let cache = FuriganaCache::new();
        let data = FuriData::from("0:きょう");
        let explicit = cache.get_or_compute("今日", "こんにち", Some(&data));
        let fallback = cache.get_or_compute("今日", "こんにち", None);

        assert_eq!(explicit[0].furigana, "きょう");
        assert_eq!(fallback[0].furigana, "こんにち");
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_capacity_bound() {
        let cache = FuriganaCache::with_capacity(1);
        cache.get_or_compute("漢字", "かんじ", None);
        cache.get_or_compute("仮名", "かな", None);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.capacity(), 1);

        // Result is still correct when not stored
        let segments = cache.get_or_compute("仮名", "かな", None);
        assert_eq!(segments[0].furigana, "かな");
        assert_eq!(cache.hits(), 0);
    }

    #[test]
    fn test_zero_capacity_disables_storage() {
        let cache = FuriganaCache::with_capacity(0);
        cache.get_or_compute("漢字", "かんじ", None);
        cache.get_or_compute("漢字", "かんじ", None);
        assert!(cache.is_empty());
        assert_eq!(cache.misses(), 2);
    }

    #[test]
    fn test_clear() {
        let cache = FuriganaCache::new();
        cache.get_or_compute("漢字", "かんじ", None);
        cache.get_or_compute("漢字", "かんじ", None);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.hits(), 0);
        assert_eq!(cache.misses(), 0);
    }

    #[test]
    fn test_shared_between_threads() {
        let cache = Arc::new(FuriganaCache::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    let segments = cache.get_or_compute("お見舞い", "おみまい", None);
                    segments.iter().map(|s| s.text.as_str()).collect::<String>()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), "お見舞い");
        }
        assert_eq!(cache.hits() + cache.misses(), 4);
        assert_eq!(cache.len(), 1);
    }
}

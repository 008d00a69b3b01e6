#![forbid(unsafe_code)]

//! LRU width cache for repeated string measurement.
//!
//! Layout code tends to measure the same labels over and over. The cache
//! remembers computed widths for one [`Condition`]; switching the condition
//! drops every entry, since widths of ambiguous or joined text change with it.
//!
//! # Example
//! ```
//! use ftui_width::{Condition, WidthCache};
//!
//! let mut cache = WidthCache::with_condition(1000, Condition::new());
//!
//! assert_eq!(cache.get_or_compute("Hello, 世界"), 11);
//! assert_eq!(cache.get_or_compute("Hello, 世界"), 11);
//!
//! let stats = cache.stats();
//! assert_eq!(stats.hits, 1);
//! assert_eq!(stats.misses, 1);
//! ```

use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;

use lru::LruCache;
use rustc_hash::FxHasher;
use tracing::trace;

use crate::condition::{Condition, default_condition};

/// Default cache capacity.
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

/// Statistics about cache performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses.
    pub misses: u64,
    /// Current number of entries.
    pub size: usize,
    /// Maximum capacity.
    pub capacity: usize,
}

impl CacheStats {
    /// Hit rate in `0.0..=1.0`.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache of string widths measured under one [`Condition`].
///
/// Keys are 64-bit FxHash digests of the text rather than the text itself.
/// A collision returns the width of the other string; at 64 bits this is
/// not a practical concern for UI labels.
///
/// Not thread-safe; wrap it in a mutex or keep one per thread.
#[derive(Debug)]
pub struct WidthCache {
    cache: LruCache<u64, usize>,
    condition: Condition,
    hits: u64,
    misses: u64,
}

fn non_zero(capacity: usize) -> NonZeroUsize {
    NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN)
}

impl WidthCache {
    /// Create a cache bound to the current process-wide default condition.
    ///
    /// A capacity of zero is raised to 1.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::with_condition(capacity, default_condition())
    }

    /// Create a cache bound to `condition`.
    #[must_use]
    pub fn with_condition(capacity: usize, condition: Condition) -> Self {
        Self {
            cache: LruCache::new(non_zero(capacity)),
            condition,
            hits: 0,
            misses: 0,
        }
    }

    /// Create a cache with [`DEFAULT_CACHE_CAPACITY`] entries.
    #[must_use]
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }

    /// Condition the cached widths were measured with.
    #[must_use]
    pub const fn condition(&self) -> Condition {
        self.condition
    }

    /// Rebind the cache to another condition.
    ///
    /// Entries are dropped when the condition actually changes; statistics
    /// are kept.
    pub fn set_condition(&mut self, condition: Condition) {
        if condition == self.condition {
            return;
        }
        trace!(
            east_asian_width = condition.east_asian_width,
            zwj_sequences = condition.zwj_sequences,
            dropped = self.cache.len(),
            "width cache condition changed"
        );
        self.condition = condition;
        self.cache.clear();
    }

    /// Cached width of `text`, measuring and storing it on a miss.
    #[inline]
    pub fn get_or_compute(&mut self, text: &str) -> usize {
        let condition = self.condition;
        self.get_or_compute_with(text, |s| condition.string_width(s))
    }

    /// Cached width of `text`, using `compute` to measure it on a miss.
    pub fn get_or_compute_with<F>(&mut self, text: &str, compute: F) -> usize
    where
        F: FnOnce(&str) -> usize,
    {
        let hash = hash_text(text);

        if let Some(&width) = self.cache.get(&hash) {
            self.hits += 1;
            return width;
        }

        self.misses += 1;
        let width = compute(text);
        self.cache.put(hash, width);
        width
    }

    /// Whether `text` has a cached width. Does not touch LRU order or stats.
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.cache.contains(&hash_text(text))
    }

    /// Cached width of `text` without computing. Updates LRU order.
    #[must_use]
    pub fn get(&mut self, text: &str) -> Option<usize> {
        self.cache.get(&hash_text(text)).copied()
    }

    /// Cached width of `text` without updating LRU order.
    #[must_use]
    pub fn peek(&self, text: &str) -> Option<usize> {
        self.cache.peek(&hash_text(text)).copied()
    }

    /// Measure and store `text` if it is not cached yet.
    pub fn preload(&mut self, text: &str) {
        let hash = hash_text(text);
        if !self.cache.contains(&hash) {
            let width = self.condition.string_width(text);
            self.cache.put(hash, width);
        }
    }

    /// Preload several strings.
    pub fn preload_many<'a>(&mut self, texts: impl IntoIterator<Item = &'a str>) {
        for text in texts {
            self.preload(text);
        }
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Zero the hit and miss counters.
    pub fn reset_stats(&mut self) {
        self.hits = 0;
        self.misses = 0;
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.cache.len(),
            capacity: self.cache.cap().get(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }

    /// Change the capacity, evicting least recently used entries if the
    /// cache shrinks below its current size.
    pub fn resize(&mut self, new_capacity: usize) {
        self.cache.resize(non_zero(new_capacity));
    }
}

impl Default for WidthCache {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

#[inline]
fn hash_text(text: &str) -> u64 {
    let mut hasher = FxHasher::default();
    text.hash(&mut hasher);
    hasher.finish()
}

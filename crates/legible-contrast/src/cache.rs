//! Memo table for text color decisions.
//!
//! Keys are the raw input strings joined with `-`; values never go stale
//! because a decision is a pure function of its inputs. Entries are only
//! ever added, until [`DecisionCache::clear`] drops all of them at once.
//!
//! The cache is a plain owned value with no internal locking. Hosts that
//! share one across threads wrap it (or the owning `Decider`) themselves.

use std::collections::HashMap;

use crate::text::TextColor;

/// Build the memo key for a background/container pair.
///
/// The separator is a bare `-`, so pairs whose strings contain `-` can
/// collide: `("white", "black-white")` and `("white-black", "white")` share
/// a key. Memoized results match a fresh decision only while neither input
/// contains `-`, which holds for every color the parser understands.
#[must_use]
pub fn cache_key(background: &str, container: &str) -> String {
    format!("{background}-{container}")
}

/// Hit and miss counters, for observing cache behaviour from outside.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the table.
    pub hits: u64,

    /// Lookups that found nothing.
    pub misses: u64,
}

/// Decision memo table plus lookup counters.
#[derive(Debug, Clone, Default)]
pub struct DecisionCache {
    entries: HashMap<String, TextColor>,
    stats: CacheStats,
}

impl DecisionCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a key, counting the hit or miss.
    pub fn get(&mut self, key: &str) -> Option<TextColor> {
        let found = self.entries.get(key).copied();
        if found.is_some() {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
        }
        found
    }

    /// Whether `key` has an entry. Not counted in the stats.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Store a decision.
    pub fn insert(&mut self, key: String, text: TextColor) {
        self.entries.insert(key, text);
    }

    /// Drop every entry and zero the counters. Returns how many entries
    /// were dropped.
    pub fn clear(&mut self) -> usize {
        let evicted = self.entries.len();
        self.entries.clear();
        self.stats = CacheStats::default();
        evicted
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn stats(&self) -> CacheStats {
        self.stats
    }
}

//! Cache Store Module
//!
//! Process-wide key-value cache over a sharded concurrent map. Entries never
//! expire on their own; they leave only through explicit invalidation.

use dashmap::DashMap;
use tracing::debug;

use crate::cache::{CacheCounters, CacheStats};

// == Key Value Cache ==
/// Thread-safe cache mapping string keys to values of one type.
///
/// All operations take `&self`; share the cache with `Arc` instead of a lock.
#[derive(Debug)]
pub struct KeyValueCache<V> {
    /// Key-value storage
    entries: DashMap<String, V>,
    /// Hit/miss/invalidation counters
    counters: CacheCounters,
}

impl<V: Clone> KeyValueCache<V> {
    // == Constructor ==
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            counters: CacheCounters::new(),
        }
    }

    // == Put ==
    /// Stores a value, overwriting whatever the key held before.
    pub fn put(&self, key: impl Into<String>, value: V) {
        let key = key.into();
        debug!("Cached: {}", key);
        self.entries.insert(key, value);
    }

    // == Get ==
    /// Returns a clone of the value stored under `key`, if any.
    ///
    /// A miss is a normal outcome, not an error.
    pub fn get(&self, key: &str) -> Option<V> {
        match self.entries.get(key) {
            Some(entry) => {
                self.counters.record_hit();
                debug!("Cache hit: {}", key);
                Some(entry.value().clone())
            }
            None => {
                self.counters.record_miss();
                debug!("Cache miss: {}", key);
                None
            }
        }
    }

    // == Contains ==
    /// Checks membership without fetching or counting a lookup.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Invalidate ==
    /// Removes a single key. Absent keys are ignored.
    pub fn invalidate(&self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.counters.record_invalidations(1);
            debug!("Cache invalidated: {}", key);
        }
    }

    // == Invalidate Prefix ==
    /// Removes every key starting with `prefix`.
    ///
    /// Returns the number of entries removed, which may be zero.
    pub fn invalidate_prefix(&self, prefix: &str) -> usize {
        let mut removed = 0;
        self.entries.retain(|key, _| {
            let keep = !key.starts_with(prefix);
            if !keep {
                removed += 1;
            }
            keep
        });

        self.counters.record_invalidations(removed);
        debug!("Cache prefix invalidated: {}* ({} entries)", prefix, removed);
        removed
    }

    // == Clear ==
    /// Removes all entries.
    pub fn clear(&self) {
        let removed = self.entries.len();
        self.entries.clear();
        self.counters.record_invalidations(removed);
        debug!("Cache cleared ({} entries)", removed);
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.counters.snapshot(self.entries.len())
    }
}

impl<V: Clone> Default for KeyValueCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

//! Explicitly cleared memoization tables.
//!
//! Entries live until [`MemoCache::clear`] is called. The mining driver clears
//! the model's caches once per cluster; nothing is evicted automatically.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

/// Counters for one memo table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    /// Fraction of lookups answered from the table, 0.0 when nothing was looked up.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// A memo table keyed by the literal arguments of the memoized call.
#[derive(Clone, Debug)]
pub struct MemoCache<K, V> {
    entries: HashMap<K, V>,
    hits: u64,
    misses: u64,
}

impl<K: Eq + Hash, V: Clone> MemoCache<K, V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Look a key up, counting the hit or miss.
    pub fn get(&mut self, key: &K) -> Option<V> {
        match self.entries.get(key) {
            Some(value) => {
                self.hits += 1;
                Some(value.clone())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    pub fn insert(&mut self, key: K, value: V) {
        self.entries.insert(key, value);
    }

    /// Return the cached value or compute, store and return it.
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce() -> V) -> V {
        if let Some(value) = self.get(&key) {
            return value;
        }
        let value = compute();
        self.entries.insert(key, value.clone());
        value
    }

    /// Like [`MemoCache::get_or_compute`]; failures are returned and not cached.
    pub fn get_or_try_compute<E>(
        &mut self,
        key: K,
        compute: impl FnOnce() -> Result<V, E>,
    ) -> Result<V, E> {
        if let Some(value) = self.get(&key) {
            return Ok(value);
        }
        let value = compute()?;
        self.entries.insert(key, value.clone());
        Ok(value)
    }

    /// Drop every entry. Hit and miss counters keep running.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}

impl<K: Eq + Hash, V: Clone> Default for MemoCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_once_per_key() {
        let mut cache: MemoCache<u32, String> = MemoCache::new();
        let mut calls = 0;

        for _ in 0..3 {
            let value = cache.get_or_compute(7, || {
                calls += 1;
                "seven".to_string()
            });
            assert_eq!(value, "seven");
        }

        assert_eq!(calls, 1);
        let stats = cache.stats();
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
        assert!((stats.hit_rate() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_failures_are_not_cached() {
        let mut cache: MemoCache<u32, u32> = MemoCache::new();
        let err: Result<u32, &str> = cache.get_or_try_compute(1, || Err("boom"));
        assert_eq!(err, Err("boom"));
        assert!(cache.is_empty());

        let ok: Result<u32, &str> = cache.get_or_try_compute(1, || Ok(11));
        assert_eq!(ok, Ok(11));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clear_forces_recompute() {
        let mut cache: MemoCache<&str, u32> = MemoCache::new();
        cache.get_or_compute("a", || 1);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.get_or_compute("a", || 2), 2);
    }

    #[test]
    fn test_empty_stats() {
        let cache: MemoCache<u8, u8> = MemoCache::default();
        assert_eq!(cache.stats(), CacheStats::default());
        assert_eq!(cache.stats().hit_rate(), 0.0);
    }
}

// src/counter.rs
//! Counting multiset.
//!
//! Tallies repeated occurrences of the same key: caller/callee pairs before
//! they become graph edges, and files inside a reference bucket.

use std::collections::HashMap;
use std::hash::Hash;

/// A map from key to occurrence count. Keys are never removed.
#[derive(Debug, Clone)]
pub struct IncrementableSet<K> {
    counts: HashMap<K, u64>,
}

impl<K> Default for IncrementableSet<K> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> IncrementableSet<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `key`, inserting it first if absent.
    pub fn increment(&mut self, key: K) {
        self.increment_by(key, 1);
    }

    /// Adds `times` occurrences of `key` at once. Zero occurrences leave the
    /// set untouched; counts saturate at `u64::MAX`.
    pub fn increment_by(&mut self, key: K, times: u64) {
        if times == 0 {
            return;
        }
        let count = self.counts.entry(key).or_insert(0);
        *count = count.saturating_add(times);
    }

    /// Returns the count for `key`, 0 when it was never seen.
    #[must_use]
    pub fn get(&self, key: &K) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&K, u64)> {
        self.counts.iter().map(|(k, v)| (k, *v))
    }
}

impl<K: Eq + Hash> FromIterator<K> for IncrementableSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::new();
        for key in iter {
            set.increment(key);
        }
        set
    }
}

//! Thread-safe append-only memo tables
//!
//! Reads take the shared lock; a miss takes the exclusive lock only to
//! insert. Entries are never evicted or overwritten, so a poisoned lock
//! still guards consistent data and is recovered rather than reported.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Hit/miss counters of one memo table
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MemoStats {
    /// Lookups answered from the table
    pub hits: u64,
    /// Lookups that had to compute the value
    pub misses: u64,
    /// Entries currently stored
    pub entries: usize,
}

impl MemoStats {
    /// Fraction of lookups answered from the table
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Statistics for every cache a stemmer owns
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CacheStats {
    /// Word → stem cache
    pub stems: MemoStats,
    /// Letter-type run cache
    pub letter_runs: MemoStats,
    /// Consonant-y marking cache
    pub marked_forms: MemoStats,
}

/// Append-only `String` → `String` map shared across threads
#[derive(Debug)]
pub struct Memo {
    name: &'static str,
    entries: RwLock<HashMap<String, String>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl Memo {
    /// Create an empty table; `name` only appears in log output
    pub fn new(name: &'static str) -> Self {
        Self::with_capacity(name, 0)
    }

    /// Create an empty table with room for `capacity` entries
    pub fn with_capacity(name: &'static str, capacity: usize) -> Self {
        Self {
            name,
            entries: RwLock::new(HashMap::with_capacity(capacity)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Look up a key, counting the hit or miss
    pub fn get(&self, key: &str) -> Option<String> {
        let found = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned();

        match found {
            Some(value) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(value)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                log::trace!("{} cache miss: {key:?}", self.name);
                None
            }
        }
    }

    /// Store a value unless the key is already present
    ///
    /// Returns the value that ends up stored. When two threads race on the
    /// same key, the first insert wins and both observe its value.
    pub fn insert(&self, key: String, value: String) -> String {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key)
            .or_insert(value)
            .clone()
    }

    /// Return the cached value, computing and storing it on a miss
    pub fn get_or_insert_with(&self, key: &str, compute: impl FnOnce() -> String) -> String {
        if let Some(value) = self.get(key) {
            return value;
        }
        self.insert(key.to_string(), compute())
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing is stored yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the counters
    pub fn stats(&self) -> MemoStats {
        MemoStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }
}

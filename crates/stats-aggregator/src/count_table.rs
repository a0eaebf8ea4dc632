//! Insertion-Ordered Count Table
//!
//! Grouped counts keyed by first encounter. Downstream consumers rely on
//! insertion order as the tie-break when ranking, so the table is a small
//! vector of pairs rather than a hash map.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Counts per key, iterated in first-encounter order.
#[derive(Debug, Clone, PartialEq)]
pub struct CountTable<K> {
    entries: Vec<(K, u64)>,
}

impl<K: PartialEq> CountTable<K> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Increment the count for a key, inserting it at the end on first sight.
    pub fn increment(&mut self, key: K) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((key, 1)),
        }
    }

    /// Get the count for a key (zero when absent).
    pub fn get(&self, key: &K) -> u64 {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// Sum of every count.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> {
        self.entries.iter().map(|(k, count)| (k, *count))
    }
}

impl<K: PartialEq> Default for CountTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Serialize> Serialize for CountTable<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, count) in &self.entries {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}

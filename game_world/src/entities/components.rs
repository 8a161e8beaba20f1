//! Component definitions for entities.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Free-form string data attached to a player or location by mods.
///
/// Keys are compared verbatim (ordinal, case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ModData {
    entries: HashMap<String, String>,
}

impl ModData {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value stored under a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Set a value, returning the previous one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Remove a key, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over all keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ModData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Named counters tracked for a player (days played, items shipped, ...).
///
/// Lookups are case-insensitive and total: every name maps to at least zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "HashMap<String, u32>", into = "HashMap<String, u32>")]
pub struct PlayerStats {
    counters: HashMap<String, u32>,
}

impl PlayerStats {
    /// Create an empty stat table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a counter's value, or 0 if it was never set.
    pub fn get(&self, name: &str) -> u32 {
        self.counters
            .get(&normalize(name))
            .copied()
            .unwrap_or(0)
    }

    /// Set a counter to a specific value.
    pub fn set(&mut self, name: &str, value: u32) {
        self.counters.insert(normalize(name), value);
    }

    /// Add to a counter, saturating at `u32::MAX`. Returns the new value.
    pub fn increment(&mut self, name: &str, amount: u32) -> u32 {
        let counter = self.counters.entry(normalize(name)).or_insert(0);
        *counter = counter.saturating_add(amount);
        *counter
    }
}

fn normalize(name: &str) -> String {
    name.to_lowercase()
}

impl From<HashMap<String, u32>> for PlayerStats {
    fn from(raw: HashMap<String, u32>) -> Self {
        let mut stats = PlayerStats::new();
        for (name, value) in raw {
            stats.set(&name, value);
        }
        stats
    }
}

impl From<PlayerStats> for HashMap<String, u32> {
    fn from(stats: PlayerStats) -> Self {
        stats.counters
    }
}

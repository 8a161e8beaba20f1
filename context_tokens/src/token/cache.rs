//! Per-screen caches of validated token inputs.

use std::collections::HashMap;

/// One validated input and its most recent value.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<R, V> {
    /// The parsed form of the input, kept so refreshes don't re-parse.
    pub request: R,
    /// The most recently computed value.
    pub value: V,
    /// True until the value has been computed at least once.
    pub dirty: bool,
}

impl<R, V> CacheEntry<R, V> {
    /// Create an entry holding a placeholder value that still needs computing.
    pub fn pending(request: R, placeholder: V) -> Self {
        Self {
            request,
            value: placeholder,
            dirty: true,
        }
    }
}

/// The cache owned by one screen for one token.
///
/// Keys are the exact input strings that passed validation on that screen.
/// Entries are never evicted; they live as long as the screen does.
#[derive(Debug, Clone)]
pub struct ScopeCache<R, V> {
    entries: HashMap<String, CacheEntry<R, V>>,
}

impl<R, V> Default for ScopeCache<R, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<R, V> ScopeCache<R, V> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, input: &str) -> Option<&CacheEntry<R, V>> {
        self.entries.get(input)
    }

    pub fn get_mut(&mut self, input: &str) -> Option<&mut CacheEntry<R, V>> {
        self.entries.get_mut(input)
    }

    pub fn contains(&self, input: &str) -> bool {
        self.entries.contains_key(input)
    }

    /// Add an entry for a newly validated input.
    ///
    /// An existing entry is left untouched. Returns whether the entry was added.
    pub fn insert(&mut self, input: impl Into<String>, entry: CacheEntry<R, V>) -> bool {
        let input = input.into();
        if self.entries.contains_key(&input) {
            return false;
        }
        self.entries.insert(input, entry);
        true
    }

    /// Store a computed value for a cached input.
    ///
    /// Does nothing for inputs that were never validated. Returns whether the
    /// input was present.
    pub fn set(&mut self, input: &str, value: V) -> bool {
        match self.entries.get_mut(input) {
            Some(entry) => {
                entry.value = value;
                entry.dirty = false;
                true
            }
            None => false,
        }
    }

    /// Iterate over cached inputs, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub(crate) fn entries_mut(&mut self) -> impl Iterator<Item = (&str, &mut CacheEntry<R, V>)> {
        self.entries
            .iter_mut()
            .map(|(input, entry)| (input.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_existing_entry() {
        let mut cache: ScopeCache<(), Option<String>> = ScopeCache::new();

        assert!(cache.insert("player a", CacheEntry::pending((), None)));
        assert!(cache.set("player a", Some("1".to_string())));

        assert!(!cache.insert("player a", CacheEntry::pending((), None)));
        let entry = cache.get("player a").unwrap();
        assert_eq!(entry.value.as_deref(), Some("1"));
        assert!(!entry.dirty);
    }

    #[test]
    fn test_set_ignores_unknown_input() {
        let mut cache: ScopeCache<(), u32> = ScopeCache::new();
        assert!(!cache.set("daysPlayed", 5));
        assert!(cache.is_empty());
        assert!(!cache.contains("daysPlayed"));
    }

    #[test]
    fn test_keys_are_exact_inputs() {
        let mut cache: ScopeCache<(), u32> = ScopeCache::new();
        cache.insert("Farm", CacheEntry::pending((), 0));
        cache.insert("farm", CacheEntry::pending((), 0));

        let mut keys: Vec<_> = cache.keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["Farm", "farm"]);
        assert_eq!(cache.len(), 2);
    }
}

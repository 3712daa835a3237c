use std::collections::HashMap;
use std::hash::Hash;

/// Process-lifetime key-value state behind an explicit interface.
///
/// Karma points, preferences and active polls all live in stores owned by the
/// [`Bot`](crate::bot::Bot) rather than in ambient shared maps, so their
/// lifetime is visible at the type level. The state is volatile: nothing
/// survives a restart.
pub trait KeyValueStore<K, V> {
    fn get(&self, key: &K) -> Option<&V>;
    fn set(&mut self, key: K, value: V);
    fn delete(&mut self, key: &K) -> Option<V>;
}

/// A plain hash-map implementation of [`KeyValueStore`].
#[derive(Debug)]
pub struct InMemoryStore<K, V> {
    entries: HashMap<K, V>,
}

impl<K, V> InMemoryStore<K, V> {
    pub fn new() -> Self {
        InMemoryStore {
            entries: HashMap::new(),
        }
    }
}

impl<K, V> Default for InMemoryStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V> KeyValueStore<K, V> for InMemoryStore<K, V> {
    fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    fn set(&mut self, key: K, value: V) {
        self.entries.insert(key, value);
    }

    fn delete(&mut self, key: &K) -> Option<V> {
        self.entries.remove(key)
    }
}

//! Bidirectional key to dense-index mapping.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::Error;

/// Assigns each key a dense index in insertion order.
///
/// Once assigned, an index never changes; the mapping only grows until
/// `clear`. Inserting a key twice is an error, never a silent dedup.
#[derive(Debug, Clone)]
pub struct KeyIndex<K> {
    keys: Vec<K>,
    index: HashMap<K, usize>,
}

impl<K> Default for KeyIndex<K> {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K> KeyIndex<K>
where
    K: Hash + Eq + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the next unused dense index to `key`.
    pub fn insert(&mut self, key: K) -> Result<usize, Error> {
        if self.index.contains_key(&key) {
            return Err(Error::DuplicateKey);
        }
        let idx = self.keys.len();
        self.index.insert(key.clone(), idx);
        self.keys.push(key);
        Ok(idx)
    }

    pub fn get(&self, key: &K) -> Option<usize> {
        self.index.get(key).copied()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// All keys in insertion order; position equals assigned index.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.index.clear();
    }
}

//! Keyed disjoint-set structure over an open-ended set of hashable keys.

use std::collections::BTreeMap;
use std::hash::Hash;

use crate::error::Error;
use crate::key_index::KeyIndex;

/// Disjoint-set structure keyed by arbitrary hashable values.
///
/// Layers a [`KeyIndex`] over the same parent/size machinery as
/// [`UnionFind`](crate::union_find::UnionFind): each inserted key is
/// assigned the next dense index and starts as a singleton component.
/// Supports bulk reset via `clear` and non-destructive combination of two
/// independently built ensembles via `merge`.
#[derive(Debug, Clone)]
pub struct IndexedUnionFind<K> {
    keys: KeyIndex<K>,
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl<K> Default for IndexedUnionFind<K> {
    fn default() -> Self {
        Self {
            keys: KeyIndex::default(),
            parent: Vec::new(),
            size: Vec::new(),
            count: 0,
        }
    }
}

impl<K> IndexedUnionFind<K>
where
    K: Hash + Eq + Clone,
{
    /// Create an empty ensemble with no keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of keys.
    pub fn capacity(&self) -> usize {
        self.parent.len()
    }

    /// Number of disjoint components.
    pub fn count(&self) -> usize {
        self.count
    }

    /// True if `key` has an assigned index.
    pub fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    fn lookup(&self, key: &K) -> Result<usize, Error> {
        if self.keys.is_empty() {
            return Err(Error::Underflow);
        }
        self.keys.get(key).ok_or(Error::UnknownKey)
    }

    fn find_root(&self, idx: usize) -> usize {
        let mut root = idx;
        while root != self.parent[root] {
            root = self.parent[root];
        }
        root
    }

    fn compress(&mut self, idx: usize, root: usize) {
        let mut next = idx;
        while next != self.parent[next] {
            let curr = next;
            next = self.parent[next];
            self.parent[curr] = root;
        }
    }

    /// Create a new singleton component containing `key`.
    ///
    /// Returns the assigned dense index. The key must not already exist in
    /// the ensemble.
    pub fn insert(&mut self, key: K) -> Result<usize, Error> {
        let idx = self.keys.insert(key)?;
        self.parent.push(idx);
        self.size.push(1);
        self.count += 1;
        Ok(idx)
    }

    /// Root index of the component containing `key`, compressing the
    /// queried path. Same two-pass walk as the fixed variant.
    pub fn find(&mut self, key: &K) -> Result<usize, Error> {
        let idx = self.lookup(key)?;
        let root = self.find_root(idx);
        self.compress(idx, root);
        Ok(root)
    }

    /// Merge the component of `p` with the component of `q`.
    ///
    /// Already-connected pairs are a no-op. Smaller tree goes under the
    /// larger; on equal sizes the root of `p` survives. Both keys are
    /// validated before any parent is rewritten.
    pub fn join(&mut self, p: &K, q: &K) -> Result<(), Error> {
        let idx_p = self.lookup(p)?;
        let idx_q = self.lookup(q)?;

        let root_p = self.find_root(idx_p);
        self.compress(idx_p, root_p);
        let root_q = self.find_root(idx_q);
        self.compress(idx_q, root_q);
        if root_p == root_q {
            return Ok(());
        }

        if self.size[root_p] < self.size[root_q] {
            self.parent[root_p] = root_q;
            self.size[root_q] += self.size[root_p];
        } else {
            self.parent[root_q] = root_p;
            self.size[root_p] += self.size[root_q];
        }
        self.count -= 1;
        Ok(())
    }

    /// Number of keys in the component containing `key`.
    pub fn size(&mut self, key: &K) -> Result<usize, Error> {
        let root = self.find(key)?;
        Ok(self.size[root])
    }

    /// Drop every key and component. A hard reset: afterwards no keys exist
    /// at all, and inserts behave as on a fresh instance.
    pub fn clear(&mut self) {
        self.keys.clear();
        self.parent.clear();
        self.size.clear();
        self.count = 0;
    }

    /// Absorb every component of `other`, preserving its tree structure.
    ///
    /// Each key of `other` is assigned a dense index offset by this
    /// ensemble's pre-merge capacity, and its parent pointer is copied with
    /// the same offset, so compressed paths carry over verbatim instead of
    /// being rebuilt through repeated `insert` and `join`. The key sets must
    /// be disjoint; the check runs before any mutation.
    pub fn merge(&mut self, other: &Self) -> Result<(), Error> {
        for key in other.keys.keys() {
            if self.keys.contains(key) {
                return Err(Error::DuplicateKey);
            }
        }

        let offset = self.parent.len();
        for (idx, key) in other.keys.keys().iter().enumerate() {
            self.keys.insert(key.clone())?;
            self.parent.push(other.parent[idx] + offset);
            self.size.push(other.size[idx]);
        }
        self.count += other.count;
        Ok(())
    }

    /// Every key grouped by its compressed root index.
    ///
    /// Keys appear in insertion order within each component. Full-structure
    /// scan intended for diagnostics and tests.
    pub fn sets(&mut self) -> BTreeMap<usize, Vec<K>> {
        let mut components: BTreeMap<usize, Vec<K>> = BTreeMap::new();
        for idx in 0..self.parent.len() {
            let root = self.find_root(idx);
            self.compress(idx, root);
            let key = self.keys.keys()[idx].clone();
            components.entry(root).or_default().push(key);
        }
        components
    }
}

//! Weighted quick-union by size with full path compression.

use std::collections::BTreeMap;

use crate::error::Error;

/// Disjoint-set structure over the dense index range `0..capacity`.
///
/// Maintains the invariant that two indices are connected if and only if
/// they share a root parent (`parent[root] == root`). `join` attaches the
/// smaller tree under the larger one and `find` flattens every queried
/// path, which together give near-constant amortized cost per operation.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl UnionFind {
    /// Create `capacity` singleton components indexed `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            parent: (0..capacity).collect(),
            size: vec![1; capacity],
            count: capacity,
        }
    }

    /// Total number of keys.
    pub fn capacity(&self) -> usize {
        self.parent.len()
    }

    /// Number of disjoint components.
    pub fn count(&self) -> usize {
        self.count
    }

    /// True if `key` lies inside the fixed index range.
    pub fn contains(&self, key: usize) -> bool {
        key < self.parent.len()
    }

    fn check(&self, key: usize) -> Result<(), Error> {
        if self.contains(key) {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                key,
                capacity: self.parent.len(),
            })
        }
    }

    /// Immutable walk from `key` to its root.
    fn find_root(&self, key: usize) -> usize {
        let mut root = key;
        while root != self.parent[root] {
            root = self.parent[root];
        }
        root
    }

    /// Rewrite every parent on the path from `key` to point at `root`.
    fn compress(&mut self, key: usize, root: usize) {
        let mut next = key;
        while next != self.parent[next] {
            let curr = next;
            next = self.parent[next];
            self.parent[curr] = root;
        }
    }

    /// Root of the component containing `key`, compressing the queried path.
    ///
    /// Two passes: first an immutable walk to locate the root, then a second
    /// walk from `key` rewriting every visited parent directly to the root,
    /// so the whole path ends up at depth one.
    pub fn find(&mut self, key: usize) -> Result<usize, Error> {
        self.check(key)?;
        let root = self.find_root(key);
        self.compress(key, root);
        Ok(root)
    }

    /// Merge the component of `p` with the component of `q`.
    ///
    /// Already-connected pairs are a no-op. Otherwise the root of the smaller
    /// tree is re-parented under the root of the larger tree; on equal sizes
    /// the root of `p` survives. Both keys are validated before any parent is
    /// rewritten, so a failed call leaves no compression behind.
    pub fn join(&mut self, p: usize, q: usize) -> Result<(), Error> {
        self.check(p)?;
        self.check(q)?;

        let root_p = self.find(p)?;
        let root_q = self.find(q)?;
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
    pub fn size(&mut self, key: usize) -> Result<usize, Error> {
        let root = self.find(key)?;
        Ok(self.size[root])
    }

    /// Every live index grouped by its compressed root.
    ///
    /// Full-structure scan intended for diagnostics and tests.
    pub fn sets(&mut self) -> BTreeMap<usize, Vec<usize>> {
        let mut components: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for key in 0..self.parent.len() {
            let root = self.find_root(key);
            self.compress(key, root);
            components.entry(root).or_default().push(key);
        }
        components
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};

    /// Naive connectivity oracle: one label per key, union relabels.
    struct Labels {
        label: Vec<usize>,
    }

    impl Labels {
        fn new(n: usize) -> Self {
            Self {
                label: (0..n).collect(),
            }
        }

        fn union(&mut self, p: usize, q: usize) {
            let (a, b) = (self.label[p], self.label[q]);
            if a != b {
                for l in self.label.iter_mut() {
                    if *l == b {
                        *l = a;
                    }
                }
            }
        }

        fn connected(&self, p: usize, q: usize) -> bool {
            self.label[p] == self.label[q]
        }

        fn count(&self) -> usize {
            let mut seen = std::collections::HashSet::new();
            for &l in self.label.iter() {
                seen.insert(l);
            }
            seen.len()
        }

        fn size(&self, p: usize) -> usize {
            self.label.iter().filter(|&&l| l == self.label[p]).count()
        }
    }

    #[test]
    fn test_new_singletons() {
        let mut uf = UnionFind::new(10);
        assert_eq!(uf.capacity(), 10);
        assert_eq!(uf.count(), 10);
        for i in 0..10 {
            assert_eq!(uf.size(i).unwrap(), 1);
            assert_eq!(uf.find(i).unwrap(), i);
        }
    }

    #[test]
    fn test_join_chain() {
        let mut uf = UnionFind::new(10);
        uf.join(0, 1).unwrap();
        uf.join(1, 2).unwrap();
        assert_eq!(uf.count(), 8);
        assert_eq!(uf.find(0).unwrap(), uf.find(2).unwrap());
        assert_eq!(uf.size(0).unwrap(), 3);
    }

    #[test]
    fn test_join_idempotent() {
        let mut uf = UnionFind::new(10);
        uf.join(0, 1).unwrap();
        assert_eq!(uf.count(), 9);
        uf.join(0, 1).unwrap();
        assert_eq!(uf.count(), 9);
        assert_eq!(uf.size(1).unwrap(), 2);
    }

    #[test]
    fn test_tie_break_first_operand_survives() {
        let mut uf = UnionFind::new(4);
        uf.join(0, 1).unwrap();
        assert_eq!(uf.find(1).unwrap(), 0);
        uf.join(2, 3).unwrap();
        // Equal sizes again: the component of the first operand wins.
        uf.join(2, 0).unwrap();
        assert_eq!(uf.find(0).unwrap(), 2);
    }

    #[test]
    fn test_out_of_range() {
        let mut uf = UnionFind::new(5);
        assert!(!uf.contains(5));
        assert_eq!(
            uf.find(5),
            Err(Error::OutOfRange { key: 5, capacity: 5 })
        );
        assert_eq!(
            uf.size(7),
            Err(Error::OutOfRange { key: 7, capacity: 5 })
        );
        assert_eq!(
            uf.join(0, 5),
            Err(Error::OutOfRange { key: 5, capacity: 5 })
        );
        // The failed join must not have compressed or merged anything.
        assert_eq!(uf.count(), 5);
        assert_eq!(uf.size(0).unwrap(), 1);
    }

    #[test]
    fn test_find_flattens_path() {
        let mut uf = UnionFind::new(8);
        for i in 0..7 {
            uf.join(i, i + 1).unwrap();
        }
        let root = uf.find(7).unwrap();
        assert_eq!(uf.parent[7], root);
        for _ in 0..3 {
            assert_eq!(uf.find(7).unwrap(), root);
        }
        // After a full scan every node points directly at its root.
        uf.sets();
        for i in 0..8 {
            assert_eq!(uf.parent[i], root);
        }
    }

    #[test]
    fn test_sets_partition() {
        let mut uf = UnionFind::new(12);
        uf.join(0, 1).unwrap();
        uf.join(2, 3).unwrap();
        uf.join(1, 3).unwrap();
        uf.join(10, 11).unwrap();

        let components = uf.sets();
        assert_eq!(components.len(), uf.count());

        let mut all: Vec<usize> = Vec::new();
        for (root, keys) in components.iter() {
            assert_eq!(uf.size(*root).unwrap(), keys.len());
            for &k in keys.iter() {
                assert_eq!(uf.find(k).unwrap(), *root);
            }
            all.extend(keys.iter().copied());
        }
        all.sort();
        assert_eq!(all, (0..12).collect::<Vec<usize>>());
    }

    #[test]
    fn test_random_against_oracle() {
        let n = 200;
        let mut uf = UnionFind::new(n);
        let mut oracle = Labels::new(n);
        let mut rng = rand::rngs::StdRng::seed_from_u64(123);

        for _ in 0..1000 {
            let p = rng.gen_range(0..n);
            let q = rng.gen_range(0..n);
            uf.join(p, q).unwrap();
            oracle.union(p, q);

            let a = rng.gen_range(0..n);
            let b = rng.gen_range(0..n);
            assert_eq!(
                uf.find(a).unwrap() == uf.find(b).unwrap(),
                oracle.connected(a, b)
            );
            assert_eq!(uf.count(), oracle.count());
            assert_eq!(uf.size(a).unwrap(), oracle.size(a));
        }

        // Root sizes cover every key exactly once.
        let total: usize = uf
            .sets()
            .values()
            .map(|keys| keys.len())
            .sum();
        assert_eq!(total, n);
    }
}

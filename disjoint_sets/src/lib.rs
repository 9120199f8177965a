//! Disjoint-set (union-find) data structures.
//!
//! Weighted quick-union by size with full path compression, in two
//! variants: [`UnionFind`] over a dense index range fixed at construction,
//! and [`IndexedUnionFind`] over an open-ended set of hashable keys grown
//! one insert at a time.

pub mod error;
pub mod indexed;
pub mod key_index;
pub mod union_find;

pub use error::Error;
pub use indexed::IndexedUnionFind;
pub use union_find::UnionFind;

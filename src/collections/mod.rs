//! Collection aliases and the supporting structures used by the engines.
//!
//! All hash-based containers in this crate use [`FxBuildHasher`]: vertex keys
//! are typically small integers or short strings, and nothing here is exposed
//! to untrusted input where DoS-resistant hashing would matter.
//!
//! | Type | Use Case |
//! |------|----------|
//! | [`VertexMap`] | Per-call scratch maps (distances, predecessors, colors) |
//! | [`VertexSet`] | Per-call visited sets |
//! | [`OrderedMap`] | Insertion-order preserving storage (graph adjacency) |
//! | [`DisjointSet`] | Union-find over a fixed element collection |
//! | [`MinHeap`] | Binary min-heap with a caller-supplied comparison |

mod disjoint_set;
mod min_heap;

pub use disjoint_set::DisjointSet;
pub use min_heap::MinHeap;

use rustc_hash::FxBuildHasher;

/// Hash map keyed by vertex, used for per-call algorithm state.
pub type VertexMap<K, V> = std::collections::HashMap<K, V, FxBuildHasher>;

/// Hash set of vertices, used for per-call visited tracking.
pub type VertexSet<T> = std::collections::HashSet<T, FxBuildHasher>;

/// Map preserving insertion order.
pub type OrderedMap<K, V> = indexmap::IndexMap<K, V, FxBuildHasher>;

/// Create a new empty [`VertexMap`].
#[inline]
#[must_use]
pub fn vertex_map<K, V>() -> VertexMap<K, V> {
    VertexMap::with_hasher(FxBuildHasher)
}

/// Create a new [`VertexMap`] with the specified capacity.
#[inline]
#[must_use]
pub fn vertex_map_with_capacity<K, V>(capacity: usize) -> VertexMap<K, V> {
    VertexMap::with_capacity_and_hasher(capacity, FxBuildHasher)
}

/// Create a new empty [`VertexSet`].
#[inline]
#[must_use]
pub fn vertex_set<T>() -> VertexSet<T> {
    VertexSet::with_hasher(FxBuildHasher)
}

/// Create a new empty [`OrderedMap`].
#[inline]
#[must_use]
pub fn ordered_map<K, V>() -> OrderedMap<K, V> {
    OrderedMap::with_hasher(FxBuildHasher)
}

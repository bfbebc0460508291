//! Union-find over a fixed collection of elements.
//!
//! Elements are mapped to dense indices once at construction; parent pointers and
//! ranks live in flat vectors indexed by those positions. The structure never grows
//! after construction, so the sets always partition exactly the initial collection.

use crate::{
    collections::{vertex_map_with_capacity, VertexMap},
    graph::Vertex,
    Error, Result,
};

/// A disjoint-set forest with path compression and union by rank.
///
/// # Examples
///
/// ```rust
/// use graphworks::collections::DisjointSet;
///
/// let mut sets = DisjointSet::new(["a", "b", "c"]);
/// assert!(sets.union(&"a", &"b")?);
/// assert!(!sets.union(&"b", &"a")?);
/// assert_eq!(sets.find(&"b")?, "a");
/// assert_eq!(sets.set_count(), 2);
/// # Ok::<(), graphworks::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DisjointSet<T: Vertex> {
    elements: Vec<T>,
    index: VertexMap<T, usize>,
    parent: Vec<usize>,
    rank: Vec<u32>,
    sets: usize,
}

impl<T: Vertex> DisjointSet<T> {
    /// Creates one singleton set per element. Repeated elements are registered once.
    pub fn new<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let iter = elements.into_iter();
        let (lower, _) = iter.size_hint();

        let mut set = DisjointSet {
            elements: Vec::with_capacity(lower),
            index: vertex_map_with_capacity(lower),
            parent: Vec::with_capacity(lower),
            rank: Vec::with_capacity(lower),
            sets: 0,
        };

        for element in iter {
            if set.index.contains_key(&element) {
                continue;
            }
            let id = set.elements.len();
            set.index.insert(element.clone(), id);
            set.elements.push(element);
            set.parent.push(id);
            set.rank.push(0);
        }
        set.sets = set.elements.len();
        set
    }

    /// Number of registered elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if no elements were registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of disjoint sets currently in the partition.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Returns the representative of the set containing `element`.
    ///
    /// Every element on the lookup path is re-pointed directly at the root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementNotFound`] if `element` was not registered at construction.
    pub fn find(&mut self, element: &T) -> Result<T> {
        let id = self.position(element)?;
        let root = self.find_root(id);
        Ok(self.elements[root].clone())
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// The lower-ranked root is attached below the higher-ranked one. On equal ranks
    /// the root of `b` is attached below the root of `a`, and the rank of `a`'s root grows.
    ///
    /// Returns `false` if both were already in the same set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementNotFound`] if either element was not registered.
    pub fn union(&mut self, a: &T, b: &T) -> Result<bool> {
        let a = self.position(a)?;
        let b = self.position(b)?;
        let root_a = self.find_root(a);
        let root_b = self.find_root(b);

        if root_a == root_b {
            return Ok(false);
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }

        self.sets -= 1;
        Ok(true)
    }

    /// Returns `true` if `a` and `b` share a representative.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementNotFound`] if either element was not registered.
    pub fn same_set(&mut self, a: &T, b: &T) -> Result<bool> {
        let a = self.position(a)?;
        let b = self.position(b)?;
        Ok(self.find_root(a) == self.find_root(b))
    }

    fn position(&self, element: &T) -> Result<usize> {
        self.index
            .get(element)
            .copied()
            .ok_or_else(|| Error::ElementNotFound(format!("{element:?}")))
    }

    fn find_root(&mut self, id: usize) -> usize {
        let mut root = id;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = id;
        while current != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }
}

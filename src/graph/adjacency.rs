//! Adjacency-list graph storage.

use std::fmt;

use crate::{
    collections::{ordered_map, OrderedMap},
    graph::{Edge, Vertex},
    Result,
};

/// A mutable, generically-typed adjacency-list graph.
///
/// Vertices map to their outgoing edges in insertion order. Parallel edges are kept
/// (multigraph semantics); nothing is de-duplicated. In an undirected graph each
/// [`add_edge`](Graph::add_edge) stores the edge under both endpoints.
///
/// # Examples
///
/// ```rust
/// use graphworks::Graph;
///
/// let mut graph = Graph::undirected();
/// graph.add_edge(1, 2, 4.0);
/// graph.add_edge(2, 3, None);
/// graph.add_vertex(9);
///
/// assert_eq!(graph.vertex_count(), 4);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.neighbors(&2)?.len(), 2);
/// # Ok::<(), graphworks::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Graph<T: Vertex> {
    adjacency: OrderedMap<T, Vec<Edge<T>>>,
    directed: bool,
}

impl<T: Vertex> Graph<T> {
    /// Creates an empty graph.
    #[must_use]
    pub fn new(directed: bool) -> Self {
        Graph {
            adjacency: ordered_map(),
            directed,
        }
    }

    /// Creates an empty directed graph.
    #[must_use]
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Creates an empty undirected graph.
    #[must_use]
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Returns `true` if edges are one-way.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of logical edges. Each undirected edge counts once, even though it
    /// is stored under both endpoints.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let stored: usize = self.adjacency.values().map(Vec::len).sum();
        if self.directed {
            stored
        } else {
            stored / 2
        }
    }

    /// Returns `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Adds `vertex` with an empty edge list if it is not present yet.
    ///
    /// Returns `true` if the vertex was inserted.
    pub fn add_vertex(&mut self, vertex: T) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, Vec::new());
        true
    }

    /// Appends the edge `source -> destination`, adding missing endpoints first.
    ///
    /// In an undirected graph the mirror edge `destination -> source` is appended as
    /// well. Duplicate edges are accepted.
    ///
    /// # Arguments
    ///
    /// * `source` - Tail of the edge
    /// * `destination` - Head of the edge
    /// * `weight` - Edge weight; accepts an `f64`, `Some(f64)` or `None`
    pub fn add_edge(&mut self, source: T, destination: T, weight: impl Into<Option<f64>>) {
        let weight = weight.into();
        self.add_vertex(source.clone());
        self.add_vertex(destination.clone());

        let edge = Edge::new(source.clone(), destination.clone(), weight);
        if !self.directed {
            let mirror = edge.reversed();
            self.adjacency.entry(destination).or_default().push(mirror);
        }
        self.adjacency.entry(source).or_default().push(edge);
    }

    /// Removes `vertex` and every edge pointing to it.
    ///
    /// Returns `false` (and does nothing) if the vertex is absent.
    pub fn remove_vertex(&mut self, vertex: &T) -> bool {
        if self.adjacency.shift_remove(vertex).is_none() {
            return false;
        }
        for edges in self.adjacency.values_mut() {
            edges.retain(|edge| edge.destination() != vertex);
        }
        true
    }

    /// Removes all edges `source -> destination`, and their mirrors in an
    /// undirected graph.
    ///
    /// Returns `true` if at least one edge was removed.
    pub fn remove_edge(&mut self, source: &T, destination: &T) -> bool {
        let mut removed = Self::strip(&mut self.adjacency, source, destination);
        if !self.directed {
            removed |= Self::strip(&mut self.adjacency, destination, source);
        }
        removed
    }

    fn strip(adjacency: &mut OrderedMap<T, Vec<Edge<T>>>, from: &T, to: &T) -> bool {
        match adjacency.get_mut(from) {
            Some(edges) => {
                let before = edges.len();
                edges.retain(|edge| edge.destination() != to);
                edges.len() != before
            }
            None => false,
        }
    }

    /// Returns the outgoing edges of `vertex` in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`](crate::Error::VertexNotFound) if the vertex
    /// was never added.
    pub fn neighbors(&self, vertex: &T) -> Result<&[Edge<T>]> {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or_else(|| vertex_not_found!(vertex))
    }

    /// Returns `true` if `vertex` is present.
    #[must_use]
    pub fn contains_vertex(&self, vertex: &T) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Returns `true` if at least one edge `source -> destination` is stored.
    #[must_use]
    pub fn contains_edge(&self, source: &T, destination: &T) -> bool {
        self.adjacency
            .get(source)
            .is_some_and(|edges| edges.iter().any(|edge| edge.destination() == destination))
    }

    /// Iterates vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &T> + '_ {
        self.adjacency.keys()
    }

    /// Iterates every stored edge, grouped by source in vertex insertion order.
    ///
    /// Undirected edges appear once per direction.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<T>> + '_ {
        self.adjacency.values().flatten()
    }

    /// Iterates `(vertex, outgoing edges)` pairs in insertion order.
    pub fn adjacency(&self) -> impl Iterator<Item = (&T, &[Edge<T>])> + '_ {
        self.adjacency
            .iter()
            .map(|(vertex, edges)| (vertex, edges.as_slice()))
    }

    /// Returns `true` if every stored edge carries a weight.
    #[must_use]
    pub fn is_weighted(&self) -> bool {
        self.edges().all(Edge::is_weighted)
    }
}

impl<T: Vertex> Default for Graph<T> {
    fn default() -> Self {
        Self::directed()
    }
}

impl<T: Vertex + fmt::Display> fmt::Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, edges) in &self.adjacency {
            write!(f, "{vertex}:")?;
            for edge in edges {
                write!(
                    f,
                    " -> {} (Weight: {})",
                    edge.destination(),
                    edge.weight().unwrap_or(0.0)
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

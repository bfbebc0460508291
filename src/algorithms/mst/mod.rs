//! Minimum spanning trees.
//!
//! - [`Kruskal`] - Sorts all edges and joins components through a
//!   [`DisjointSet`](crate::collections::DisjointSet)
//! - [`Prim`] - Grows a single tree from a start vertex over a
//!   [`MinHeap`](crate::collections::MinHeap) frontier
//!
//! Both engines require an undirected graph and, by default, a weight on every
//! edge they consider. On a disconnected graph they return a forest (Kruskal) or
//! the tree of the start vertex's component (Prim) unless configured with
//! [`SpanningPolicy::RequireTree`], in which case they fail with
//! [`Error::Disconnected`].
//!
//! On a connected graph the two engines produce trees of equal total weight; the
//! edge sets may differ when weights tie.

mod kruskal;
mod prim;

pub use kruskal::Kruskal;
pub use prim::Prim;

use crate::{
    config::SpanningPolicy,
    graph::{Edge, Graph, Vertex},
    Error, Result,
};

/// Edges accepted by a spanning tree engine.
#[derive(Debug, Clone, PartialEq)]
pub struct MinimumSpanningTree<T: Vertex> {
    /// Accepted edges in acceptance order
    pub edges: Vec<Edge<T>>,
    /// Sum of the resolved weights of `edges`
    pub total_weight: f64,
}

impl<T: Vertex> MinimumSpanningTree<T> {
    /// Number of accepted edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if no edge was accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns `true` if the edges span `vertex_count` vertices, i.e. there are
    /// exactly `vertex_count - 1` of them.
    #[must_use]
    pub fn is_spanning_tree(&self, vertex_count: usize) -> bool {
        self.edges.len() == vertex_count.saturating_sub(1)
    }
}

pub(crate) fn ensure_undirected<T: Vertex>(graph: &Graph<T>) -> Result<()> {
    if graph.is_directed() {
        Err(Error::GraphMustBeUndirected)
    } else {
        Ok(())
    }
}

/// Applies `policy` to a finished edge set.
pub(crate) fn finish<T: Vertex>(
    edges: Vec<Edge<T>>,
    total_weight: f64,
    graph: &Graph<T>,
    policy: SpanningPolicy,
) -> Result<MinimumSpanningTree<T>> {
    let tree = MinimumSpanningTree {
        edges,
        total_weight,
    };

    let required = graph.vertex_count().saturating_sub(1);
    if policy == SpanningPolicy::RequireTree && tree.len() < required {
        return Err(Error::Disconnected {
            accepted: tree.len(),
            required,
        });
    }
    Ok(tree)
}

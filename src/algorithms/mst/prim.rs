//! Prim's algorithm.

use crate::{
    algorithms::mst::{ensure_undirected, finish, MinimumSpanningTree},
    collections::{vertex_set, MinHeap},
    config::{SpanningPolicy, WeightPolicy},
    graph::{Edge, Graph, Vertex},
    Result,
};

/// Frontier entry: `(resolved weight, insertion sequence, edge)`.
type Candidate<'g, T> = (f64, usize, &'g Edge<T>);

fn candidate_order<T: Vertex>(a: &Candidate<'_, T>, b: &Candidate<'_, T>) -> std::cmp::Ordering {
    a.0.total_cmp(&b.0).then(a.1.cmp(&b.1))
}

/// Frontier-growing spanning tree engine.
///
/// Starting from one vertex, repeatedly takes the lightest frontier edge and
/// accepts it if it reaches an unvisited vertex, then pushes that vertex's edges
/// to unvisited neighbors. Only the start vertex's component is covered. Weights
/// are resolved as edges enter the frontier.
///
/// # Examples
///
/// ```rust
/// use graphworks::{algorithms::Prim, Graph};
///
/// let mut graph = Graph::undirected();
/// graph.add_edge(1, 2, 2.0);
/// graph.add_edge(2, 3, 1.0);
/// graph.add_edge(1, 3, 5.0);
///
/// let tree = Prim::new().spanning_tree(&graph, &1)?;
/// assert_eq!(tree.total_weight, 3.0);
/// # Ok::<(), graphworks::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Prim {
    weights: WeightPolicy,
    spanning: SpanningPolicy,
}

impl Prim {
    /// Creates an engine that requires weights and accepts a partial tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the missing-weight policy.
    #[must_use]
    pub fn weight_policy(mut self, policy: WeightPolicy) -> Self {
        self.weights = policy;
        self
    }

    /// Replaces the disconnected-input policy.
    #[must_use]
    pub fn spanning_policy(mut self, policy: SpanningPolicy) -> Self {
        self.spanning = policy;
        self
    }

    /// Computes a minimum spanning tree of the component containing `start`.
    ///
    /// # Type Parameters
    ///
    /// * `T` - Vertex type of the graph
    ///
    /// # Arguments
    ///
    /// * `graph` - An undirected graph
    /// * `start` - Vertex the frontier grows from
    ///
    /// # Errors
    ///
    /// - [`Error::GraphMustBeUndirected`](crate::Error::GraphMustBeUndirected) for a directed graph
    /// - [`Error::VertexNotFound`](crate::Error::VertexNotFound) if `start` is absent
    /// - [`Error::MissingWeight`](crate::Error::MissingWeight) for an unweighted frontier edge
    ///   under [`WeightPolicy::Required`]
    /// - [`Error::Disconnected`](crate::Error::Disconnected) if the tree does not reach every
    ///   vertex under [`SpanningPolicy::RequireTree`]
    pub fn spanning_tree<T: Vertex>(
        &self,
        graph: &Graph<T>,
        start: &T,
    ) -> Result<MinimumSpanningTree<T>> {
        ensure_undirected(graph)?;

        let target = graph.vertex_count().saturating_sub(1);
        let mut visited = vertex_set();
        let mut frontier = MinHeap::new(candidate_order::<T>);
        let mut sequence = 0usize;
        let mut accepted = Vec::with_capacity(target);
        let mut total_weight = 0.0;

        for edge in graph.neighbors(start)? {
            frontier.insert((self.weights.resolve(edge)?, sequence, edge));
            sequence += 1;
        }
        visited.insert(start.clone());

        while !frontier.is_empty() && accepted.len() < target {
            let (weight, _, edge) = frontier.extract_min()?;
            if visited.contains(edge.destination()) {
                continue;
            }

            visited.insert(edge.destination().clone());
            total_weight += weight;
            accepted.push(edge.clone());
            log::trace!(
                "prim accepted {:?} -> {:?} ({})",
                edge.source(),
                edge.destination(),
                weight
            );

            for next in graph.neighbors(edge.destination())? {
                if !visited.contains(next.destination()) {
                    frontier.insert((self.weights.resolve(next)?, sequence, next));
                    sequence += 1;
                }
            }
        }

        log::debug!(
            "prim accepted {} of {} edges needed from {:?}",
            accepted.len(),
            target,
            start
        );

        finish(accepted, total_weight, graph, self.spanning)
    }
}

//! Kruskal's algorithm.

use crate::{
    algorithms::mst::{ensure_undirected, finish, MinimumSpanningTree},
    collections::DisjointSet,
    config::{SpanningPolicy, WeightPolicy},
    graph::{Graph, Vertex},
    Result,
};

/// Edge-sorting spanning tree engine.
///
/// Every stored edge is sorted ascending by weight, ties keeping adjacency order,
/// and accepted when its endpoints lie in different components. The run stops
/// once `|V| - 1` edges are accepted.
///
/// # Examples
///
/// ```rust
/// use graphworks::{algorithms::Kruskal, Graph};
///
/// let mut graph = Graph::undirected();
/// graph.add_edge('A', 'B', 10.0);
/// graph.add_edge('A', 'C', 20.0);
/// graph.add_edge('B', 'C', 30.0);
/// graph.add_edge('B', 'D', 50.0);
/// graph.add_edge('C', 'D', 40.0);
/// graph.add_edge('C', 'E', 60.0);
/// graph.add_edge('D', 'E', 70.0);
///
/// let tree = Kruskal::new().spanning_tree(&graph)?;
/// assert_eq!(tree.total_weight, 130.0);
/// assert!(tree.is_spanning_tree(graph.vertex_count()));
/// # Ok::<(), graphworks::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Kruskal {
    weights: WeightPolicy,
    spanning: SpanningPolicy,
}

impl Kruskal {
    /// Creates an engine that requires weights and accepts forests.
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

    /// Computes a minimum spanning tree (or forest) of `graph`.
    ///
    /// # Errors
    ///
    /// - [`Error::GraphMustBeUndirected`](crate::Error::GraphMustBeUndirected) for a directed graph
    /// - [`Error::MissingWeight`](crate::Error::MissingWeight) for an unweighted edge under
    ///   [`WeightPolicy::Required`]
    /// - [`Error::Disconnected`](crate::Error::Disconnected) for a disconnected graph under
    ///   [`SpanningPolicy::RequireTree`]
    pub fn spanning_tree<T: Vertex>(&self, graph: &Graph<T>) -> Result<MinimumSpanningTree<T>> {
        ensure_undirected(graph)?;

        let mut candidates = Vec::new();
        for edge in graph.edges() {
            candidates.push((self.weights.resolve(edge)?, edge));
        }
        candidates.sort_by(|a, b| a.0.total_cmp(&b.0));

        let target = graph.vertex_count().saturating_sub(1);
        let mut components = DisjointSet::new(graph.vertices().cloned());
        let mut accepted = Vec::with_capacity(target);
        let mut total_weight = 0.0;

        for (weight, edge) in candidates {
            if accepted.len() >= target {
                break;
            }
            if components.union(edge.source(), edge.destination())? {
                log::trace!(
                    "kruskal accepted {:?} -> {:?} ({})",
                    edge.source(),
                    edge.destination(),
                    weight
                );
                total_weight += weight;
                accepted.push(edge.clone());
            }
        }

        log::debug!(
            "kruskal accepted {} of {} edges needed, {} components remain",
            accepted.len(),
            target,
            components.set_count()
        );

        finish(accepted, total_weight, graph, self.spanning)
    }
}

//! Bellman-Ford shortest paths with negative-cycle detection.

use crate::{
    algorithms::shortest_path::{ensure_endpoints, reconstruct, PathFinder, ShortestPath},
    collections::{vertex_map, vertex_map_with_capacity},
    config::WeightPolicy,
    graph::{Graph, Vertex},
    Error, Result,
};

/// Round-based shortest-path search that tolerates negative edge weights.
///
/// Runs exactly `|V| - 1` relaxation rounds over every stored edge regardless of
/// how early distances converge, then one validation pass. If any edge can still
/// be relaxed, a negative cycle is reachable from the start and the search fails
/// with [`Error::NegativeCycleDetected`] instead of returning a path. Negative
/// cycles not reachable from the start do not affect the result.
///
/// Unweighted edges default to weight `1.0` ([`WeightPolicy::unit`]); Dijkstra
/// instead requires weights by default. Use
/// [`weight_policy`](BellmanFord::weight_policy) to require them here too.
///
/// # Examples
///
/// ```rust
/// use graphworks::{algorithms::BellmanFord, Error, Graph, PathFinder};
///
/// let mut graph = Graph::directed();
/// graph.add_edge('a', 'b', 4.0);
/// graph.add_edge('a', 'c', 5.0);
/// graph.add_edge('c', 'b', -2.0);
///
/// let result = BellmanFord::new().search(&graph, &'a', &'b')?;
/// assert_eq!(result.path, vec!['a', 'c', 'b']);
/// assert_eq!(result.cost, 3.0);
///
/// graph.add_edge('b', 'c', -1.0);
/// let err = BellmanFord::new().search(&graph, &'a', &'b').unwrap_err();
/// assert!(matches!(err, Error::NegativeCycleDetected(_)));
/// # Ok::<(), graphworks::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BellmanFord {
    policy: WeightPolicy,
}

impl Default for BellmanFord {
    fn default() -> Self {
        BellmanFord {
            policy: WeightPolicy::unit(),
        }
    }
}

impl BellmanFord {
    /// Creates an engine that treats unweighted edges as unit weight.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the missing-weight policy.
    #[must_use]
    pub fn weight_policy(mut self, policy: WeightPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl<T: Vertex> PathFinder<T> for BellmanFord {
    fn name(&self) -> &'static str {
        "bellman-ford"
    }

    fn search(&self, graph: &Graph<T>, start: &T, destination: &T) -> Result<ShortestPath<T>> {
        ensure_endpoints(graph, start, destination)?;

        // Dense indices keep the relaxation loop free of hashing.
        let mut index = vertex_map_with_capacity(graph.vertex_count());
        let vertices: Vec<&T> = graph.vertices().collect();
        for (slot, vertex) in vertices.iter().enumerate() {
            index.insert(*vertex, slot);
        }
        let position = |vertex: &T| {
            index
                .get(vertex)
                .copied()
                .ok_or_else(|| vertex_not_found!(vertex))
        };

        let mut edges = Vec::new();
        for edge in graph.edges() {
            let weight = self.policy.resolve(edge)?;
            edges.push((position(edge.source())?, position(edge.destination())?, weight));
        }

        let origin = position(start)?;
        let mut distance = vec![f64::INFINITY; vertices.len()];
        let mut predecessor: Vec<Option<usize>> = vec![None; vertices.len()];
        distance[origin] = 0.0;

        let rounds = vertices.len().saturating_sub(1);
        for _ in 0..rounds {
            for &(from, to, weight) in &edges {
                if distance[from].is_finite() && distance[from] + weight < distance[to] {
                    distance[to] = distance[from] + weight;
                    predecessor[to] = Some(from);
                }
            }
        }

        let still_relaxes = edges.iter().any(|&(from, to, weight)| {
            distance[from].is_finite() && distance[from] + weight < distance[to]
        });
        if still_relaxes {
            log::debug!("bellman-ford found a negative cycle reachable from {:?}", start);
            return Err(Error::NegativeCycleDetected(format!("{start:?}")));
        }

        let reached = distance.iter().filter(|d| d.is_finite()).count();
        log::debug!(
            "bellman-ford ran {} rounds over {} edges, {} vertices reached from {:?}",
            rounds,
            edges.len(),
            reached,
            start
        );

        if start == destination {
            return Ok(ShortestPath {
                path: vec![start.clone()],
                cost: 0.0,
                explored: reached,
            });
        }

        let mut predecessors = vertex_map();
        predecessors.insert(start.clone(), None);
        for (slot, previous) in predecessor.iter().enumerate() {
            if let Some(previous) = previous {
                predecessors.insert(vertices[slot].clone(), Some(vertices[*previous].clone()));
            }
        }

        let path = reconstruct(&predecessors, start, destination)?;
        let cost = distance[position(destination)?];

        Ok(ShortestPath {
            path,
            cost,
            explored: reached,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Dijkstra;

    #[test]
    fn test_matches_dijkstra_on_positive_weights() {
        let mut graph = Graph::directed();
        graph.add_edge(1, 2, 4.5);
        graph.add_edge(1, 3, 2.0);
        graph.add_edge(3, 4, 1.5);
        graph.add_edge(2, 4, 3.0);

        let bf = BellmanFord::new().search(&graph, &1, &4).unwrap();
        let dj = Dijkstra::new(false).search(&graph, &1, &4).unwrap();
        assert_eq!(bf.path, vec![1, 3, 4]);
        assert_eq!(bf.cost, dj.cost);
    }

    #[test]
    fn test_negative_edge_without_cycle() {
        let mut graph = Graph::directed();
        graph.add_edge("s", "a", 2.0);
        graph.add_edge("s", "b", 5.0);
        graph.add_edge("b", "a", -4.0);
        graph.add_edge("a", "t", 1.0);

        let result = BellmanFord::new().search(&graph, &"s", &"t").unwrap();
        assert_eq!(result.path, vec!["s", "b", "a", "t"]);
        assert_eq!(result.cost, 2.0);
    }

    #[test]
    fn test_negative_cycle() {
        let mut graph = Graph::directed();
        graph.add_edge(0, 1, 1.0);
        graph.add_edge(1, 2, -1.0);
        graph.add_edge(2, 1, -1.0);
        graph.add_edge(2, 3, 1.0);

        assert_eq!(
            BellmanFord::new().find_path(&graph, &0, &3),
            Err(Error::NegativeCycleDetected("0".to_string()))
        );
    }

    #[test]
    fn test_unreachable_negative_cycle_ignored() {
        let mut graph = Graph::directed();
        graph.add_edge(0, 1, 1.0);
        graph.add_edge(5, 6, -3.0);
        graph.add_edge(6, 5, -3.0);

        assert_eq!(BellmanFord::new().find_path(&graph, &0, &1).unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_unweighted_defaults_to_unit() {
        let mut graph = Graph::undirected();
        graph.add_edge('a', 'b', None);
        graph.add_edge('b', 'c', None);
        graph.add_edge('a', 'c', 5.0);

        let result = BellmanFord::new().search(&graph, &'a', &'c').unwrap();
        assert_eq!(result.path, vec!['a', 'b', 'c']);
        assert_eq!(result.cost, 2.0);

        let strict = BellmanFord::new().weight_policy(WeightPolicy::Required);
        assert!(matches!(
            strict.search(&graph, &'a', &'c'),
            Err(Error::MissingWeight { .. })
        ));
    }

    #[test]
    fn test_unreachable_and_trivial() {
        let mut graph = Graph::directed();
        graph.add_edge(1, 2, 1.0);
        graph.add_vertex(3);

        assert!(matches!(
            BellmanFord::new().find_path(&graph, &1, &3),
            Err(Error::NoPathFound { .. })
        ));
        assert_eq!(BellmanFord::new().find_path(&graph, &3, &3).unwrap(), vec![3]);
    }
}

//! Single-source shortest paths.
//!
//! Two engines implement the [`PathFinder`] trait:
//!
//! - [`Dijkstra`] - Label-setting search over non-negative weights, optionally
//!   guided by an estimate term (A*-style) through [`Heuristic`]
//! - [`BellmanFord`] - Round-based relaxation that tolerates negative weights and
//!   reports negative cycles
//!
//! # Edge Costs
//!
//! Dijkstra does not read weights directly: it asks a [`CostFunction`] for the cost
//! of each edge and for an optional estimate of the remaining distance. The default
//! cost function, [`EdgeWeight`], resolves the stored weight through a
//! [`WeightPolicy`]. Wrapping it in a [`Heuristic`] adds an estimate term without
//! changing the underlying engine:
//!
//! ```rust
//! use graphworks::{algorithms::{manhattan_distance, Dijkstra}, Graph, PathFinder};
//!
//! let mut grid = Graph::undirected();
//! grid.add_edge((0, 0), (0, 1), 1.0);
//! grid.add_edge((0, 1), (1, 1), 1.0);
//! grid.add_edge((0, 0), (1, 0), 1.0);
//! grid.add_edge((1, 0), (1, 1), 1.0);
//!
//! let astar = Dijkstra::new(true).with_heuristic(manhattan_distance);
//! let path = astar.search(&grid, &(0, 0), &(1, 1))?;
//! assert_eq!(path.cost, 2.0);
//! assert_eq!(path.path.len(), 3);
//! # Ok::<(), graphworks::Error>(())
//! ```
//!
//! # Observers
//!
//! [`ObservedPathFinder`] wraps any engine and reports a [`PathFinderStats`] record
//! to registered [`PathObserver`]s after every successful search.

mod bellman_ford;
mod dijkstra;
mod observer;

pub use bellman_ford::BellmanFord;
pub use dijkstra::Dijkstra;
pub use observer::{LogObserver, ObservedPathFinder, PathFinderStats, PathObserver};

use crate::{
    collections::VertexMap,
    config::WeightPolicy,
    graph::{Edge, Graph, Vertex},
    Error, Result,
};

/// Result of a successful shortest-path search.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath<T> {
    /// Vertices from start to destination, both inclusive
    pub path: Vec<T>,
    /// Sum of the resolved edge weights along `path`
    pub cost: f64,
    /// Number of vertices the search discovered, including the start
    pub explored: usize,
}

impl<T> ShortestPath<T> {
    /// Number of edges on the path.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// A shortest-path engine.
pub trait PathFinder<T: Vertex>: Send + Sync {
    /// Short label identifying the engine, used in statistics and logs.
    fn name(&self) -> &'static str;

    /// Finds a cheapest path from `start` to `destination`.
    ///
    /// `start == destination` yields `[start]` at cost zero.
    ///
    /// # Errors
    ///
    /// - [`Error::VertexNotFound`] if either endpoint is absent
    /// - [`Error::NoPathFound`] if `destination` is unreachable
    /// - Engine-specific errors such as [`Error::MissingWeight`] or
    ///   [`Error::NegativeCycleDetected`]
    fn search(&self, graph: &Graph<T>, start: &T, destination: &T) -> Result<ShortestPath<T>>;

    /// Same as [`search`](PathFinder::search), returning only the vertex sequence.
    ///
    /// # Errors
    ///
    /// Same as [`search`](PathFinder::search).
    fn find_path(&self, graph: &Graph<T>, start: &T, destination: &T) -> Result<Vec<T>> {
        Ok(self.search(graph, start, destination)?.path)
    }
}

/// Supplies edge costs and remaining-distance estimates to [`Dijkstra`].
pub trait CostFunction<T: Vertex>: Send + Sync {
    /// Cost of traversing `edge`. Must be non-negative for Dijkstra to be correct.
    ///
    /// # Errors
    ///
    /// Implementations may reject edges, typically with [`Error::MissingWeight`].
    fn edge_cost(&self, edge: &Edge<T>) -> Result<f64>;

    /// Estimated remaining cost from `from` to `to`. Zero unless overridden.
    ///
    /// With early exit, the returned path is optimal only if the estimate never
    /// overstates the true remaining cost and is consistent across edges.
    fn estimate(&self, _from: &T, _to: &T) -> f64 {
        0.0
    }
}

/// Costs edges by their stored weight, resolved through a [`WeightPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeWeight {
    policy: WeightPolicy,
}

impl EdgeWeight {
    /// Creates a cost function with the given missing-weight policy.
    #[must_use]
    pub fn new(policy: WeightPolicy) -> Self {
        EdgeWeight { policy }
    }

    /// The policy applied to unweighted edges.
    #[must_use]
    pub fn policy(&self) -> WeightPolicy {
        self.policy
    }
}

impl<T: Vertex> CostFunction<T> for EdgeWeight {
    fn edge_cost(&self, edge: &Edge<T>) -> Result<f64> {
        self.policy.resolve(edge)
    }
}

/// Adds an estimate term to a base cost function.
///
/// Edge costs come from `base` unchanged; the estimate is the base estimate plus
/// `heuristic(from, to)`.
#[derive(Debug, Clone, Copy)]
pub struct Heuristic<C, H> {
    base: C,
    heuristic: H,
}

impl<C, H> Heuristic<C, H> {
    /// Composes `base` with `heuristic`.
    pub fn new(base: C, heuristic: H) -> Self {
        Heuristic { base, heuristic }
    }
}

impl<T, C, H> CostFunction<T> for Heuristic<C, H>
where
    T: Vertex,
    C: CostFunction<T>,
    H: Fn(&T, &T) -> f64 + Send + Sync,
{
    fn edge_cost(&self, edge: &Edge<T>) -> Result<f64> {
        self.base.edge_cost(edge)
    }

    fn estimate(&self, from: &T, to: &T) -> f64 {
        self.base.estimate(from, to) + (self.heuristic)(from, to)
    }
}

/// Manhattan distance between two grid coordinates.
///
/// Admissible for 4-connected grids whose edge weights are at least 1.
#[must_use]
pub fn manhattan_distance(from: &(i32, i32), to: &(i32, i32)) -> f64 {
    f64::from((to.0 - from.0).abs() + (to.1 - from.1).abs())
}

/// Fails with [`Error::VertexNotFound`] unless both endpoints are in the graph.
pub(crate) fn ensure_endpoints<T: Vertex>(
    graph: &Graph<T>,
    start: &T,
    destination: &T,
) -> Result<()> {
    if !graph.contains_vertex(start) {
        return Err(vertex_not_found!(start));
    }
    if !graph.contains_vertex(destination) {
        return Err(vertex_not_found!(destination));
    }
    Ok(())
}

/// Walks the predecessor map back from `destination` to `start`.
pub(crate) fn reconstruct<T: Vertex>(
    predecessors: &VertexMap<T, Option<T>>,
    start: &T,
    destination: &T,
) -> Result<Vec<T>> {
    let no_path = || Error::NoPathFound {
        start: format!("{start:?}"),
        destination: format!("{destination:?}"),
    };

    let mut path = vec![destination.clone()];
    let mut current = destination;
    while current != start {
        match predecessors.get(current) {
            Some(Some(previous)) => {
                path.push(previous.clone());
                current = previous;
            }
            _ => return Err(no_path()),
        }
    }

    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::vertex_map;

    #[test]
    fn test_reconstruct() {
        let mut predecessors = vertex_map();
        predecessors.insert(1, None);
        predecessors.insert(3, Some(1));
        predecessors.insert(4, Some(3));

        assert_eq!(reconstruct(&predecessors, &1, &4).unwrap(), vec![1, 3, 4]);
        assert_eq!(reconstruct(&predecessors, &1, &1).unwrap(), vec![1]);
        assert_eq!(
            reconstruct(&predecessors, &1, &9),
            Err(Error::NoPathFound {
                start: "1".to_string(),
                destination: "9".to_string()
            })
        );
    }

    #[test]
    fn test_heuristic_composition() {
        let cost = Heuristic::new(EdgeWeight::new(WeightPolicy::unit()), manhattan_distance);
        let edge = Edge::new((0, 0), (0, 1), None);

        assert_eq!(cost.edge_cost(&edge).unwrap(), 1.0);
        assert_eq!(cost.estimate(&(0, 0), &(3, -4)), 7.0);
        assert_eq!(
            CostFunction::<(i32, i32)>::estimate(&EdgeWeight::default(), &(0, 0), &(3, 4)),
            0.0
        );
    }

    #[test]
    fn test_hops() {
        let path = ShortestPath {
            path: vec!['a', 'b', 'c'],
            cost: 2.0,
            explored: 3,
        };
        assert_eq!(path.hops(), 2);
    }
}

//! Dijkstra's algorithm over a [`MinHeap`] frontier.

use crate::{
    algorithms::shortest_path::{
        ensure_endpoints, reconstruct, CostFunction, EdgeWeight, Heuristic, PathFinder,
        ShortestPath,
    },
    collections::{vertex_map, vertex_set, MinHeap},
    config::WeightPolicy,
    graph::{Graph, Vertex},
    Result,
};

/// Frontier entry: `(priority, insertion sequence, cost so far, vertex)`.
type FrontierEntry<T> = (f64, usize, f64, T);

fn frontier_order<T>(a: &FrontierEntry<T>, b: &FrontierEntry<T>) -> std::cmp::Ordering {
    a.0.total_cmp(&b.0).then(a.1.cmp(&b.1))
}

/// Label-setting shortest-path search.
///
/// Edge costs come from a [`CostFunction`]; the default [`EdgeWeight`] uses
/// [`WeightPolicy::Required`], so an unweighted edge fails the search with
/// [`Error::MissingWeight`](crate::Error::MissingWeight) when it is relaxed. This
/// differs from [`BellmanFord`](super::BellmanFord), which treats unweighted edges as
/// unit weight; use [`weight_policy`](Dijkstra::weight_policy) to align the two.
///
/// A neighbor's recorded cost is only replaced by a strictly smaller one, so among
/// equal-cost paths the first-discovered predecessor wins. Frontier ties are broken
/// by insertion order.
///
/// With `early_exit` the search stops as soon as the destination is settled. The
/// result is still optimal provided all edge costs are non-negative; negative
/// costs are a caller error and are not detected.
///
/// # Examples
///
/// ```rust
/// use graphworks::{algorithms::Dijkstra, Graph, PathFinder};
///
/// let mut graph = Graph::directed();
/// graph.add_edge(1, 2, 4.5);
/// graph.add_edge(1, 3, 2.0);
/// graph.add_edge(3, 4, 1.5);
/// graph.add_edge(2, 4, 3.0);
///
/// let result = Dijkstra::new(true).search(&graph, &1, &4)?;
/// assert_eq!(result.path, vec![1, 3, 4]);
/// assert_eq!(result.cost, 3.5);
/// # Ok::<(), graphworks::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Dijkstra<C = EdgeWeight> {
    early_exit: bool,
    cost: C,
    label: &'static str,
}

impl Dijkstra<EdgeWeight> {
    /// Creates an engine that requires every relaxed edge to carry a weight.
    #[must_use]
    pub fn new(early_exit: bool) -> Self {
        Dijkstra {
            early_exit,
            cost: EdgeWeight::new(WeightPolicy::Required),
            label: "dijkstra",
        }
    }

    /// Replaces the missing-weight policy.
    #[must_use]
    pub fn weight_policy(mut self, policy: WeightPolicy) -> Self {
        self.cost = EdgeWeight::new(policy);
        self
    }
}

impl Default for Dijkstra<EdgeWeight> {
    fn default() -> Self {
        Self::new(true)
    }
}

impl<C> Dijkstra<C> {
    /// Replaces the cost function.
    pub fn with_cost<D>(self, cost: D) -> Dijkstra<D> {
        Dijkstra {
            early_exit: self.early_exit,
            cost,
            label: self.label,
        }
    }

    /// Adds a remaining-distance estimate on top of the current cost function,
    /// turning the search into A*.
    pub fn with_heuristic<H>(self, heuristic: H) -> Dijkstra<Heuristic<C, H>> {
        Dijkstra {
            early_exit: self.early_exit,
            cost: Heuristic::new(self.cost, heuristic),
            label: "a-star",
        }
    }

    /// Whether the search stops once the destination is settled.
    #[must_use]
    pub fn early_exit(&self) -> bool {
        self.early_exit
    }
}

impl<T, C> PathFinder<T> for Dijkstra<C>
where
    T: Vertex,
    C: CostFunction<T>,
{
    fn name(&self) -> &'static str {
        self.label
    }

    /// Runs the search from `start` towards `destination`.
    ///
    /// # Arguments
    ///
    /// * `graph` - The graph to search, directed or undirected
    /// * `start` - Source vertex
    /// * `destination` - Target vertex
    ///
    /// # Errors
    ///
    /// - [`Error::VertexNotFound`](crate::Error::VertexNotFound) if an endpoint is absent
    /// - [`Error::MissingWeight`](crate::Error::MissingWeight) for an unweighted relaxed edge
    ///   under [`WeightPolicy::Required`]
    /// - [`Error::NoPathFound`](crate::Error::NoPathFound) if `destination` is unreachable
    fn search(&self, graph: &Graph<T>, start: &T, destination: &T) -> Result<ShortestPath<T>> {
        ensure_endpoints(graph, start, destination)?;

        if start == destination {
            return Ok(ShortestPath {
                path: vec![start.clone()],
                cost: 0.0,
                explored: 1,
            });
        }

        let mut best = vertex_map();
        let mut predecessors = vertex_map();
        let mut settled = vertex_set();
        let mut frontier = MinHeap::new(frontier_order::<T>);
        let mut sequence = 0usize;

        best.insert(start.clone(), 0.0);
        predecessors.insert(start.clone(), None);
        frontier.insert((self.cost.estimate(start, destination), sequence, 0.0, start.clone()));

        while !frontier.is_empty() {
            let (_, _, cost, vertex) = frontier.extract_min()?;
            if !settled.insert(vertex.clone()) {
                continue;
            }
            log::trace!("{} settled {:?} at {}", self.label, vertex, cost);

            if self.early_exit && &vertex == destination {
                break;
            }

            for edge in graph.neighbors(&vertex)? {
                let next = edge.destination();
                if settled.contains(next) {
                    continue;
                }

                let candidate = cost + self.cost.edge_cost(edge)?;
                let improves = best.get(next).map_or(true, |&known| candidate < known);
                if improves {
                    best.insert(next.clone(), candidate);
                    predecessors.insert(next.clone(), Some(vertex.clone()));
                    sequence += 1;
                    let priority = candidate + self.cost.estimate(next, destination);
                    frontier.insert((priority, sequence, candidate, next.clone()));
                }
            }
        }

        let path = reconstruct(&predecessors, start, destination)?;
        let cost = best.get(destination).copied().unwrap_or(f64::INFINITY);

        log::debug!(
            "{} found {:?} -> {:?} at cost {} ({} settled, {} discovered)",
            self.label,
            start,
            destination,
            cost,
            settled.len(),
            predecessors.len()
        );

        Ok(ShortestPath {
            path,
            cost,
            explored: predecessors.len(),
        })
    }
}

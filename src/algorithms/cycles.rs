//! Cycle detection by three-color depth-first search.
//!
//! Vertices start white, turn gray when entered and black when every outgoing edge
//! has been examined. An edge reaching a gray vertex closes a cycle through the
//! active DFS path. In undirected graphs the edge back to the immediate DFS parent
//! is ignored, since every undirected edge is stored in both directions.
//!
//! The search runs on an explicit stack and keeps all color and parent state in a
//! value created per call, so concurrent searches over one graph are independent.
//!
//! # Cycle Shape
//!
//! A cycle is reported as an open vertex sequence starting at the revisited
//! ancestor and following the DFS path, without repeating the closing vertex. For
//! the undirected square `0-1, 1-6, 6-9, 9-0` the single cycle is `[0, 1, 6, 9]`.
//!
//! [`find_all_cycles`] returns one cycle per back edge found in a single pass over
//! the DFS forest. That is not every elementary cycle of the graph, but every
//! cyclic graph yields at least one.

use crate::{
    collections::{vertex_map, vertex_set, VertexMap, VertexSet},
    graph::{Graph, Vertex},
    Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

struct CycleSearch<'g, T: Vertex> {
    graph: &'g Graph<T>,
    color: VertexMap<&'g T, Color>,
    parent: VertexMap<&'g T, Option<&'g T>>,
    self_loops: VertexSet<&'g T>,
    cycles: Vec<Vec<T>>,
    stop_at_first: bool,
}

impl<'g, T: Vertex> CycleSearch<'g, T> {
    fn new(graph: &'g Graph<T>, stop_at_first: bool) -> Self {
        CycleSearch {
            graph,
            color: vertex_map(),
            parent: vertex_map(),
            self_loops: vertex_set(),
            cycles: Vec::new(),
            stop_at_first,
        }
    }

    fn color_of(&self, vertex: &T) -> Color {
        self.color.get(vertex).copied().unwrap_or(Color::White)
    }

    fn run(mut self) -> Result<Vec<Vec<T>>> {
        let graph = self.graph;
        for root in graph.vertices() {
            if self.color_of(root) == Color::White && self.explore(root)? {
                break;
            }
        }

        log::debug!("cycle search found {} cycle(s)", self.cycles.len());
        Ok(self.cycles)
    }

    /// Runs one DFS tree from `root`. Returns `true` once the search should stop.
    fn explore(&mut self, root: &'g T) -> Result<bool> {
        let graph = self.graph;
        let mut stack: Vec<(&'g T, usize)> = vec![(root, 0)];
        self.color.insert(root, Color::Gray);
        self.parent.insert(root, None);

        while let Some(frame) = stack.last_mut() {
            let (vertex, next) = *frame;
            let edges = graph.neighbors(vertex)?;
            if next >= edges.len() {
                self.color.insert(vertex, Color::Black);
                stack.pop();
                continue;
            }
            frame.1 += 1;

            let neighbor = edges[next].destination();
            if !graph.is_directed() {
                let parent = self.parent.get(vertex).copied().flatten();
                if parent == Some(neighbor) {
                    continue;
                }
                // both stored copies of an undirected self-loop lead here
                if neighbor == vertex && !self.self_loops.insert(vertex) {
                    continue;
                }
            }

            match self.color_of(neighbor) {
                Color::Gray => {
                    self.record(vertex, neighbor);
                    if self.stop_at_first {
                        return Ok(true);
                    }
                }
                Color::White => {
                    self.color.insert(neighbor, Color::Gray);
                    self.parent.insert(neighbor, Some(vertex));
                    stack.push((neighbor, 0));
                }
                Color::Black => {}
            }
        }

        Ok(false)
    }

    fn record(&mut self, tail: &'g T, ancestor: &'g T) {
        let mut cycle = Vec::new();
        let mut current = Some(tail);
        while let Some(vertex) = current {
            if vertex == ancestor {
                break;
            }
            cycle.push(vertex.clone());
            current = self.parent.get(vertex).copied().flatten();
        }
        cycle.push(ancestor.clone());
        cycle.reverse();

        log::trace!("cycle found: {:?}", cycle);
        self.cycles.push(cycle);
    }
}

/// Returns `true` if the graph contains at least one cycle.
///
/// # Errors
///
/// Propagates adjacency lookup failures; none occur on a well-formed graph.
pub fn has_cycle<T: Vertex>(graph: &Graph<T>) -> Result<bool> {
    Ok(find_cycle(graph)?.is_some())
}

/// Returns the first cycle found, if any.
///
/// # Errors
///
/// Propagates adjacency lookup failures; none occur on a well-formed graph.
///
/// # Examples
///
/// ```rust
/// use graphworks::{algorithms::find_cycle, Graph};
///
/// let mut graph = Graph::directed();
/// graph.add_edge('a', 'b', None);
/// graph.add_edge('b', 'c', None);
/// graph.add_edge('c', 'a', None);
///
/// assert_eq!(find_cycle(&graph)?, Some(vec!['a', 'b', 'c']));
/// # Ok::<(), graphworks::Error>(())
/// ```
pub fn find_cycle<T: Vertex>(graph: &Graph<T>) -> Result<Option<Vec<T>>> {
    Ok(CycleSearch::new(graph, true).run()?.into_iter().next())
}

/// Returns one cycle per back edge found by a full pass over the DFS forest.
///
/// # Errors
///
/// Propagates adjacency lookup failures; none occur on a well-formed graph.
pub fn find_all_cycles<T: Vertex>(graph: &Graph<T>) -> Result<Vec<Vec<T>>> {
    CycleSearch::new(graph, false).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undirected_square() {
        let mut graph = Graph::undirected();
        for v in [0, 1, 6, 9] {
            graph.add_vertex(v);
        }
        graph.add_edge(0, 1, None);
        graph.add_edge(1, 6, None);
        graph.add_edge(6, 9, None);
        graph.add_edge(9, 0, None);

        assert_eq!(find_all_cycles(&graph).unwrap(), vec![vec![0, 1, 6, 9]]);
        assert!(has_cycle(&graph).unwrap());
    }

    #[test]
    fn test_undirected_tree_has_no_cycle() {
        let mut graph = Graph::undirected();
        graph.add_edge(1, 2, None);
        graph.add_edge(1, 3, None);
        graph.add_edge(3, 4, None);

        assert!(!has_cycle(&graph).unwrap());
        assert!(find_all_cycles(&graph).unwrap().is_empty());
    }

    #[test]
    fn test_directed_two_way_edge_is_cycle() {
        let mut graph = Graph::directed();
        graph.add_edge(1, 2, None);
        graph.add_edge(2, 1, None);
        assert_eq!(find_cycle(&graph).unwrap(), Some(vec![1, 2]));
    }

    #[test]
    fn test_directed_dag_has_no_cycle() {
        let mut graph = Graph::directed();
        graph.add_edge('a', 'b', None);
        graph.add_edge('a', 'c', None);
        graph.add_edge('b', 'd', None);
        graph.add_edge('c', 'd', None);
        assert_eq!(find_cycle(&graph).unwrap(), None);
    }

    #[test]
    fn test_all_cycles_across_forest() {
        let mut graph = Graph::directed();
        graph.add_edge(1, 2, None);
        graph.add_edge(2, 1, None);
        graph.add_edge(10, 11, None);
        graph.add_edge(11, 12, None);
        graph.add_edge(12, 10, None);

        let cycles = find_all_cycles(&graph).unwrap();
        assert_eq!(cycles, vec![vec![1, 2], vec![10, 11, 12]]);
        assert_eq!(find_cycle(&graph).unwrap(), Some(vec![1, 2]));
    }

    #[test]
    fn test_self_loops() {
        let mut directed = Graph::directed();
        directed.add_edge(5, 5, None);
        assert_eq!(find_all_cycles(&directed).unwrap(), vec![vec![5]]);

        let mut undirected = Graph::undirected();
        undirected.add_edge(5, 5, None);
        assert_eq!(find_all_cycles(&undirected).unwrap(), vec![vec![5]]);
    }

    #[test]
    fn test_repeated_calls_are_independent() {
        let mut graph = Graph::directed();
        graph.add_edge(1, 2, None);
        graph.add_edge(2, 3, None);
        graph.add_edge(3, 1, None);

        let first = find_all_cycles(&graph).unwrap();
        let second = find_all_cycles(&graph).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn test_deep_chain_with_back_edge() {
        let mut graph = Graph::directed();
        for i in 0..10_000u32 {
            graph.add_edge(i, i + 1, None);
        }
        graph.add_edge(10_000, 0, None);

        let cycle = find_cycle(&graph).unwrap().unwrap();
        assert_eq!(cycle.len(), 10_001);
        assert_eq!(cycle[0], 0);
    }
}

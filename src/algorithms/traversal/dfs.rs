//! Depth-first traversal.

use crate::{
    algorithms::traversal::{ensure_start, notify, GraphTraversal, Visitor},
    collections::{vertex_set, VertexSet},
    config::TraversalConfig,
    graph::{Graph, Vertex},
    Error, Result,
};

/// Depth-first search with an explicit stack.
///
/// Vertices are marked when popped, and neighbors are pushed in reverse so the
/// first-listed neighbor is explored first. The visiting order matches
/// [`DfsRecursive`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DfsIterative;

impl<T: Vertex> GraphTraversal<T> for DfsIterative {
    fn name(&self) -> &'static str {
        "dfs-iterative"
    }

    fn traverse(
        &self,
        graph: &Graph<T>,
        start: &T,
        mut on_visit: Option<&mut Visitor<'_, T>>,
    ) -> Result<()> {
        ensure_start(graph, start)?;

        let mut visited: VertexSet<T> = vertex_set();
        let mut stack = vec![start.clone()];

        while let Some(vertex) = stack.pop() {
            if visited.contains(&vertex) {
                continue;
            }
            visited.insert(vertex.clone());
            notify(&mut on_visit, &vertex)?;

            for edge in graph.neighbors(&vertex)?.iter().rev() {
                if !visited.contains(edge.destination()) {
                    stack.push(edge.destination().clone());
                }
            }
        }

        log::debug!("dfs-iterative visited {} vertices from {:?}", visited.len(), start);
        Ok(())
    }
}

/// Depth-first search using call-stack recursion.
///
/// Recursion depth equals the depth of the DFS tree, bounded by
/// [`TraversalConfig::max_depth`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DfsRecursive {
    config: TraversalConfig,
}

impl DfsRecursive {
    /// Creates the strategy with the default depth bound.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the strategy with a custom configuration.
    #[must_use]
    pub fn with_config(config: TraversalConfig) -> Self {
        DfsRecursive { config }
    }

    fn visit<T: Vertex>(
        &self,
        graph: &Graph<T>,
        vertex: &T,
        visited: &mut VertexSet<T>,
        on_visit: &mut Option<&mut Visitor<'_, T>>,
        depth: usize,
    ) -> Result<()> {
        if depth >= self.config.max_depth {
            return Err(Error::RecursionLimit(self.config.max_depth));
        }

        visited.insert(vertex.clone());
        notify(on_visit, vertex)?;

        for edge in graph.neighbors(vertex)? {
            if !visited.contains(edge.destination()) {
                self.visit(graph, edge.destination(), visited, on_visit, depth + 1)?;
            }
        }
        Ok(())
    }
}

impl<T: Vertex> GraphTraversal<T> for DfsRecursive {
    fn name(&self) -> &'static str {
        "dfs-recursive"
    }

    fn traverse(
        &self,
        graph: &Graph<T>,
        start: &T,
        mut on_visit: Option<&mut Visitor<'_, T>>,
    ) -> Result<()> {
        ensure_start(graph, start)?;

        let mut visited = vertex_set();
        self.visit(graph, start, &mut visited, &mut on_visit, 0)?;

        log::debug!("dfs-recursive visited {} vertices from {:?}", visited.len(), start);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Graph<&'static str> {
        let mut graph = Graph::directed();
        graph.add_edge("root", "left", None);
        graph.add_edge("root", "right", None);
        graph.add_edge("left", "left.a", None);
        graph.add_edge("left", "left.b", None);
        graph.add_edge("right", "right.a", None);
        graph
    }

    #[test]
    fn test_dfs_preorder() {
        let graph = tree();
        let expected = vec!["root", "left", "left.a", "left.b", "right", "right.a"];
        assert_eq!(DfsIterative.visit_order(&graph, &"root").unwrap(), expected);
        assert_eq!(DfsRecursive::new().visit_order(&graph, &"root").unwrap(), expected);
    }

    #[test]
    fn test_dfs_variants_agree_on_shared_descendants() {
        // 1 -> 2 -> 4 and 1 -> 3 -> 4; 4 is reached through 2 first
        let mut graph = Graph::undirected();
        graph.add_edge(1, 2, None);
        graph.add_edge(1, 3, None);
        graph.add_edge(2, 4, None);
        graph.add_edge(3, 4, None);

        let iterative = DfsIterative.visit_order(&graph, &1).unwrap();
        let recursive = DfsRecursive::new().visit_order(&graph, &1).unwrap();
        assert_eq!(iterative, vec![1, 2, 4, 3]);
        assert_eq!(iterative, recursive);
    }

    #[test]
    fn test_dfs_does_not_reorder_adjacency() {
        let graph = tree();
        DfsIterative.visit_order(&graph, &"root").unwrap();
        let first = graph.neighbors(&"root").unwrap()[0].destination();
        assert_eq!(*first, "left");
    }

    #[test]
    fn test_dfs_recursive_limit() {
        let mut graph = Graph::directed();
        for i in 0..50u32 {
            graph.add_edge(i, i + 1, None);
        }

        let bounded = DfsRecursive::with_config(TraversalConfig::with_max_depth(20));
        assert_eq!(
            bounded.visit_order(&graph, &0),
            Err(Error::RecursionLimit(20))
        );
        assert_eq!(DfsIterative.visit_order(&graph, &0).unwrap().len(), 51);
    }
}

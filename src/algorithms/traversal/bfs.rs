//! Breadth-first traversal.

use std::collections::VecDeque;

use crate::{
    algorithms::traversal::{ensure_start, notify, GraphTraversal, Visitor},
    collections::{vertex_set, VertexSet},
    config::TraversalConfig,
    graph::{Graph, Vertex},
    Error, Result,
};

/// Queue-driven breadth-first search.
///
/// Vertices are marked when enqueued, so each one enters the queue at most once.
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsIterative;

impl<T: Vertex> GraphTraversal<T> for BfsIterative {
    fn name(&self) -> &'static str {
        "bfs-iterative"
    }

    fn traverse(
        &self,
        graph: &Graph<T>,
        start: &T,
        mut on_visit: Option<&mut Visitor<'_, T>>,
    ) -> Result<()> {
        ensure_start(graph, start)?;

        let mut visited = vertex_set();
        let mut queue = VecDeque::new();
        visited.insert(start.clone());
        queue.push_back(start.clone());

        while let Some(vertex) = queue.pop_front() {
            notify(&mut on_visit, &vertex)?;

            for edge in graph.neighbors(&vertex)? {
                if visited.insert(edge.destination().clone()) {
                    queue.push_back(edge.destination().clone());
                }
            }
        }

        log::debug!("bfs-iterative visited {} vertices from {:?}", visited.len(), start);
        Ok(())
    }
}

/// Breadth-first search that unwinds its queue one dequeue per recursive call.
///
/// Recursion depth equals the number of visited vertices, bounded by
/// [`TraversalConfig::max_depth`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsRecursive {
    config: TraversalConfig,
}

impl BfsRecursive {
    /// Creates the strategy with the default depth bound.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the strategy with a custom configuration.
    #[must_use]
    pub fn with_config(config: TraversalConfig) -> Self {
        BfsRecursive { config }
    }

    fn process<T: Vertex>(
        &self,
        graph: &Graph<T>,
        queue: &mut VecDeque<T>,
        visited: &mut VertexSet<T>,
        on_visit: &mut Option<&mut Visitor<'_, T>>,
        depth: usize,
    ) -> Result<()> {
        let Some(vertex) = queue.pop_front() else {
            return Ok(());
        };

        if depth >= self.config.max_depth {
            return Err(Error::RecursionLimit(self.config.max_depth));
        }

        notify(on_visit, &vertex)?;

        for edge in graph.neighbors(&vertex)? {
            if visited.insert(edge.destination().clone()) {
                queue.push_back(edge.destination().clone());
            }
        }

        self.process(graph, queue, visited, on_visit, depth + 1)
    }
}

impl<T: Vertex> GraphTraversal<T> for BfsRecursive {
    fn name(&self) -> &'static str {
        "bfs-recursive"
    }

    fn traverse(
        &self,
        graph: &Graph<T>,
        start: &T,
        mut on_visit: Option<&mut Visitor<'_, T>>,
    ) -> Result<()> {
        ensure_start(graph, start)?;

        let mut visited = vertex_set();
        let mut queue = VecDeque::new();
        visited.insert(start.clone());
        queue.push_back(start.clone());

        self.process(graph, &mut queue, &mut visited, &mut on_visit, 0)?;

        log::debug!("bfs-recursive visited {} vertices from {:?}", visited.len(), start);
        Ok(())
    }
}

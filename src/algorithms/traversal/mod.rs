//! Graph traversal strategies.
//!
//! Breadth-first and depth-first search, each in an iterative and a recursive
//! variant, behind a single [`GraphTraversal`] trait. Consumers such as
//! connected-component finders depend only on the trait and pick a concrete
//! strategy at construction, either directly or through [`TraversalKind`].
//!
//! # Strategies
//!
//! - [`BfsIterative`] - FIFO frontier
//! - [`BfsRecursive`] - FIFO frontier unwound one dequeue per call
//! - [`DfsIterative`] - Explicit stack, neighbors pushed in reverse
//! - [`DfsRecursive`] - Call-stack recursion
//!
//! Every strategy visits each vertex reachable from the start exactly once. The
//! two DFS variants produce the same order; the two BFS variants produce the same
//! order. Beyond that, only reachability and visit-once are guaranteed.
//!
//! # Visitors
//!
//! A visitor is invoked synchronously for every vertex before the traversal
//! continues. Returning an error from the visitor aborts the traversal and the error
//! is returned unchanged. This is the cancellation mechanism:
//!
//! ```rust
//! use graphworks::{algorithms::DfsIterative, Error, Graph, GraphTraversal};
//!
//! let mut graph = Graph::directed();
//! graph.add_edge(1, 2, None);
//! graph.add_edge(2, 3, None);
//!
//! let mut seen = Vec::new();
//! let mut stop_at_two = |v: &i32| {
//!     seen.push(*v);
//!     if *v == 2 {
//!         return Err(Error::VisitAborted("found 2".into()));
//!     }
//!     Ok(())
//! };
//!
//! let result = DfsIterative.traverse(&graph, &1, Some(&mut stop_at_two));
//! assert!(matches!(result, Err(Error::VisitAborted(_))));
//! assert_eq!(seen, vec![1, 2]);
//! ```
//!
//! # Recursion Limits
//!
//! The recursive variants consume one stack frame per visited vertex (BFS) or per
//! level of the DFS tree (DFS). They are bounded by
//! [`TraversalConfig::max_depth`](crate::config::TraversalConfig) and fail with
//! [`Error::RecursionLimit`](crate::Error::RecursionLimit) rather than overflow the
//! stack. Prefer the iterative variants for large graphs.

mod bfs;
mod dfs;

pub use bfs::{BfsIterative, BfsRecursive};
pub use dfs::{DfsIterative, DfsRecursive};

use strum::{Display, EnumCount, EnumIter};

use crate::{
    graph::{Graph, Vertex},
    Result,
};

/// Callback invoked once per visited vertex.
pub type Visitor<'a, T> = dyn FnMut(&T) -> Result<()> + 'a;

/// A traversal strategy over a [`Graph`].
///
/// Implementations allocate their visited set per call; a single strategy value can
/// be shared between threads and reused across graphs.
pub trait GraphTraversal<T: Vertex>: Send + Sync {
    /// Short, human-readable name of the strategy.
    fn name(&self) -> &'static str;

    /// Visits every vertex reachable from `start`, calling `on_visit` for each.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`](crate::Error::VertexNotFound) if `start` is
    /// not in the graph, or the first error returned by `on_visit`.
    fn traverse(
        &self,
        graph: &Graph<T>,
        start: &T,
        on_visit: Option<&mut Visitor<'_, T>>,
    ) -> Result<()>;

    /// Returns the vertices reachable from `start` in visiting order.
    ///
    /// # Errors
    ///
    /// Same as [`traverse`](GraphTraversal::traverse).
    fn visit_order(&self, graph: &Graph<T>, start: &T) -> Result<Vec<T>> {
        let mut order = Vec::new();
        let mut record = |vertex: &T| -> Result<()> {
            order.push(vertex.clone());
            Ok(())
        };
        self.traverse(graph, start, Some(&mut record))?;
        Ok(order)
    }
}

/// Invokes the visitor, if any.
pub(crate) fn notify<T>(on_visit: &mut Option<&mut Visitor<'_, T>>, vertex: &T) -> Result<()> {
    match on_visit {
        Some(visit) => (*visit)(vertex),
        None => Ok(()),
    }
}

/// Fails with [`Error::VertexNotFound`](crate::Error::VertexNotFound) unless `start` is present.
pub(crate) fn ensure_start<T: Vertex>(graph: &Graph<T>, start: &T) -> Result<()> {
    if graph.contains_vertex(start) {
        Ok(())
    } else {
        Err(vertex_not_found!(start))
    }
}

/// The available traversal strategies.
///
/// ```rust
/// use graphworks::{algorithms::TraversalKind, Graph};
/// use strum::IntoEnumIterator;
///
/// let mut graph = Graph::undirected();
/// graph.add_edge('a', 'b', None);
///
/// for kind in TraversalKind::iter() {
///     let order = kind.strategy::<char>().visit_order(&graph, &'a')?;
///     assert_eq!(order.len(), 2);
/// }
/// # Ok::<(), graphworks::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, Display)]
pub enum TraversalKind {
    /// Breadth-first, queue driven
    #[strum(serialize = "bfs-iterative")]
    BfsIterative,
    /// Breadth-first, one recursive call per dequeue
    #[strum(serialize = "bfs-recursive")]
    BfsRecursive,
    /// Depth-first, explicit stack
    #[strum(serialize = "dfs-iterative")]
    DfsIterative,
    /// Depth-first, call-stack recursion
    #[strum(serialize = "dfs-recursive")]
    DfsRecursive,
}

impl TraversalKind {
    /// Instantiates the strategy with its default configuration.
    #[must_use]
    pub fn strategy<T: Vertex>(self) -> Box<dyn GraphTraversal<T>> {
        match self {
            TraversalKind::BfsIterative => Box::new(BfsIterative),
            TraversalKind::BfsRecursive => Box::new(BfsRecursive::default()),
            TraversalKind::DfsIterative => Box::new(DfsIterative),
            TraversalKind::DfsRecursive => Box::new(DfsRecursive::default()),
        }
    }

    /// Returns `true` for the variants bounded by a recursion limit.
    #[must_use]
    pub fn is_recursive(self) -> bool {
        matches!(self, TraversalKind::BfsRecursive | TraversalKind::DfsRecursive)
    }
}

/// Holds a replaceable traversal strategy and runs it.
pub struct TraversalRunner<T: Vertex> {
    strategy: Box<dyn GraphTraversal<T>>,
}

impl<T: Vertex> TraversalRunner<T> {
    /// Creates a runner around `strategy`.
    pub fn new(strategy: Box<dyn GraphTraversal<T>>) -> Self {
        TraversalRunner { strategy }
    }

    /// Replaces the strategy used by subsequent runs.
    pub fn set_strategy(&mut self, strategy: Box<dyn GraphTraversal<T>>) {
        self.strategy = strategy;
    }

    /// Name of the current strategy.
    #[must_use]
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Runs the current strategy.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`GraphTraversal::traverse`].
    pub fn execute(
        &self,
        graph: &Graph<T>,
        start: &T,
        on_visit: Option<&mut Visitor<'_, T>>,
    ) -> Result<()> {
        self.strategy.traverse(graph, start, on_visit)
    }
}

impl<T: Vertex> From<TraversalKind> for TraversalRunner<T> {
    fn from(kind: TraversalKind) -> Self {
        TraversalRunner::new(kind.strategy())
    }
}

impl<T: Vertex> std::fmt::Debug for TraversalRunner<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraversalRunner")
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

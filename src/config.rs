//! Engine configuration
//!
//! This module collects the policies that let callers tune how the engines treat
//! incomplete input. Each engine ships with its own default (documented on the
//! engine) and exposes a builder method to override it.
//!
//! # Weight handling
//!
//! Dijkstra and the spanning tree engines default to [`WeightPolicy::Required`],
//! while Bellman-Ford defaults to [`WeightPolicy::DefaultTo`]`(1.0)`. The asymmetry
//! is deliberate: Bellman-Ford is the engine used on loosely specified graphs
//! (mixed weighted and unweighted edges), Dijkstra and the MST engines only make
//! sense on fully weighted input. Both sides can be switched explicitly.

use crate::{
    graph::{Edge, Vertex},
    Error, Result,
};

/// Default depth bound for the recursive traversal variants.
///
/// Each level costs one stack frame; the bound keeps the recursive variants well
/// inside the 2 MiB stack of a spawned thread.
pub const DEFAULT_MAX_RECURSION_DEPTH: usize = 1024;

/// How an engine resolves the weight of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum WeightPolicy {
    /// Every edge must carry a weight; an unweighted edge fails with [`Error::MissingWeight`].
    #[default]
    Required,
    /// Unweighted edges resolve to the given value.
    DefaultTo(f64),
}

impl WeightPolicy {
    /// Policy that treats unweighted edges as unit weight.
    #[must_use]
    pub fn unit() -> Self {
        WeightPolicy::DefaultTo(1.0)
    }

    /// Resolves the effective weight of `edge` under this policy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingWeight`] if the edge has no weight and the policy
    /// is [`WeightPolicy::Required`].
    pub fn resolve<T: Vertex>(&self, edge: &Edge<T>) -> Result<f64> {
        match (edge.weight(), self) {
            (Some(weight), _) => Ok(weight),
            (None, WeightPolicy::DefaultTo(fallback)) => Ok(*fallback),
            (None, WeightPolicy::Required) => Err(Error::MissingWeight {
                from: format!("{:?}", edge.source()),
                to: format!("{:?}", edge.destination()),
            }),
        }
    }
}

/// What a spanning tree engine returns for a disconnected graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpanningPolicy {
    /// Return whatever acyclic edge set was found (a spanning forest for Kruskal,
    /// the tree of the start vertex's component for Prim).
    #[default]
    AllowForest,
    /// Fail with [`Error::Disconnected`] unless the result spans every vertex.
    RequireTree,
}

/// Configuration for the recursive traversal variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalConfig {
    /// Maximum recursion depth before a traversal fails with [`Error::RecursionLimit`]
    pub max_depth: usize,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_RECURSION_DEPTH,
        }
    }
}

impl TraversalConfig {
    /// Creates a configuration with a custom depth bound
    #[must_use]
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Creates a configuration that never trips the depth guard
    ///
    /// **Warning**: deep graphs will overflow the call stack. Use only when the
    /// reachable vertex count is known to be small.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            max_depth: usize::MAX,
        }
    }
}

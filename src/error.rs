use thiserror::Error;

/// Builds an [`Error::VertexNotFound`] from any vertex value.
///
/// Vertices are rendered with their `Debug` representation so that the error
/// type itself stays independent of the caller's vertex type.
macro_rules! vertex_not_found {
    ($vertex:expr) => {
        crate::Error::VertexNotFound(format!("{:?}", $vertex))
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every variant represents either a violated caller precondition or a definitive algorithmic
/// outcome (for example "no path exists"). None of them are retried or recovered internally: an
/// engine either returns a complete, correct result or fails with one of these variants.
///
/// # Error Categories
///
/// ## Graph Lookup Errors
/// - [`Error::VertexNotFound`] - An operation referenced a vertex that is not in the graph
/// - [`Error::ElementNotFound`] - A disjoint-set lookup used an unregistered element
///
/// ## Structural Preconditions
/// - [`Error::GraphMustBeDirected`] - Topological sorting requires a directed graph
/// - [`Error::GraphMustBeUndirected`] - Spanning tree engines require an undirected graph
/// - [`Error::MissingWeight`] - A weighted algorithm met an edge without a weight
///
/// ## Algorithmic Outcomes
/// - [`Error::NoPathFound`] - The destination is unreachable from the start
/// - [`Error::NegativeCycleDetected`] - Bellman-Ford proved no finite shortest path exists
/// - [`Error::Disconnected`] - A full spanning tree was required but the graph is disconnected
///
/// ## Execution Errors
/// - [`Error::EmptyHeap`] - Extraction from an empty priority structure
/// - [`Error::RecursionLimit`] - A recursive traversal exceeded its depth limit
/// - [`Error::VisitAborted`] - A visitor or observer callback stopped the operation
/// - [`Error::InvalidConfiguration`] - Options passed to an engine or generator are out of range
///
/// # Examples
///
/// ```rust
/// use graphworks::{algorithms::Dijkstra, Error, Graph, PathFinder};
///
/// let mut graph: Graph<&str> = Graph::directed();
/// graph.add_edge("A", "B", 1.0);
/// graph.add_vertex("C");
///
/// match Dijkstra::new(false).find_path(&graph, &"A", &"C") {
///     Ok(path) => println!("path: {:?}", path),
///     Err(Error::NoPathFound { start, destination }) => {
///         println!("{} cannot reach {}", start, destination);
///     }
///     Err(e) => println!("other error: {}", e),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The referenced vertex has never been added to the graph.
    ///
    /// Raised by neighbor lookups, traversal starts and path-finding endpoints.
    /// The payload is the `Debug` rendering of the missing vertex.
    #[error("Vertex does not exist in the graph - {0}")]
    VertexNotFound(String),

    /// The element was not part of the collection a disjoint set was built from.
    ///
    /// Disjoint sets never grow after construction, so every lookup must use
    /// one of the initial elements.
    #[error("Element is not registered in the disjoint set - {0}")]
    ElementNotFound(String),

    /// Extraction was attempted on an empty priority structure.
    #[error("Heap is empty")]
    EmptyHeap,

    /// A weighted algorithm encountered an edge that carries no weight.
    ///
    /// Only raised when the engine's [`WeightPolicy`](crate::config::WeightPolicy)
    /// requires weights to be present.
    ///
    /// # Fields
    ///
    /// * `from` - Source vertex of the offending edge
    /// * `to` - Destination vertex of the offending edge
    #[error("Edge {from} -> {to} has no weight")]
    MissingWeight {
        /// Source vertex of the unweighted edge
        from: String,
        /// Destination vertex of the unweighted edge
        to: String,
    },

    /// Bellman-Ford found an edge that can still be relaxed after `|V| - 1` rounds.
    ///
    /// A negative-weight cycle is reachable from the start vertex, so no finite
    /// shortest path exists. The payload is the start vertex.
    #[error("Negative weight cycle reachable from {0}")]
    NegativeCycleDetected(String),

    /// The destination cannot be reached from the start vertex.
    #[error("No path found from {start} to {destination}")]
    NoPathFound {
        /// Start vertex of the failed search
        start: String,
        /// Destination vertex of the failed search
        destination: String,
    },

    /// Topological sorting was invoked on an undirected graph.
    #[error("Graph must be directed")]
    GraphMustBeDirected,

    /// A minimum spanning tree engine was invoked on a directed graph.
    #[error("Graph must be undirected")]
    GraphMustBeUndirected,

    /// A full spanning tree was required, but the input graph is disconnected.
    ///
    /// Only raised when the engine runs with
    /// [`SpanningPolicy::RequireTree`](crate::config::SpanningPolicy::RequireTree).
    #[error("Graph is disconnected - accepted {accepted} of {required} spanning tree edges")]
    Disconnected {
        /// Number of edges the engine accepted
        accepted: usize,
        /// Number of edges a spanning tree over all vertices needs
        required: usize,
    },

    /// A recursive traversal exceeded its configured maximum depth.
    ///
    /// The recursive variants are bounded to avoid exhausting the call stack on
    /// deep graphs; the payload is the limit that was hit.
    #[error("Reached the maximum recursion level allowed - {0}")]
    RecursionLimit(usize),

    /// A caller-supplied visitor or observer deliberately stopped the operation.
    ///
    /// This is the cancellation channel: the core never suppresses it and
    /// returns it to the caller unchanged.
    #[error("Operation aborted by callback - {0}")]
    VisitAborted(String),

    /// Options handed to an engine or generator are out of range.
    #[error("Invalid configuration - {0}")]
    InvalidConfiguration(String),
}

/// Shorthand for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_not_found_macro() {
        let err = vertex_not_found!("A");
        assert_eq!(err, Error::VertexNotFound("\"A\"".to_string()));
        assert!(err.to_string().contains("\"A\""));
    }

    #[test]
    fn test_display_messages() {
        let err = Error::MissingWeight {
            from: "1".to_string(),
            to: "2".to_string(),
        };
        assert_eq!(err.to_string(), "Edge 1 -> 2 has no weight");

        let err = Error::Disconnected {
            accepted: 2,
            required: 4,
        };
        assert!(err.to_string().contains("accepted 2 of 4"));

        assert_eq!(Error::EmptyHeap.to_string(), "Heap is empty");
        assert_eq!(Error::GraphMustBeDirected.to_string(), "Graph must be directed");
    }
}

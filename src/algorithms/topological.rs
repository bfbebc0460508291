//! Topological ordering of directed graphs.
//!
//! The ordering is the reverse of a depth-first postorder, computed with an
//! explicit enter/exit stack so that deep graphs cannot exhaust the call stack.
//! Roots are taken in vertex insertion order and neighbors in adjacency order, so
//! the result is deterministic for a given graph.
//!
//! Cycle-freedom is a precondition. On cyclic input the returned sequence still
//! contains every vertex once but does not respect every edge; check with
//! [`has_cycle`](crate::algorithms::has_cycle) first when the input is untrusted.

use crate::{
    collections::{vertex_set, VertexSet},
    graph::{Graph, Vertex},
    Error, Result,
};

#[derive(Clone, Copy)]
enum State {
    Enter,
    Exit,
}

/// Orders the vertices of a directed acyclic graph so that every edge points
/// forward.
///
/// # Errors
///
/// Returns [`Error::GraphMustBeDirected`] for an undirected graph.
///
/// # Examples
///
/// ```rust
/// use graphworks::{algorithms::topological_sort, Graph};
///
/// let mut graph = Graph::directed();
/// graph.add_edge("shirt", "tie", None);
/// graph.add_edge("tie", "jacket", None);
/// graph.add_edge("trousers", "shoes", None);
///
/// let order = topological_sort(&graph)?;
/// let position = |v| order.iter().position(|x| *x == v).unwrap();
/// assert!(position("shirt") < position("tie"));
/// assert!(position("tie") < position("jacket"));
/// assert!(position("trousers") < position("shoes"));
/// # Ok::<(), graphworks::Error>(())
/// ```
pub fn topological_sort<T: Vertex>(graph: &Graph<T>) -> Result<Vec<T>> {
    if !graph.is_directed() {
        return Err(Error::GraphMustBeDirected);
    }

    let mut visited: VertexSet<&T> = vertex_set();
    let mut finished = Vec::with_capacity(graph.vertex_count());
    let mut stack = Vec::new();

    for root in graph.vertices() {
        if visited.contains(root) {
            continue;
        }
        stack.push((root, State::Enter));

        while let Some((vertex, state)) = stack.pop() {
            match state {
                State::Enter => {
                    if !visited.insert(vertex) {
                        continue;
                    }
                    stack.push((vertex, State::Exit));

                    for edge in graph.neighbors(vertex)?.iter().rev() {
                        if !visited.contains(edge.destination()) {
                            stack.push((edge.destination(), State::Enter));
                        }
                    }
                }
                State::Exit => finished.push(vertex.clone()),
            }
        }
    }

    finished.reverse();
    log::debug!("topological sort ordered {} vertices", finished.len());
    Ok(finished)
}

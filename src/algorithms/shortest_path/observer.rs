//! Post-search statistics delivery.

use crate::{
    algorithms::shortest_path::{PathFinder, ShortestPath},
    graph::{Graph, Vertex},
    Result,
};

/// Statistics for one completed search.
#[derive(Debug, Clone, PartialEq)]
pub struct PathFinderStats<T> {
    /// Name of the engine that ran the search
    pub label: String,
    /// Number of vertices the search discovered
    pub nodes_visited: usize,
    /// Number of vertices on the returned path
    pub path_length: usize,
    /// Start vertex
    pub start: T,
    /// Destination vertex
    pub end: T,
}

impl<T: Vertex> PathFinderStats<T> {
    fn from_search(label: &str, result: &ShortestPath<T>, start: &T, end: &T) -> Self {
        PathFinderStats {
            label: label.to_string(),
            nodes_visited: result.explored,
            path_length: result.path.len(),
            start: start.clone(),
            end: end.clone(),
        }
    }
}

/// Receives [`PathFinderStats`] after each successful search.
///
/// Any `Fn(&PathFinderStats<T>) -> Result<()>` closure is an observer.
pub trait PathObserver<T: Vertex>: Send + Sync {
    /// Handles one statistics record.
    ///
    /// # Errors
    ///
    /// An error stops delivery to the observers registered after this one and is
    /// returned from the search.
    fn handle(&self, stats: &PathFinderStats<T>) -> Result<()>;
}

impl<T, F> PathObserver<T> for F
where
    T: Vertex,
    F: Fn(&PathFinderStats<T>) -> Result<()> + Send + Sync,
{
    fn handle(&self, stats: &PathFinderStats<T>) -> Result<()> {
        self(stats)
    }
}

/// Reports statistics through the `log` facade at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl<T: Vertex> PathObserver<T> for LogObserver {
    fn handle(&self, stats: &PathFinderStats<T>) -> Result<()> {
        log::info!(
            "path finder {}: {:?} -> {:?}, {} nodes visited, path length {}",
            stats.label,
            stats.start,
            stats.end,
            stats.nodes_visited,
            stats.path_length
        );
        Ok(())
    }
}

/// Wraps a [`PathFinder`] and notifies observers after every successful search.
///
/// Observers run synchronously in registration order. The first failing observer
/// stops delivery and its error becomes the result of the search. Failed searches
/// notify nobody.
///
/// # Examples
///
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use graphworks::{
///     algorithms::{Dijkstra, ObservedPathFinder, PathFinderStats},
///     Graph, PathFinder,
/// };
///
/// let mut graph = Graph::directed();
/// graph.add_edge(1, 2, 1.0);
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
///
/// let mut finder = ObservedPathFinder::new(Dijkstra::new(true));
/// finder.subscribe(move |stats: &PathFinderStats<i32>| -> graphworks::Result<()> {
///     sink.lock().unwrap().push(stats.path_length);
///     Ok(())
/// });
///
/// finder.find_path(&graph, &1, &2)?;
/// assert_eq!(*seen.lock().unwrap(), vec![2]);
/// # Ok::<(), graphworks::Error>(())
/// ```
pub struct ObservedPathFinder<T: Vertex, P> {
    inner: P,
    observers: Vec<Box<dyn PathObserver<T>>>,
}

impl<T: Vertex, P: PathFinder<T>> ObservedPathFinder<T, P> {
    /// Wraps `inner` with an empty observer list.
    pub fn new(inner: P) -> Self {
        ObservedPathFinder {
            inner,
            observers: Vec::new(),
        }
    }

    /// Appends an observer to the notification list.
    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: PathObserver<T> + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// The wrapped engine.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Delivers `stats` to every observer in registration order.
    ///
    /// # Errors
    ///
    /// Returns the first observer error; later observers are not called.
    pub fn notify(&self, stats: &PathFinderStats<T>) -> Result<()> {
        for observer in &self.observers {
            observer.handle(stats)?;
        }
        Ok(())
    }
}

impl<T: Vertex, P: PathFinder<T>> PathFinder<T> for ObservedPathFinder<T, P> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn search(&self, graph: &Graph<T>, start: &T, destination: &T) -> Result<ShortestPath<T>> {
        let result = self.inner.search(graph, start, destination)?;
        let stats = PathFinderStats::from_search(self.inner.name(), &result, start, destination);
        self.notify(&stats)?;
        Ok(result)
    }
}

impl<T: Vertex, P: std::fmt::Debug> std::fmt::Debug for ObservedPathFinder<T, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservedPathFinder")
            .field("inner", &self.inner)
            .field("observers", &self.observers.len())
            .finish()
    }
}

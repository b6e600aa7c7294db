//! Path queries over [`Graph`]: depth-first reachability and path
//! enumeration, breadth-first hop-minimal paths, and comparator-driven
//! best-first search.
//!
//! Every search carries whole [`Frame`]s on its frontier (vertex, path so far,
//! accumulated weight) instead of parent pointers, and marks a vertex visited
//! when it is taken *off* the frontier. A vertex can therefore sit on the
//! frontier more than once; neighbors are still filtered against the visited
//! set when pushed, so every reported path is simple.
//!
//! A neighbor is traversable only when the current vertex's record for it has
//! an outgoing weight (`edge.to()` is `Some`). That is what stops directed
//! edges from being walked backward.
//!
//! ### Performance Characteristics
//! | Operation | Frontier | Complexity |
//! |-----------|----------|------------|
//! | `is_reachable` | [`Stack`] | O(V + E) frames, each carrying its path |
//! | `all_paths` | [`Stack`] | O(V + E) frames |
//! | `shortest_path` | [`Queue`] | O(V + E) frames |
//! | `quickest_path` | [`FlexHeap`] | O(E log E) |

use crate::collections::{FlexHeap, Queue, Stack};
use crate::error::Result;
use crate::graph::edge::Weight;
use crate::graph::labeled_graph::Graph;
use crate::trace::trace_event;
use core::fmt::Debug;
use std::collections::HashSet;
use std::hash::Hash;

/// A traversal unit: the vertex reached, the path taken to it, and the
/// accumulated cost. Unweighted searches use `W = ()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<K, W = ()> {
    id: K,
    path: Vec<K>,
    weight: W,
}

impl<K: Clone, W> Frame<K, W> {
    /// A frame sitting on `id` with a single-vertex path.
    pub fn start(id: K, weight: W) -> Self {
        Self {
            path: vec![id.clone()],
            id,
            weight,
        }
    }

    /// Extends this frame's path by one vertex.
    fn step(&self, next: K, weight: W) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(next.clone());
        Self {
            id: next,
            path,
            weight,
        }
    }

    /// The vertex this frame sits on (last element of the path).
    pub fn id(&self) -> &K {
        &self.id
    }

    /// Vertex ids from the start up to and including [`Frame::id`].
    pub fn path(&self) -> &[K] {
        &self.path
    }

    /// Accumulated cost of the path.
    pub fn weight(&self) -> &W {
        &self.weight
    }

    /// Number of edges on the path.
    pub fn hops(&self) -> usize {
        self.path.len() - 1
    }

    /// Consumes the frame, returning its path.
    pub fn into_path(self) -> Vec<K> {
        self.path
    }
}

/// Default ordering for best-first search: strictly lower accumulated weight
/// wins (Dijkstra).
pub fn lowest_weight<K, W: PartialOrd>(old: &Frame<K, W>, new: &Frame<K, W>) -> bool {
    old.weight > new.weight
}

/// Strictly higher accumulated weight wins.
pub fn highest_weight<K, W: PartialOrd>(old: &Frame<K, W>, new: &Frame<K, W>) -> bool {
    old.weight < new.weight
}

/// Lower accumulated weight wins; equal weights prefer the path with fewer hops.
pub fn lowest_weight_then_hops<K, W: PartialOrd>(old: &Frame<K, W>, new: &Frame<K, W>) -> bool {
    if old.weight == new.weight {
        old.path.len() > new.path.len()
    } else {
        old.weight > new.weight
    }
}

impl<K, V, W> Graph<K, V, W>
where
    K: Clone + Eq + Hash + Debug,
    W: Weight,
{
    /// Finds some path from `start` to `end` by depth-first search.
    ///
    /// Returns the first path the search reaches, which is not necessarily
    /// the shortest, or `None` if `end` is unreachable.
    ///
    /// # Errors
    /// [`GraphError::MissingVertex`](crate::GraphError::MissingVertex) if
    /// either endpoint is absent.
    pub fn is_reachable(&self, start: &K, end: &K) -> Result<Option<Vec<K>>, K> {
        self.vertex(start)?;
        self.vertex(end)?;
        trace_event!(start = ?start, end = ?end, "depth-first reachability");

        let mut visited = HashSet::new();
        let mut stack = Stack::new();
        stack.push(Frame::start(start.clone(), ()));

        while let Some(frame) = stack.pop() {
            visited.insert(frame.id.clone());
            if frame.id == *end {
                trace_event!(hops = frame.hops(), "target reached");
                return Ok(Some(frame.into_path()));
            }
            for next in self.unvisited_steps(&frame, &visited, |_, _| ()) {
                stack.push(next);
            }
            trace_event!(id = ?frame.id, frontier = stack.len(), "frame expanded");
        }

        trace_event!(visited = visited.len(), "frontier exhausted");
        Ok(None)
    }

    /// Collects every path to `end` that a single depth-first sweep from
    /// `start` discovers.
    ///
    /// The sweep shares one visited set, so a vertex is expanded from at most
    /// the routes that reach it before it is first popped. Paths that would
    /// need to pass through an already-explored vertex again are not
    /// reported, even if they are simple. The target itself is never
    /// expanded. Returns an empty vector when `end` is unreachable.
    ///
    /// # Errors
    /// [`GraphError::MissingVertex`](crate::GraphError::MissingVertex) if
    /// either endpoint is absent.
    pub fn all_paths(&self, start: &K, end: &K) -> Result<Vec<Vec<K>>, K> {
        self.vertex(start)?;
        self.vertex(end)?;
        trace_event!(start = ?start, end = ?end, "depth-first path enumeration");

        let mut paths = Vec::new();
        let mut visited = HashSet::new();
        let mut stack = Stack::new();
        stack.push(Frame::start(start.clone(), ()));

        while let Some(frame) = stack.pop() {
            visited.insert(frame.id.clone());
            if frame.id == *end {
                paths.push(frame.into_path());
                continue;
            }
            for next in self.unvisited_steps(&frame, &visited, |_, _| ()) {
                stack.push(next);
            }
            trace_event!(id = ?frame.id, frontier = stack.len(), "frame expanded");
        }

        trace_event!(found = paths.len(), visited = visited.len(), "frontier exhausted");
        Ok(paths)
    }

    /// Finds a path from `start` to `end` with the fewest edges, by
    /// breadth-first search. Weights are ignored.
    ///
    /// # Errors
    /// [`GraphError::MissingVertex`](crate::GraphError::MissingVertex) if
    /// either endpoint is absent.
    pub fn shortest_path(&self, start: &K, end: &K) -> Result<Option<Vec<K>>, K> {
        self.vertex(start)?;
        self.vertex(end)?;
        trace_event!(start = ?start, end = ?end, "breadth-first shortest path");

        let mut visited = HashSet::new();
        let mut queue = Queue::new();
        queue.enqueue(Frame::start(start.clone(), ()));

        while let Some(frame) = queue.dequeue() {
            visited.insert(frame.id.clone());
            if frame.id == *end {
                trace_event!(hops = frame.hops(), "target reached");
                return Ok(Some(frame.into_path()));
            }
            for next in self.unvisited_steps(&frame, &visited, |_, _| ()) {
                queue.enqueue(next);
            }
            trace_event!(id = ?frame.id, frontier = queue.len(), "frame expanded");
        }

        trace_event!(visited = visited.len(), "frontier exhausted");
        Ok(None)
    }

    /// Finds the cheapest path from `start` to `end` by accumulated edge
    /// weight (Dijkstra). Assumes non-negative weights.
    ///
    /// Path costs saturate at `W::max_value()` rather than overflow, see
    /// [`Weight::accumulate`].
    ///
    /// # Errors
    /// [`GraphError::MissingVertex`](crate::GraphError::MissingVertex) if
    /// either endpoint is absent.
    pub fn quickest_path(&self, start: &K, end: &K) -> Result<Option<Vec<K>>, K> {
        self.quickest_path_by(start, end, lowest_weight::<K, W>)
    }

    /// Best-first search ordered by `comparator`.
    ///
    /// `comparator(old, new)` returns `true` when `new` has strictly higher
    /// priority than `old`. The first time the target is extracted its path
    /// is returned.
    ///
    /// # Errors
    /// [`GraphError::MissingVertex`](crate::GraphError::MissingVertex) if
    /// either endpoint is absent.
    pub fn quickest_path_by<F>(&self, start: &K, end: &K, comparator: F) -> Result<Option<Vec<K>>, K>
    where
        F: Fn(&Frame<K, W>, &Frame<K, W>) -> bool,
    {
        Ok(self
            .quickest_route_by(start, end, comparator)?
            .map(Frame::into_path))
    }

    /// Like [`Graph::quickest_path`] but returns the winning frame, so the
    /// accumulated weight is available.
    ///
    /// # Errors
    /// [`GraphError::MissingVertex`](crate::GraphError::MissingVertex) if
    /// either endpoint is absent.
    pub fn quickest_route(&self, start: &K, end: &K) -> Result<Option<Frame<K, W>>, K> {
        self.quickest_route_by(start, end, lowest_weight::<K, W>)
    }

    /// Like [`Graph::quickest_path_by`] but returns the winning frame.
    ///
    /// # Errors
    /// [`GraphError::MissingVertex`](crate::GraphError::MissingVertex) if
    /// either endpoint is absent.
    pub fn quickest_route_by<F>(
        &self,
        start: &K,
        end: &K,
        comparator: F,
    ) -> Result<Option<Frame<K, W>>, K>
    where
        F: Fn(&Frame<K, W>, &Frame<K, W>) -> bool,
    {
        self.vertex(start)?;
        self.vertex(end)?;
        trace_event!(start = ?start, end = ?end, "best-first search");

        let mut visited = HashSet::new();
        let mut heap = FlexHeap::new(comparator);
        heap.insert(Frame::start(start.clone(), W::zero()));

        while let Some(frame) = heap.extract() {
            // Stale entry for a vertex already settled through a better frame.
            if !visited.insert(frame.id.clone()) {
                continue;
            }
            if frame.id == *end {
                trace_event!(hops = frame.hops(), weight = ?frame.weight, "target reached");
                return Ok(Some(frame));
            }
            for next in self.unvisited_steps(&frame, &visited, |acc, w| acc.accumulate(w)) {
                heap.insert(next);
            }
        }

        trace_event!(visited = visited.len(), "frontier exhausted");
        Ok(None)
    }

    /// Frames for every traversable, unvisited neighbor of `frame`'s vertex.
    /// `accumulate` folds the edge's outgoing weight into the frame's cost.
    fn unvisited_steps<'a, C, A>(
        &'a self,
        frame: &'a Frame<K, C>,
        visited: &'a HashSet<K>,
        accumulate: A,
    ) -> impl Iterator<Item = Frame<K, C>> + 'a
    where
        A: Fn(&C, W) -> C + 'a,
    {
        self.vertices
            .get(&frame.id)
            .into_iter()
            .flat_map(|vertex| vertex.edges.iter())
            .filter(move |(neighbor, _)| !visited.contains(*neighbor))
            .filter_map(move |(neighbor, edge)| {
                edge.to
                    .map(|weight| frame.step(neighbor.clone(), accumulate(&frame.weight, weight)))
            })
    }
}

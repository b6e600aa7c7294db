//! `Graph` — a labeled, weighted graph over caller-chosen vertex ids.
//!
//! The graph is the sole owner of its vertices. There is no separate edge
//! list: every edge lives as a pair of mirrored [`Edge`] records in the
//! adjacency maps of its two endpoints, and every mutation goes through
//! [`Graph::write_edge`] so the pair can never diverge.
//!
//! ### Directed vs. undirected
//! | `add_weighted_edge(a, b, w)` | `a[b]`             | `b[a]`             |
//! |------------------------------|--------------------|--------------------|
//! | directed                     | `{to: w, from: -}` | `{to: -, from: w}` |
//! | undirected                   | `{to: w, from: w}` | `{to: w, from: w}` |
//!
//! A directed graph can carry both directions of a pair on the same records:
//! `set_edge(b, a, Some(v))` after the call above fills in the reverse weight.
//! A self-loop `a[a]` is a single record with `to == from` in either mode.

use crate::error::{GraphError, Result};
use crate::graph::edge::{Edge, EdgeWeight, Weight};
use crate::graph::vertex::Vertex;
use crate::trace::debug_event;
use core::fmt::Debug;
use std::collections::HashMap;
use std::hash::Hash;

/// A directed or undirected weighted graph.
///
/// * `K` - vertex id; needs stable `Eq + Hash`.
/// * `V` - vertex payload.
/// * `W` - edge weight, `u32` unless specified.
#[derive(Debug, Clone)]
pub struct Graph<K, V, W = u32> {
    directed: bool,
    pub(crate) vertices: HashMap<K, Vertex<K, V, W>>,
}

impl<K, V, W> Graph<K, V, W>
where
    K: Clone + Eq + Hash + Debug,
    W: Weight,
{
    /// Creates an empty graph. Directedness is fixed for the graph's lifetime.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            vertices: HashMap::new(),
        }
    }

    /// Creates an empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Creates an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Pre-allocate for a known vertex count.
    pub fn with_capacity(directed: bool, vertices: usize) -> Self {
        Self {
            directed,
            vertices: HashMap::with_capacity(vertices),
        }
    }

    /// Whether edge weights are direction-specific.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    ///
    /// Directed graphs count each traversable direction; undirected graphs
    /// count each connected pair once.
    pub fn edge_count(&self) -> usize {
        let mut directions = 0;
        let mut loops = 0;
        for vertex in self.vertices.values() {
            for (neighbor, edge) in &vertex.edges {
                if edge.to.is_some() {
                    directions += 1;
                    if neighbor == vertex.id() {
                        loops += 1;
                    }
                }
            }
        }
        if self.directed {
            directions
        } else {
            (directions + loops) / 2
        }
    }

    /// `true` if a vertex with this id exists.
    pub fn contains_vertex(&self, id: &K) -> bool {
        self.vertices.contains_key(id)
    }

    /// Iterates over all vertices in arbitrary order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<K, V, W>> {
        self.vertices.values()
    }

    /// Ids reachable from `id` in one step, i.e. neighbors whose record
    /// carries an outgoing weight.
    pub fn neighbors(&self, id: &K) -> Result<impl Iterator<Item = &K>, K> {
        let vertex = self.vertex(id)?;
        Ok(vertex
            .edges
            .iter()
            .filter(|(_, edge)| edge.to.is_some())
            .map(|(neighbor, _)| neighbor))
    }

    /// Inserts a vertex with no edges.
    ///
    /// # Errors
    /// [`GraphError::DuplicateVertex`] if `id` is already present; the
    /// existing vertex is left untouched.
    pub fn add_vertex(&mut self, id: K, val: V) -> Result<(), K> {
        if self.vertices.contains_key(&id) {
            return Err(GraphError::DuplicateVertex { id });
        }
        debug_event!(id = ?id, "vertex added");
        self.vertices.insert(id.clone(), Vertex::new(id, val));
        Ok(())
    }

    /// Removes a vertex and every edge record that references it.
    ///
    /// Returns the removed payload, or `None` if no such vertex exists.
    pub fn remove_vertex(&mut self, id: &K) -> Option<V> {
        let vertex = self.vertices.remove(id)?;
        for neighbor in vertex.edges.keys() {
            if let Some(other) = self.vertices.get_mut(neighbor) {
                other.edges.remove(id);
            }
        }
        debug_event!(id = ?id, degree = vertex.degree(), "vertex removed");
        Some(vertex.into_val())
    }

    /// Looks up a vertex.
    pub fn get_vertex(&self, id: &K) -> Option<&Vertex<K, V, W>> {
        self.vertices.get(id)
    }

    /// Replaces a vertex payload, returning the previous one.
    ///
    /// # Errors
    /// [`GraphError::MissingVertex`] if `id` is absent.
    pub fn set_vertex(&mut self, id: &K, val: V) -> Result<V, K> {
        let vertex = self
            .vertices
            .get_mut(id)
            .ok_or_else(|| GraphError::MissingVertex { id: id.clone() })?;
        Ok(core::mem::replace(vertex.val_mut(), val))
    }

    /// Returns `from`'s record for its relationship with `to`.
    ///
    /// # Errors
    /// [`GraphError::MissingVertex`] if either endpoint is absent,
    /// [`GraphError::MissingEdge`] if the pair has no record.
    pub fn get_edge(&self, from: &K, to: &K) -> Result<&Edge<W>, K> {
        self.vertex(to)?;
        self.vertex(from)?
            .edges
            .get(to)
            .ok_or_else(|| GraphError::MissingEdge {
                from: from.clone(),
                to: to.clone(),
            })
    }

    /// Adds an edge of weight one. See [`Graph::add_weighted_edge`].
    ///
    /// # Errors
    /// [`GraphError::MissingVertex`] if either endpoint is absent.
    pub fn add_edge(&mut self, from: &K, to: &K) -> Result<(), K> {
        self.add_weighted_edge(from, to, W::one())
    }

    /// Adds or overwrites the edge between `from` and `to`.
    ///
    /// Any existing records for the pair are replaced, not merged. In a
    /// directed graph only the `from -> to` direction is traversable afterward.
    ///
    /// # Errors
    /// [`GraphError::MissingVertex`] if either endpoint is absent.
    pub fn add_weighted_edge(&mut self, from: &K, to: &K, weight: W) -> Result<(), K> {
        self.vertex(from)?;
        self.vertex(to)?;
        let record = if self.directed {
            Edge::new(Some(weight), None)
        } else {
            Edge::new(Some(weight), Some(weight))
        };
        debug_event!(from = ?from, to = ?to, weight = ?weight, "edge added");
        self.write_edge(from, to, record);
        Ok(())
    }

    /// Sets the `from -> to` weight of an existing edge.
    ///
    /// Undirected graphs update both directions together. In a directed graph
    /// only `from -> to` changes; the `to -> from` weight is left as it was,
    /// so `set_edge(b, a, Some(w))` adds a reverse direction to an `a -> b`
    /// edge. Passing `None` clears the direction; once neither direction
    /// carries a weight the records are deleted from both adjacency maps.
    /// A self-loop has one direction, so `None` deletes it outright.
    ///
    /// # Errors
    /// [`GraphError::MissingVertex`] if either endpoint is absent,
    /// [`GraphError::MissingEdge`] if the pair has no record.
    pub fn set_edge(&mut self, from: &K, to: &K, weight: EdgeWeight<W>) -> Result<(), K> {
        let mut record = *self.get_edge(from, to)?;
        record.to = weight;
        if !self.directed {
            record.from = weight;
        }
        self.write_edge(from, to, record);
        Ok(())
    }

    /// Clears the `from -> to` direction, and the reverse one in undirected
    /// graphs. The records disappear once no direction remains.
    ///
    /// # Errors
    /// [`GraphError::MissingVertex`] if either endpoint is absent,
    /// [`GraphError::MissingEdge`] if the pair has no record.
    pub fn remove_edge(&mut self, from: &K, to: &K) -> Result<(), K> {
        self.set_edge(from, to, None)?;
        debug_event!(from = ?from, to = ?to, "edge removed");
        Ok(())
    }

    /// Resolves a vertex or reports it missing.
    pub(crate) fn vertex(&self, id: &K) -> Result<&Vertex<K, V, W>, K> {
        self.vertices
            .get(id)
            .ok_or_else(|| GraphError::MissingVertex { id: id.clone() })
    }

    /// Writes `record` on the `from` side and its mirror on the `to` side, or
    /// deletes both when the record is nullified. Endpoints must exist.
    ///
    /// A self-loop has a single record whose outgoing and incoming weights
    /// are the same direction, so `from` is forced to equal `to`.
    fn write_edge(&mut self, from: &K, to: &K, mut record: Edge<W>) {
        if from == to {
            record.from = record.to;
        }
        if record.is_nullified() {
            debug_event!(from = ?from, to = ?to, "nullified edge collected");
            if let Some(vertex) = self.vertices.get_mut(from) {
                vertex.edges.remove(to);
            }
            if let Some(vertex) = self.vertices.get_mut(to) {
                vertex.edges.remove(from);
            }
            return;
        }
        if let Some(vertex) = self.vertices.get_mut(from) {
            vertex.edges.insert(to.clone(), record);
        }
        if from == to {
            return;
        }
        if let Some(vertex) = self.vertices.get_mut(to) {
            vertex.edges.insert(from.clone(), record.mirrored());
        }
    }
}

impl<K, V, W> Default for Graph<K, V, W>
where
    K: Clone + Eq + Hash + Debug,
    W: Weight,
{
    fn default() -> Self {
        Self::directed()
    }
}

//! Graph vertices: identity, payload and adjacency.

use crate::graph::edge::Edge;
use std::collections::HashMap;
use std::hash::Hash;

/// A vertex owned by a [`Graph`](crate::graph::Graph).
///
/// The id is fixed at creation. The adjacency map is keyed by neighbor id and
/// only the owning graph may change it, which keeps both copies of every edge
/// in sync.
#[derive(Debug, Clone)]
pub struct Vertex<K, V, W> {
    id: K,
    val: V,
    pub(crate) edges: HashMap<K, Edge<W>>,
}

impl<K, V, W> Vertex<K, V, W>
where
    K: Eq + Hash,
{
    pub(crate) fn new(id: K, val: V) -> Self {
        Self {
            id,
            val,
            edges: HashMap::new(),
        }
    }

    /// The vertex id.
    pub fn id(&self) -> &K {
        &self.id
    }

    /// The stored payload.
    pub fn val(&self) -> &V {
        &self.val
    }

    /// Mutable access to the payload.
    pub fn val_mut(&mut self) -> &mut V {
        &mut self.val
    }

    /// Consumes the vertex, returning its payload.
    pub fn into_val(self) -> V {
        self.val
    }

    /// Adjacency map, keyed by neighbor id.
    pub fn edges(&self) -> &HashMap<K, Edge<W>> {
        &self.edges
    }

    /// `true` if an edge record toward `id` exists, in either direction.
    pub fn adjacent(&self, id: &K) -> bool {
        self.edges.contains_key(id)
    }

    /// Number of adjacency entries.
    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}

//! Error taxonomy for graph mutation and pathfinding.
//!
//! Only structural misuse is an error. Absence that callers are expected to
//! handle in normal flow (removing a missing vertex, popping an empty frontier,
//! finding no path) is reported through `Option` instead.

use core::fmt::Debug;
use thiserror::Error;

/// Result type for fallible graph operations, generic over the vertex id type.
pub type Result<T, K> = std::result::Result<T, GraphError<K>>;

/// Errors surfaced by [`Graph`](crate::graph::Graph) operations.
///
/// Every variant carries the offending id(s) so callers can report which
/// vertex or edge was involved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError<K: Debug> {
    /// `add_vertex` was called with an id that is already present.
    #[error("VertexError: vertex {id:?} already exists")]
    DuplicateVertex {
        /// The id that collided.
        id: K,
    },

    /// An operation referenced a vertex id that is not in the graph.
    #[error("VertexError: vertex {id:?} does not exist")]
    MissingVertex {
        /// The id that could not be resolved.
        id: K,
    },

    /// An operation referenced a vertex pair with no adjacency record.
    #[error("EdgeError: no edge between {from:?} and {to:?}")]
    MissingEdge {
        /// Source endpoint as passed by the caller.
        from: K,
        /// Target endpoint as passed by the caller.
        to: K,
    },
}

impl<K: Debug> GraphError<K> {
    /// Returns `true` for [`GraphError::DuplicateVertex`].
    pub fn is_duplicate_vertex(&self) -> bool {
        matches!(self, Self::DuplicateVertex { .. })
    }

    /// Returns `true` for [`GraphError::MissingVertex`].
    pub fn is_missing_vertex(&self) -> bool {
        matches!(self, Self::MissingVertex { .. })
    }

    /// Returns `true` for [`GraphError::MissingEdge`].
    pub fn is_missing_edge(&self) -> bool {
        matches!(self, Self::MissingEdge { .. })
    }
}

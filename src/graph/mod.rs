//! Labeled graphs and the searches that run over them.
//!
//! - `edge`: per-endpoint edge records and the `Weight` bound
//! - `vertex`: vertex identity, payload and adjacency
//! - `labeled_graph`: the `Graph` type and its mutation API
//! - `pathfinding`: reachability, path enumeration, BFS and best-first search

pub mod edge;
pub mod labeled_graph;
pub mod pathfinding;
pub mod vertex;

pub use edge::{Edge, EdgeWeight, Weight};
pub use labeled_graph::Graph;
pub use pathfinding::{highest_weight, lowest_weight, lowest_weight_then_hops, Frame};
pub use vertex::Vertex;

//! # `flexgraph` - Labeled Graphs with Pluggable Pathfinding
//!
//! An in-memory graph over caller-chosen vertex ids and payloads, directed or
//! undirected, with weighted edges and four path queries:
//!
//! - **`is_reachable`**: depth-first search, first path found
//! - **`all_paths`**: every path a single depth-first sweep discovers
//! - **`shortest_path`**: breadth-first search, fewest edges
//! - **`quickest_path`**: best-first search ordered by a comparator
//!   (lowest accumulated weight by default, i.e. Dijkstra)
//!
//! ## Architecture
//!
//! Edges are not stored in a list of their own. Each edge is a pair of
//! mirrored records in the adjacency maps of its two endpoints; the graph
//! rewrites both records on every mutation and drops them once neither
//! direction carries a weight.
//!
//! Searches allocate their own frontier per call from [`collections`]:
//! [`Stack`] for depth-first, [`Queue`] for breadth-first and [`FlexHeap`] for
//! best-first. `FlexHeap` delegates every ordering decision to a comparator,
//! which is how `quickest_path_by` supports min-cost, max-cost and
//! tie-broken orderings without a separate heap type for each.
//!
//! ## Example
//!
//! ```rust
//! use flexgraph::Graph;
//!
//! let mut graph: Graph<char, ()> = Graph::directed();
//! for id in ['a', 'b', 'c'] {
//!     graph.add_vertex(id, ()).unwrap();
//! }
//! graph.add_weighted_edge(&'a', &'b', 5).unwrap();
//! graph.add_weighted_edge(&'a', &'c', 1).unwrap();
//! graph.add_weighted_edge(&'c', &'b', 1).unwrap();
//!
//! assert_eq!(graph.shortest_path(&'a', &'b').unwrap(), Some(vec!['a', 'b']));
//! assert_eq!(graph.quickest_path(&'a', &'b').unwrap(), Some(vec!['a', 'c', 'b']));
//!
//! let route = graph.quickest_route(&'a', &'b').unwrap().unwrap();
//! assert_eq!(*route.weight(), 2);
//! ```
//!
//! ## Logging
//!
//! Enable the `tracing` feature to emit `tracing` events for graph mutations
//! (debug level) and search progress (trace level).

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod trace;

pub mod collections;
pub mod error;
pub mod graph;

pub use collections::{FlexHeap, Queue, Stack};
pub use error::{GraphError, Result};
pub use graph::{Edge, EdgeWeight, Frame, Graph, Vertex, Weight};

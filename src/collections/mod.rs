//! Traversal frontier collections.
//!
//! - `stack`: LIFO over an owned node chain (depth-first frontier)
//! - `queue`: FIFO over an index-linked node arena (breadth-first frontier)
//! - `flex_heap`: binary heap with a caller-supplied ordering (best-first frontier)

pub mod flex_heap;
pub mod queue;
pub mod stack;

pub use flex_heap::{FlexHeap, FnComparator};
pub use queue::{Queue, QueueIter};
pub use stack::{Stack, StackIter, StackNode};

//! `Queue` — a FIFO queue over an index-linked node arena.
//!
//! Nodes live in a `Vec` of slots and link to their successor by index, so the
//! head and tail are plain indices instead of aliased pointers. Dequeued slots
//! are threaded onto a free list and reused by later enqueues, which keeps a
//! steady-state traversal frontier from growing its allocation.
//!
//! Performance Characteristics:
//! - Enqueue/Dequeue/Peek: O(1) (amortized for enqueue when the arena grows)
//! - Memory: one slot per live element plus free slots awaiting reuse

use core::fmt;

/// A slot in the node arena.
#[derive(Debug)]
enum QueueNode<T> {
    Occupied { val: T, next: Option<usize> },
    Free(Option<usize>), // Next free slot index
}

/// A first-in, first-out queue.
///
/// Used as the breadth-first frontier by the graph searches, but usable on its own.
pub struct Queue<T> {
    nodes: Vec<QueueNode<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
            tail: None,
            free_head: None,
            len: 0,
        }
    }

    /// Creates an empty queue with room for `capacity` nodes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Returns the number of queued elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends a value at the tail.
    pub fn enqueue(&mut self, val: T) {
        let idx = self.alloc(val);
        match self.tail {
            Some(tail) => {
                if let QueueNode::Occupied { next, .. } = &mut self.nodes[tail] {
                    *next = Some(idx);
                }
            }
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    /// Removes and returns the value at the head.
    ///
    /// Emptying the queue resets both head and tail.
    pub fn dequeue(&mut self) -> Option<T> {
        let idx = self.head?;
        let slot = core::mem::replace(&mut self.nodes[idx], QueueNode::Free(self.free_head));
        self.free_head = Some(idx);

        match slot {
            QueueNode::Occupied { val, next } => {
                self.head = next;
                if self.head.is_none() {
                    self.tail = None;
                }
                self.len -= 1;
                Some(val)
            }
            // Head always points at an occupied slot; restore state if it ever doesn't.
            QueueNode::Free(_) => {
                self.head = None;
                self.tail = None;
                self.len = 0;
                None
            }
        }
    }

    /// Returns a reference to the head without removing it.
    pub fn peek(&self) -> Option<&T> {
        match &self.nodes[self.head?] {
            QueueNode::Occupied { val, .. } => Some(val),
            QueueNode::Free(_) => None,
        }
    }

    /// Iterates from head to tail.
    pub fn iter(&self) -> QueueIter<'_, T> {
        QueueIter {
            queue: self,
            current: self.head,
        }
    }

    /// Removes every element and releases the arena.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.free_head = None;
        self.len = 0;
    }

    /// Places `val` in a free slot, reusing one if available.
    fn alloc(&mut self, val: T) -> usize {
        let node = QueueNode::Occupied { val, next: None };
        if let Some(free_idx) = self.free_head {
            if let QueueNode::Free(next_free) = self.nodes[free_idx] {
                self.free_head = next_free;
                self.nodes[free_idx] = node;
                return free_idx;
            }
        }
        self.nodes.push(node);
        self.nodes.len() - 1
    }
}

/// Borrowing iterator over a [`Queue`], head first.
pub struct QueueIter<'a, T> {
    queue: &'a Queue<T>,
    current: Option<usize>,
}

impl<'a, T> Iterator for QueueIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let queue: &'a Queue<T> = self.queue;
        match &queue.nodes[self.current?] {
            QueueNode::Occupied { val, next } => {
                self.current = *next;
                Some(val)
            }
            QueueNode::Free(_) => None,
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for val in iter {
            self.enqueue(val);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

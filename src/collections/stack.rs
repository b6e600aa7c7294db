//! `Stack` — a LIFO stack over an owned chain of nodes.
//!
//! Each node is exclusively owned by its predecessor (or by the stack head),
//! so push and pop are pointer swaps with no shifting.
//!
//! Performance Characteristics:
//! - Push/Pop/Peek: O(1)
//! - Drop: O(n), iterative so long chains cannot overflow the call stack

use core::fmt;

/// A singly linked cell holding one stacked value.
pub struct StackNode<T> {
    val: T,
    next: Option<Box<StackNode<T>>>,
}

impl<T> StackNode<T> {
    /// Creates a detached node.
    pub fn new(val: T) -> Self {
        Self { val, next: None }
    }

    /// Returns the stored value.
    pub fn val(&self) -> &T {
        &self.val
    }
}

/// A last-in, first-out stack.
///
/// Used as the depth-first frontier by the graph searches, but usable on its own.
pub struct Stack<T> {
    head: Option<Box<StackNode<T>>>,
    len: usize,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns the number of elements on the stack.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Pushes a value, making it the new head.
    pub fn push(&mut self, val: T) {
        let mut node = Box::new(StackNode::new(val));
        node.next = self.head.take();
        self.head = Some(node);
        self.len += 1;
    }

    /// Removes and returns the most recently pushed value.
    pub fn pop(&mut self) -> Option<T> {
        let node = self.head.take()?;
        let StackNode { val, next } = *node;
        self.head = next;
        self.len -= 1;
        Some(val)
    }

    /// Returns a reference to the head without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.head.as_deref().map(StackNode::val)
    }

    /// Iterates from the head (most recent) to the bottom.
    pub fn iter(&self) -> StackIter<'_, T> {
        StackIter {
            current: self.head.as_deref(),
        }
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        while self.pop().is_some() {}
    }
}

/// Borrowing iterator over a [`Stack`], head first.
pub struct StackIter<'a, T> {
    current: Option<&'a StackNode<T>>,
}

impl<'a, T> Iterator for StackIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node.next.as_deref();
        Some(&node.val)
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for val in iter {
            self.push(val);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

//! `FlexHeap` — a binary heap whose ordering is supplied by the caller.
//!
//! The heap never compares elements itself. Every ordering decision goes
//! through a comparator `cmp(old, new) -> bool` that answers "does `new` have
//! strictly higher priority than `old`?". A min-heap is `|old, new| old > new`,
//! a max-heap is `|old, new| old < new`, and composite keys (cost, then hop
//! count) are just a different closure.
//!
//! Positions are 1-indexed: the root is position 1 and the children of `i`
//! are `2i` and `2i + 1`. Position `i` lives at `items[i - 1]`, so no
//! placeholder element is stored.
//!
//! ### Performance Characteristics
//! | Operation | Complexity |
//! |-----------|------------|
//! | `insert`  | O(log n)   |
//! | `extract` | O(log n)   |
//! | `peek`    | O(1)       |
//!
//! There is no decrease-key. Callers that need to improve a priority insert a
//! fresh entry and discard stale ones when they surface.

use core::fmt;

/// Comparator type used by the convenience constructors.
pub type FnComparator<T> = fn(&T, &T) -> bool;

/// A binary heap ordered by a caller-supplied priority predicate.
pub struct FlexHeap<T, F = FnComparator<T>> {
    items: Vec<T>,
    comparator: F,
}

impl<T: PartialOrd> FlexHeap<T> {
    /// Creates a heap that extracts the smallest element first.
    pub fn min_heap() -> Self {
        Self::new(|old: &T, new: &T| old > new)
    }

    /// Creates a heap that extracts the largest element first.
    pub fn max_heap() -> Self {
        Self::new(|old: &T, new: &T| old < new)
    }
}

impl<T, F> FlexHeap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Creates an empty heap ordered by `comparator`.
    pub fn new(comparator: F) -> Self {
        Self {
            items: Vec::new(),
            comparator,
        }
    }

    /// Creates an empty heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize, comparator: F) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            comparator,
        }
    }

    /// Returns the number of elements in the heap.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Alias for [`FlexHeap::size`].
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the highest-priority element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Level-order view of the heap, root first.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Inserts a value and sifts it toward the root.
    pub fn insert(&mut self, value: T) {
        self.items.push(value);
        self.sift_up(self.size());
    }

    /// Removes and returns the highest-priority element.
    pub fn extract(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let value = self.items.pop()?;
        if !self.is_empty() {
            self.sift_down(1);
        }
        Some(value)
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 1 {
            let parent = pos / 2;
            if self.promotes(parent, pos) {
                self.swap(parent, pos);
                pos = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let size = self.size();
        loop {
            let first = pos * 2;
            if first > size {
                break;
            }
            let second = first + 1;
            let higher = if second <= size && self.promotes(first, second) {
                second
            } else {
                first
            };

            if self.promotes(pos, higher) {
                self.swap(pos, higher);
                pos = higher;
            } else {
                break;
            }
        }
    }

    // `true` when the element at `new` outranks the one at `old` (1-indexed).
    fn promotes(&self, old: usize, new: usize) -> bool {
        (self.comparator)(&self.items[old - 1], &self.items[new - 1])
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a - 1, b - 1);
    }
}

impl<T, F> Extend<T> for FlexHeap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: PartialOrd> Default for FlexHeap<T> {
    fn default() -> Self {
        Self::min_heap()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for FlexHeap<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlexHeap")
            .field("len", &self.items.len())
            .field("items", &self.items)
            .finish()
    }
}

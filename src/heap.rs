//! Binary heap over `f64` with an explicit ordering direction
//!
//! The standard [`BinaryHeap`](std::collections::BinaryHeap) needs [`Ord`], which `f64` lacks.
//! Rather than wrapping values in a type with an inverted comparison, the heap here takes its
//! direction as a [`Priority`] at construction and orders values with [`f64::total_cmp`].

use std::fmt;

/// Which end of the ordering sits at the top of a [`PriorityQueue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    /// The largest value is on top
    Max,
    /// The smallest value is on top
    Min,
}

impl Priority {
    /// Whether `a` belongs strictly above `b`
    #[inline]
    fn outranks(self, a: f64, b: f64) -> bool {
        match self {
            Priority::Max => a.total_cmp(&b).is_gt(),
            Priority::Min => a.total_cmp(&b).is_lt(),
        }
    }
}

/// Array-backed binary heap of `f64` values
///
/// Push and pop run in `O(log n)`, peeking at the top is `O(1)`.
#[derive(Debug, Clone)]
pub struct PriorityQueue {
    priority: Priority,
    /// Heap-ordered storage: every parent outranks or ties its children
    items: Vec<f64>,
}

impl PriorityQueue {
    /// Constructs an empty queue with the given top-of-heap direction
    pub fn new(priority: Priority) -> Self {
        Self {
            priority,
            items: Vec::new(),
        }
    }

    /// Constructs an empty queue with room for `capacity` values before reallocating
    pub fn with_capacity(priority: Priority, capacity: usize) -> Self {
        Self {
            priority,
            items: Vec::with_capacity(capacity),
        }
    }

    /// Direction this queue was constructed with
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Number of values held
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue holds no values
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The highest-priority value, without removing it
    pub fn peek(&self) -> Option<f64> {
        self.items.first().copied()
    }

    /// Inserts a value
    pub fn push(&mut self, value: f64) {
        self.items.push(value);
        self.sift_up(self.items.len() - 1);
    }

    /// Removes and returns the highest-priority value
    pub fn pop(&mut self) -> Option<f64> {
        if self.items.is_empty() {
            return None;
        }

        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let top = self.items.pop();

        if !self.items.is_empty() {
            self.sift_down(0);
        }

        top
    }

    /// Removes every value, keeping the allocation
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Values in heap storage order
    ///
    /// Only the first element has a defined position (the top); the rest follow heap layout.
    pub fn as_slice(&self) -> &[f64] {
        &self.items
    }

    /// Iterates over values in heap storage order
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.items.iter()
    }

    /// Consumes the queue, returning its values from highest to lowest priority
    pub fn into_sorted_vec(mut self) -> Vec<f64> {
        let mut sorted = Vec::with_capacity(self.items.len());
        while let Some(v) = self.pop() {
            sorted.push(v);
        }
        sorted
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.priority.outranks(self.items[i], self.items[parent]) {
                break;
            }
            self.items.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut top = i;

            if left < len && self.priority.outranks(self.items[left], self.items[top]) {
                top = left;
            }
            if right < len && self.priority.outranks(self.items[right], self.items[top]) {
                top = right;
            }
            if top == i {
                break;
            }

            self.items.swap(i, top);
            i = top;
        }
    }
}

impl<'a> IntoIterator for &'a PriorityQueue {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for PriorityQueue {
    /// Renders the values in storage order, e.g. `[10.0, 6.0, 2.0]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.items)
    }
}

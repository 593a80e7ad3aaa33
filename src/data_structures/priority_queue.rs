use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-priority queue of table slots keyed by tentative distance
///
/// Entries are never updated in place; pushing a slot again with a smaller
/// priority leaves the older entry behind for the caller to skip. Equal
/// priorities pop in ascending slot order.
#[derive(Debug, Clone)]
pub struct MinHeap<P>
where
    P: Ord + Copy + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(P, usize)>>,
}

impl<P> MinHeap<P>
where
    P: Ord + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinHeap {
            heap: BinaryHeap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a slot with the given priority
    pub fn push(&mut self, slot: usize, priority: P) {
        self.heap.push(Reverse((priority, slot)));
    }

    /// Removes the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(usize, P)> {
        self.heap.pop().map(|Reverse((priority, slot))| (slot, priority))
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek(&self) -> Option<(usize, P)> {
        self.heap.peek().map(|Reverse((priority, slot))| (*slot, *priority))
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<P> Default for MinHeap<P>
where
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

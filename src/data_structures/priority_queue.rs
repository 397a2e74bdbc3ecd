use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A heap entry ordered by priority, then by insertion sequence
#[derive(Debug)]
struct Entry<T, P> {
    priority: P,
    sequence: u64,
    item: T,
}

impl<T, P: Ord> PartialEq for Entry<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, P: Ord> Eq for Entry<T, P> {}

impl<T, P: Ord> PartialOrd for Entry<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, P: Ord> Ord for Entry<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// A min-priority queue over BinaryHeap with stable tie-breaking
///
/// Items with equal priority pop in the order they were pushed, so results
/// are reproducible for a fixed push order. Items themselves need no
/// ordering.
#[derive(Debug)]
pub struct MinPriorityQueue<T, P>
where
    T: Debug,
    P: Ord + Copy + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<Entry<T, P>>>,

    /// Sequence number handed to the next push
    next_sequence: u64,
}

impl<T, P> MinPriorityQueue<T, P>
where
    T: Debug,
    P: Ord + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinPriorityQueue {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an element with the given priority into the priority queue
    pub fn push(&mut self, item: T, priority: P) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Reverse(Entry {
            priority,
            sequence,
            item,
        }));
    }

    /// Removes the element with the lowest priority
    pub fn pop(&mut self) -> Option<(T, P)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.item, entry.priority))
    }

    /// Returns the element with the lowest priority without removing it
    pub fn peek(&self) -> Option<(&T, P)> {
        self.heap
            .peek()
            .map(|Reverse(entry)| (&entry.item, entry.priority))
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T, P> Default for MinPriorityQueue<T, P>
where
    T: Debug,
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

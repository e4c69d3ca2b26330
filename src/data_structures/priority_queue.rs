use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-priority queue for shortest path algorithms
///
/// Entries with equal priority pop in the order they were pushed, so a search
/// over a fixed graph always settles ties the same way.
#[derive(Debug)]
pub struct MinPriorityQueue<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// The underlying binary heap, keyed by (priority, push sequence)
    heap: BinaryHeap<Reverse<(P, u64, V)>>,

    /// Sequence number handed to the next push
    next_seq: u64,
}

impl<V, P> MinPriorityQueue<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinPriorityQueue {
            heap: BinaryHeap::new(),
            next_seq: 0,
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
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, self.next_seq, vertex)));
        self.next_seq += 1;
    }

    /// Removes the element with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, _, vertex))| (vertex, priority))
    }
}

impl<V, P> Default for MinPriorityQueue<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

//! Binary-heap min-priority queue
//!
//! There is no decrease-key: searches insert a fresh entry whenever they
//! find a new route to a node and skip stale entries when they come out.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::error::{PathfindError, Result};

/// Entry plus its insertion number, so that equal entries leave in the
/// order they arrived.
#[derive(Debug)]
struct Sequenced<E> {
    entry: E,
    seq: u64,
}

impl<E: Ord> PartialEq for Sequenced<E> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<E: Ord> Eq for Sequenced<E> {}

impl<E: Ord> PartialOrd for Sequenced<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E: Ord> Ord for Sequenced<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.entry
            .cmp(&other.entry)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Min-oriented priority queue over any totally ordered entry type.
///
/// Ties are broken first in, first out.
#[derive(Debug)]
pub struct PriorityQueue<E> {
    heap: BinaryHeap<Reverse<Sequenced<E>>>,
    next_seq: u64,
}

impl<E: Ord> Default for PriorityQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Ord> PriorityQueue<E> {
    pub fn new() -> Self {
        PriorityQueue {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Add an entry. O(log n).
    pub fn insert(&mut self, entry: E) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Sequenced { entry, seq }));
    }

    /// Remove and return the smallest entry. O(log n).
    pub fn remove_min(&mut self) -> Result<E> {
        self.heap
            .pop()
            .map(|Reverse(s)| s.entry)
            .ok_or(PathfindError::EmptyQueue)
    }

    /// The smallest entry, without removing it.
    pub fn peek_min(&self) -> Result<&E> {
        self.heap
            .peek()
            .map(|Reverse(s)| &s.entry)
            .ok_or(PathfindError::EmptyQueue)
    }
}

//! Back-pointer arena for path reconstruction
//!
//! Every entry a search creates is appended to a [`SearchTree`] and never
//! changed afterwards. Parents are referred to by index, so queue entries
//! only carry an [`EntryId`] and a priority.

use std::cmp::Ordering;

use crate::graph::Edge;

/// Index of an entry in a [`SearchTree`].
pub type EntryId = usize;

/// A node reached by the search, with the edge and parent it was reached by.
#[derive(Debug, Clone)]
pub struct SearchEntry<N> {
    pub node: N,
    /// `None` for the root
    pub incoming_edge: Option<Edge<N>>,
    /// `None` for the root
    pub parent: Option<EntryId>,
    pub cost_so_far: f64,
}

/// Append-only arena of search entries.
#[derive(Debug, Clone)]
pub struct SearchTree<N> {
    entries: Vec<SearchEntry<N>>,
}

impl<N: Clone> SearchTree<N> {
    /// A tree holding only the root entry for `start`, at cost 0.
    pub fn new(start: N) -> Self {
        SearchTree {
            entries: vec![SearchEntry {
                node: start,
                incoming_edge: None,
                parent: None,
                cost_so_far: 0.0,
            }],
        }
    }

    pub const ROOT: EntryId = 0;

    /// Record that `edge` was followed from `parent`, and return the new entry.
    pub fn push(&mut self, parent: EntryId, edge: Edge<N>) -> EntryId {
        let cost_so_far = self.entries[parent].cost_so_far + edge.weight();
        self.entries.push(SearchEntry {
            node: edge.end().clone(),
            incoming_edge: Some(edge),
            parent: Some(parent),
            cost_so_far,
        });
        self.entries.len() - 1
    }

    pub fn get(&self, id: EntryId) -> &SearchEntry<N> {
        &self.entries[id]
    }

    /// Entries created so far, the root included.
    pub fn num_entries(&self) -> usize {
        self.entries.len()
    }

    /// The edges from the root to `id`, in walking order.
    pub fn extract_path(&self, id: EntryId) -> Vec<Edge<N>> {
        let mut path = Vec::new();
        let mut current = &self.entries[id];
        while let (Some(edge), Some(parent)) = (&current.incoming_edge, current.parent) {
            path.push(edge.clone());
            current = &self.entries[parent];
        }
        path.reverse();
        path
    }
}

/// Priority of a queued entry.
///
/// Costs are never NaN (weights are non-negative and finite, estimates may
/// be infinite), so `total_cmp` gives the intended order.
#[derive(Debug, Clone, Copy)]
pub struct Queued {
    pub priority: f64,
    pub id: EntryId,
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Queued {}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Queued {
    /// Compares priorities only; the queue breaks ties by insertion order.
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority.total_cmp(&other.priority)
    }
}

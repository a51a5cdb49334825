use std::collections::HashSet;

use crate::error::Result;
use crate::graph::Graph;
use crate::search::queue::PriorityQueue;
use crate::search::tree::{Queued, SearchTree};
use crate::search::{check_endpoints, SearchResult};

/// Priority-queue search shared by Dijkstra and A*.
///
/// Entries are ordered by `cost_so_far + estimate(node)`. Stale entries for
/// nodes that are already finalized are skipped when removed, and every
/// removal (skipped or not) counts as one iteration.
pub(crate) fn best_first_search<G, F>(
    graph: &G,
    start: &G::Node,
    goal: &G::Node,
    estimate: F,
) -> Result<SearchResult<G::Node>>
where
    G: Graph,
    F: Fn(&G::Node) -> f64,
{
    check_endpoints(graph, start, goal)?;

    let mut tree = SearchTree::new(start.clone());
    let mut queue = PriorityQueue::new();
    let mut finalized: HashSet<G::Node> = HashSet::new();
    let mut iterations = 0;

    queue.insert(Queued {
        priority: estimate(start),
        id: SearchTree::<G::Node>::ROOT,
    });

    while !queue.is_empty() {
        let Queued { id, .. } = queue.remove_min()?;
        iterations += 1;

        let entry = tree.get(id);
        if finalized.contains(&entry.node) {
            continue;
        }
        finalized.insert(entry.node.clone());

        if entry.node == *goal {
            let cost = entry.cost_so_far;
            let path = tree.extract_path(id);
            tracing::debug!(
                cost,
                iterations,
                edges = path.len(),
                entries = tree.num_entries(),
                frontier = queue.len(),
                "goal reached"
            );
            return Ok(SearchResult::success(
                start.clone(),
                goal.clone(),
                cost,
                path,
                iterations,
            ));
        }

        let node = entry.node.clone();
        for edge in graph.outgoing_edges(&node)? {
            let child = tree.push(id, edge);
            let child_entry = tree.get(child);
            queue.insert(Queued {
                priority: child_entry.cost_so_far + estimate(&child_entry.node),
                id: child,
            });
        }
    }

    tracing::debug!(
        iterations,
        finalized = finalized.len(),
        entries = tree.num_entries(),
        "frontier exhausted without reaching goal"
    );
    Ok(SearchResult::failure(start.clone(), goal.clone(), iterations))
}

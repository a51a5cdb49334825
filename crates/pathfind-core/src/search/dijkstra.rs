use crate::error::Result;
use crate::graph::Graph;
use crate::search::best_first::best_first_search;
use crate::search::{SearchResult, Searcher};

/// Uniform-cost search (Dijkstra's algorithm).
///
/// Expands nodes in order of the cost of the cheapest known route to them,
/// so the first time the goal is removed from the queue its cost is minimal.
#[derive(Debug)]
pub struct Dijkstra<'g, G: Graph> {
    graph: &'g G,
    start: G::Node,
    goal: G::Node,
}

impl<'g, G: Graph> Dijkstra<'g, G> {
    pub fn new(graph: &'g G, start: G::Node, goal: G::Node) -> Self {
        Dijkstra { graph, start, goal }
    }
}

impl<G: Graph> Searcher for Dijkstra<'_, G> {
    type Node = G::Node;

    #[tracing::instrument(skip(self), fields(strategy = "dijkstra", graph = self.graph.name(), start = %self.start, goal = %self.goal))]
    fn search(&mut self) -> Result<SearchResult<G::Node>> {
        best_first_search(self.graph, &self.start, &self.goal, |_| 0.0)
    }
}

#[cfg(test)]
mod tests;

use crate::error::Result;
use crate::graph::Graph;
use crate::search::best_first::best_first_search;
use crate::search::{SearchResult, Searcher};

/// A* search: Dijkstra guided by the graph's cost estimate.
///
/// Entries are ordered by `cost_so_far + guess_cost(node, goal)`. The result
/// is optimal when [`Graph::guess_cost`] never overestimates.
#[derive(Debug)]
pub struct AStar<'g, G: Graph> {
    graph: &'g G,
    start: G::Node,
    goal: G::Node,
}

impl<'g, G: Graph> AStar<'g, G> {
    pub fn new(graph: &'g G, start: G::Node, goal: G::Node) -> Self {
        AStar { graph, start, goal }
    }
}

impl<G: Graph> Searcher for AStar<'_, G> {
    type Node = G::Node;

    #[tracing::instrument(skip(self), fields(strategy = "astar", graph = self.graph.name(), start = %self.start, goal = %self.goal))]
    fn search(&mut self) -> Result<SearchResult<G::Node>> {
        let graph = self.graph;
        let goal = &self.goal;
        best_first_search(graph, &self.start, goal, |node| graph.guess_cost(node, goal))
    }
}

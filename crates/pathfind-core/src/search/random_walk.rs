use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::Result;
use crate::graph::Graph;
use crate::search::{check_endpoints, SearchResult, Searcher};

/// Follows uniformly random outgoing edges until it stumbles on the goal.
///
/// Gives up after [`RandomWalk::MAX_STEPS`] steps or at a dead end. The path
/// it reports may revisit nodes and is not in any sense short.
#[derive(Debug)]
pub struct RandomWalk<'g, G: Graph, R: Rng> {
    graph: &'g G,
    start: G::Node,
    goal: G::Node,
    rng: R,
}

impl<'g, G: Graph, R: Rng> RandomWalk<'g, G, R> {
    pub const MAX_STEPS: usize = 10_000;

    pub fn new(graph: &'g G, start: G::Node, goal: G::Node, rng: R) -> Self {
        RandomWalk {
            graph,
            start,
            goal,
            rng,
        }
    }
}

impl<G: Graph, R: Rng> Searcher for RandomWalk<'_, G, R> {
    type Node = G::Node;

    #[tracing::instrument(skip(self), fields(strategy = "random", graph = self.graph.name(), start = %self.start, goal = %self.goal))]
    fn search(&mut self) -> Result<SearchResult<G::Node>> {
        check_endpoints(self.graph, &self.start, &self.goal)?;

        let mut current = self.start.clone();
        let mut cost = 0.0;
        let mut path = Vec::new();
        let mut iterations = 0;

        while iterations < Self::MAX_STEPS {
            iterations += 1;
            if current == self.goal {
                tracing::debug!(cost, iterations, edges = path.len(), "goal reached");
                return Ok(SearchResult::success(
                    self.start.clone(),
                    self.goal.clone(),
                    cost,
                    path,
                    iterations,
                ));
            }
            let edges = self.graph.outgoing_edges(&current)?;
            let Some(edge) = edges.choose(&mut self.rng) else {
                tracing::debug!(node = %current, iterations, "walked into a dead end");
                break;
            };
            cost += edge.weight();
            current = edge.end().clone();
            path.push(edge.clone());
        }

        tracing::debug!(iterations, "random walk gave up");
        Ok(SearchResult::failure(
            self.start.clone(),
            self.goal.clone(),
            iterations,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PathfindError;
    use crate::graph::{AdjacencyGraph, Edge, GridGraph, Point};
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn graph_of(edges: &[(&str, &str, f64)]) -> AdjacencyGraph {
        let mut graph = AdjacencyGraph::new();
        for &(a, b, w) in edges {
            graph.add_edge(Edge::weighted(a.to_string(), b.to_string(), w));
        }
        graph
    }

    fn walk(graph: &AdjacencyGraph, start: &str, goal: &str, seed: u64) -> SearchResult<String> {
        RandomWalk::new(
            graph,
            start.to_string(),
            goal.to_string(),
            ChaCha8Rng::seed_from_u64(seed),
        )
        .search()
        .unwrap()
    }

    #[test]
    fn test_start_equals_goal() {
        let graph = graph_of(&[("a", "b", 1.0)]);
        let result = walk(&graph, "a", "a", 42);
        assert!(result.succeeded);
        assert_eq!(result.cost, 0.0);
        assert_eq!(result.path, Some(vec![]));
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn test_single_route_is_found() {
        let graph = graph_of(&[("a", "b", 2.0), ("b", "c", 3.0)]);
        let result = walk(&graph, "a", "c", 42);
        assert!(result.succeeded);
        assert_eq!(result.cost, 5.0);
        assert_eq!(result.iterations, 3);
        result.validate().unwrap();
    }

    #[test]
    fn test_dead_end_fails() {
        let graph = graph_of(&[("a", "b", 1.0), ("c", "a", 1.0)]);
        let result = walk(&graph, "a", "c", 42);
        assert!(!result.succeeded);
        assert_eq!(result.cost, -1.0);
        assert!(result.path.is_none());
        assert_eq!(result.iterations, 2);
    }

    #[test]
    fn test_step_cap_is_never_exceeded() {
        // a <-> b forever, c is unreachable
        let graph = graph_of(&[("a", "b", 1.0), ("b", "a", 1.0), ("c", "a", 1.0)]);
        let result = walk(&graph, "a", "c", 7);
        assert!(!result.succeeded);
        assert_eq!(result.iterations, RandomWalk::<AdjacencyGraph, ChaCha8Rng>::MAX_STEPS);
    }

    #[test]
    fn test_first_choice_rng_follows_first_edge() {
        // a zero-step rng always picks the first edge
        let graph = graph_of(&[("a", "b", 1.0), ("a", "c", 1.0), ("b", "c", 4.0)]);
        let result = RandomWalk::new(&graph, "a".to_string(), "c".to_string(), StepRng::new(0, 0))
            .search()
            .unwrap();
        assert!(result.succeeded);
        assert_eq!(result.cost, 5.0);
        assert_eq!(result.path_len(), Some(2));
    }

    #[test]
    fn test_same_seed_same_walk() {
        let grid = GridGraph::from_rows(&["....", "....", "...."]).unwrap();
        let run = |seed| {
            RandomWalk::new(
                &grid,
                Point::new(0, 0),
                Point::new(3, 2),
                ChaCha8Rng::seed_from_u64(seed),
            )
            .search()
            .unwrap()
        };
        let first = run(42);
        assert_eq!(run(42), first);
        assert!(first.iterations <= RandomWalk::<GridGraph, ChaCha8Rng>::MAX_STEPS);
        first.validate().unwrap();
    }

    #[test]
    fn test_unknown_goal() {
        let graph = graph_of(&[("a", "b", 1.0)]);
        let err = RandomWalk::new(&graph, "a".to_string(), "z".to_string(), StepRng::new(0, 0))
            .search()
            .unwrap_err();
        assert!(matches!(err, PathfindError::UnknownNode { .. }));
    }
}

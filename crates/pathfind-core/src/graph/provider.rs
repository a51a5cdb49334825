use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::Result;
use crate::format::format_weight;
use crate::graph::Edge;

/// A directed graph the search strategies can walk.
///
/// Implementations derive edges on demand, so the node space may be far too
/// large to enumerate (see [`Graph::nodes`]). Searches never mutate a graph.
pub trait Graph {
    type Node: Clone + Eq + Hash + fmt::Debug + fmt::Display;

    /// Short human name of the graph variant, used in messages.
    fn name(&self) -> &'static str;

    /// All nodes of the graph.
    ///
    /// Fails with [`crate::error::PathfindError::Unsupported`] when the node
    /// space is unbounded.
    fn nodes(&self) -> Result<HashSet<Self::Node>>;

    /// Whether `v` is a valid node of this graph.
    fn contains_node(&self, v: &Self::Node) -> bool;

    /// Edges leaving `v`. Every edge starts at `v` and ends at a valid node.
    ///
    /// Fails with [`crate::error::PathfindError::UnknownNode`] if `v` is not
    /// a node of this graph; a dead end is an empty list.
    fn outgoing_edges(&self, v: &Self::Node) -> Result<Vec<Edge<Self::Node>>>;

    /// Whether edge weights are meaningful. A property of the variant.
    fn is_weighted(&self) -> bool;

    /// Lower bound on the cost of getting from `v` to `w`.
    ///
    /// A* is only optimal when this never overestimates. The default of 0 is
    /// always admissible.
    fn guess_cost(&self, _v: &Self::Node, _w: &Self::Node) -> f64 {
        0.0
    }

    /// Parse a node from its text form.
    fn parse_node(&self, s: &str) -> Result<Self::Node>;

    fn num_nodes(&self) -> Result<usize> {
        Ok(self.nodes()?.len())
    }

    /// Total number of edges. Walks every node, so it is slow on big graphs.
    fn num_edges(&self) -> Result<usize> {
        let mut count = 0;
        for v in self.nodes()? {
            count += self.outgoing_edges(&v)?.len();
        }
        Ok(count)
    }

    /// `count` nodes picked uniformly at random, possibly repeating.
    ///
    /// Nodes are put in text order before picking, so a seeded `rng` gives
    /// the same nodes on every run. Empty for an empty graph. Graphs whose
    /// `nodes` is unsupported must override this.
    fn random_nodes<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Result<Vec<Self::Node>>
    where
        Self: Sized,
    {
        let mut nodes: Vec<Self::Node> = self.nodes()?.into_iter().collect();
        nodes.sort_by_cached_key(ToString::to_string);
        Ok((0..count)
            .filter_map(|_| nodes.choose(rng).cloned())
            .collect())
    }

    /// One line per random node listing where its edges lead, e.g.
    /// `* a ---> b [8], c [15]`. Weights are shown for weighted graphs.
    fn example_outgoing_edges<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Result<Vec<String>>
    where
        Self: Sized,
    {
        let mut lines = Vec::new();
        for start in self.random_nodes(rng, count)? {
            let edges = self.outgoing_edges(&start)?;
            if edges.is_empty() {
                lines.push(format!("* {} with no outgoing edges", start));
                continue;
            }
            let ends: Vec<String> = edges
                .iter()
                .map(|e| {
                    if self.is_weighted() {
                        format!("{} [{}]", e.end(), format_weight(e.weight()))
                    } else {
                        e.end().to_string()
                    }
                })
                .collect();
            lines.push(format!("* {} ---> {}", start, ends.join(", ")));
        }
        Ok(lines)
    }

    /// ASCII drawing of the graph with start, goal and path marked.
    /// Only grid graphs can be drawn.
    fn draw(
        &self,
        _max_width: usize,
        _max_height: usize,
        _start: Option<&Self::Node>,
        _goal: Option<&Self::Node>,
        _path: Option<&[Edge<Self::Node>]>,
    ) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AdjacencyGraph, SlidingPuzzle};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn cities() -> AdjacencyGraph {
        AdjacencyGraph::parse("a\tb\t8\na\tc\t15\nb\tc\t5\n").unwrap()
    }

    #[test]
    fn test_random_nodes_are_graph_nodes() {
        let graph = cities();
        let nodes = graph.nodes().unwrap();
        let picked = graph
            .random_nodes(&mut ChaCha8Rng::seed_from_u64(42), 20)
            .unwrap();
        assert_eq!(picked.len(), 20);
        assert!(picked.iter().all(|v| nodes.contains(v)));
    }

    #[test]
    fn test_random_nodes_repeat_for_a_seed() {
        let graph = cities();
        let pick = |seed| {
            graph
                .random_nodes(&mut ChaCha8Rng::seed_from_u64(seed), 8)
                .unwrap()
        };
        assert_eq!(pick(7), pick(7));
    }

    #[test]
    fn test_empty_graph_has_no_random_nodes() {
        let graph = AdjacencyGraph::new();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        assert!(graph.random_nodes(&mut rng, 8).unwrap().is_empty());
        assert!(graph.example_outgoing_edges(&mut rng, 8).unwrap().is_empty());
    }

    #[test]
    fn test_example_outgoing_edges_format() {
        let graph = cities();
        let lines = graph
            .example_outgoing_edges(&mut ChaCha8Rng::seed_from_u64(1), 30)
            .unwrap();
        assert_eq!(lines.len(), 30);
        for line in &lines {
            assert!(
                line == "* a ---> b [8], c [15]"
                    || line == "* b ---> c [5]"
                    || line == "* c with no outgoing edges",
                "{line}"
            );
        }
    }

    #[test]
    fn test_unweighted_examples_omit_weights() {
        let puzzle = SlidingPuzzle::new(2, 2).unwrap();
        let lines = puzzle
            .example_outgoing_edges(&mut ChaCha8Rng::seed_from_u64(3), 4)
            .unwrap();
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| l.contains(" ---> ") && !l.contains('[')));
    }
}

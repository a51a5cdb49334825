//! Search strategies and their shared machinery
//!
//! - `RandomWalk`: follows random edges, as a baseline
//! - `Dijkstra`: uniform-cost search, optimal on non-negative weights
//! - `AStar`: Dijkstra ordered by the graph's cost estimate
//!
//! Dijkstra and A* share one loop over a [`queue::PriorityQueue`] of
//! [`tree::SearchTree`] entries.

pub mod astar;
mod best_first;
pub mod dijkstra;
pub mod queue;
pub mod random_walk;
pub mod result;
pub mod tree;

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::{PathfindError, Result};
use crate::graph::Graph;

pub use astar::AStar;
pub use dijkstra::Dijkstra;
pub use queue::PriorityQueue;
pub use random_walk::RandomWalk;
pub use result::SearchResult;
pub use tree::{EntryId, Queued, SearchEntry, SearchTree};

/// A configured search that can be run to completion.
///
/// Failing to find a path is a normal outcome reported in the result.
/// Errors are reserved for unknown endpoints and broken graph contracts.
pub trait Searcher {
    type Node;

    fn search(&mut self) -> Result<SearchResult<Self::Node>>;
}

/// Reject start or goal nodes the graph does not contain.
pub(crate) fn check_endpoints<G: Graph>(graph: &G, start: &G::Node, goal: &G::Node) -> Result<()> {
    for node in [start, goal] {
        if !graph.contains_node(node) {
            return Err(PathfindError::unknown_node(node));
        }
    }
    Ok(())
}

/// Strategy selector for the command line and config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    Random,
    Dijkstra,
    #[default]
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Random, Algorithm::Dijkstra, Algorithm::AStar];

    /// Run this strategy once. `rng` is only consumed by the random walk.
    pub fn run<G, R>(
        self,
        graph: &G,
        start: G::Node,
        goal: G::Node,
        rng: &mut R,
    ) -> Result<SearchResult<G::Node>>
    where
        G: Graph,
        R: Rng,
    {
        match self {
            Algorithm::Random => RandomWalk::new(graph, start, goal, rng).search(),
            Algorithm::Dijkstra => Dijkstra::new(graph, start, goal).search(),
            Algorithm::AStar => AStar::new(graph, start, goal).search(),
        }
    }
}

impl FromStr for Algorithm {
    type Err = PathfindError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "random" => Ok(Algorithm::Random),
            "dijkstra" | "ucs" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" => Ok(Algorithm::AStar),
            other => Err(PathfindError::UsageError(format!(
                "unknown algorithm '{}' (expected random, dijkstra or astar)",
                other
            ))),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Random => write!(f, "random"),
            Algorithm::Dijkstra => write!(f, "dijkstra"),
            Algorithm::AStar => write!(f, "astar"),
        }
    }
}

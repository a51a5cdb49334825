//! Graphs the search strategies run on
//!
//! Provides the graph contract and its variants:
//! - `AdjacencyGraph`: finite graph with string nodes, loaded from an edge list
//! - `GridGraph`: 2D bitmap with eight-directional movement
//! - `SlidingPuzzle`: states of the N x M sliding-tile puzzle
//! - `WordLadder`: dictionary words linked by single-letter substitutions

pub mod adjacency;
pub mod edge;
pub mod grid;
pub mod point;
pub mod provider;
pub mod sliding_puzzle;
pub mod word_ladder;

pub use adjacency::AdjacencyGraph;
pub use edge::Edge;
pub use grid::GridGraph;
pub use point::Point;
pub use provider::Graph;
pub use sliding_puzzle::{PuzzleState, SlidingPuzzle};
pub use word_ladder::WordLadder;

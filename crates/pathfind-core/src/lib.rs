//! Pathfind Core Library
//!
//! Generic shortest-path search over graphs that produce their edges on
//! demand: explicit adjacency lists, 2D grids, sliding-tile puzzles and
//! word ladders.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod search;

//! CLI commands for pathfind

pub mod dispatch;
pub mod search;

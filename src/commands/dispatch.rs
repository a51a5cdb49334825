//! Command dispatch logic for pathfind
use std::path::Path;
use std::time::Instant;

use pathfind_core::config::PathfindConfig;
use pathfind_core::error::Result;
use pathfind_core::graph::{AdjacencyGraph, GridGraph, SlidingPuzzle, WordLadder};
use pathfind_core::trace_time;

use crate::cli::{Cli, GraphType};
use crate::commands::search;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = load_config(cli)?;
    trace_time!(start, "load_config");

    let path = Path::new(&cli.graph);
    match cli.graph_type {
        GraphType::Adjacency => {
            let graph = AdjacencyGraph::load(path)?;
            trace_time!(start, "load_graph");
            search::execute(cli, &graph, &config)
        }
        GraphType::Grid => {
            let graph = GridGraph::load(path)?;
            trace_time!(start, "load_graph");
            search::execute(cli, &graph, &config)
        }
        GraphType::SlidingPuzzle => {
            let graph = SlidingPuzzle::parse(&cli.graph)?;
            search::execute(cli, &graph, &config)
        }
        GraphType::WordLadder => {
            let graph = WordLadder::load(path)?;
            trace_time!(start, "load_graph");
            search::execute(cli, &graph, &config)
        }
    }
}

/// Read the config file, if any, and apply command-line overrides.
fn load_config(cli: &Cli) -> Result<PathfindConfig> {
    let mut config = match &cli.config {
        Some(path) => PathfindConfig::load(path)?,
        None => PathfindConfig::default(),
    };
    if cli.seed.is_some() {
        config.search.seed = cli.seed;
    }
    if cli.full_path {
        config.display.show_full_path = true;
    }
    if cli.no_draw {
        config.display.draw_grid = false;
    }
    Ok(config)
}

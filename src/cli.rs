//! CLI argument parsing for pathfind
//!
//! Uses clap for argument parsing.
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use pathfind_core::format::OutputFormat;
use pathfind_core::search::Algorithm;

/// Pathfind - shortest paths over adjacency lists, grids, sliding puzzles and word ladders
#[derive(Parser, Debug)]
#[command(name = "pathfind")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Search strategy: random, dijkstra or astar
    #[arg(long, short, default_value = "astar", value_parser = parse_algorithm)]
    pub algorithm: Algorithm,

    /// Kind of graph described by --graph
    #[arg(long, short = 't', value_enum)]
    pub graph_type: GraphType,

    /// Graph file, or puzzle dimensions such as 3x3 for sliding puzzles
    #[arg(long, short)]
    pub graph: String,

    /// Alternating start and goal nodes, e.g. `a d 0:0 4:2`
    #[arg(value_name = "NODE")]
    pub queries: Vec<String>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log search progress at debug level
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overridden by PATHFIND_LOG / RUST_LOG)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// TOML configuration file
    #[arg(long, global = true, env = "PATHFIND_CONFIG")]
    pub config: Option<PathBuf>,

    /// Seed for the random walk
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print every edge of long paths
    #[arg(long)]
    pub full_path: bool,

    /// Do not draw grid graphs
    #[arg(long)]
    pub no_draw: bool,
}

/// Graph variants that can be loaded from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GraphType {
    /// Tab-separated edge list
    Adjacency,
    /// Character map, optionally with a Moving AI header
    Grid,
    /// N x M sliding-tile puzzle; --graph gives the dimensions
    SlidingPuzzle,
    /// One word per line dictionary
    WordLadder,
}

fn parse_algorithm(s: &str) -> std::result::Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}

fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["pathfind", "-t", "grid", "-g", "map.txt"]).unwrap();
        assert_eq!(cli.algorithm, Algorithm::AStar);
        assert_eq!(cli.graph_type, GraphType::Grid);
        assert_eq!(cli.format, OutputFormat::Human);
        assert!(cli.queries.is_empty());
    }

    #[test]
    fn test_queries_and_flags() {
        let cli = Cli::try_parse_from([
            "pathfind",
            "--algorithm",
            "dijkstra",
            "--graph-type",
            "sliding-puzzle",
            "--graph",
            "3x3",
            "--format",
            "json",
            "--seed",
            "7",
            "/ABC/DEF/G_H/",
            "/ABC/DEF/GH_/",
        ])
        .unwrap();
        assert_eq!(cli.algorithm, Algorithm::Dijkstra);
        assert_eq!(cli.graph_type, GraphType::SlidingPuzzle);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.queries.len(), 2);
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        let err =
            Cli::try_parse_from(["pathfind", "-a", "bfs", "-t", "grid", "-g", "m"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}

//! Run query pairs against a loaded graph
//!
//! Each pair of positional nodes is one search. A query whose nodes cannot
//! be parsed or are not in the graph is reported on stderr and skipped; the
//! remaining queries still run and the command fails at the end.

use std::fmt;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use pathfind_core::config::PathfindConfig;
use pathfind_core::error::{ExitCode, PathfindError, Result};
use pathfind_core::format::OutputFormat;
use pathfind_core::graph::Graph;
use pathfind_core::search::SearchResult;
use pathfind_core::trace_time;

use crate::cli::Cli;

/// Random nodes shown when no queries are given
const EXAMPLE_NODES: usize = 8;

/// Execute the queries on the command line, or describe the graph if there are none
pub fn execute<G>(cli: &Cli, graph: &G, config: &PathfindConfig) -> Result<()>
where
    G: Graph + fmt::Display,
{
    let mut rng = match config.search.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if cli.queries.is_empty() {
        return describe(cli, graph, &mut rng);
    }
    if cli.queries.len() % 2 != 0 {
        return Err(PathfindError::UsageError(format!(
            "queries come in start/goal pairs, but {} nodes were given",
            cli.queries.len()
        )));
    }

    let total = cli.queries.len() / 2;
    let mut reports = Vec::new();
    let mut skipped = 0;

    for (i, pair) in cli.queries.chunks(2).enumerate() {
        if cli.format == OutputFormat::Human && i > 0 {
            println!();
        }
        match run_query(cli, graph, &pair[0], &pair[1], &mut rng) {
            Ok(result) => match cli.format {
                OutputFormat::Human => println!("{}", result.render(graph, &config.display)),
                OutputFormat::Json => {
                    let mut report = result.to_json();
                    report["algorithm"] = serde_json::json!(cli.algorithm.to_string());
                    reports.push(report);
                }
            },
            Err(e) if e.exit_code() == ExitCode::Usage => {
                tracing::debug!(query = i, error = %e, "skipping query");
                report_error(cli, &e);
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    if cli.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    if skipped > 0 {
        return Err(PathfindError::UsageError(format!(
            "{} of {} queries could not be run",
            skipped, total
        )));
    }
    Ok(())
}

fn run_query<G, R>(
    cli: &Cli,
    graph: &G,
    start: &str,
    goal: &str,
    rng: &mut R,
) -> Result<SearchResult<G::Node>>
where
    G: Graph,
    R: rand::Rng,
{
    let start = graph.parse_node(start)?;
    let goal = graph.parse_node(goal)?;

    if cli.format == OutputFormat::Human && !cli.quiet {
        println!("Searching for a path from {} to {}...", start, goal);
    }

    let search_start = Instant::now();
    let result = cli.algorithm.run(graph, start, goal, rng)?;
    trace_time!(
        search_start,
        "search",
        succeeded = result.succeeded,
        iterations = result.iterations
    );
    Ok(result)
}

/// Print the graph summary followed by a few random nodes and their edges.
fn describe<G, R>(cli: &Cli, graph: &G, rng: &mut R) -> Result<()>
where
    G: Graph + fmt::Display,
    R: rand::Rng,
{
    let examples = graph.example_outgoing_edges(rng, EXAMPLE_NODES)?;
    match cli.format {
        OutputFormat::Human => {
            println!("{}", graph);
            if !examples.is_empty() {
                println!("\nRandom example nodes with outgoing edges:");
                println!("{}", examples.join("\n"));
            }
        }
        OutputFormat::Json => {
            let summary = serde_json::json!({
                "graph": graph.name(),
                "weighted": graph.is_weighted(),
                "summary": graph.to_string(),
                "examples": examples,
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}

fn report_error(cli: &Cli, e: &PathfindError) {
    if cli.format == OutputFormat::Json {
        eprintln!("{}", e.to_json());
    } else if !cli.quiet {
        eprintln!("error: {}", e);
    }
}

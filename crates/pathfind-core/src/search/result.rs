use std::fmt;

use crate::config::DisplayConfig;
use crate::error::{PathfindError, Result};
use crate::format::format_weight;
use crate::graph::{Edge, Graph};

/// Paths longer than this are abbreviated unless full paths are requested.
const SHORT_PATH_EDGES: usize = 10;
/// Edges shown at each end of an abbreviated path.
const ABBREVIATED_EDGES: usize = 5;

/// Outcome of one search.
///
/// A failed search has no path and cost [`SearchResult::FAILURE_COST`]; a
/// successful one has a path whose weights sum exactly to `cost`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<N> {
    pub start: N,
    pub goal: N,
    pub succeeded: bool,
    pub cost: f64,
    pub path: Option<Vec<Edge<N>>>,
    /// Queue removals or random-walk steps performed
    pub iterations: usize,
}

impl<N> SearchResult<N> {
    pub const FAILURE_COST: f64 = -1.0;

    pub fn success(start: N, goal: N, cost: f64, path: Vec<Edge<N>>, iterations: usize) -> Self {
        SearchResult {
            start,
            goal,
            succeeded: true,
            cost,
            path: Some(path),
            iterations,
        }
    }

    pub fn failure(start: N, goal: N, iterations: usize) -> Self {
        SearchResult {
            start,
            goal,
            succeeded: false,
            cost: Self::FAILURE_COST,
            path: None,
            iterations,
        }
    }

    pub fn validate_iterations(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(PathfindError::invalid_result(
                "the number of iterations should be > 0",
            ));
        }
        Ok(())
    }

    /// Check the path against the success flag and the reported cost.
    pub fn validate_path(&self) -> Result<()> {
        match (self.succeeded, &self.path) {
            (true, None) => Err(PathfindError::invalid_result(
                "success reported, but the path is missing",
            )),
            (true, Some(path)) => {
                let actual = path.iter().fold(0.0, |sum, e| sum + e.weight());
                if self.cost != actual {
                    return Err(PathfindError::invalid_result(format!(
                        "the reported path cost {} differs from the calculated cost {}",
                        self.cost, actual
                    )));
                }
                Ok(())
            }
            (false, Some(_)) => Err(PathfindError::invalid_result(
                "failure reported, but a path is present",
            )),
            (false, None) if self.cost != Self::FAILURE_COST => {
                Err(PathfindError::invalid_result(format!(
                    "failure reported with cost {} instead of {}",
                    self.cost,
                    Self::FAILURE_COST
                )))
            }
            (false, None) => Ok(()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.validate_iterations()?;
        self.validate_path()
    }

    pub fn path_len(&self) -> Option<usize> {
        self.path.as_ref().map(Vec::len)
    }
}

impl<N: fmt::Display> SearchResult<N> {
    /// Human-readable report. Validation problems are included as warnings.
    pub fn render<G>(&self, graph: &G, display: &DisplayConfig) -> String
    where
        G: Graph<Node = N>,
    {
        let mut lines = Vec::new();
        match self.validate_iterations() {
            Ok(()) => lines.push(format!("Loop iteration count: {}", self.iterations)),
            Err(e) => lines.push(format!("WARNING: {}", e)),
        }

        if self.succeeded {
            lines.push(format!(
                "Cost of path from {} to {}: {}",
                self.start,
                self.goal,
                format_weight(self.cost)
            ));
        } else {
            lines.push(format!("No path from {} to {} found.", self.start, self.goal));
        }

        if let Err(e) = self.validate_path() {
            lines.push(format!("WARNING: {}", e));
        }

        if let Some(path) = &self.path {
            let with_weight = Some(display.show_path_weights && graph.is_weighted());
            lines.push(format!("Number of edges: {}", path.len()));
            lines.push(format_path(
                &self.start,
                path,
                display.show_full_path,
                with_weight,
            ));
            if display.draw_grid {
                if let Some(drawing) = graph.draw(
                    display.max_grid_width,
                    display.max_grid_height,
                    Some(&self.start),
                    Some(&self.goal),
                    Some(path),
                ) {
                    lines.push(String::new());
                    lines.push(drawing);
                }
            }
        }

        lines.join("\n")
    }

    pub fn to_json(&self) -> serde_json::Value {
        let path = self.path.as_ref().map(|path| {
            path.iter()
                .map(|e| {
                    serde_json::json!({
                        "start": e.start().to_string(),
                        "end": e.end().to_string(),
                        "weight": e.weight(),
                    })
                })
                .collect::<Vec<_>>()
        });
        serde_json::json!({
            "start": self.start.to_string(),
            "goal": self.goal.to_string(),
            "succeeded": self.succeeded,
            "cost": self.cost,
            "iterations": self.iterations,
            "path": path,
        })
    }
}

/// `a --[8]-> b --[5]-> c`, or the first and last five edges around `.....`.
fn format_path<N: fmt::Display>(
    start: &N,
    path: &[Edge<N>],
    full: bool,
    with_weight: Option<bool>,
) -> String {
    let suffixes = |edges: &[Edge<N>]| -> String {
        edges
            .iter()
            .map(|e| e.to_string_parts(false, true, with_weight))
            .collect()
    };
    if full || path.len() <= SHORT_PATH_EDGES {
        let first = path.first().map_or_else(|| start.to_string(), |e| e.start().to_string());
        return first + &suffixes(path);
    }
    let prefixes: String = path[..ABBREVIATED_EDGES]
        .iter()
        .map(|e| e.to_string_parts(true, false, with_weight))
        .collect();
    prefixes + "....." + &suffixes(&path[path.len() - ABBREVIATED_EDGES..])
}

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::bail_parse;
use crate::error::{PathfindError, Result};
use crate::graph::{Edge, Graph};

/// A finite directed graph with string nodes, stored as adjacency lists.
///
/// Text form: one edge per line, `from<TAB>to` or `from<TAB>to<TAB>weight`.
/// Blank lines and lines starting with `#` are skipped.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    adjacency: HashMap<String, Vec<Edge<String>>>,
    weighted: bool,
}

impl AdjacencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an edge list.
    pub fn parse(text: &str) -> Result<Self> {
        let mut graph = AdjacencyGraph::new();
        for (lineno, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            graph.add_edge(parse_edge_line(line, lineno + 1)?);
        }
        tracing::debug!(
            nodes = graph.adjacency.len(),
            weighted = graph.weighted,
            "parsed adjacency graph"
        );
        Ok(graph)
    }

    /// Load an edge list from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn add_node(&mut self, v: impl Into<String>) {
        self.adjacency.entry(v.into()).or_default();
    }

    /// Add a directed edge and both of its endpoints. Duplicates are kept.
    pub fn add_edge(&mut self, edge: Edge<String>) {
        self.add_node(edge.end().clone());
        if edge.weight() != Edge::<String>::DEFAULT_WEIGHT {
            self.weighted = true;
        }
        self.adjacency
            .entry(edge.start().clone())
            .or_default()
            .push(edge);
    }
}

fn parse_edge_line(line: &str, lineno: usize) -> Result<Edge<String>> {
    let context = format!("edge on line {}", lineno);
    let mut fields = line.split('\t');
    let (Some(start), Some(end)) = (fields.next(), fields.next()) else {
        bail_parse!(&context, line, "expected from<TAB>to[<TAB>weight]");
    };
    match fields.next() {
        None => Ok(Edge::new(start.to_string(), end.to_string())),
        Some(weight) => {
            let weight: f64 = weight
                .trim()
                .parse()
                .map_err(|_| PathfindError::parse(&context, line, "weight is not a number"))?;
            if !weight.is_finite() || weight < 0.0 {
                bail_parse!(&context, line, "weight must be finite and non-negative");
            }
            Ok(Edge::weighted(start.to_string(), end.to_string(), weight))
        }
    }
}

impl Graph for AdjacencyGraph {
    type Node = String;

    fn name(&self) -> &'static str {
        "adjacency graph"
    }

    fn nodes(&self) -> Result<HashSet<String>> {
        Ok(self.adjacency.keys().cloned().collect())
    }

    fn contains_node(&self, v: &String) -> bool {
        self.adjacency.contains_key(v)
    }

    fn outgoing_edges(&self, v: &String) -> Result<Vec<Edge<String>>> {
        self.adjacency
            .get(v)
            .cloned()
            .ok_or_else(|| PathfindError::unknown_node(v))
    }

    fn is_weighted(&self) -> bool {
        self.weighted
    }

    fn parse_node(&self, s: &str) -> Result<String> {
        if !self.adjacency.contains_key(s) {
            bail_parse!("node", s, "unknown node");
        }
        Ok(s.to_string())
    }
}

impl fmt::Display for AdjacencyGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edges: usize = self.adjacency.values().map(Vec::len).sum();
        write!(
            f,
            "{} adjacency graph with {} nodes and {} edges.",
            if self.weighted { "Weighted" } else { "Unweighted" },
            self.adjacency.len(),
            edges
        )
    }
}

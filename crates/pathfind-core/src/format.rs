//! Output format handling for pathfind
//!
//! Supports two output formats:
//! - human: Readable report per query for terminal use
//! - json: Stable, machine-readable JSON

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PathfindError;

/// Output format for search reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = PathfindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(PathfindError::parse(
                "output format",
                other,
                "expected human or json",
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Format a weight or cost with as few decimals as it needs, at most two.
///
/// `8.0` prints as `8`, `1.5` as `1.5`, `√2` as `1.41`.
pub fn format_weight(w: f64) -> String {
    let decimals = if w == w.round() {
        0
    } else if w == (w * 10.0).round() / 10.0 {
        1
    } else {
        2
    };
    format!("{:.*}", decimals, w)
}

//! Configuration for pathfind
//!
//! Read from an optional TOML file. Every field has a default, so an empty
//! file (or no file at all) gives the standard behaviour.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PathfindError, Result};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathfindConfig {
    /// How search results are printed
    #[serde(default)]
    pub display: DisplayConfig,

    /// Search behaviour
    #[serde(default)]
    pub search: SearchConfig,
}

/// Options for rendering a search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Print every edge of long paths instead of the first and last five
    #[serde(default)]
    pub show_full_path: bool,

    /// Print edge weights for weighted graphs
    #[serde(default = "default_true")]
    pub show_path_weights: bool,

    /// Draw grid graphs with the path overlaid
    #[serde(default = "default_true")]
    pub draw_grid: bool,

    #[serde(default = "default_max_grid_width")]
    pub max_grid_width: usize,

    #[serde(default = "default_max_grid_height")]
    pub max_grid_height: usize,
}

/// Search settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Seed for the random walk; unseeded walks use OS entropy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_true() -> bool {
    true
}

fn default_max_grid_width() -> usize {
    100
}

fn default_max_grid_height() -> usize {
    25
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            show_full_path: false,
            show_path_weights: default_true(),
            draw_grid: default_true(),
            max_grid_width: default_max_grid_width(),
            max_grid_height: default_max_grid_height(),
        }
    }
}

impl PathfindConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: PathfindConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PathfindError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}

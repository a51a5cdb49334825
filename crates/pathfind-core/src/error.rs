//! Error types and exit codes for pathfind
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (contract violations, internal invariants)
//! - 2: Usage error (bad flags/args, unparsable or unknown nodes)
//! - 3: Data error (graph descriptions that cannot form a graph)
//!
//! A search that finds no path is not an error; it is reported through
//! [`crate::search::SearchResult`].

mod macros;

use thiserror::Error;

/// Exit codes for the pathfind binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args or node text (2)
    Usage = 2,
    /// Data error - malformed graph description (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building graphs or running searches
#[derive(Error, Debug)]
pub enum PathfindError {
    // Usage errors (exit code 2)
    #[error("cannot parse {context} from {text:?}: {reason}")]
    Parse {
        context: String,
        text: String,
        reason: String,
    },

    #[error("unknown node: {node}")]
    UnknownNode { node: String },

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("invalid graph: {reason}")]
    InvalidGraph { reason: String },

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported operation: {operation} on {graph}")]
    Unsupported { operation: String, graph: String },

    #[error("remove from an empty priority queue")]
    EmptyQueue,

    #[error("invalid search result: {reason}")]
    InvalidResult { reason: String },

    #[error("{0}")]
    Other(String),
}

impl PathfindError {
    /// Create a parse error naming the offending text
    pub fn parse(
        context: &str,
        text: impl std::fmt::Display,
        reason: impl std::fmt::Display,
    ) -> Self {
        PathfindError::Parse {
            context: context.to_string(),
            text: text.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a node the graph does not contain
    pub fn unknown_node(node: impl std::fmt::Display) -> Self {
        PathfindError::UnknownNode {
            node: node.to_string(),
        }
    }

    /// Create an error for a graph description that cannot form a graph
    pub fn invalid_graph(reason: impl std::fmt::Display) -> Self {
        PathfindError::InvalidGraph {
            reason: reason.to_string(),
        }
    }

    /// Create an error for an operation a graph variant cannot perform
    pub fn unsupported(operation: &str, graph: impl std::fmt::Display) -> Self {
        PathfindError::Unsupported {
            operation: operation.to_string(),
            graph: graph.to_string(),
        }
    }

    /// Create an error for an inconsistent search result
    pub fn invalid_result(reason: impl std::fmt::Display) -> Self {
        PathfindError::InvalidResult {
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PathfindError::Parse { .. }
            | PathfindError::UnknownNode { .. }
            | PathfindError::UsageError(_) => ExitCode::Usage,

            PathfindError::InvalidGraph { .. } | PathfindError::Toml(_) => ExitCode::Data,

            PathfindError::Io(_)
            | PathfindError::Json(_)
            | PathfindError::Unsupported { .. }
            | PathfindError::EmptyQueue
            | PathfindError::InvalidResult { .. }
            | PathfindError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            PathfindError::Parse { .. } => "parse_error",
            PathfindError::UnknownNode { .. } => "unknown_node",
            PathfindError::UsageError(_) => "usage_error",
            PathfindError::InvalidGraph { .. } => "invalid_graph",
            PathfindError::Toml(_) => "toml_error",
            PathfindError::Io(_) => "io_error",
            PathfindError::Json(_) => "json_error",
            PathfindError::Unsupported { .. } => "unsupported",
            PathfindError::EmptyQueue => "empty_queue",
            PathfindError::InvalidResult { .. } => "invalid_result",
            PathfindError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for pathfind operations
pub type Result<T> = std::result::Result<T, PathfindError>;

//! Error macros for pathfind

/// Macro for returning parse errors
#[macro_export]
macro_rules! bail_parse {
    ($context:expr, $text:expr, $reason:expr) => {
        return Err($crate::error::PathfindError::parse($context, $text, $reason))
    };
}

/// Macro for returning invalid graph errors
#[macro_export]
macro_rules! bail_invalid_graph {
    ($reason:expr) => {
        return Err($crate::error::PathfindError::invalid_graph($reason))
    };
}

/// Macro for returning unsupported operation errors
#[macro_export]
macro_rules! bail_unsupported {
    ($operation:expr, $graph:expr) => {
        return Err($crate::error::PathfindError::unsupported(
            $operation, $graph,
        ))
    };
}

use std::fmt;

use crate::format::format_weight;

/// A directed, weighted edge between two nodes.
///
/// Edges are immutable once built; `reverse` returns a new edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<N> {
    start: N,
    end: N,
    weight: f64,
}

impl<N> Edge<N> {
    pub const DEFAULT_WEIGHT: f64 = 1.0;

    /// An edge with the default weight of 1.
    pub fn new(start: N, end: N) -> Self {
        Self::weighted(start, end, Self::DEFAULT_WEIGHT)
    }

    pub fn weighted(start: N, end: N, weight: f64) -> Self {
        Edge { start, end, weight }
    }

    pub fn start(&self) -> &N {
        &self.start
    }

    pub fn end(&self) -> &N {
        &self.end
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl<N: Clone> Edge<N> {
    /// The same edge pointing the other way, with the same weight.
    pub fn reverse(&self) -> Self {
        Edge::weighted(self.end.clone(), self.start.clone(), self.weight)
    }
}

impl<N: fmt::Display> Edge<N> {
    /// Render the edge, optionally leaving out either endpoint.
    ///
    /// With `with_weight` unset the weight is shown only when it differs from 1.
    /// Path printers leave out the start of every edge but the first so that
    /// consecutive edges chain as `a --[8]-> b --[5]-> c`.
    pub fn to_string_parts(
        &self,
        include_start: bool,
        include_end: bool,
        with_weight: Option<bool>,
    ) -> String {
        let with_weight = with_weight.unwrap_or(self.weight != Self::DEFAULT_WEIGHT);
        let start = if include_start {
            self.start.to_string()
        } else {
            String::new()
        };
        let end = if include_end {
            self.end.to_string()
        } else {
            String::new()
        };
        if with_weight {
            format!("{} --[{}]-> {}", start, format_weight(self.weight), end)
        } else {
            format!("{} -> {}", start, end)
        }
    }
}

impl<N: fmt::Display> fmt::Display for Edge<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_parts(true, true, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weight_is_one() {
        let edge = Edge::new("a", "b");
        assert_eq!(edge.weight(), 1.0);
        assert_eq!(edge.to_string(), "a -> b");
    }

    #[test]
    fn test_reverse_keeps_weight() {
        let edge = Edge::weighted("a", "b", 8.0);
        let reversed = edge.reverse();
        assert_eq!(reversed, Edge::weighted("b", "a", 8.0));
        assert_eq!(reversed.reverse(), edge);
    }

    #[test]
    fn test_equality_needs_all_fields() {
        assert_ne!(Edge::weighted("a", "b", 2.0), Edge::weighted("a", "b", 3.0));
        assert_ne!(Edge::new("a", "b"), Edge::new("a", "c"));
        assert_eq!(Edge::new("a", "b"), Edge::weighted("a", "b", 1.0));
    }

    #[test]
    fn test_weighted_display() {
        let edge = Edge::weighted("a", "b", 1.5);
        assert_eq!(edge.to_string(), "a --[1.5]-> b");
        assert_eq!(edge.to_string_parts(false, true, Some(true)), " --[1.5]-> b");
        assert_eq!(edge.to_string_parts(true, true, Some(false)), "a -> b");
    }
}

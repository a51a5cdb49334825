use std::fmt;
use std::str::FromStr;

use crate::error::PathfindError;

/// A two-dimensional point with integer coordinates, written `x:y`.
///
/// Nodes of grid graphs, and tile positions in sliding puzzles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    pub fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    /// Exact for any pair of coordinates, since each axis fits in a `u32`.
    pub fn manhattan(self, other: Point) -> u64 {
        u64::from(self.x.abs_diff(other.x)) + u64::from(self.y.abs_diff(other.y))
    }

    pub fn euclidean(self, other: Point) -> f64 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        dx.hypot(dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = PathfindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PathfindError::parse("point", s, "expected x:y with integer coordinates");
        let (x, y) = s.split_once(':').ok_or_else(invalid)?;
        let x = x.trim().parse().map_err(|_| invalid())?;
        let y = y.trim().parse().map_err(|_| invalid())?;
        Ok(Point::new(x, y))
    }
}

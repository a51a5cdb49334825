use std::collections::HashSet;
use std::f64::consts::SQRT_2;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::{bail_invalid_graph, bail_parse};
use crate::error::{PathfindError, Result};
use crate::graph::{Edge, Graph, Point};

/// Characters that may appear in a map row.
///
/// Moving AI Lab maps use `.`/`G` (terrain), `@`/`O` (out of bounds),
/// `T` (trees), `S` (swamp) and `W` (water); generated mazes use `|`, `-`,
/// `+` for walls and space for corridors.
pub const ALLOWED_CHARS: &str = ".G@OTSW +|-";

/// Characters that can be walked on.
pub const PASSABLE_CHARS: &str = ".G ";

/// The eight moves, in a fixed order.
const DIRECTIONS: [Point; 8] = [
    Point::new(-1, -1),
    Point::new(-1, 0),
    Point::new(-1, 1),
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(1, -1),
    Point::new(1, 0),
    Point::new(1, 1),
];

/// A 2D map encoded as a rectangle of characters.
///
/// Nodes are passable cells. From each cell you can move to any of the eight
/// surrounding passable cells: orthogonal moves cost 1, diagonal moves √2.
#[derive(Debug, Clone)]
pub struct GridGraph {
    cells: Vec<Vec<char>>,
    width: usize,
}

impl GridGraph {
    /// Build a grid from rows of equal width.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let cells: Vec<Vec<char>> = rows.iter().map(|r| r.as_ref().chars().collect()).collect();
        let Some(width) = cells.first().map(Vec::len) else {
            bail_invalid_graph!("grid has no rows");
        };
        if width == 0 {
            bail_invalid_graph!("grid rows are empty");
        }
        if let Some(y) = cells.iter().position(|row| row.len() != width) {
            bail_invalid_graph!(format!(
                "malformed grid, row {} has width {} but row 0 has width {}",
                y,
                cells[y].len(),
                width
            ));
        }
        Ok(GridGraph { cells, width })
    }

    /// Parse a map file. Only lines made entirely of map characters count as
    /// rows, so headers such as `height 10` are skipped.
    pub fn parse(text: &str) -> Result<Self> {
        let rows: Vec<&str> = text
            .lines()
            .filter(|line| !line.is_empty() && line.chars().all(|c| ALLOWED_CHARS.contains(c)))
            .collect();
        let grid = Self::from_rows(&rows)?;
        tracing::debug!(width = grid.width(), height = grid.height(), "parsed grid graph");
        Ok(grid)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    fn cell(&self, p: Point) -> Option<char> {
        let x = usize::try_from(p.x).ok()?;
        let y = usize::try_from(p.y).ok()?;
        self.cells.get(y)?.get(x).copied()
    }

    /// Whether `p` is inside the map and on a passable cell.
    pub fn passable(&self, p: Point) -> bool {
        self.cell(p).is_some_and(|c| PASSABLE_CHARS.contains(c))
    }

    /// Draw the map, marking start `S`, goal `G` and path cells `*`.
    pub fn render(
        &self,
        max_width: usize,
        max_height: usize,
        start: Option<&Point>,
        goal: Option<&Point>,
        path: Option<&[Edge<Point>]>,
    ) -> String {
        let path_points: HashSet<Point> = path
            .unwrap_or_default()
            .iter()
            .flat_map(|e| [*e.start(), *e.end()])
            .collect();

        let mut lines = Vec::new();
        for (y, row) in self.cells.iter().enumerate() {
            if y >= max_height {
                lines.push("(truncated)".to_string());
                break;
            }
            let mut line = String::new();
            for (x, &c) in row.iter().enumerate() {
                if y == 0 && x + 10 >= max_width {
                    line.push_str(" (truncated)");
                    break;
                }
                if x >= max_width {
                    break;
                }
                let point = Point::new(x as i32, y as i32);
                line.push(if Some(&point) == start {
                    'S'
                } else if Some(&point) == goal {
                    'G'
                } else if path_points.contains(&point) {
                    '*'
                } else {
                    c
                });
            }
            lines.push(line);
        }
        lines.join("\n")
    }
}

impl Graph for GridGraph {
    type Node = Point;

    fn name(&self) -> &'static str {
        "grid graph"
    }

    fn nodes(&self) -> Result<HashSet<Point>> {
        let mut nodes = HashSet::new();
        for y in 0..self.height() {
            for x in 0..self.width {
                let p = Point::new(x as i32, y as i32);
                if self.passable(p) {
                    nodes.insert(p);
                }
            }
        }
        Ok(nodes)
    }

    fn contains_node(&self, v: &Point) -> bool {
        self.passable(*v)
    }

    fn outgoing_edges(&self, v: &Point) -> Result<Vec<Edge<Point>>> {
        if !self.passable(*v) {
            return Err(PathfindError::unknown_node(v));
        }
        Ok(DIRECTIONS
            .iter()
            .map(|dir| {
                let weight = if dir.x != 0 && dir.y != 0 { SQRT_2 } else { 1.0 };
                Edge::weighted(*v, v.add(*dir), weight)
            })
            .filter(|edge| self.passable(*edge.end()))
            .collect())
    }

    fn is_weighted(&self) -> bool {
        true
    }

    /// Euclidean distance, which never exceeds the cost of an 8-way path.
    fn guess_cost(&self, v: &Point, w: &Point) -> f64 {
        v.euclidean(*w)
    }

    fn parse_node(&self, s: &str) -> Result<Point> {
        let p: Point = s.parse()?;
        if !self.passable(p) {
            bail_parse!("grid node", s, "not a passable cell of the map");
        }
        Ok(p)
    }

    fn draw(
        &self,
        max_width: usize,
        max_height: usize,
        start: Option<&Point>,
        goal: Option<&Point>,
        path: Option<&[Edge<Point>]>,
    ) -> Option<String> {
        Some(self.render(max_width, max_height, start, goal, path))
    }
}

impl fmt::Display for GridGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Grid graph of dimensions {} x {}.\n\n{}",
            self.width,
            self.height(),
            self.render(100, 25, None, None, None)
        )
    }
}

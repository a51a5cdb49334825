use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{PathfindError, Result};
use crate::graph::{Edge, Graph, Point};
use crate::{bail_invalid_graph, bail_parse, bail_unsupported};

/// Row separator in the text form of a state.
pub const SEPARATOR: char = '/';

/// Tile names in order; `_` is the blank. A puzzle uses a prefix of these.
pub const TILE_NAMES: &str = "_ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789abcdefghijklmnopqrstuvwxyz";

pub const MAX_TILES: usize = 40;

/// Moves of the blank, in a fixed order.
const MOVES: [Point; 4] = [
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(0, 1),
];

/// One arrangement of an N x M sliding puzzle, e.g. `/FDA/CEH/GB_/`.
///
/// Stored as the position of every tile, with tile 0 the blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PuzzleState {
    rows: usize,
    cols: usize,
    positions: Vec<Point>,
}

impl PuzzleState {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Where tile `tile` currently sits.
    pub fn position(&self, tile: usize) -> Option<Point> {
        self.positions.get(tile).copied()
    }

    fn swap(&self, i: usize, j: usize) -> PuzzleState {
        let mut positions = self.positions.clone();
        positions.swap(i, j);
        PuzzleState {
            rows: self.rows,
            cols: self.cols,
            positions,
        }
    }

    /// Tile numbers laid out row by row.
    pub fn tiles(&self) -> Vec<Vec<usize>> {
        let mut tiles = vec![vec![0; self.cols]; self.rows];
        for (tile, p) in self.positions.iter().enumerate() {
            tiles[p.y as usize][p.x as usize] = tile;
        }
        tiles
    }

    fn in_bounds(&self, p: Point) -> bool {
        (0..self.cols as i32).contains(&p.x) && (0..self.rows as i32).contains(&p.y)
    }
}

impl FromStr for PuzzleState {
    type Err = PathfindError;

    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<&str> = s.trim().trim_matches(SEPARATOR).split(SEPARATOR).collect();
        let n = rows.len();
        let m = rows[0].chars().count();
        if m == 0 {
            bail_parse!("puzzle state", s, "empty row");
        }
        let size = n * m;
        if size > MAX_TILES {
            bail_parse!("puzzle state", s, format!("more than {} tiles", MAX_TILES));
        }

        let mut positions: Vec<Option<Point>> = vec![None; size];
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != m {
                bail_parse!("puzzle state", s, format!("row {} does not have {} columns", row, m));
            }
            for (x, name) in row.chars().enumerate() {
                let Some(tile) = TILE_NAMES.find(name) else {
                    bail_parse!("puzzle state", s, format!("unknown tile {:?}", name));
                };
                if tile >= size {
                    bail_parse!(
                        "puzzle state",
                        s,
                        format!("tile {:?} does not fit a {}x{} puzzle", name, n, m)
                    );
                }
                if positions[tile].is_some() {
                    bail_parse!("puzzle state", s, format!("duplicate tile {:?}", name));
                }
                positions[tile] = Some(Point::new(x as i32, y as i32));
            }
        }

        let positions = positions
            .into_iter()
            .collect::<Option<Vec<Point>>>()
            .ok_or_else(|| PathfindError::parse("puzzle state", s, "missing tiles"))?;
        Ok(PuzzleState {
            rows: n,
            cols: m,
            positions,
        })
    }
}

impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<char> = TILE_NAMES.chars().collect();
        write!(f, "{}", SEPARATOR)?;
        for row in self.tiles() {
            for tile in row {
                write!(f, "{}", names[tile])?;
            }
            write!(f, "{}", SEPARATOR)?;
        }
        Ok(())
    }
}

/// The N x M generalization of the 15-puzzle.
///
/// Nodes are puzzle states; each edge slides one tile into the blank. The
/// state space is far too large to enumerate, so [`Graph::nodes`] is
/// unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlidingPuzzle {
    rows: usize,
    cols: usize,
}

impl SlidingPuzzle {
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            bail_invalid_graph!("the dimensions must be positive");
        }
        if rows * cols > MAX_TILES {
            bail_invalid_graph!(format!("only up to {} tiles are supported", MAX_TILES));
        }
        Ok(SlidingPuzzle { rows, cols })
    }

    /// Parse dimensions written as `RxC`, e.g. `3x3`.
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || PathfindError::parse("puzzle dimensions", s, "expected RxC, e.g. 3x3");
        let (rows, cols) = s.trim().split_once('x').ok_or_else(invalid)?;
        let rows = rows.parse().map_err(|_| invalid())?;
        let cols = cols.parse().map_err(|_| invalid())?;
        Self::new(rows, cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn has_shape_of(&self, v: &PuzzleState) -> bool {
        v.rows == self.rows && v.cols == self.cols
    }

    /// Tiles in reading order with the blank in the bottom-right corner.
    pub fn goal_state(&self) -> PuzzleState {
        let size = self.rows * self.cols;
        let mut positions = Vec::with_capacity(size);
        positions.push(Point::new(self.cols as i32 - 1, self.rows as i32 - 1));
        for i in 0..size - 1 {
            positions.push(Point::new((i % self.cols) as i32, (i / self.cols) as i32));
        }
        PuzzleState {
            rows: self.rows,
            cols: self.cols,
            positions,
        }
    }

    /// A uniformly shuffled state. Half of all states are unreachable from
    /// the goal, so a search may legitimately fail.
    pub fn shuffled_state<R: Rng + ?Sized>(&self, rng: &mut R) -> PuzzleState {
        let mut state = self.goal_state();
        state.positions.shuffle(rng);
        state
    }
}

impl Graph for SlidingPuzzle {
    type Node = PuzzleState;

    fn name(&self) -> &'static str {
        "sliding puzzle"
    }

    fn nodes(&self) -> Result<HashSet<PuzzleState>> {
        bail_unsupported!("enumerate nodes", format!("{}x{} sliding puzzle", self.rows, self.cols))
    }

    fn contains_node(&self, v: &PuzzleState) -> bool {
        self.has_shape_of(v)
    }

    fn outgoing_edges(&self, v: &PuzzleState) -> Result<Vec<Edge<PuzzleState>>> {
        if !self.has_shape_of(v) {
            return Err(PathfindError::unknown_node(v));
        }
        let blank = v.positions[0];
        let mut edges = Vec::with_capacity(MOVES.len());
        for step in MOVES {
            let p = blank.subtract(step);
            if !v.in_bounds(p) {
                continue;
            }
            if let Some(tile) = v.positions.iter().position(|&q| q == p) {
                edges.push(Edge::new(v.clone(), v.swap(0, tile)));
            }
        }
        Ok(edges)
    }

    fn is_weighted(&self) -> bool {
        false
    }

    /// Sum of Manhattan displacements of every non-blank tile. Each move
    /// shifts one tile by one cell, so this never overestimates.
    fn guess_cost(&self, v: &PuzzleState, w: &PuzzleState) -> f64 {
        if v.positions.len() != w.positions.len() {
            return f64::INFINITY;
        }
        v.positions
            .iter()
            .zip(&w.positions)
            .skip(1)
            .map(|(a, b)| a.manhattan(*b) as f64)
            .sum()
    }

    /// Shuffled states, since the state space cannot be listed.
    fn random_nodes<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Result<Vec<PuzzleState>> {
        Ok((0..count).map(|_| self.shuffled_state(rng)).collect())
    }

    fn parse_node(&self, s: &str) -> Result<PuzzleState> {
        let state: PuzzleState = s.parse()?;
        if !self.has_shape_of(&state) {
            bail_parse!(
                "puzzle state",
                s,
                format!("expected a {}x{} puzzle", self.rows, self.cols)
            );
        }
        Ok(state)
    }
}

impl fmt::Display for SlidingPuzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last = &TILE_NAMES[self.rows * self.cols - 1..self.rows * self.cols];
        write!(
            f,
            "Sliding puzzle graph of size {} x {}.\n\n\
             States are {} x {} matrices of unique characters in 'A'...'{}',\n\
             and '_' (for the empty tile); rows are interspersed with '{}'.\n\
             The traditional goal state is: {}.",
            self.rows,
            self.cols,
            self.rows,
            self.cols,
            last,
            SEPARATOR,
            self.goal_state()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn puzzle(rows: usize, cols: usize) -> SlidingPuzzle {
        SlidingPuzzle::new(rows, cols).unwrap()
    }

    #[test]
    fn test_parse_and_display_round_trip() {
        let state: PuzzleState = "/FDA/CEH/GB_/".parse().unwrap();
        assert_eq!((state.rows(), state.cols()), (3, 3));
        assert_eq!(state.position(0), Some(Point::new(2, 2)));
        assert_eq!(state.position(1), Some(Point::new(2, 0)));
        assert_eq!(state.to_string(), "/FDA/CEH/GB_/");
    }

    #[test]
    fn test_parse_rejects_bad_states() {
        for text in ["/AB/C/", "/A_/AB/", "/A?/B_/", "/AB/CD/", "//"] {
            let err = text.parse::<PuzzleState>().unwrap_err();
            assert!(matches!(err, PathfindError::Parse { .. }), "{text}");
        }
    }

    #[test]
    fn test_parse_node_checks_shape() {
        let graph = puzzle(2, 2);
        assert!(graph.parse_node("/_C/BA/").is_ok());
        assert!(graph.parse_node("/ABC/DEF/GH_/").is_err());
    }

    #[test]
    fn test_goal_state() {
        assert_eq!(puzzle(3, 3).goal_state().to_string(), "/ABC/DEF/GH_/");
        assert_eq!(puzzle(2, 3).goal_state().to_string(), "/ABC/DE_/");
    }

    #[test]
    fn test_blank_in_corner_has_two_moves() {
        let graph = puzzle(3, 3);
        let goal = graph.goal_state();
        let ends: Vec<String> = graph
            .outgoing_edges(&goal)
            .unwrap()
            .iter()
            .map(|e| e.end().to_string())
            .collect();
        assert_eq!(ends, vec!["/ABC/DEF/G_H/", "/ABC/DE_/GHF/"]);
    }

    #[test]
    fn test_blank_in_centre_has_four_moves() {
        let graph = puzzle(3, 3);
        let state = graph.parse_node("/ABC/D_E/FGH/").unwrap();
        let edges = graph.outgoing_edges(&state).unwrap();
        assert_eq!(edges.len(), 4);
        assert!(edges.iter().all(|e| e.weight() == 1.0 && *e.start() == state));
    }

    #[test]
    fn test_guess_cost_is_manhattan_sum() {
        let graph = puzzle(3, 3);
        let goal = graph.goal_state();
        let state = graph.parse_node("/ABC/DEF/_GH/").unwrap();
        // G and H are each one cell off; the blank does not count
        assert_eq!(graph.guess_cost(&state, &goal), 2.0);
        assert_eq!(graph.guess_cost(&goal, &goal), 0.0);
    }

    #[test]
    fn test_nodes_is_unsupported() {
        let err = puzzle(3, 3).nodes().unwrap_err();
        assert!(matches!(err, PathfindError::Unsupported { .. }));
    }

    #[test]
    fn test_wrong_shape_is_unknown_node() {
        let graph = puzzle(2, 2);
        let state: PuzzleState = "/ABC/DEF/GH_/".parse().unwrap();
        assert!(matches!(
            graph.outgoing_edges(&state),
            Err(PathfindError::UnknownNode { .. })
        ));
    }

    #[test]
    fn test_dimensions() {
        assert_eq!(SlidingPuzzle::parse("3x4").unwrap().cols(), 4);
        assert!(matches!(
            SlidingPuzzle::parse("3by3"),
            Err(PathfindError::Parse { .. })
        ));
        assert!(matches!(
            SlidingPuzzle::parse("7x7"),
            Err(PathfindError::InvalidGraph { .. })
        ));
        assert!(SlidingPuzzle::new(0, 3).is_err());
    }

    #[test]
    fn test_shuffled_state_is_a_permutation() {
        let graph = puzzle(3, 3);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let state = graph.shuffled_state(&mut rng);
        let reparsed: PuzzleState = state.to_string().parse().unwrap();
        assert_eq!(reparsed, state);
    }
}

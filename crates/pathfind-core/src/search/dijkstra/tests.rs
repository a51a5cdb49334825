use super::*;
use crate::error::PathfindError;
use crate::graph::{AdjacencyGraph, Edge, GridGraph, Point, SlidingPuzzle};
use std::f64::consts::SQRT_2;

fn edge(a: &str, b: &str, w: f64) -> Edge<String> {
    Edge::weighted(a.to_string(), b.to_string(), w)
}

fn graph_of(edges: &[(&str, &str, f64)]) -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::new();
    for &(a, b, w) in edges {
        graph.add_edge(edge(a, b, w));
    }
    graph
}

/// a->b(8), a->c(15), b->c(5), b->d(12), c->d(6), d->a(3)
fn four_node_graph() -> AdjacencyGraph {
    graph_of(&[
        ("a", "b", 8.0),
        ("a", "c", 15.0),
        ("b", "c", 5.0),
        ("b", "d", 12.0),
        ("c", "d", 6.0),
        ("d", "a", 3.0),
    ])
}

fn search(graph: &AdjacencyGraph, start: &str, goal: &str) -> SearchResult<String> {
    Dijkstra::new(graph, start.to_string(), goal.to_string())
        .search()
        .unwrap()
}

#[test]
fn test_finds_cheapest_path() {
    let result = search(&four_node_graph(), "a", "d");

    assert!(result.succeeded);
    assert_eq!(result.cost, 19.0);
    assert_eq!(
        result.path,
        Some(vec![
            edge("a", "b", 8.0),
            edge("b", "c", 5.0),
            edge("c", "d", 6.0)
        ])
    );
    result.validate().unwrap();
}

/// Removals: a, b(8), c(13), stale c(15), d(19)
#[test]
fn test_stale_entries_count_as_iterations() {
    let result = search(&four_node_graph(), "a", "d");
    assert_eq!(result.iterations, 5);
}

#[test]
fn test_start_equals_goal() {
    let result = search(&four_node_graph(), "c", "c");

    assert!(result.succeeded);
    assert_eq!(result.cost, 0.0);
    assert_eq!(result.path, Some(vec![]));
    assert_eq!(result.iterations, 1);
}

#[test]
fn test_no_path() {
    let graph = graph_of(&[("a", "b", 1.0), ("c", "d", 1.0)]);
    let result = search(&graph, "a", "d");

    assert!(!result.succeeded);
    assert_eq!(result.cost, -1.0);
    assert!(result.path.is_none());
    assert_eq!(result.iterations, 2);
    result.validate().unwrap();
}

#[test]
fn test_dead_end_is_not_an_error() {
    let graph = graph_of(&[("a", "b", 1.0), ("b", "sink", 1.0), ("a", "c", 4.0)]);
    let result = search(&graph, "a", "c");
    assert!(result.succeeded);
    assert_eq!(result.cost, 4.0);
}

#[test]
fn test_unknown_start_or_goal() {
    let empty = AdjacencyGraph::new();
    let err = Dijkstra::new(&empty, "a".to_string(), "b".to_string())
        .search()
        .unwrap_err();
    assert!(matches!(err, PathfindError::UnknownNode { node } if node == "a"));

    let graph = four_node_graph();
    let err = Dijkstra::new(&graph, "a".to_string(), "z".to_string())
        .search()
        .unwrap_err();
    assert!(matches!(err, PathfindError::UnknownNode { node } if node == "z"));
}

#[test]
fn test_parallel_edges_take_cheapest() {
    let graph = graph_of(&[("a", "b", 5.0), ("a", "b", 2.0), ("b", "c", 1.0)]);
    let result = search(&graph, "a", "c");
    assert_eq!(result.cost, 3.0);
    assert_eq!(result.path.unwrap()[0], edge("a", "b", 2.0));
}

#[test]
fn test_zero_weight_edges() {
    let graph = graph_of(&[("a", "b", 0.0), ("b", "c", 0.0), ("a", "c", 1.0)]);
    let result = search(&graph, "a", "c");
    assert_eq!(result.cost, 0.0);
    assert_eq!(result.path_len(), Some(2));
}

#[test]
fn test_repeated_runs_are_identical() {
    let graph = graph_of(&[
        ("s", "x", 1.0),
        ("s", "y", 1.0),
        ("x", "t", 1.0),
        ("y", "t", 1.0),
    ]);
    let first = search(&graph, "s", "t");
    for _ in 0..5 {
        assert_eq!(search(&graph, "s", "t"), first);
    }
    // equal priorities leave the queue in insertion order
    assert_eq!(first.path.unwrap()[0], edge("s", "x", 1.0));
}

#[test]
fn test_grid_diagonal_costs_sqrt_two() {
    let grid = GridGraph::from_rows(&["...", "...", "..."]).unwrap();
    let result = Dijkstra::new(&grid, Point::new(0, 0), Point::new(1, 1))
        .search()
        .unwrap();

    assert_eq!(result.cost, SQRT_2);
    assert_eq!(result.path_len(), Some(1));
    result.validate().unwrap();
}

#[test]
fn test_grid_detours_around_walls() {
    let grid = GridGraph::from_rows(&[".@.", ".@.", "..."]).unwrap();
    let result = Dijkstra::new(&grid, Point::new(0, 0), Point::new(2, 0))
        .search()
        .unwrap();

    // down, two diagonals under the wall, then up
    assert!((result.cost - (2.0 + 2.0 * SQRT_2)).abs() < 1e-12);
    assert_eq!(result.path_len(), Some(4));
    result.validate().unwrap();
}

#[test]
fn test_sliding_puzzle_one_move() {
    let puzzle = SlidingPuzzle::new(3, 3).unwrap();
    let start = puzzle.parse_node("/ABC/DEF/G_H/").unwrap();
    let result = Dijkstra::new(&puzzle, start, puzzle.goal_state())
        .search()
        .unwrap();

    assert!(result.succeeded);
    assert_eq!(result.cost, 1.0);
}

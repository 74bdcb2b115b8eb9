//! Maze-to-graph adapter
//!
//! A maze is a rectangular grid of junctures, (0, 0) at the upper left. Each
//! juncture becomes a vertex; every open side toward an existing neighbor
//! becomes a directed edge carrying the weight the maze reports for that side.

pub mod grid;

use crate::{bail_invalid, bail_maze};
use crate::error::{GraphError, Result};
use crate::graph::WeightedGraph;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use grid::GridMaze;

/// Largest number of junctures a maze may have
pub const MAX_JUNCTURES: usize = 1 << 24;

/// Juncture count of a `width x height` maze, if it is within [`MAX_JUNCTURES`]
pub fn juncture_count(width: i32, height: i32) -> Option<usize> {
    let width = usize::try_from(width.max(0)).ok()?;
    let height = usize::try_from(height.max(0)).ok()?;
    width
        .checked_mul(height)
        .filter(|&count| count <= MAX_JUNCTURES)
}

/// A grid coordinate used as a graph vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Juncture {
    pub x: i32,
    pub y: i32,
}

impl Juncture {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent coordinate across `side`; may lie outside the maze
    pub fn step(&self, side: Side) -> Juncture {
        let (dx, dy) = side.offset();
        Juncture::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Juncture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Parses `"x,y"` (whitespace around either number is ignored)
impl FromStr for Juncture {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        let Some((x, y)) = s.split_once(',') else {
            bail_invalid!("juncture (expected x,y)", s);
        };
        match (x.trim().parse(), y.trim().parse()) {
            (Ok(x), Ok(y)) => Ok(Juncture::new(x, y)),
            _ => Err(GraphError::invalid_value("juncture (expected x,y)", s)),
        }
    }
}

/// One of the four sides of a juncture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Up,
    Down,
    Left,
    Right,
}

impl Side {
    /// Expansion order used when building edges
    pub const ALL: [Side; 4] = [Side::Up, Side::Down, Side::Left, Side::Right];

    pub fn offset(&self) -> (i32, i32) {
        match self {
            Side::Up => (0, -1),
            Side::Down => (0, 1),
            Side::Left => (-1, 0),
            Side::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Side {
        match self {
            Side::Up => Side::Down,
            Side::Down => Side::Up,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Source of walls and weights for [`build_maze_graph`]
pub trait Maze {
    fn width(&self) -> i32;

    fn height(&self) -> i32;

    /// Whether a wall blocks movement from `at` across `side`
    fn is_wall(&self, at: Juncture, side: Side) -> bool;

    /// Cost of moving from `at` across `side`
    fn weight(&self, at: Juncture, side: Side) -> i64;
}

/// Build a directed graph with one vertex per juncture.
///
/// For each juncture and side (up, down, left, right), an edge is added when
/// the maze reports no wall and the neighbor exists. Passages open both ways
/// produce two independent edges.
///
/// # Errors
/// `InvalidMaze` if the maze has more than [`MAX_JUNCTURES`] junctures.
/// `InvalidWeight` if the maze reports a negative weight for an open side.
#[tracing::instrument(skip(maze), fields(width = maze.width(), height = maze.height()))]
pub fn build_maze_graph<M: Maze + ?Sized>(maze: &M) -> Result<WeightedGraph<Juncture>> {
    let (width, height) = (maze.width().max(0), maze.height().max(0));
    let Some(capacity) = juncture_count(width, height) else {
        bail_maze!(
            "{}x{} maze exceeds {} junctures",
            width,
            height,
            MAX_JUNCTURES
        );
    };
    let mut graph = WeightedGraph::with_capacity(capacity);

    for x in 0..width {
        for y in 0..height {
            graph.add_vertex(Juncture::new(x, y))?;
        }
    }

    for x in 0..width {
        for y in 0..height {
            let current = Juncture::new(x, y);
            for side in Side::ALL {
                let neighbor = current.step(side);
                if !maze.is_wall(current, side) && graph.contains_vertex(&neighbor) {
                    graph.add_edge(&current, &neighbor, maze.weight(current, side))?;
                }
            }
        }
    }

    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "maze_graph_built"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Maze with no walls and unit weights
    struct Open(i32, i32);

    impl Maze for Open {
        fn width(&self) -> i32 {
            self.0
        }
        fn height(&self) -> i32 {
            self.1
        }
        fn is_wall(&self, _at: Juncture, _side: Side) -> bool {
            false
        }
        fn weight(&self, _at: Juncture, _side: Side) -> i64 {
            1
        }
    }

    /// Every side walled except rightward moves, which cost 3
    struct OneWay;

    impl Maze for OneWay {
        fn width(&self) -> i32 {
            2
        }
        fn height(&self) -> i32 {
            1
        }
        fn is_wall(&self, _at: Juncture, side: Side) -> bool {
            side != Side::Right
        }
        fn weight(&self, _at: Juncture, _side: Side) -> i64 {
            3
        }
    }

    #[test]
    fn test_open_two_by_two_has_eight_edges() {
        let graph = build_maze_graph(&Open(2, 2)).unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 8);

        let a = Juncture::new(0, 0);
        let b = Juncture::new(1, 0);
        assert_eq!(graph.weight(&a, &b).unwrap(), Some(1));
        assert_eq!(graph.weight(&b, &a).unwrap(), Some(1));
        // Diagonals are never connected
        assert_eq!(graph.weight(&a, &Juncture::new(1, 1)).unwrap(), None);
    }

    #[test]
    fn test_open_grid_edge_count() {
        // 2 * (w-1) * h horizontal plus 2 * w * (h-1) vertical
        let graph = build_maze_graph(&Open(3, 4)).unwrap();
        assert_eq!(graph.vertex_count(), 12);
        assert_eq!(graph.edge_count(), 2 * 2 * 4 + 2 * 3 * 3);
    }

    #[test]
    fn test_adapter_adds_only_reported_direction() {
        let graph = build_maze_graph(&OneWay).unwrap();
        let left = Juncture::new(0, 0);
        let right = Juncture::new(1, 0);
        assert_eq!(graph.weight(&left, &right).unwrap(), Some(3));
        assert_eq!(graph.weight(&right, &left).unwrap(), None);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_vertices_enumerate_column_major() {
        let graph = build_maze_graph(&Open(2, 2)).unwrap();
        let vertices: Vec<_> = graph.vertices().copied().collect();
        assert_eq!(
            vertices,
            vec![
                Juncture::new(0, 0),
                Juncture::new(0, 1),
                Juncture::new(1, 0),
                Juncture::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_oversized_maze_rejected() {
        let err = build_maze_graph(&Open(i32::MAX, i32::MAX)).unwrap_err();
        assert!(matches!(err, GraphError::InvalidMaze { .. }));

        let err = build_maze_graph(&Open(4097, 4096)).unwrap_err();
        assert!(err.to_string().contains("exceeds"));
    }

    #[test]
    fn test_juncture_count() {
        assert_eq!(juncture_count(3, 4), Some(12));
        assert_eq!(juncture_count(0, 7), Some(0));
        assert_eq!(juncture_count(-2, 7), Some(0));
        assert_eq!(juncture_count(4096, 4096), Some(MAX_JUNCTURES));
        assert_eq!(juncture_count(i32::MAX, i32::MAX), None);
    }

    #[test]
    fn test_empty_maze() {
        let graph = build_maze_graph(&Open(0, 5)).unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn test_juncture_parse() {
        assert_eq!("3,4".parse::<Juncture>().unwrap(), Juncture::new(3, 4));
        assert_eq!(" 0 , 12 ".parse::<Juncture>().unwrap(), Juncture::new(0, 12));
        assert!("3".parse::<Juncture>().is_err());
        assert!("a,b".parse::<Juncture>().is_err());
    }

    #[test]
    fn test_juncture_step_and_display() {
        let j = Juncture::new(1, 1);
        assert_eq!(j.step(Side::Up), Juncture::new(1, 0));
        assert_eq!(j.step(Side::Left), Juncture::new(0, 1));
        assert_eq!(j.to_string(), "(1, 1)");
    }

    #[test]
    fn test_side_opposite() {
        for side in Side::ALL {
            assert_eq!(side.opposite().opposite(), side);
            let (dx, dy) = side.offset();
            assert_eq!(side.opposite().offset(), (-dx, -dy));
        }
    }
}

//! Grid maze described in TOML
//!
//! ```toml
//! width = 3
//! height = 2
//! default_weight = 1
//! walls = [{ x = 0, y = 0, side = "right" }]
//!
//! [[weights]]
//! x = 1
//! y = 0
//! side = "down"
//! weight = 5
//! ```
//!
//! A wall is shared by the two junctures it separates. Weights are per
//! direction, so a passage may cost differently each way.

use super::{juncture_count, Juncture, Maze, Side, MAX_JUNCTURES};
use crate::bail_maze;
use crate::error::Result;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct MazeFile {
    width: i32,
    height: i32,
    default_weight: Option<i64>,
    #[serde(default)]
    walls: Vec<WallSpec>,
    #[serde(default)]
    weights: Vec<WeightSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct WallSpec {
    x: i32,
    y: i32,
    side: Side,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct WeightSpec {
    x: i32,
    y: i32,
    side: Side,
    weight: i64,
}

/// Rectangular maze with shared walls and per-direction weights
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMaze {
    width: i32,
    height: i32,
    default_weight: i64,
    walls: HashSet<(Juncture, Side)>,
    weights: HashMap<(Juncture, Side), i64>,
}

impl GridMaze {
    /// A maze with no interior walls where every move costs `default_weight`
    pub fn open(width: i32, height: i32, default_weight: i64) -> Result<Self> {
        if width <= 0 || height <= 0 {
            bail_maze!("dimensions must be positive, got {}x{}", width, height);
        }
        if juncture_count(width, height).is_none() {
            bail_maze!(
                "{}x{} maze exceeds {} junctures",
                width,
                height,
                MAX_JUNCTURES
            );
        }
        if default_weight < 0 {
            bail_maze!("default weight must be non-negative, got {}", default_weight);
        }
        Ok(Self {
            width,
            height,
            default_weight,
            walls: HashSet::new(),
            weights: HashMap::new(),
        })
    }

    /// Load a maze file; `fallback_weight` applies when the file sets no `default_weight`
    pub fn load(path: &Path, fallback_weight: i64) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content, fallback_weight)
    }

    pub fn from_toml_str(content: &str, fallback_weight: i64) -> Result<Self> {
        let file: MazeFile = toml::from_str(content)?;
        let mut maze = Self::open(
            file.width,
            file.height,
            file.default_weight.unwrap_or(fallback_weight),
        )?;
        for wall in file.walls {
            maze.add_wall(Juncture::new(wall.x, wall.y), wall.side)?;
        }
        for spec in file.weights {
            maze.set_weight(Juncture::new(spec.x, spec.y), spec.side, spec.weight)?;
        }
        Ok(maze)
    }

    /// Block movement between `at` and its neighbor across `side`, both ways
    pub fn add_wall(&mut self, at: Juncture, side: Side) -> Result<()> {
        self.check_in_bounds(at)?;
        self.walls.insert((at, side));
        self.walls.insert((at.step(side), side.opposite()));
        Ok(())
    }

    /// Set the cost of moving from `at` across `side`
    pub fn set_weight(&mut self, at: Juncture, side: Side, weight: i64) -> Result<()> {
        self.check_in_bounds(at)?;
        if weight < 0 {
            bail_maze!("negative weight {} at {} going {:?}", weight, at, side);
        }
        self.weights.insert((at, side), weight);
        Ok(())
    }

    pub fn contains(&self, at: Juncture) -> bool {
        (0..self.width).contains(&at.x) && (0..self.height).contains(&at.y)
    }

    fn check_in_bounds(&self, at: Juncture) -> Result<()> {
        if !self.contains(at) {
            bail_maze!(
                "juncture {} outside {}x{} maze",
                at,
                self.width,
                self.height
            );
        }
        Ok(())
    }
}

impl Maze for GridMaze {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn is_wall(&self, at: Juncture, side: Side) -> bool {
        self.walls.contains(&(at, side))
    }

    fn weight(&self, at: Juncture, side: Side) -> i64 {
        self.weights
            .get(&(at, side))
            .copied()
            .unwrap_or(self.default_weight)
    }
}

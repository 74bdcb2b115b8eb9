//! Configuration for graphwalk
//!
//! Loaded from `graphwalk.toml` (or a path given on the command line). Every
//! field has a default, so an empty file is a valid configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::AlgorithmKind;

/// Default configuration file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "graphwalk.toml";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphwalkConfig {
    /// Algorithm used by `solve` when none is given
    pub default_algorithm: AlgorithmKind,

    pub maze: MazeConfig,

    pub output: OutputConfig,
}

/// Maze loading options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// Weight for moves a maze file does not price explicitly
    pub default_weight: i64,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self { default_weight: 1 }
    }
}

/// Output options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Print the observer event trace alongside the result
    pub show_events: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { show_events: true }
    }
}

impl GraphwalkConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: GraphwalkConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Load `path` if given, else `graphwalk.toml` under `dir` if it exists, else defaults
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let candidate = dir.join(CONFIG_FILE_NAME);
                if candidate.is_file() {
                    Self::load(&candidate)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.maze.default_weight < 0 {
            return Err(GraphError::invalid_maze(format!(
                "config maze.default_weight must be non-negative, got {}",
                self.maze.default_weight
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = GraphwalkConfig::default();
        assert_eq!(config.default_algorithm, AlgorithmKind::Dijkstra);
        assert_eq!(config.maze.default_weight, 1);
        assert!(config.output.show_events);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graphwalk.toml");

        let config = GraphwalkConfig {
            default_algorithm: AlgorithmKind::Bfs,
            maze: MazeConfig { default_weight: 3 },
            output: OutputConfig { show_events: false },
        };
        config.save(&path).unwrap();

        let loaded = GraphwalkConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graphwalk.toml");
        fs::write(&path, "default_algorithm = \"dfs\"\n").unwrap();

        let loaded = GraphwalkConfig::load(&path).unwrap();
        assert_eq!(loaded.default_algorithm, AlgorithmKind::Dfs);
        assert_eq!(loaded.maze.default_weight, 1);
        assert!(loaded.output.show_events);
    }

    #[test]
    fn test_negative_default_weight_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graphwalk.toml");
        fs::write(&path, "[maze]\ndefault_weight = -2\n").unwrap();

        let err = GraphwalkConfig::load(&path).unwrap_err();
        assert!(matches!(err, GraphError::InvalidMaze { .. }));
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graphwalk.toml");
        fs::write(&path, "default_algorithm = \"astar\"\n").unwrap();

        assert!(matches!(
            GraphwalkConfig::load(&path),
            Err(GraphError::Toml(_))
        ));
    }

    #[test]
    fn test_discover() {
        let dir = tempdir().unwrap();
        assert_eq!(
            GraphwalkConfig::discover(None, dir.path()).unwrap(),
            GraphwalkConfig::default()
        );

        fs::write(dir.path().join(CONFIG_FILE_NAME), "default_algorithm = \"bfs\"\n").unwrap();
        let found = GraphwalkConfig::discover(None, dir.path()).unwrap();
        assert_eq!(found.default_algorithm, AlgorithmKind::Bfs);

        let missing = dir.path().join("missing.toml");
        assert!(GraphwalkConfig::discover(Some(&missing), dir.path()).is_err());
    }
}

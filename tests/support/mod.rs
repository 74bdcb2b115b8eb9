use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for graphwalk, isolated from the caller's environment
pub fn graphwalk() -> Command {
    let mut cmd = cargo_bin_cmd!("graphwalk");
    cmd.env_remove("GRAPHWALK_CONFIG")
        .env_remove("GRAPHWALK_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// 2x2 maze with no walls and unit weights
pub const OPEN_2X2: &str = "width = 2\nheight = 2\n";

/// Two junctures separated by a wall
#[allow(dead_code)]
pub const SPLIT_CORRIDOR: &str = r#"
width = 2
height = 1
walls = [{ x = 0, y = 0, side = "right" }]
"#;

/// Write a maze file into `dir` and return its path
pub fn write_maze(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

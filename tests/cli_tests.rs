//! Integration tests for the graphwalk CLI surface: help, inspect, errors

mod support;

use predicates::prelude::*;
use support::{graphwalk, write_maze, OPEN_2X2};
use tempfile::tempdir;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    graphwalk()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: graphwalk"))
        .stdout(predicate::str::contains("inspect"))
        .stdout(predicate::str::contains("solve"));
}

#[test]
fn test_version_flag() {
    graphwalk()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("graphwalk "));
}

#[test]
fn test_no_command_prints_banner() {
    let dir = tempdir().unwrap();
    graphwalk()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("graphwalk --help"));
}

// ============================================================================
// Inspect
// ============================================================================

#[test]
fn test_inspect_counts() {
    let dir = tempdir().unwrap();
    let maze = write_maze(dir.path(), "maze.toml", OPEN_2X2);

    graphwalk()
        .current_dir(dir.path())
        .arg("inspect")
        .arg(&maze)
        .assert()
        .success()
        .stdout(predicate::str::contains("maze: 2x2"))
        .stdout(predicate::str::contains("vertices: 4"))
        .stdout(predicate::str::contains("edges: 8"));
}

#[test]
fn test_inspect_json() {
    let dir = tempdir().unwrap();
    let maze = write_maze(dir.path(), "maze.toml", OPEN_2X2);

    let output = graphwalk()
        .current_dir(dir.path())
        .args(["--format", "json", "inspect"])
        .arg(&maze)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["width"], 2);
    assert_eq!(json["height"], 2);
    assert_eq!(json["vertices"], 4);
    assert_eq!(json["edges"], 8);
}

// ============================================================================
// Exit codes
// ============================================================================

#[test]
fn test_invalid_maze_is_data_error() {
    let dir = tempdir().unwrap();
    let maze = write_maze(dir.path(), "maze.toml", "width = 0\nheight = 2\n");

    graphwalk()
        .current_dir(dir.path())
        .arg("inspect")
        .arg(&maze)
        .assert()
        .code(3)
        .stderr(predicate::str::starts_with("error: "))
        .stderr(predicate::str::contains("dimensions must be positive"));
}

#[test]
fn test_oversized_maze_is_data_error() {
    let dir = tempdir().unwrap();
    let maze = write_maze(
        dir.path(),
        "maze.toml",
        "width = 2147483647\nheight = 2147483647\n",
    );

    graphwalk()
        .current_dir(dir.path())
        .arg("inspect")
        .arg(&maze)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("exceeds"));
}

#[test]
fn test_malformed_toml_is_data_error() {
    let dir = tempdir().unwrap();
    let maze = write_maze(dir.path(), "maze.toml", "width = [\n");

    graphwalk()
        .current_dir(dir.path())
        .arg("inspect")
        .arg(&maze)
        .assert()
        .code(3);
}

#[test]
fn test_missing_maze_file_is_failure() {
    let dir = tempdir().unwrap();

    graphwalk()
        .current_dir(dir.path())
        .args(["inspect", "does-not-exist.toml"])
        .assert()
        .code(1);
}

#[test]
fn test_unknown_juncture_is_usage_error() {
    let dir = tempdir().unwrap();
    let maze = write_maze(dir.path(), "maze.toml", OPEN_2X2);

    graphwalk()
        .current_dir(dir.path())
        .arg("solve")
        .arg(&maze)
        .args(["--from", "0,0", "--to", "5,5"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("vertex not in graph"));
}

#[test]
fn test_bad_coordinates_rejected_by_parser() {
    let dir = tempdir().unwrap();
    let maze = write_maze(dir.path(), "maze.toml", OPEN_2X2);

    graphwalk()
        .current_dir(dir.path())
        .arg("solve")
        .arg(&maze)
        .args(["--from", "zero", "--to", "1,1"])
        .assert()
        .code(2);
}

#[test]
fn test_json_error_envelope() {
    let dir = tempdir().unwrap();
    let maze = write_maze(dir.path(), "maze.toml", OPEN_2X2);

    let output = graphwalk()
        .current_dir(dir.path())
        .args(["--format", "json", "solve"])
        .arg(&maze)
        .args(["--from", "0,0", "--to", "9,9"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 2);
    assert_eq!(json["error"]["type"], "unknown_vertex");
}

#[test]
fn test_json_envelope_for_argument_errors() {
    let output = graphwalk()
        .args(["--format", "json", "solve", "maze.toml", "--from", "x"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_quiet_suppresses_error_text() {
    let dir = tempdir().unwrap();

    graphwalk()
        .current_dir(dir.path())
        .args(["--quiet", "inspect", "missing.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::is_empty());
}

//! Integration tests for the wayfinder CLI
//!
//! These tests run the wayfinder binary against the built-in sample network
//! and against road maps written to temporary directories.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

/// Get a Command for wayfinder that ignores any user configuration
fn wayfinder() -> Command {
    let mut cmd = cargo_bin_cmd!("wayfinder");
    cmd.env(
        "WAYFINDER_CONFIG_DIR",
        std::env::temp_dir().join("wayfinder-tests-no-config"),
    )
    .env_remove("WAYFINDER_MAP")
    .env_remove("WAYFINDER_LOG")
    .env_remove("RUST_LOG");
    cmd
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    wayfinder()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: wayfinder"))
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("kpaths"))
        .stdout(predicate::str::contains("traverse"));
}

#[test]
fn test_no_command_prints_hint() {
    wayfinder()
        .assert()
        .success()
        .stdout(predicate::str::contains("wayfinder --help"));
}

// ============================================================================
// path
// ============================================================================

#[test]
fn test_path_bfs_on_sample() {
    wayfinder()
        .args(["path", "Addis Ababa", "Mekelle"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Addis Ababa -> Bahir Dar -> Gondar -> Mekelle",
        ))
        .stdout(predicate::str::contains("Cost: 990 (3 hops)"));
}

#[test]
fn test_path_dfs_json() {
    let output = wayfinder()
        .args(["path", "Hawassa", "Gondar", "--strategy", "dfs", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["strategy"], "dfs");
    assert_eq!(json["found"], true);
    assert_eq!(
        json["path"],
        serde_json::json!(["Hawassa", "Addis Ababa", "Bahir Dar", "Gondar"])
    );
    assert_eq!(json["cost"], 965.0);
}

#[test]
fn test_path_blocked_road_means_no_path() {
    wayfinder()
        .args(["path", "Addis Ababa", "Mekelle", "--block", "Addis Ababa:Bahir Dar"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No path found from Addis Ababa to Mekelle",
        ));
}

#[test]
fn test_path_blocked_json_reports_not_found() {
    let output = wayfinder()
        .args([
            "--format",
            "json",
            "--block",
            "Bahir Dar:Addis Ababa",
            "path",
            "Addis Ababa",
            "Mekelle",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["found"], false);
    assert_eq!(json["path"], serde_json::json!([]));
    assert_eq!(json["cost"], 0.0);
}

#[test]
fn test_path_unknown_city_exit_code() {
    wayfinder()
        .args(["path", "Addis Ababa", "Atlantis"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown city: Atlantis"));
}

#[test]
fn test_path_unknown_city_json_envelope() {
    let output = wayfinder()
        .args(["--format", "json", "path", "Atlantis", "Mekelle"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "unknown_city");
}

#[test]
fn test_path_invalid_strategy_is_usage_error() {
    wayfinder()
        .args(["path", "Addis Ababa", "Mekelle", "--strategy", "astar"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("astar"));
}

#[test]
fn test_path_invalid_strategy_json_type() {
    let output = wayfinder()
        .args(["--format", "json", "path", "Addis Ababa", "Mekelle", "-s", "astar"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "invalid_strategy");
    assert_eq!(json["error"]["code"], 2);
}

#[test]
fn test_config_invalid_strategy_json_type() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "[search]\nstrategy = \"astar\"\n").unwrap();

    let output = wayfinder()
        .env("WAYFINDER_CONFIG_DIR", dir.path())
        .args(["--format", "json", "path", "Addis Ababa", "Mekelle"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "invalid_strategy");
    assert!(json["error"]["message"]
        .as_str()
        .unwrap()
        .contains("astar"));
}

#[test]
fn test_config_invalid_strategy_human() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "[search]\nstrategy = \"astar\"\n").unwrap();

    wayfinder()
        .arg("--config")
        .arg(dir.path().join("config.toml"))
        .arg("cities")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown strategy: astar"));
}

// ============================================================================
// kpaths
// ============================================================================

#[test]
fn test_kpaths_returns_fewer_than_k() {
    wayfinder()
        .args(["kpaths", "Addis Ababa", "Mekelle", "-k", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Path 1: Addis Ababa -> Bahir Dar -> Gondar -> Mekelle (cost: 990)",
        ))
        .stdout(predicate::str::contains("Path 2").not())
        .stdout(predicate::str::contains("Only 1 of 2 requested paths exist"));
}

#[test]
fn test_kpaths_json_is_cost_ordered() {
    let dir = tempdir().unwrap();
    let map = dir.path().join("square.json");
    fs::write(
        &map,
        r#"{
  "cities": ["A", "B", "C", "D"],
  "roads": {
    "A": [["B", 1], ["C", 2], ["D", 9]],
    "B": [["A", 1], ["D", 1]],
    "C": [["A", 2], ["D", 2]],
    "D": [["B", 1], ["C", 2], ["A", 9]]
  }
}"#,
    )
    .unwrap();

    let output = wayfinder()
        .arg("--map")
        .arg(&map)
        .args(["--format", "json", "kpaths", "A", "D", "-k", "5"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let paths = json["paths"].as_array().unwrap();
    assert_eq!(paths.len(), 3);
    let costs: Vec<f64> = paths.iter().map(|p| p["cost"].as_f64().unwrap()).collect();
    assert_eq!(costs, vec![2.0, 4.0, 9.0]);
    assert_eq!(paths[0]["rank"], 1);
}

// ============================================================================
// traverse
// ============================================================================

#[test]
fn test_traverse_from_leaf_city() {
    wayfinder()
        .args(["traverse", "Hawassa"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Hawassa -> Addis Ababa -> Bahir Dar -> Gondar -> Mekelle",
        ))
        .stdout(predicate::str::contains("Total cost: 1265"));
}

#[test]
fn test_traverse_from_hub_has_no_complete_route() {
    wayfinder()
        .args(["traverse", "Addis Ababa"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No complete traversal found from Addis Ababa",
        ));
}

#[test]
fn test_traverse_greedy_json() {
    let output = wayfinder()
        .args(["traverse", "Addis Ababa", "--mode", "greedy", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["mode"], "greedy");
    assert_eq!(json["complete"], true);
    assert_eq!(json["path"].as_array().unwrap().len(), 5);
    assert_eq!(json["cost"], 1265.0);
}

#[test]
fn test_traverse_unknown_mode_is_unsupported() {
    let output = wayfinder()
        .args(["traverse", "Hawassa", "--mode", "exhaustive", "--format", "json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "unsupported");
}

#[test]
fn test_malformed_block_is_invalid_value() {
    wayfinder()
        .args(["--block", "Gondar", "cities"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid blocked road"));

    let output = wayfinder()
        .args(["--format", "json", "--block", "Gondar", "cities"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "invalid_value");
}

// ============================================================================
// Maps, config and network inspection
// ============================================================================

#[test]
fn test_cities_lists_sample() {
    wayfinder()
        .arg("cities")
        .assert()
        .success()
        .stdout(predicate::str::contains("Addis Ababa"))
        .stdout(predicate::str::contains("Mekelle"));
}

#[test]
fn test_roads_after_block() {
    wayfinder()
        .args(["roads", "--block", "Gondar:Mekelle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mekelle: (no roads)"))
        .stdout(predicate::str::contains("Gondar: Bahir Dar (180)"))
        .stdout(predicate::str::contains("Blocked: Gondar:Mekelle"));
}

#[test]
fn test_incomplete_map_is_data_error() {
    let dir = tempdir().unwrap();
    let map = dir.path().join("roads.toml");
    fs::write(
        &map,
        r#"
cities = ["A", "B", "C"]

[roads]
A = [["B", 1]]
B = [["A", 1]]
"#,
    )
    .unwrap();

    wayfinder()
        .arg("--map")
        .arg(&map)
        .args(["path", "A", "B"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("cities missing from the road map: C"));
}

#[test]
fn test_missing_map_file() {
    let dir = tempdir().unwrap();
    wayfinder()
        .arg("--map")
        .arg(dir.path().join("absent.toml"))
        .arg("cities")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("road map not found"));
}

#[test]
fn test_config_supplies_defaults_and_closures() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        r#"
[search]
k = 1

[roads]
blocked = [["Gondar", "Mekelle"]]
"#,
    )
    .unwrap();

    wayfinder()
        .env("WAYFINDER_CONFIG_DIR", dir.path())
        .args(["path", "Addis Ababa", "Mekelle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path found"));

    wayfinder()
        .arg("--config")
        .arg(dir.path().join("config.toml"))
        .args(["kpaths", "Addis Ababa", "Gondar", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path 1:"))
        .stdout(predicate::str::contains("requested paths").not());
}

#[test]
fn test_config_map_path_is_relative_to_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("line.yaml"),
        "cities: [X, Y]\nroads:\n  X: [[Y, 4]]\n  Y: [[X, 4]]\n",
    )
    .unwrap();
    fs::write(dir.path().join("config.toml"), "map = \"line.yaml\"\n").unwrap();

    wayfinder()
        .arg("--config")
        .arg(dir.path().join("config.toml"))
        .args(["path", "X", "Y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("X -> Y"))
        .stdout(predicate::str::contains("Cost: 4 (1 hop)"));
}

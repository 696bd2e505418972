//! End-to-end tests for the `ringroute` binary.
//!
//! These tests use `assert_cmd` to run the binary against the ring fixture
//! and inspect both the console stream and the result file.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Path to the ring fixture listing.
fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/times.txt")
}

/// Expected fastest time per start platform on the fixture ring.
const EXPECTED_TIMES: [&str; 13] = [
    "24.000000",
    "24.500000",
    "25.250000",
    "24.000000",
    "25.750000",
    "25.000000",
    "24.750000",
    "25.500000",
    "24.250000",
    "26.000000",
    "25.000000",
    "25.500000",
    "24.500000",
];

fn ringroute() -> Command {
    Command::cargo_bin("ringroute").expect("binary exists")
}

#[test]
fn plans_every_platform_of_the_fixture() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let output = temp_dir.path().join("output.txt");

    ringroute()
        .arg("--input")
        .arg(fixture_path())
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Finding optimal path for platform 1\nRoute time: 24.000000\nRoute path: 1 -> 2 -> 3 -> 4 -> 5 -> 6 -> 7 -> 8 -> 9 -> 10 -> 11 -> 12 -> 13\n",
        ))
        .stderr(predicate::str::contains("line is not a valid edge"));

    let written = fs::read_to_string(&output).expect("result file written");
    let times: Vec<_> = written
        .lines()
        .filter_map(|line| line.strip_prefix("Route time: "))
        .collect();
    assert_eq!(times, EXPECTED_TIMES);
    assert!(written.contains("Route path: 5 -> 6 -> 7 -> 8 -> 9 -> 10 -> 11 -> 12 -> 13 -> 1 -> 2 -> 3 -> 4\n"));
}

#[test]
fn result_file_matches_console_and_is_truncated() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let output = temp_dir.path().join("output.txt");
    fs::write(&output, "stale contents from a previous run\n").expect("seed output");

    let assert = ringroute()
        .arg("--input")
        .arg(fixture_path())
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let written = fs::read_to_string(&output).expect("result file written");
    assert_eq!(stdout, written);
    assert!(!written.contains("stale contents"));
}

#[test]
fn reports_missing_routes() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let input = temp_dir.path().join("times.txt");
    let output = temp_dir.path().join("output.txt");
    fs::write(&input, "1 -> 2: 1.0\n2 -> 1: 1.0\n").expect("write input");

    ringroute()
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Finding optimal path for platform 13\nNo 14 level routes possible from starting platform\n",
        ));
}

#[test]
fn json_format_writes_array() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let output = temp_dir.path().join("output.json");

    ringroute()
        .arg("--input")
        .arg(fixture_path())
        .arg("--output")
        .arg(&output)
        .arg("--format")
        .arg("json")
        .assert()
        .success();

    let written = fs::read_to_string(&output).expect("result file written");
    let value: serde_json::Value = serde_json::from_str(&written).expect("valid json");
    let reports = value.as_array().expect("array of reports");
    assert_eq!(reports.len(), 13);
    assert_eq!(reports[0]["route"]["time"], 24.0);
}

#[test]
fn show_graph_prints_adjacency() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let output = temp_dir.path().join("output.txt");

    ringroute()
        .arg("--input")
        .arg(fixture_path())
        .arg("--output")
        .arg(&output)
        .arg("--show-graph")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Platform number: 1\n  Connected level: 2 with time: 2.5\n",
        ));
}

#[test]
fn missing_input_fails_with_context() {
    let temp_dir = TempDir::new().expect("create temp dir");

    ringroute()
        .arg("--input")
        .arg(temp_dir.path().join("absent.txt"))
        .arg("--output")
        .arg(temp_dir.path().join("output.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load platform graph"));
}

//! CLI binary smoke tests using assert_cmd.
//!
//! These tests exercise the compiled `mplot` binary to verify that
//! argument parsing, output formatting and error handling work end-to-end.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("mplot").unwrap()
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_flag_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("arange"))
        .stdout(predicate::str::contains("meshgrid"))
        .stdout(predicate::str::contains("demo"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mplot"));
}

// ---------------------------------------------------------------------------
// arange
// ---------------------------------------------------------------------------

#[test]
fn arange_integer_excludes_stop() {
    cmd()
        .args(["arange", "-3", "3", "--integer"])
        .assert()
        .success()
        .stdout("[-3, -2, -1, 0, 1, 2]\n");
}

#[test]
fn arange_float_with_step() {
    cmd()
        .args(["arange", "0", "2", "--step", "0.5"])
        .assert()
        .success()
        .stdout("[0.0 0.5 1.0 1.5]\n");
}

#[test]
fn arange_descending_with_negative_step() {
    cmd()
        .args(["arange", "3", "1", "--step", "-1", "--integer"])
        .assert()
        .success()
        .stdout("[3, 2]\n");
}

#[test]
fn arange_direction_mismatch_is_empty() {
    cmd()
        .args(["arange", "3", "-3", "--step", "0.5"])
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn arange_zero_step_fails() {
    cmd()
        .args(["arange", "0", "1", "--step", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("step is zero in arange()"));
}

#[test]
fn arange_too_many_elements_fails_cleanly() {
    cmd()
        .args(["arange", "0", "1e19"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("too many elements"));
}

#[test]
fn arange_rejects_non_numbers() {
    cmd()
        .args(["arange", "zero", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid start"));
}

// ---------------------------------------------------------------------------
// meshgrid
// ---------------------------------------------------------------------------

#[test]
fn meshgrid_prints_both_grids() {
    cmd()
        .args(["meshgrid", "--x", "1:4", "--y", "10:30:10"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "X = [[1.0 2.0 3.0] [1.0 2.0 3.0]]",
        ))
        .stdout(predicate::str::contains(
            "Y = [[10.0 10.0 10.0] [20.0 20.0 20.0]]",
        ));
}

#[test]
fn meshgrid_accepts_negative_ranges() {
    cmd()
        .args(["meshgrid", "--x", "-1:1", "--y", "-1:0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("X = [[-1.0 0.0]]"))
        .stdout(predicate::str::contains("Y = [[-1.0 -1.0]]"));
}

#[test]
fn meshgrid_bad_range_fails() {
    cmd()
        .args(["meshgrid", "--x", "1", "--y", "1:2"])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// demo
// ---------------------------------------------------------------------------

#[test]
fn demo_without_config_prints_defaults() {
    let dir = tempfile::tempdir().unwrap();
    cmd()
        .current_dir(dir.path())
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"contour\""))
        .stdout(predicate::str::contains("\"x_range\""));

    assert!(!dir.path().join("mplot_contour.html").exists());
}

#[test]
fn demo_writes_html() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("demo.json");
    std::fs::write(&config, r#"{"kind": "simple"}"#).unwrap();
    let out = dir.path().join("simple.html");
    cmd()
        .arg("demo")
        .arg(&config)
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("plotly"));
}

#[test]
fn demo_print_config() {
    cmd()
        .args(["demo", "--kind", "surface", "--print-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"surface\""))
        .stdout(predicate::str::contains("\"output_file\": \"mplot_surface.html\""));
}

#[test]
fn demo_rejects_non_html_output() {
    cmd()
        .args(["demo", "--kind", "contour", "-o", "plot.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(".html"));
}

#[test]
fn demo_invalid_kind_in_config_warns() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("demo.json");
    std::fs::write(&config, r#"{"kind": "pie"}"#).unwrap();
    cmd()
        .env("MPLOT_LOG", "warn")
        .arg("demo")
        .arg(&config)
        .arg("--print-config")
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid value for 'kind'"))
        .stdout(predicate::str::contains("\"kind\": \"contour\""));
}

#[test]
fn demo_unknown_kind_fails() {
    cmd()
        .args(["demo", "--kind", "pie"])
        .assert()
        .failure();
}

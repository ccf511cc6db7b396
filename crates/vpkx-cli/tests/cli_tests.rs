//! Integration tests for vpkx-cli.
//!
//! Note: Tests use `unwrap`/`expect` which is acceptable in test code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use vpkx_core::test_utils::VpkTestBuilder;

fn vpkx_cmd() -> Command {
    cargo_bin_cmd!("vpkx")
}

fn is_empty_dir(dir: &Path) -> bool {
    fs::read_dir(dir).unwrap().next().is_none()
}

#[test]
fn test_version_flag() {
    vpkx_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vpkx"));
}

#[test]
fn test_help_flag() {
    vpkx_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Valve Pak"));
}

#[test]
fn test_no_arguments_prints_usage() {
    let temp = TempDir::new().expect("failed to create temp dir");

    vpkx_cmd()
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));

    assert!(is_empty_dir(temp.path()));
}

#[test]
fn test_too_many_arguments_prints_usage() {
    let temp = TempDir::new().expect("failed to create temp dir");

    vpkx_cmd()
        .current_dir(temp.path())
        .arg("first.vpk")
        .arg("second.vpk")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));

    assert!(is_empty_dir(temp.path()));
}

#[test]
fn test_extract_runs_successfully() {
    let temp = TempDir::new().expect("failed to create temp dir");
    VpkTestBuilder::new()
        .add_file("bar/baz.txt", b"hello")
        .write_to(&temp.path().join("foo.vpk"));

    vpkx_cmd()
        .current_dir(temp.path())
        .arg("foo.vpk")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Extraction complete"))
        .stdout(predicate::str::contains("foo_dir"));

    let extracted = temp.path().join("foo_dir/bar/baz.txt");
    assert_eq!(fs::read(extracted).unwrap(), b"hello");
}

#[test]
fn test_extract_json_report() {
    let temp = TempDir::new().expect("failed to create temp dir");
    VpkTestBuilder::new()
        .add_file("bar/baz.txt", b"hello")
        .add_file("maps/empty.bsp", b"")
        .write_to(&temp.path().join("foo.vpk"));

    let output = vpkx_cmd()
        .current_dir(temp.path())
        .arg("--json")
        .arg("foo.vpk")
        .assert()
        .code(0)
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("invalid JSON output");
    assert_eq!(json["status"], "success");
    assert_eq!(json["data"]["output_root"], "foo_dir");
    assert_eq!(json["data"]["files_extracted"], 1);
    assert_eq!(json["data"]["bytes_written"], 5);
    assert_eq!(json["data"]["skipped"][0]["path"], "maps/empty.bsp");
    assert_eq!(json["data"]["skipped"][0]["reason"], "empty-entry");
    assert!(!temp.path().join("foo_dir/maps/empty.bsp").exists());
}

#[test]
fn test_nonexistent_archive() {
    let temp = TempDir::new().expect("failed to create temp dir");

    vpkx_cmd()
        .current_dir(temp.path())
        .arg("nonexistent.vpk")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("nonexistent.vpk"));

    assert!(!temp.path().join("nonexistent_dir").exists());
}

#[test]
fn test_invalid_archive() {
    let temp = TempDir::new().expect("failed to create temp dir");
    fs::write(temp.path().join("broken.vpk"), b"definitely not a vpk").unwrap();

    vpkx_cmd()
        .current_dir(temp.path())
        .arg("broken.vpk")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to open VPK file"));

    assert!(!temp.path().join("broken_dir").exists());
}

#[test]
fn test_nonexistent_archive_json() {
    let temp = TempDir::new().expect("failed to create temp dir");

    let output = vpkx_cmd()
        .current_dir(temp.path())
        .arg("--json")
        .arg("nonexistent.vpk")
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("invalid JSON output");
    assert_eq!(json["status"], "error");
    assert_eq!(json["operation"], "extract");
    assert!(json["error"].as_str().unwrap().contains("nonexistent.vpk"));
}

#[test]
fn test_verbose_and_quiet_conflict() {
    vpkx_cmd()
        .arg("-v")
        .arg("-q")
        .arg("a.vpk")
        .assert()
        .code(1);
}

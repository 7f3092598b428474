//! CLI interaction tests for the packet latency calculator
//!
//! These tests exercise the command line surface: help and version
//! output, argument validation, and the choice between file and stdin
//! input sources.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const RX_PACKET: &str = "{\"type\":\"rx-packet\",\"object\":{\
    \"tx-user-timestamp\":\"2020-01-01T00:00:00.000000000\",\
    \"rx-hw-timestamp\":\"2020-01-01T00:00:00.000000500\",\
    \"rx-user-timestamp\":\"2020-01-01T00:00:00.000001000\"}}";

/// Helper function to create a test command
fn create_test_cmd() -> Command {
    let mut cmd = Command::cargo_bin("latency").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("LATENCY_DEBUG");
    cmd
}

/// Test that help output describes the tool and its one argument
#[test]
fn test_help_displays_usage() {
    create_test_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("INFILE"))
        .stdout(predicate::str::contains("Packet Latency Calculator"));
}

/// Test that the short help flag works the same way
#[test]
fn test_short_help_flag() {
    create_test_cmd()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

/// Test the short version flag
#[test]
fn test_short_version_flag() {
    create_test_cmd()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that the long version flag includes build information
#[test]
fn test_long_version_includes_build_info() {
    create_test_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")))
        .stdout(predicate::str::contains("built"));
}

/// Test that unknown flags are rejected with a usage error
#[test]
fn test_unknown_flag_is_rejected() {
    create_test_cmd()
        .arg("--definitely-not-a-flag")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("error"));
}

/// Test that a second positional argument is rejected
#[test]
fn test_extra_positional_is_rejected() {
    create_test_cmd()
        .arg("one.json")
        .arg("two.json")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unexpected"));
}

/// Test that stdin is the input source when no file is given
#[test]
fn test_stdin_is_the_default_source() {
    create_test_cmd()
        .write_stdin(format!("{}\n", RX_PACKET))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\":\"latency\""));
}

/// Test that an empty input file is a clean, silent run
#[test]
fn test_empty_file_is_a_clean_run() {
    let file = NamedTempFile::new().unwrap();

    create_test_cmd()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

/// Test a file holding only records of kinds the tool ignores
#[test]
fn test_file_of_ignored_records_is_silent() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{{\"type\":\"tx-packet\",\"object\":{{}}}}").unwrap();
    writeln!(file, "{{\"type\":\"session-start\"}}").unwrap();
    file.flush().unwrap();

    create_test_cmd()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

/// Test that a longer stream produces one output line per packet
#[test]
fn test_stream_volume_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    for _ in 0..500 {
        writeln!(file, "{}", RX_PACKET).unwrap();
    }
    file.flush().unwrap();

    let assert = create_test_cmd().arg(file.path()).assert().success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 500);
    assert!(stdout
        .lines()
        .all(|line| line.starts_with("{\"type\":\"latency\"")));
}

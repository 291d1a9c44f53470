// ABOUTME: Integration tests for the ruffier-cli binary
// ABOUTME: Drives evaluate and table through a child process and checks output and exit codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Integration tests for the ruffier-cli binary.
//!
//! These tests verify command output, exit codes, and how flags and
//! environment variables combine.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use ruffier::config::{OUTPUT_FORMAT_ENV, PRETTY_ENV};
use serial_test::serial;
use std::process::Command;

/// Helper to run CLI command with extra environment and capture output
fn run_cli_with_env(args: &[&str], vars: &[(&str, &str)]) -> (i32, String, String) {
    let mut command = Command::new(env!("CARGO_BIN_EXE_ruffier-cli"));
    command
        .args(args)
        .env_remove(OUTPUT_FORMAT_ENV)
        .env_remove(PRETTY_ENV)
        .env_remove("RUST_LOG");
    for (key, value) in vars {
        command.env(key, value);
    }
    let output = command.output().unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

/// Helper to run CLI command with a clean environment
fn run_cli(args: &[&str]) -> (i32, String, String) {
    run_cli_with_env(args, &[])
}

#[test]
fn test_cli_help_shows_commands() {
    let (exit_code, stdout, _stderr) = run_cli(&["--help"]);

    assert_eq!(exit_code, 0, "CLI help should exit with 0");
    assert!(stdout.contains("evaluate"), "Help should mention 'evaluate'");
    assert!(stdout.contains("table"), "Help should mention 'table'");
}

#[test]
fn test_cli_evaluate_prints_both_lines() {
    let (exit_code, stdout, stderr) =
        run_cli(&["evaluate", "--p1", "20", "--p2", "30", "--p3", "25", "--age", "10"]);

    assert_eq!(exit_code, 0, "stderr: {stderr}");
    assert_eq!(
        stdout,
        "Your Ruffier Index: 10.0\nCardiac performance: above average\n"
    );
}

#[test]
fn test_cli_evaluate_below_age_floor_exits_successfully() {
    let (exit_code, stdout, stderr) =
        run_cli(&["evaluate", "--p1", "20", "--p2", "30", "--p3", "25", "--age", "5"]);

    assert_eq!(exit_code, 0, "stderr: {stderr}");
    assert_eq!(stdout, "Your Ruffier Index: 0\nno data for this age\n");
}

#[test]
fn test_cli_evaluate_negative_age_is_no_data() {
    let (exit_code, stdout, stderr) =
        run_cli(&["evaluate", "--p1", "20", "--p2", "30", "--p3", "25", "--age", "-3"]);

    assert_eq!(exit_code, 0, "negative age must not be a usage error: {stderr}");
    assert_eq!(stdout, "Your Ruffier Index: 0\nno data for this age\n");
}

#[test]
fn test_cli_evaluate_json_output() {
    let (exit_code, stdout, stderr) = run_cli(&[
        "evaluate", "--p1", "20", "--p2", "30", "--p3", "25", "--age", "-3", "--format", "json",
    ]);

    assert_eq!(exit_code, 0, "stderr: {stderr}");
    let json: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(json, serde_json::json!({ "status": "no_data", "age": -3 }));
}

#[test]
fn test_cli_evaluate_missing_argument_is_usage_error() {
    let (exit_code, _stdout, stderr) = run_cli(&["evaluate", "--p1", "20", "--age", "10"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("--p2"), "stderr should name the missing flag");
}

#[test]
fn test_cli_table_for_one_age() {
    let (exit_code, stdout, stderr) = run_cli(&["table", "--age", "13"]);

    assert_eq!(exit_code, 0, "stderr: {stderr}");
    assert!(stdout.starts_with("13-14 (unsatisfactory from 16.5)"));
    assert!(!stdout.contains("15+"));
}

#[test]
fn test_cli_table_below_age_floor_exits_with_range_status() {
    let (exit_code, stdout, stderr) = run_cli(&["table", "--age", "5"]);

    assert_eq!(exit_code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("no data for age 5"), "stderr: {stderr}");
    assert_eq!(
        stderr.lines().filter(|line| line.contains("no data for age 5")).count(),
        1,
        "failure should be reported once"
    );
}

#[test]
#[serial]
fn test_cli_invalid_output_format_env_exits_with_config_status() {
    let (exit_code, stdout, stderr) = run_cli_with_env(
        &["evaluate", "--p1", "20", "--p2", "30", "--p3", "25", "--age", "10"],
        &[(OUTPUT_FORMAT_ENV, "xml")],
    );

    assert_eq!(exit_code, 78);
    assert!(stdout.is_empty());
    assert!(stderr.contains(OUTPUT_FORMAT_ENV), "stderr: {stderr}");
}

#[test]
#[serial]
fn test_cli_environment_selects_output_format() {
    let (exit_code, stdout, stderr) =
        run_cli_with_env(&["table", "--age", "15"], &[(OUTPUT_FORMAT_ENV, "json")]);

    assert_eq!(exit_code, 0, "stderr: {stderr}");
    let json: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(json["age_bracket"], "fifteen_plus");
}

#[test]
#[serial]
fn test_cli_flags_override_environment() {
    let (exit_code, stdout, stderr) = run_cli_with_env(
        &[
            "evaluate", "--p1", "20", "--p2", "30", "--p3", "25", "--age", "10", "--format", "text",
        ],
        &[(OUTPUT_FORMAT_ENV, "json"), (PRETTY_ENV, "false")],
    );

    assert_eq!(exit_code, 0, "stderr: {stderr}");
    assert!(stdout.starts_with("Your Ruffier Index: 10.0"));

    let (exit_code, stdout, _stderr) = run_cli_with_env(
        &[
            "evaluate", "--p1", "20", "--p2", "30", "--p3", "25", "--age", "10", "--format", "json",
            "--pretty",
        ],
        &[(PRETTY_ENV, "false")],
    );

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("\n  \"status\": \"evaluated\""), "stdout: {stdout}");
}

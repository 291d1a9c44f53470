// ABOUTME: Tests for environment-driven CLI configuration
// ABOUTME: Covers defaults, valid overrides, and rejection of unparseable values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use ruffier::config::{CliConfig, ConfigError, OUTPUT_FORMAT_ENV, PRETTY_ENV};
use ruffier::errors::{AppError, ErrorCode};
use ruffier::formatters::OutputFormat;
use serial_test::serial;
use std::collections::HashMap;
use std::env;

fn lookup_from(
    vars: &[(&str, &str)],
) -> impl Fn(&str) -> Result<Option<String>, ConfigError> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key: &str| Ok(map.get(key).cloned())
}

#[test]
fn test_defaults_when_unset() {
    let config = CliConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config, CliConfig::default());
    assert_eq!(config.output_format, OutputFormat::Text);
    assert!(!config.pretty);
}

#[test]
fn test_values_are_parsed() {
    let config = CliConfig::from_lookup(lookup_from(&[
        (OUTPUT_FORMAT_ENV, "json"),
        (PRETTY_ENV, "1"),
    ]))
    .unwrap();
    assert_eq!(config.output_format, OutputFormat::Json);
    assert!(config.pretty);
}

#[test]
fn test_invalid_format_is_rejected() {
    let error = CliConfig::from_lookup(lookup_from(&[(OUTPUT_FORMAT_ENV, "xml")])).unwrap_err();
    assert!(matches!(error, ConfigError::Parse { key, .. } if key == OUTPUT_FORMAT_ENV));

    let app_error = AppError::from(error);
    assert_eq!(app_error.code, ErrorCode::ConfigError);
}

#[test]
fn test_invalid_bool_is_rejected() {
    let error = CliConfig::from_lookup(lookup_from(&[(PRETTY_ENV, "maybe")])).unwrap_err();
    assert!(error.to_string().contains("maybe"));
}

#[test]
#[serial]
fn test_from_env_reads_process_environment() {
    env::set_var(OUTPUT_FORMAT_ENV, "toon");
    env::set_var(PRETTY_ENV, "false");

    let config = CliConfig::from_env();

    env::remove_var(OUTPUT_FORMAT_ENV);
    env::remove_var(PRETTY_ENV);

    let config = config.unwrap();
    assert_eq!(config.output_format, OutputFormat::Toon);
    assert!(!config.pretty);
}

#[test]
#[serial]
fn test_from_env_defaults_without_variables() {
    env::remove_var(OUTPUT_FORMAT_ENV);
    env::remove_var(PRETTY_ENV);

    assert_eq!(CliConfig::from_env().unwrap(), CliConfig::default());
}

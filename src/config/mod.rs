// ABOUTME: Environment-based configuration for the Ruffier command-line front end
// ABOUTME: Reads output format and pretty-printing preferences with typed defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration is read from the environment only; command-line flags
//! override what is found there.

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use std::env;

use crate::formatters::OutputFormat;

/// Environment variable selecting the output format (`text`, `json`, `toon`)
pub const OUTPUT_FORMAT_ENV: &str = "RUFFIER_OUTPUT_FORMAT";

/// Environment variable enabling pretty-printed JSON (`true`/`false`/`1`/`0`)
pub const PRETTY_ENV: &str = "RUFFIER_PRETTY";

/// Output settings for the command-line front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CliConfig {
    /// Format used to print results
    pub output_format: OutputFormat,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl CliConfig {
    /// Load configuration from process environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but not valid unicode or
    /// cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(e) => Err(ConfigError::from(e)),
        })
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the lookup fails or a value cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<Option<String>, ConfigError>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(OUTPUT_FORMAT_ENV)? {
            config.output_format = raw.parse::<OutputFormat>().map_err(|_| ConfigError::Parse {
                key: OUTPUT_FORMAT_ENV,
                value: raw.clone(),
                reason: "expected one of text, json, toon".to_owned(),
            })?;
        }

        if let Some(raw) = lookup(PRETTY_ENV)? {
            config.pretty = parse_bool(PRETTY_ENV, &raw)?;
        }

        Ok(config)
    }
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::Parse {
            key,
            value: raw.to_owned(),
            reason: "expected true or false".to_owned(),
        }),
    }
}

// ABOUTME: Configuration error types for environment-driven settings
// ABOUTME: Defines error variants for unreadable variables and unparseable values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use thiserror::Error;

use crate::errors::AppError;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable access error (e.g., not valid unicode)
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse configuration value
    #[error("Invalid value '{value}' for {key}: {reason}")]
    Parse {
        /// Variable name
        key: &'static str,
        /// Raw value found
        value: String,
        /// What was expected
        reason: String,
    },
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}

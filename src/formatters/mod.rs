// ABOUTME: Output format abstraction for rendering Ruffier results
// ABOUTME: Supports plain text (default), JSON, and TOON (token-efficient for LLMs)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! Results can be printed as the human-readable report, as JSON for other
//! programs, or as TOON (Token-Oriented Object Notation) when the output is
//! handed to an LLM.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ruffier::formatters::{format_output, OutputFormat};
//! use ruffier::intelligence::ruffier_evaluator::{evaluate, RuffierOutcome};
//!
//! let outcome = RuffierOutcome::from(evaluate(20.0, 30.0, 25.0, 10));
//! if let Ok(output) = format_output(&outcome, OutputFormat::Json, false) {
//!     println!("{}", output.data);
//! }
//! ```

use serde::Serialize;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// JSON format for programmatic consumers
    Json,
    /// TOON format - Token-Oriented Object Notation for LLM efficiency
    Toon,
}

impl OutputFormat {
    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Text => "text/plain",
            Self::Json => "application/json",
            // TOON doesn't have an official MIME type yet, use vendor prefix
            Self::Toon => "application/vnd.toon",
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Toon => "toon",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "toon" => Ok(Self::Toon),
            other => Err(AppError::invalid_format(format!(
                "Unknown output format: '{other}'. Valid options: text, json, toon"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formatted output containing the serialized data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The rendered data
    pub data: String,
    /// The format used for rendering
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl Error for FormatError {}

impl From<FormatError> for AppError {
    fn from(error: FormatError) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

/// Render `data` in the requested format
///
/// `pretty` only affects JSON; text and TOON are already human-readable.
///
/// # Errors
///
/// Returns `FormatError` if:
/// - JSON serialization fails
/// - Converting to a JSON value or TOON encoding fails
/// - TOON is requested but the `toon` feature is disabled
pub fn format_output<T: Serialize + fmt::Display>(
    data: &T,
    format: OutputFormat,
    pretty: bool,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Text => data.to_string(),
        OutputFormat::Json => {
            let serialized = if pretty {
                serde_json::to_string_pretty(data)
            } else {
                serde_json::to_string(data)
            };
            serialized.map_err(|e| FormatError {
                message: e.to_string(),
                format,
            })?
        }
        OutputFormat::Toon => encode_toon(data)?,
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}

#[cfg(feature = "toon")]
fn encode_toon<T: Serialize>(data: &T) -> Result<String, FormatError> {
    let value = serde_json::to_value(data).map_err(|e| FormatError {
        message: format!("Failed to convert to JSON value: {e}"),
        format: OutputFormat::Toon,
    })?;
    let options = toon_format::EncodeOptions::default();
    toon_format::encode(&value, &options).map_err(|e| FormatError {
        message: e.to_string(),
        format: OutputFormat::Toon,
    })
}

#[cfg(not(feature = "toon"))]
fn encode_toon<T: Serialize>(_data: &T) -> Result<String, FormatError> {
    Err(FormatError {
        message: "TOON output requires the `toon` feature".to_owned(),
        format: OutputFormat::Toon,
    })
}

// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Reference-table anchors, bracket gaps, and result texts for the Ruffier test
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain: the numeric structure of the Ruffier
//! reference table lives in [`ruffier`], the externally visible result texts
//! in [`texts`].

/// Numeric structure of the Ruffier reference table
pub mod ruffier;

/// Externally visible result texts
pub mod texts;

pub use ruffier::*;
pub use texts::*;

/// Service identifiers used in structured logging
pub mod service_names {
    /// Name reported by the command-line front end
    pub const RUFFIER_CLI: &str = "ruffier-cli";
}

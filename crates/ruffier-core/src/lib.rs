// ABOUTME: Core types and constants for Ruffier index fitness screening
// ABOUTME: Foundation crate with error handling, reference-table constants, and value models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Ruffier Core
//!
//! Foundation crate providing shared types and constants for the Ruffier
//! fitness screening library. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Reference-table anchors, bracket gaps, and result texts
//! - **models**: Pulse readings, fitness levels, and age brackets
//! - **intelligence**: The Ruffier index computation and classifier

/// Unified error handling system with standard error codes
pub mod errors;

/// Reference-table constants organized by domain
pub mod constants;

/// Core value models (`PulseTriple`, `FitnessLevel`, `AgeBracket`)
pub mod models;

/// Ruffier index algorithms (index, age threshold, classifier)
pub mod intelligence;

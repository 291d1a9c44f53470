// ABOUTME: Main library entry point for the Ruffier fitness screening test
// ABOUTME: Evaluates pulse readings against age-dependent Ruffier index thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Ruffier
//!
//! The Ruffier test rates cardiovascular response to a short exertion. Three
//! 15-second pulse counts (at rest, after 30 squats, after a minute of rest)
//! are combined into the Ruffier index, which is read against an
//! age-dependent table into one of five fitness levels.
//!
//! ## Architecture
//!
//! - **Algorithms** (`intelligence::algorithms::ruffier`): the index formula,
//!   the age-derived unsatisfactory threshold, and the five-level classifier
//! - **Evaluator** (`intelligence::ruffier_evaluator`): the age floor, reports,
//!   display texts, and the reference band table
//! - **Formatters**: text, JSON, and TOON output
//! - **Config** and **Logging**: environment-driven settings for the CLI
//!
//! ## Example Usage
//!
//! ```rust
//! use ruffier::intelligence::ruffier_evaluator::evaluate;
//! use ruffier::models::FitnessLevel;
//!
//! let report = evaluate(20.0, 30.0, 25.0, 10).unwrap();
//! assert_eq!(report.level, FitnessLevel::AboveAverage);
//! assert!(evaluate(20.0, 30.0, 25.0, 5).is_err());
//! ```

/// Environment-based configuration
pub mod config;

/// Reference-table constants and result texts
pub mod constants;

/// Unified error handling
pub mod errors;

/// Output format abstraction (text, JSON, TOON)
pub mod formatters;

/// Ruffier algorithms and evaluation
pub mod intelligence;

/// Logging configuration and subscriber setup
pub mod logging;

/// Pulse readings, fitness levels, and age brackets
pub mod models;

// ABOUTME: Intelligence module for Ruffier test scoring and interpretation
// ABOUTME: Re-exports core algorithms and hosts the evaluation layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! The pure algorithms live in `ruffier-core`; this module adds the
//! caller-facing evaluation on top of them.

/// Ruffier index algorithms
pub mod algorithms;

/// Evaluation from raw readings to reports and reference bands
pub mod ruffier_evaluator;

pub use ruffier_evaluator::{
    evaluate, evaluate_texts, reference_bands, reference_table, NoDataForAge, RuffierOutcome,
    RuffierReport,
};

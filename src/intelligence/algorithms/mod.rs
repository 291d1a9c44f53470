// ABOUTME: Algorithm layer for the Ruffier fitness screening test
// ABOUTME: Index computation, age threshold derivation, and classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Algorithm Module
//!
//! ```rust
//! use ruffier::intelligence::algorithms::{age_threshold, classify, compute_index};
//! use ruffier::models::FitnessLevel;
//!
//! let index = compute_index(15.0, 15.0, 15.0);
//! assert_eq!(classify(index, age_threshold(16)), FitnessLevel::High);
//! ```

/// Ruffier index algorithms re-exported from ruffier-core
pub mod ruffier;

pub use ruffier::{age_threshold, classify, compute_index};

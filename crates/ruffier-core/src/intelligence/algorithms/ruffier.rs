// ABOUTME: Ruffier index computation, age threshold derivation, and level classification
// ABOUTME: Pure total functions mapping pulse readings and age to an ordinal fitness level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Ruffier test algorithms
//!
//! The Ruffier test measures the pulse three times over 15 seconds: at rest,
//! right after 30 squats, and after a minute of recovery. Scaled to beats per
//! minute, the sum ideally stays at or below 200.
//!
//! ```text
//! S  = 4 x (P1 + P2 + P3)
//! IR = (S - 200) / 10
//! ```
//!
//! The index is read against an age-dependent table. Within every age column
//! the boundaries between levels are separated by the same gaps (4, 5, 5.5),
//! so only the "unsatisfactory" anchor has to be derived from age.
//!
//! None of these functions fail. Ages below 7 are outside the table and must
//! be filtered by the caller before [`age_threshold`] or [`classify`] is used.

use crate::constants::ruffier::{
    AGE_BRACKET_YEARS, BASE_UNSATISFACTORY_THRESHOLD, BRACKET_GAPS, IDEAL_PULSE_SUM_BPM,
    INDEX_SCALE_DIVISOR, MAX_TABLE_AGE, MIN_TABLE_AGE, PULSE_SAMPLE_MULTIPLIER,
    THRESHOLD_STEP_PER_BRACKET,
};
use crate::models::FitnessLevel;

/// Compute the Ruffier index from three 15-second pulse counts
///
/// Formula: `(4 x (P1 + P2 + P3) - 200) / 10`
///
/// # Example
///
/// ```rust
/// use ruffier_core::intelligence::algorithms::compute_index;
///
/// let index = compute_index(20.0, 30.0, 25.0);
/// assert!((index - 10.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn compute_index(p1: f64, p2: f64, p3: f64) -> f64 {
    PULSE_SAMPLE_MULTIPLIER.mul_add(p1 + p2 + p3, -IDEAL_PULSE_SUM_BPM) / INDEX_SCALE_DIVISOR
}

/// Derive the "unsatisfactory" index threshold for an age
///
/// The threshold is 21 at ages 7-8 and drops by 1.5 for every full two years
/// above 7, flattening at 15 from age 15 on:
///
/// | age   | threshold |
/// |-------|-----------|
/// | 7-8   | 21.0      |
/// | 9-10  | 19.5      |
/// | 11-12 | 18.0      |
/// | 13-14 | 16.5      |
/// | 15+   | 15.0      |
///
/// Bracketing uses integer floor division, never float rounding. For ages
/// below 7 the arithmetic still completes but yields a threshold above 21
/// that has no meaning in the table.
#[must_use]
pub fn age_threshold(age: u32) -> f64 {
    let capped_age = i64::from(age.min(MAX_TABLE_AGE));
    // Whole two-year brackets above 7; negative only for ages the table excludes
    let step = (capped_age - i64::from(MIN_TABLE_AGE)).div_euclid(AGE_BRACKET_YEARS) as f64;
    step.mul_add(-THRESHOLD_STEP_PER_BRACKET, BASE_UNSATISFACTORY_THRESHOLD)
}

/// Classify a Ruffier index against an age's unsatisfactory threshold
///
/// Walks down from `threshold`, subtracting the fixed gaps 4, 5 and 5.5.
/// Every comparison is inclusive: an index equal to a boundary lands in the
/// worse bracket that boundary opens (`"21 and more"` in the table).
///
/// ```rust
/// use ruffier_core::intelligence::algorithms::classify;
/// use ruffier_core::models::FitnessLevel;
///
/// assert_eq!(classify(19.5, 19.5), FitnessLevel::Low);
/// assert_eq!(classify(10.0, 19.5), FitnessLevel::AboveAverage);
/// ```
#[must_use]
pub fn classify(index: f64, threshold: f64) -> FitnessLevel {
    if index >= threshold {
        return FitnessLevel::Low;
    }

    let mut boundary = threshold;
    for (gap, level) in BRACKET_GAPS.into_iter().zip([
        FitnessLevel::Satisfactory,
        FitnessLevel::Average,
        FitnessLevel::AboveAverage,
    ]) {
        boundary -= gap;
        if index >= boundary {
            return level;
        }
    }

    FitnessLevel::High
}

// ABOUTME: Numeric constants describing the Ruffier index reference table
// ABOUTME: Pulse scaling, age floor and cap, unsatisfactory anchor, and fixed bracket gaps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! The reference table (index divided by ten, by age column):
//!
//! ```text
//!            7-8          9-10         11-12        13-14        15+
//! high       6.4 and less 4.9 and less 3.4 and less 1.9 and less 0.4 and less
//! above avg  6.5 - 11.9   5 - 10.4     3.5 - 8.9    2 - 7.4      0.5 - 5.9
//! average    12 - 16.9    10.5 - 15.4  9 - 13.9     7.5 - 12.4   6 - 10.9
//! satisf.    17 - 20.9    15.5 - 19.4  14 - 17.9    12.5 - 16.4  11 - 14.9
//! low        21 and more  19.5 and more 18 and more 16.5 and more 15 and more
//! ```
//!
//! Only the bottom row moves with age. The gaps between rows are constant.

/// Each pulse reading is a 15-second count; multiplying by this yields beats per minute
pub const PULSE_SAMPLE_MULTIPLIER: f64 = 4.0;

/// Ideal total of the three per-minute pulse readings
pub const IDEAL_PULSE_SUM_BPM: f64 = 200.0;

/// Tables are given for the index divided by ten
pub const INDEX_SCALE_DIVISOR: f64 = 10.0;

/// Youngest age covered by the reference table
pub const MIN_TABLE_AGE: u32 = 7;

/// Ages above this value use the last (teenage) column
pub const MAX_TABLE_AGE: u32 = 15;

/// Width of one age column in years
pub const AGE_BRACKET_YEARS: i64 = 2;

/// Unsatisfactory threshold of the youngest column (ages 7-8)
pub const BASE_UNSATISFACTORY_THRESHOLD: f64 = 21.0;

/// Drop of the unsatisfactory threshold per age column
pub const THRESHOLD_STEP_PER_BRACKET: f64 = 1.5;

/// Gap from the unsatisfactory boundary down to the satisfactory boundary
pub const GAP_LOW_TO_SATISFACTORY: f64 = 4.0;

/// Gap from the satisfactory boundary down to the average boundary
pub const GAP_SATISFACTORY_TO_AVERAGE: f64 = 5.0;

/// Gap from the average boundary down to the above-average boundary
pub const GAP_AVERAGE_TO_ABOVE_AVERAGE: f64 = 5.5;

/// Successive gaps applied by the classifier, in order
pub const BRACKET_GAPS: [f64; 3] = [
    GAP_LOW_TO_SATISFACTORY,
    GAP_SATISFACTORY_TO_AVERAGE,
    GAP_AVERAGE_TO_ABOVE_AVERAGE,
];

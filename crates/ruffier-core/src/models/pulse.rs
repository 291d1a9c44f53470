// ABOUTME: Pulse reading triple taken before exertion, right after it, and after rest
// ABOUTME: Plain value type feeding the Ruffier index computation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::intelligence::algorithms::ruffier::compute_index;

/// Three pulse counts, each measured over 15 seconds
///
/// - `p1`: at rest, before the squats
/// - `p2`: immediately after the exertion
/// - `p3`: after a one-minute recovery
///
/// Values are not range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PulseTriple {
    /// Resting pulse (15-second count)
    pub p1: f64,
    /// Pulse right after exertion (15-second count)
    pub p2: f64,
    /// Pulse after recovery (15-second count)
    pub p3: f64,
}

impl PulseTriple {
    /// Create a pulse triple from three 15-second counts
    #[must_use]
    pub const fn new(p1: f64, p2: f64, p3: f64) -> Self {
        Self { p1, p2, p3 }
    }

    /// Sum of the three raw counts
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.p1 + self.p2 + self.p3
    }

    /// Ruffier index for these readings
    #[must_use]
    pub fn ruffier_index(&self) -> f64 {
        compute_index(self.p1, self.p2, self.p3)
    }
}

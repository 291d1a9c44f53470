// ABOUTME: Ordinal fitness level produced by the Ruffier classifier
// ABOUTME: Five ordered levels from low (0) to high (4) with fixed descriptive labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::FITNESS_LEVEL_LABELS;
use crate::errors::AppError;

/// Fitness level, ordered worst to best
///
/// The discriminant is the ordinal used by the reference table, so
/// `FitnessLevel::Low < FitnessLevel::High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessLevel {
    /// Unsatisfactory response, index at or above the age threshold
    Low = 0,
    /// Weak response
    Satisfactory = 1,
    /// Average response
    Average = 2,
    /// Good response
    AboveAverage = 3,
    /// Excellent response
    High = 4,
}

impl FitnessLevel {
    /// All levels in ordinal order (worst first)
    pub const ALL: [Self; 5] = [
        Self::Low,
        Self::Satisfactory,
        Self::Average,
        Self::AboveAverage,
        Self::High,
    ];

    /// Ordinal in `0..=4`
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Fixed descriptive label
    #[must_use]
    pub const fn label(self) -> &'static str {
        FITNESS_LEVEL_LABELS[self as usize]
    }

    /// Machine-readable name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Satisfactory => "satisfactory",
            Self::Average => "average",
            Self::AboveAverage => "above_average",
            Self::High => "high",
        }
    }
}

impl TryFrom<u8> for FitnessLevel {
    type Error = AppError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(ordinal))
            .copied()
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Fitness level ordinal must be between 0 and 4, got {ordinal}"
                ))
            })
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ABOUTME: Age columns of the Ruffier reference table
// ABOUTME: Maps ages to their two-year bracket, with 15 and older sharing the last column
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Age column of the reference table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBracket {
    /// Ages 7 and 8
    SevenToEight,
    /// Ages 9 and 10
    NineToTen,
    /// Ages 11 and 12
    ElevenToTwelve,
    /// Ages 13 and 14
    ThirteenToFourteen,
    /// Age 15 and older (teenagers only)
    FifteenPlus,
}

impl AgeBracket {
    /// All brackets, youngest first
    pub const ALL: [Self; 5] = [
        Self::SevenToEight,
        Self::NineToTen,
        Self::ElevenToTwelve,
        Self::ThirteenToFourteen,
        Self::FifteenPlus,
    ];

    /// Bracket for an age, or `None` below the table's floor of 7 years
    #[must_use]
    pub const fn from_age(age: u32) -> Option<Self> {
        match age {
            0..=6 => None,
            7 | 8 => Some(Self::SevenToEight),
            9 | 10 => Some(Self::NineToTen),
            11 | 12 => Some(Self::ElevenToTwelve),
            13 | 14 => Some(Self::ThirteenToFourteen),
            _ => Some(Self::FifteenPlus),
        }
    }

    /// Youngest age in the bracket
    #[must_use]
    pub const fn representative_age(self) -> u32 {
        match self {
            Self::SevenToEight => 7,
            Self::NineToTen => 9,
            Self::ElevenToTwelve => 11,
            Self::ThirteenToFourteen => 13,
            Self::FifteenPlus => 15,
        }
    }

    /// Column heading as printed in the table
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SevenToEight => "7-8",
            Self::NineToTen => "9-10",
            Self::ElevenToTwelve => "11-12",
            Self::ThirteenToFourteen => "13-14",
            Self::FifteenPlus => "15+",
        }
    }
}

impl fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

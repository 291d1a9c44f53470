// ABOUTME: Ruffier test orchestration from raw pulse readings and age to a fitness report
// ABOUTME: Handles the age floor, text rendering, and the per-age reference band table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Ruffier test evaluation
//!
//! Composes the pure algorithms into a caller-facing result. Ages below 7 are
//! intercepted here and never reach the threshold derivation or classifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::debug;

use crate::constants::{
    BRACKET_GAPS, INDEX_PREFIX, NO_DATA_INDEX_TEXT, NO_DATA_TEXT, PERFORMANCE_PREFIX,
};
use crate::errors::AppError;
use crate::intelligence::algorithms::ruffier::{age_threshold, classify};
use crate::models::{AgeBracket, FitnessLevel, PulseTriple};

/// The reference table has no column for this age
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("no data for age {age}: the Ruffier table starts at age 7")]
pub struct NoDataForAge {
    /// Age that was rejected, negative values included
    pub age: i64,
}

impl From<NoDataForAge> for AppError {
    fn from(error: NoDataForAge) -> Self {
        Self::value_out_of_range(error.to_string()).with_source(error)
    }
}

/// Result of a Ruffier test for a supported age
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuffierReport {
    /// Raw 15-second pulse counts
    pub pulses: PulseTriple,
    /// Age in years
    pub age: u32,
    /// Reference table column used
    pub age_bracket: AgeBracket,
    /// Computed Ruffier index
    pub index: f64,
    /// Index at or above which the result is unsatisfactory for this age
    pub unsatisfactory_threshold: f64,
    /// Classified level
    pub level: FitnessLevel,
    /// Descriptive label of `level`
    pub label: String,
}

impl RuffierReport {
    /// Index rendered for display
    #[must_use]
    pub fn index_text(&self) -> String {
        format_index(self.index)
    }

    /// `"Your Ruffier Index: <index>"`
    #[must_use]
    pub fn index_line(&self) -> String {
        format!("{INDEX_PREFIX}{}", self.index_text())
    }

    /// `"Cardiac performance: <label>"`
    #[must_use]
    pub fn result_line(&self) -> String {
        format!("{PERFORMANCE_PREFIX}{}", self.label)
    }

    /// Both report lines separated by a newline
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{}\n{}", self.index_line(), self.result_line())
    }
}

impl fmt::Display for RuffierReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

/// Either a report or the no-data branch, for uniform output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RuffierOutcome {
    /// The age is covered and the index was classified
    Evaluated(RuffierReport),
    /// The age is below the table floor
    NoData(NoDataForAge),
}

impl From<Result<RuffierReport, NoDataForAge>> for RuffierOutcome {
    fn from(result: Result<RuffierReport, NoDataForAge>) -> Self {
        match result {
            Ok(report) => Self::Evaluated(report),
            Err(no_data) => Self::NoData(no_data),
        }
    }
}

impl fmt::Display for RuffierOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Evaluated(report) => write!(f, "{report}"),
            Self::NoData(_) => write!(f, "{INDEX_PREFIX}{NO_DATA_INDEX_TEXT}\n{NO_DATA_TEXT}"),
        }
    }
}

/// Whole years and table column for `age`, `None` below 7
///
/// Ages past `u32::MAX` saturate; they all land in the 15+ column anyway.
fn table_column(age: i64) -> Option<(u32, AgeBracket)> {
    if age < 0 {
        return None;
    }
    let years = u32::try_from(age).unwrap_or(u32::MAX);
    AgeBracket::from_age(years).map(|bracket| (years, bracket))
}

/// Evaluate a Ruffier test
///
/// # Errors
///
/// Returns [`NoDataForAge`] when `age` is below 7, negative ages included.
/// Classification is not attempted in that case.
pub fn evaluate(p1: f64, p2: f64, p3: f64, age: i64) -> Result<RuffierReport, NoDataForAge> {
    let Some((age, age_bracket)) = table_column(age) else {
        debug!(age, "Age below Ruffier table floor, skipping classification");
        return Err(NoDataForAge { age });
    };

    let pulses = PulseTriple::new(p1, p2, p3);
    let index = pulses.ruffier_index();
    let unsatisfactory_threshold = age_threshold(age);
    let level = classify(index, unsatisfactory_threshold);

    debug!(
        age,
        index,
        threshold = unsatisfactory_threshold,
        level = level.name(),
        "Ruffier test evaluated"
    );

    Ok(RuffierReport {
        pulses,
        age,
        age_bracket,
        index,
        unsatisfactory_threshold,
        level,
        label: level.label().to_owned(),
    })
}

/// Evaluate a Ruffier test into its two display lines
///
/// Returns `(index line, result line)`. Below age 7 the index line reads
/// `"Your Ruffier Index: 0"` and the result line is the no-data text.
#[must_use]
pub fn evaluate_texts(p1: f64, p2: f64, p3: f64, age: i64) -> (String, String) {
    match evaluate(p1, p2, p3, age) {
        Ok(report) => (report.index_line(), report.result_line()),
        Err(_) => (
            format!("{INDEX_PREFIX}{NO_DATA_INDEX_TEXT}"),
            NO_DATA_TEXT.to_owned(),
        ),
    }
}

/// Render an index with at least one fractional digit (`10` becomes `"10.0"`)
#[must_use]
pub fn format_index(index: f64) -> String {
    #[allow(clippy::float_cmp)]
    let whole = index.is_finite() && index.fract() == 0.0;
    if whole {
        format!("{index:.1}")
    } else {
        index.to_string()
    }
}

/// Index range of one fitness level; lower bound inclusive, upper exclusive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexBand {
    /// Level assigned to indices in this band
    pub level: FitnessLevel,
    /// Inclusive lower bound, `None` for unbounded
    pub lower: Option<f64>,
    /// Exclusive upper bound, `None` for unbounded
    pub upper: Option<f64>,
}

impl IndexBand {
    /// Whether `index` falls in this band
    ///
    /// Uses the same `>=` comparisons as [`classify`], so NaN lands in the
    /// `High` band exactly as the classifier places it.
    #[must_use]
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn contains(&self, index: f64) -> bool {
        let above_lower = match self.lower {
            Some(lower) => index >= lower,
            None => true,
        };
        let below_upper = match self.upper {
            Some(upper) => !(index >= upper),
            None => true,
        };
        above_lower && below_upper
    }
}

impl fmt::Display for IndexBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.lower, self.upper) {
            (Some(lower), Some(upper)) => write!(
                f,
                "{} to below {}",
                format_index(lower),
                format_index(upper)
            ),
            (Some(lower), None) => write!(f, "{} and more", format_index(lower)),
            (None, Some(upper)) => write!(f, "below {}", format_index(upper)),
            (None, None) => f.write_str("any"),
        }
    }
}

/// The five index bands of one age column, worst level first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuffierBands {
    /// Table column
    pub age_bracket: AgeBracket,
    /// Lower bound of the unsatisfactory band
    pub unsatisfactory_threshold: f64,
    /// Bands ordered `Low` to `High`
    pub bands: Vec<IndexBand>,
}

impl RuffierBands {
    /// Build the bands for a threshold, using the classifier's boundary walk
    #[must_use]
    pub fn from_threshold(age_bracket: AgeBracket, unsatisfactory_threshold: f64) -> Self {
        let mut boundaries = Vec::with_capacity(BRACKET_GAPS.len() + 1);
        let mut boundary = unsatisfactory_threshold;
        boundaries.push(boundary);
        for gap in BRACKET_GAPS {
            boundary -= gap;
            boundaries.push(boundary);
        }

        // Level n spans [boundaries[n], boundaries[n - 1]); High is open below
        let bands = FitnessLevel::ALL
            .iter()
            .enumerate()
            .map(|(position, &level)| IndexBand {
                level,
                lower: boundaries.get(position).copied(),
                upper: position
                    .checked_sub(1)
                    .and_then(|previous| boundaries.get(previous).copied()),
            })
            .collect();

        Self {
            age_bracket,
            unsatisfactory_threshold,
            bands,
        }
    }

    /// Band containing `index`
    #[must_use]
    pub fn band_for(&self, index: f64) -> Option<&IndexBand> {
        self.bands.iter().find(|band| band.contains(index))
    }
}

impl fmt::Display for RuffierBands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} (unsatisfactory from {})",
            self.age_bracket,
            format_index(self.unsatisfactory_threshold)
        )?;
        for band in &self.bands {
            writeln!(f, "  {:<14} {band}", band.level.name())?;
        }
        Ok(())
    }
}

/// Reference bands for every column of the table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceTable(pub Vec<RuffierBands>);

impl fmt::Display for ReferenceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, column) in self.0.iter().enumerate() {
            if position > 0 {
                writeln!(f)?;
            }
            write!(f, "{column}")?;
        }
        Ok(())
    }
}

/// Reference bands for the column covering `age`
///
/// # Errors
///
/// Returns [`NoDataForAge`] when `age` is below 7, negative ages included.
pub fn reference_bands(age: i64) -> Result<RuffierBands, NoDataForAge> {
    let (years, age_bracket) = table_column(age).ok_or(NoDataForAge { age })?;
    Ok(RuffierBands::from_threshold(age_bracket, age_threshold(years)))
}

/// Reference bands for all five columns, youngest first
#[must_use]
pub fn reference_table() -> ReferenceTable {
    ReferenceTable(
        AgeBracket::ALL
            .iter()
            .map(|&bracket| {
                RuffierBands::from_threshold(bracket, age_threshold(bracket.representative_age()))
            })
            .collect(),
    )
}

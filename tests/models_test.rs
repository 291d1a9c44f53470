// ABOUTME: Tests for Ruffier value models (fitness levels, age brackets)
// ABOUTME: Verifies ordinal ordering, label lookup, parsing, and bracket boundaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use ruffier::constants::FITNESS_LEVEL_LABELS;
use ruffier::errors::ErrorCode;
use ruffier::models::{AgeBracket, FitnessLevel};

#[test]
fn test_fitness_level_ordinals_run_worst_to_best() {
    let ordinals: Vec<u8> = FitnessLevel::ALL.iter().map(|l| l.ordinal()).collect();
    assert_eq!(ordinals, vec![0, 1, 2, 3, 4]);
    assert!(FitnessLevel::Low < FitnessLevel::Satisfactory);
    assert!(FitnessLevel::AboveAverage < FitnessLevel::High);
}

#[test]
fn test_fitness_level_labels_follow_ordinal() {
    for level in FitnessLevel::ALL {
        assert_eq!(level.label(), FITNESS_LEVEL_LABELS[usize::from(level.ordinal())]);
        assert_eq!(level.to_string(), level.label());
    }
    assert_eq!(FitnessLevel::High.label(), "high");
    assert!(FitnessLevel::Low.label().starts_with("low"));
}

#[test]
fn test_fitness_level_try_from_ordinal() {
    for level in FitnessLevel::ALL {
        assert_eq!(FitnessLevel::try_from(level.ordinal()).unwrap(), level);
    }

    let error = FitnessLevel::try_from(5).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_fitness_level_serde_names() {
    let json = serde_json::to_string(&FitnessLevel::AboveAverage).unwrap();
    assert_eq!(json, "\"above_average\"");
    let parsed: FitnessLevel = serde_json::from_str("\"satisfactory\"").unwrap();
    assert_eq!(parsed, FitnessLevel::Satisfactory);
}

#[test]
fn test_age_bracket_boundaries() {
    assert_eq!(AgeBracket::from_age(6), None);
    assert_eq!(AgeBracket::from_age(7), Some(AgeBracket::SevenToEight));
    assert_eq!(AgeBracket::from_age(8), Some(AgeBracket::SevenToEight));
    assert_eq!(AgeBracket::from_age(9), Some(AgeBracket::NineToTen));
    assert_eq!(AgeBracket::from_age(12), Some(AgeBracket::ElevenToTwelve));
    assert_eq!(AgeBracket::from_age(14), Some(AgeBracket::ThirteenToFourteen));
    assert_eq!(AgeBracket::from_age(15), Some(AgeBracket::FifteenPlus));
    assert_eq!(AgeBracket::from_age(70), Some(AgeBracket::FifteenPlus));
}

#[test]
fn test_age_bracket_representative_age_round_trips() {
    for bracket in AgeBracket::ALL {
        assert_eq!(AgeBracket::from_age(bracket.representative_age()), Some(bracket));
    }
    let labels: Vec<&str> = AgeBracket::ALL.iter().map(|b| b.label()).collect();
    assert_eq!(labels, vec!["7-8", "9-10", "11-12", "13-14", "15+"]);
}

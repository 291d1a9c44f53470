// ABOUTME: Ruffier index algorithms re-exported from ruffier-core
// ABOUTME: Index computation, age threshold derivation, and five-level classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use ruffier_core::intelligence::algorithms::ruffier::*;

// ABOUTME: Reference-table constants re-exported from ruffier-core
// ABOUTME: Anchors, bracket gaps, and the fixed result texts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use ruffier_core::constants::*;

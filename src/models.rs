// ABOUTME: Value models re-exported from ruffier-core
// ABOUTME: Pulse readings, ordinal fitness levels, and age brackets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use ruffier_core::models::*;

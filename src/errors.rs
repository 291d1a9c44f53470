// ABOUTME: Unified error handling re-exported from ruffier-core
// ABOUTME: AppError, ErrorCode, and AppResult shared by the library and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use ruffier_core::errors::*;

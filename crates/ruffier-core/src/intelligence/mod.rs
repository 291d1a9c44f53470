// ABOUTME: Intelligence module re-exports for the Ruffier algorithms
// ABOUTME: Contains index computation, age threshold derivation, and classification

/// Ruffier index algorithms
pub mod algorithms;

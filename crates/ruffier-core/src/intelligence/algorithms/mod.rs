// ABOUTME: Algorithm modules for the Ruffier fitness screening
// ABOUTME: Exposes the pure index, threshold, and classification functions

/// Ruffier index computation and classification
pub mod ruffier;

pub use ruffier::{age_threshold, classify, compute_index};

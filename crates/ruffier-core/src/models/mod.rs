// ABOUTME: Core value models for Ruffier fitness screening
// ABOUTME: Re-exports pulse readings, fitness levels, and age brackets

/// Three 15-second pulse counts
mod pulse;
pub use pulse::PulseTriple;

/// Ordinal fitness classification
mod fitness_level;
pub use fitness_level::FitnessLevel;

/// Age columns of the reference table
mod age_bracket;
pub use age_bracket::AgeBracket;

// ABOUTME: Externally visible result texts for Ruffier test reports
// ABOUTME: Ordered fitness level labels plus prefixes and the no-data sentinel

/// Prefix of the index line in a text report
pub const INDEX_PREFIX: &str = "Your Ruffier Index: ";

/// Prefix of the result line in a text report
pub const PERFORMANCE_PREFIX: &str = "Cardiac performance: ";

/// Result text for ages the reference table does not cover
pub const NO_DATA_TEXT: &str = "no data for this age";

/// Index text reported alongside [`NO_DATA_TEXT`]
pub const NO_DATA_INDEX_TEXT: &str = "0";

/// Fitness level descriptions ordered worst (index 0) to best (index 4)
pub const FITNESS_LEVEL_LABELS: [&str; 5] = [
    "low. Urgently consult the doctor!",
    "satisfactory. Consult the doctor!",
    "average. It may be worth an additional consultation of the doctor.",
    "above average",
    "high",
];

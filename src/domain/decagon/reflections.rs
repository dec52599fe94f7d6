//! The three optional reflective dimensions.

use serde::Serialize;

use crate::domain::schema::NumericRange;

/// A pattern inherited through the family line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AncestralGhost {
    pub lineage_pattern: String,

    /// Generations back the pattern is traced.
    pub generation_depth: u32,

    pub archetypal_burden: String,
}

/// The dream's echo in dreams of a similar cohort.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectiveRipple {
    pub zeitgeist_theme: String,
    pub cohort_similarity_score: f64,
    pub archetypal_current: String,
}

impl CollectiveRipple {
    pub const SIMILARITY_RANGE: NumericRange = NumericRange::closed(0.0, 1.0);
}

/// A mirrored retelling of the dream with its shadow inverted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DigitalDoppelganger {
    pub mirror_narrative: String,
    pub shadow_inversion: String,
}

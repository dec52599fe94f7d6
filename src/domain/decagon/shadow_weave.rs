use serde::Serialize;

use crate::domain::schema::NumericRange;
use crate::domain::vocabulary::{ArchetypeId, IntegrationStatus};

/// One archetype woven into the dream's shadow material.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShadowWeaveNode {
    pub archetype_id: ArchetypeId,

    /// How strongly the archetype is constellated, 0.0 to 1.0.
    pub activation_strength: f64,

    pub integration_status: IntegrationStatus,
    pub symbolic_fragments: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mythological_resonance: Option<String>,
}

impl ShadowWeaveNode {
    pub const ACTIVATION_RANGE: NumericRange = NumericRange::closed(0.0, 1.0);

    /// Activation at or above which a node dominates the weave.
    pub const DOMINANT_ACTIVATION: f64 = 0.75;

    pub fn is_dominant(&self) -> bool {
        self.activation_strength >= Self::DOMINANT_ACTIVATION
    }
}

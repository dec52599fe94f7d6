//! Archetype module - Jungian figures detected in a dream.

use serde::Serialize;

use crate::domain::schema::NumericRange;
use crate::domain::vocabulary::{ArchetypeId, IntegrationStatus};

/// One archetype present in a dream and how it is being lived out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchetypalNode {
    pub archetype_id: ArchetypeId,

    /// Emotional charge, from -1.0 (threatening) to 1.0 (nourishing).
    pub valence: f64,

    pub integration_status: IntegrationStatus,

    /// Images through which the archetype appeared, in narrative order.
    pub symbolic_manifestations: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_embedding_ref: Option<String>,
}

impl ArchetypalNode {
    pub const VALENCE_RANGE: NumericRange = NumericRange::closed(-1.0, 1.0);

    /// Valence mapped onto a 0-100 gauge, with 50 as neutral.
    pub fn valence_gauge(&self) -> f64 {
        (self.valence.clamp(-1.0, 1.0) + 1.0) / 2.0 * 100.0
    }

    /// Returns true when the dreamer has yet to engage the figure.
    pub fn is_unconscious(&self) -> bool {
        self.integration_status == IntegrationStatus::Unconscious
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(valence: f64) -> ArchetypalNode {
        ArchetypalNode {
            archetype_id: ArchetypeId::Shadow,
            valence,
            integration_status: IntegrationStatus::Confrontation,
            symbolic_manifestations: vec!["dark figure".to_string()],
            vector_embedding_ref: None,
        }
    }

    #[test]
    fn gauge_maps_valence_linearly() {
        assert_eq!(node(-1.0).valence_gauge(), 0.0);
        assert_eq!(node(0.0).valence_gauge(), 50.0);
        assert_eq!(node(1.0).valence_gauge(), 100.0);
        assert!((node(-0.4).valence_gauge() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn serializes_tokens_and_skips_missing_embedding() {
        let value = serde_json::to_value(node(-0.4)).unwrap();
        assert_eq!(value["archetype_id"], "SHADOW");
        assert_eq!(value["integration_status"], "confrontation");
        assert!(value.get("vector_embedding_ref").is_none());
    }

    #[test]
    fn valence_range_is_closed_unit_interval() {
        assert!(ArchetypalNode::VALENCE_RANGE.contains(-1.0));
        assert!(!ArchetypalNode::VALENCE_RANGE.contains(1.01));
    }
}

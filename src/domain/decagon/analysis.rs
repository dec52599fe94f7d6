use serde::Serialize;
use serde_json::{Map, Value};

use super::{
    AncestralGhost, ArabicLot, CollectiveRipple, DashaPeriod, DigitalDoppelganger, FirdariaPhase,
    NakshatraSnapshot, ShadowWeaveNode, SomaticResonance,
};
use crate::domain::foundation::Timestamp;

/// Full ten-dimension analysis of one dream.
///
/// `celestial_transit` entries are producer-defined objects and pass
/// through unchecked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecagonAnalysisObject {
    /// `DEC-` followed by a content checksum.
    pub analysis_id: String,
    pub timestamp: Timestamp,
    pub shadow_weave: Vec<ShadowWeaveNode>,
    pub celestial_transit: Vec<Map<String, Value>>,
    pub nakshatra_snapshot: NakshatraSnapshot,
    pub arabic_lot: Vec<ArabicLot>,
    pub dasha_period: DashaPeriod,
    pub somatic_resonance: SomaticResonance,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ancestral_ghost: Option<AncestralGhost>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub collective_ripple: Option<CollectiveRipple>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub digital_doppelganger: Option<DigitalDoppelganger>,

    pub firdaria_phase: FirdariaPhase,
}

impl DecagonAnalysisObject {
    pub const ID_PREFIX: &'static str = "DEC-";

    /// The checksum part of the id, if the id carries the usual prefix.
    pub fn checksum(&self) -> Option<&str> {
        self.analysis_id.strip_prefix(Self::ID_PREFIX)
    }

    /// The most strongly activated shadow node.
    pub fn dominant_shadow(&self) -> Option<&ShadowWeaveNode> {
        self.shadow_weave
            .iter()
            .max_by(|a, b| a.activation_strength.total_cmp(&b.activation_strength))
    }

    /// How many of the three optional reflections are present.
    pub fn reflection_count(&self) -> usize {
        usize::from(self.ancestral_ghost.is_some())
            + usize::from(self.collective_ripple.is_some())
            + usize::from(self.digital_doppelganger.is_some())
    }
}

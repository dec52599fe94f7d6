use serde::Serialize;
use serde_json::Value;

use crate::domain::archetype::ArchetypalNode;
use crate::domain::celestial::CelestialTransitMap;

/// Success body of `POST /ingest/dream`.
///
/// Every section is optional. A missing section means the analysis has not
/// produced it yet, not that it failed.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct IngestDreamResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub archetype: Option<ArchetypalNode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transits: Option<CelestialTransitMap>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cohort: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagement_trigger: Option<Value>,
}

impl IngestDreamResponse {
    /// Names of the sections the analysis has not produced yet.
    pub fn pending_sections(&self) -> Vec<&'static str> {
        let mut pending = Vec::new();
        if self.archetype.is_none() {
            pending.push("archetype");
        }
        if self.transits.is_none() {
            pending.push("transits");
        }
        if self.narrative.is_none() {
            pending.push("narrative");
        }
        if self.cohort.is_none() {
            pending.push("cohort");
        }
        if self.engagement_trigger.is_none() {
            pending.push("engagement_trigger");
        }
        pending
    }

    /// True once every analysis section is present.
    pub fn is_complete(&self) -> bool {
        self.pending_sections().is_empty()
    }
}

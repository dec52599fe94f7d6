use uuid::Uuid;

use super::{
    ArchetypeExtractedData, CloudEvent, DreamLoggedData, EventPayload, EventType,
    NarrativeSynthesizedData, ResonanceCohortFoundData, SecurityViolationData,
    TransitsCalculatedData,
};
use crate::domain::archetype::ArchetypalNode;
use crate::domain::foundation::{DreamId, Timestamp, TransitId, UserId};

/// Source prefix used when none is configured.
pub const DEFAULT_SOURCE_SERVICE: &str = "//aetheria.api";

/// Builds pipeline events with a fresh id, the current time, and a source
/// naming the stage that produced them.
#[derive(Debug, Clone)]
pub struct CloudEventFactory {
    source_service: String,
}

impl Default for CloudEventFactory {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_SERVICE)
    }
}

impl CloudEventFactory {
    pub fn new(source_service: impl Into<String>) -> Self {
        Self {
            source_service: source_service.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn source_service(&self) -> &str {
        &self.source_service
    }

    fn build(&self, event_type: EventType, data: EventPayload) -> CloudEvent {
        CloudEvent {
            id: Uuid::new_v4().to_string(),
            source: format!("{}/{}", self.source_service, event_type.source_path()),
            event_type: event_type.as_str().to_string(),
            time: Timestamp::now(),
            subject: None,
            dataschema: None,
            data,
        }
    }

    pub fn dream_logged(&self, dream_id: DreamId, user_id: UserId, status: impl Into<String>) -> CloudEvent {
        self.build(
            EventType::DreamLogged,
            EventPayload::DreamLogged(DreamLoggedData {
                dream_id,
                user_id,
                status: status.into(),
            }),
        )
    }

    pub fn archetype_extracted(
        &self,
        dream_id: DreamId,
        user_id: UserId,
        archetypes: Vec<ArchetypalNode>,
    ) -> CloudEvent {
        self.build(
            EventType::ArchetypeExtracted,
            EventPayload::ArchetypeExtracted(ArchetypeExtractedData {
                dream_id,
                user_id,
                archetypes,
            }),
        )
    }

    pub fn transits_calculated(&self, dream_id: DreamId, user_id: UserId, transit_id: TransitId) -> CloudEvent {
        self.build(
            EventType::TransitsCalculated,
            EventPayload::TransitsCalculated(TransitsCalculatedData {
                dream_id,
                user_id,
                transit_id,
            }),
        )
    }

    pub fn narrative_synthesized(&self, dream_id: DreamId, user_id: UserId) -> CloudEvent {
        self.build(
            EventType::NarrativeSynthesized,
            EventPayload::NarrativeSynthesized(NarrativeSynthesizedData { dream_id, user_id }),
        )
    }

    /// The action is always `session_restricted`.
    pub fn security_violation(
        &self,
        user_id: UserId,
        safety_level: impl Into<String>,
        violations: Vec<String>,
    ) -> CloudEvent {
        self.build(
            EventType::SecurityViolation,
            EventPayload::SecurityViolation(SecurityViolationData {
                user_id,
                safety_level: safety_level.into(),
                violations,
                action: "session_restricted".to_string(),
            }),
        )
    }

    pub fn resonance_cohort_found(&self, dream_id: DreamId, user_id: UserId, cohort_size: u64) -> CloudEvent {
        self.build(
            EventType::ResonanceCohortFound,
            EventPayload::ResonanceCohortFound(ResonanceCohortFoundData {
                dream_id,
                user_id,
                cohort_size,
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_names_the_pipeline_stage() {
        let factory = CloudEventFactory::default();
        let event = factory.transits_calculated(DreamId::new(), UserId::anonymous(), TransitId::new());
        assert_eq!(event.source, "//aetheria.api/celestial-engine");
        assert_eq!(event.known_type(), Some(EventType::TransitsCalculated));
    }

    #[test]
    fn trailing_slash_in_service_is_dropped() {
        let factory = CloudEventFactory::new("//dreams.test/");
        let event = factory.narrative_synthesized(DreamId::new(), UserId::anonymous());
        assert_eq!(event.source, "//dreams.test/narrative-weaver");
    }

    #[test]
    fn every_event_gets_a_distinct_id() {
        let factory = CloudEventFactory::default();
        let a = factory.dream_logged(DreamId::new(), UserId::anonymous(), "processing");
        let b = factory.dream_logged(DreamId::new(), UserId::anonymous(), "processing");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn security_violation_restricts_the_session() {
        let factory = CloudEventFactory::default();
        let event = factory.security_violation(
            UserId::anonymous(),
            "tier2_warning",
            vec!["TIER2: Crisis indicator detected".to_string()],
        );
        match event.data {
            EventPayload::SecurityViolation(data) => assert_eq!(data.action, "session_restricted"),
            other => panic!("unexpected payload: {:?}", other),
        }
    }
}

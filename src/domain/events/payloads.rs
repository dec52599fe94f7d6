use serde::Serialize;
use serde_json::{Map, Value};

use super::EventType;
use crate::domain::archetype::ArchetypalNode;
use crate::domain::foundation::{DreamId, TransitId, UserId};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DreamLoggedData {
    pub dream_id: DreamId,
    pub user_id: UserId,
    /// Pipeline status, `processing` when ingestion begins.
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchetypeExtractedData {
    pub dream_id: DreamId,
    pub user_id: UserId,
    pub archetypes: Vec<ArchetypalNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitsCalculatedData {
    pub dream_id: DreamId,
    pub user_id: UserId,
    pub transit_id: TransitId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NarrativeSynthesizedData {
    pub dream_id: DreamId,
    pub user_id: UserId,
}

/// Raised when screening stopped a dream from reaching analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecurityViolationData {
    pub user_id: UserId,
    pub safety_level: String,
    pub violations: Vec<String>,
    /// What the platform did about it, e.g. `session_restricted`.
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResonanceCohortFoundData {
    pub dream_id: DreamId,
    pub user_id: UserId,
    pub cohort_size: u64,
}

/// The `data` attribute of a CloudEvent, dispatched on its `type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EventPayload {
    DreamLogged(DreamLoggedData),
    ArchetypeExtracted(ArchetypeExtractedData),
    TransitsCalculated(TransitsCalculatedData),
    NarrativeSynthesized(NarrativeSynthesizedData),
    SecurityViolation(SecurityViolationData),
    ResonanceCohortFound(ResonanceCohortFoundData),
    /// Payload of a type this crate does not know, carried as-is.
    Opaque(Map<String, Value>),
}

impl EventPayload {
    /// The known event type this payload belongs to, if any.
    pub fn event_type(&self) -> Option<EventType> {
        match self {
            EventPayload::DreamLogged(_) => Some(EventType::DreamLogged),
            EventPayload::ArchetypeExtracted(_) => Some(EventType::ArchetypeExtracted),
            EventPayload::TransitsCalculated(_) => Some(EventType::TransitsCalculated),
            EventPayload::NarrativeSynthesized(_) => Some(EventType::NarrativeSynthesized),
            EventPayload::SecurityViolation(_) => Some(EventType::SecurityViolation),
            EventPayload::ResonanceCohortFound(_) => Some(EventType::ResonanceCohortFound),
            EventPayload::Opaque(_) => None,
        }
    }

    /// The user the event concerns, when the payload names one.
    pub fn user_id(&self) -> Option<UserId> {
        match self {
            EventPayload::DreamLogged(d) => Some(d.user_id),
            EventPayload::ArchetypeExtracted(d) => Some(d.user_id),
            EventPayload::TransitsCalculated(d) => Some(d.user_id),
            EventPayload::NarrativeSynthesized(d) => Some(d.user_id),
            EventPayload::SecurityViolation(d) => Some(d.user_id),
            EventPayload::ResonanceCohortFound(d) => Some(d.user_id),
            EventPayload::Opaque(_) => None,
        }
    }
}

use serde::Serialize;

use super::BiometricContext;
use crate::domain::foundation::{DreamId, Timestamp, UserId};
use crate::domain::vocabulary::InputModality;

/// A dream as posted to the ingestion endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DreamIngestionObject {
    pub dream_id: DreamId,
    pub user_id: UserId,

    /// When the entry was submitted.
    pub timestamp_ingested: Timestamp,

    /// When the dream was experienced, if the dreamer said so.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_experience: Option<Timestamp>,

    pub input_modality: InputModality,

    /// Free-text narrative. Never blank once validated.
    pub content_raw: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub biometric_context: Option<BiometricContext>,
}

impl DreamIngestionObject {
    /// Captures a new entry with a fresh id, stamped now.
    ///
    /// The content is stored as given; blank text is caught by validation.
    pub fn capture(user_id: UserId, input_modality: InputModality, content_raw: impl Into<String>) -> Self {
        Self {
            dream_id: DreamId::new(),
            user_id,
            timestamp_ingested: Timestamp::now(),
            timestamp_experience: None,
            input_modality,
            content_raw: content_raw.into(),
            biometric_context: None,
        }
    }

    pub fn with_experience_time(mut self, experienced_at: Timestamp) -> Self {
        self.timestamp_experience = Some(experienced_at);
        self
    }

    pub fn with_biometric_context(mut self, context: BiometricContext) -> Self {
        self.biometric_context = Some(context);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn capture_assigns_fresh_identity() {
        let a = DreamIngestionObject::capture(UserId::anonymous(), InputModality::Text, "a");
        let b = DreamIngestionObject::capture(UserId::anonymous(), InputModality::Text, "a");
        assert_ne!(a.dream_id, b.dream_id);
        assert!(a.timestamp_experience.is_none());
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let dream = DreamIngestionObject::capture(
            UserId::anonymous(),
            InputModality::VoiceTranscript,
            "I was flying over the ocean",
        );
        let value = serde_json::to_value(&dream).unwrap();

        assert_eq!(value["user_id"], json!("00000000-0000-4000-8000-000000000001"));
        assert_eq!(value["input_modality"], json!("voice_transcript"));
        assert_eq!(value["content_raw"], json!("I was flying over the ocean"));
        assert!(value.get("timestamp_experience").is_none());
        assert!(value.get("biometric_context").is_none());
    }
}

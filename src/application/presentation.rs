//! PresentationState - What the journal shows for a submission.

use crate::domain::ingestion::IngestDreamResponse;

use super::handlers::{SubmissionError, SubmissionReceipt};

/// The journal form's state.
///
/// Every submission outcome lands in exactly one of these; errors become
/// `Failed` with a readable reason and are never dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PresentationState {
    #[default]
    Idle,
    Submitting,
    Analysis(IngestDreamResponse),
    Failed { reason: String },
}

impl PresentationState {
    /// Folds a finished submission into a state.
    pub fn from_result(result: Result<SubmissionReceipt, SubmissionError>) -> Self {
        match result {
            Ok(receipt) => PresentationState::Analysis(receipt.response),
            Err(err) => PresentationState::Failed {
                reason: failure_reason(&err),
            },
        }
    }

    /// True while the form should be disabled.
    pub fn is_busy(&self) -> bool {
        matches!(self, PresentationState::Submitting)
    }

    /// Renders the state as plain text.
    pub fn render(&self) -> String {
        match self {
            PresentationState::Idle => "Describe your dream, then submit.".to_string(),
            PresentationState::Submitting => "Consulting the unconscious...".to_string(),
            PresentationState::Failed { reason } => format!("Submission failed.\n{}", reason),
            PresentationState::Analysis(response) => render_analysis(response),
        }
    }
}

fn failure_reason(err: &SubmissionError) -> String {
    match err {
        SubmissionError::InvalidDream(e) => e.to_client_message(),
        SubmissionError::InvalidResponse(e) => {
            format!("The analysis service sent an unexpected answer:\n{}", e.to_client_message())
        }
        SubmissionError::Upstream { status, body } => {
            format!("The analysis service returned {}:\n{}", status, body)
        }
        SubmissionError::Network(detail) => {
            format!("Could not reach the analysis service ({}). Try again.", detail)
        }
        SubmissionError::AlreadyInFlight => {
            "A dream is already being analysed. Wait for it to finish.".to_string()
        }
    }
}

fn render_analysis(response: &IngestDreamResponse) -> String {
    let mut lines = Vec::new();

    if let Some(status) = &response.status {
        lines.push(format!("Status: {}", status));
    }
    if let Some(node) = &response.archetype {
        lines.push(format!(
            "Archetype: {} ({}), valence {:+.2} [{:.0}%]",
            node.archetype_id,
            node.integration_status,
            node.valence,
            node.valence_gauge()
        ));
    }
    if let Some(transits) = &response.transits {
        lines.push(format!("Lunar phase: {:.2}", transits.lunar_phase));
        for aspect in &transits.active_aspects {
            lines.push(format!(
                "  {} {} {} (orb {:.1}°): {}",
                aspect.transit_planet,
                aspect.aspect_type,
                aspect.natal_planet,
                aspect.orb_degrees,
                aspect.psychological_pressure
            ));
        }
    }
    if let Some(narrative) = &response.narrative {
        lines.push(String::new());
        lines.push(narrative.clone());
    }

    let pending = response.pending_sections();
    if !pending.is_empty() {
        lines.push(format!("Still pending: {}", pending.join(", ")));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::archetype::ArchetypalNode;
    use crate::domain::schema::{RecordType, ValidationError, Violation};
    use crate::domain::vocabulary::{ArchetypeId, IntegrationStatus};

    #[test]
    fn default_is_idle() {
        assert_eq!(PresentationState::default(), PresentationState::Idle);
        assert!(!PresentationState::default().is_busy());
        assert!(PresentationState::Submitting.is_busy());
    }

    #[test]
    fn upstream_failure_shows_body_verbatim() {
        let state = PresentationState::from_result(Err(SubmissionError::Upstream {
            status: 500,
            body: "{\n  \"detail\": \"boom\"\n}".to_string(),
        }));
        match state {
            PresentationState::Failed { reason } => {
                assert!(reason.contains("500"));
                assert!(reason.ends_with("{\n  \"detail\": \"boom\"\n}"));
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn invalid_response_names_field() {
        let err = ValidationError::single(
            RecordType::IngestDreamResponse,
            Violation::MissingRequired {
                field: "archetype.valence".to_string(),
            },
        );
        let state = PresentationState::from_result(Err(SubmissionError::InvalidResponse(err)));
        assert!(state.render().contains("archetype.valence: expected required"));
    }

    #[test]
    fn analysis_renders_present_sections_and_pending_ones() {
        let response = IngestDreamResponse {
            archetype: Some(ArchetypalNode {
                archetype_id: ArchetypeId::Shadow,
                valence: -1.0,
                integration_status: IntegrationStatus::Confrontation,
                symbolic_manifestations: vec!["cellar".to_string()],
                vector_embedding_ref: None,
            }),
            narrative: Some("The cellar again.".to_string()),
            ..Default::default()
        };
        let text = PresentationState::Analysis(response).render();
        assert!(text.contains("Archetype: SHADOW (confrontation), valence -1.00 [0%]"));
        assert!(text.contains("The cellar again."));
        assert!(text.contains("Still pending: transits, cohort, engagement_trigger"));
    }
}

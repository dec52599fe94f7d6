//! SubmitDreamHandler - Command handler for posting a journal entry.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::dream::{BiometricContext, DreamIngestionObject};
use crate::domain::events::CloudEventFactory;
use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::ingestion::IngestDreamResponse;
use crate::domain::schema::{Deprecation, RecordType, ValidationError, Violation};
use crate::domain::vocabulary::InputModality;
use crate::ports::{
    validate_record_with_report, CloudEventSink, IngestionClient, IngestionError, RecordValidator,
};

/// Command to submit one dream.
#[derive(Debug, Clone)]
pub struct SubmitDreamCommand {
    pub user_id: UserId,
    pub modality: InputModality,
    pub content: String,
    pub experienced_at: Option<Timestamp>,
    pub biometric_context: Option<BiometricContext>,
}

impl SubmitDreamCommand {
    /// A typed text entry with no biometric data.
    pub fn text(user_id: UserId, content: impl Into<String>) -> Self {
        Self {
            user_id,
            modality: InputModality::Text,
            content: content.into(),
            experienced_at: None,
            biometric_context: None,
        }
    }

    pub fn with_experience_time(mut self, experienced_at: Timestamp) -> Self {
        self.experienced_at = Some(experienced_at);
        self
    }

    pub fn with_biometric_context(mut self, context: BiometricContext) -> Self {
        self.biometric_context = Some(context);
        self
    }
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmissionReceipt {
    /// The dream exactly as it was sent.
    pub dream: DreamIngestionObject,
    /// The validated analysis response.
    pub response: IngestDreamResponse,
    /// Legacy tokens rewritten in the response.
    pub deprecations: Vec<Deprecation>,
}

/// Errors from submitting a dream.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmissionError {
    /// The entry itself is not submittable. Nothing was sent.
    #[error("dream rejected before submission: {0}")]
    InvalidDream(ValidationError),

    /// The service could not be reached.
    #[error("network failure: {0}")]
    Network(String),

    /// The service answered with a non-2xx status.
    #[error("analysis service returned {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The service answered 2xx with a body that is not a valid response.
    #[error("analysis response is invalid: {0}")]
    InvalidResponse(ValidationError),

    #[error("a submission is already in flight")]
    AlreadyInFlight,
}

impl SubmissionError {
    /// Returns true if trying the same entry again may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            SubmissionError::Network(_) | SubmissionError::AlreadyInFlight => true,
            SubmissionError::Upstream { status, .. } => *status >= 500,
            SubmissionError::InvalidDream(_) | SubmissionError::InvalidResponse(_) => false,
        }
    }
}

impl From<IngestionError> for SubmissionError {
    fn from(err: IngestionError) -> Self {
        match err {
            IngestionError::Network(_) | IngestionError::Timeout { .. } => {
                SubmissionError::Network(err.to_string())
            }
            IngestionError::Upstream { status, body } => SubmissionError::Upstream { status, body },
            IngestionError::MalformedBody(value) => SubmissionError::InvalidResponse(
                ValidationError::single(
                    RecordType::IngestDreamResponse,
                    Violation::InvalidFormat {
                        field: "$".to_string(),
                        format: "JSON document",
                        value,
                    },
                ),
            ),
        }
    }
}

/// Releases the in-flight gate when dropped, including on cancellation.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Handler for submitting dreams.
///
/// Holds at most one submission in flight. A second `handle` call made while
/// the first is pending fails immediately with `AlreadyInFlight`.
pub struct SubmitDreamHandler {
    client: Arc<dyn IngestionClient>,
    validator: Arc<dyn RecordValidator>,
    event_sink: Option<Arc<dyn CloudEventSink>>,
    event_factory: CloudEventFactory,
    in_flight: AtomicBool,
}

impl SubmitDreamHandler {
    pub fn new(client: Arc<dyn IngestionClient>, validator: Arc<dyn RecordValidator>) -> Self {
        Self {
            client,
            validator,
            event_sink: None,
            event_factory: CloudEventFactory::default(),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Record a `dream.logged` event for every accepted submission.
    pub fn with_event_sink(mut self, sink: Arc<dyn CloudEventSink>, factory: CloudEventFactory) -> Self {
        self.event_sink = Some(sink);
        self.event_factory = factory;
        self
    }

    /// Returns true while a submission is pending.
    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub async fn handle(&self, cmd: SubmitDreamCommand) -> Result<SubmissionReceipt, SubmissionError> {
        let _guard = InFlightGuard::acquire(&self.in_flight).ok_or(SubmissionError::AlreadyInFlight)?;

        // 1. Reject blank entries before touching the network
        if cmd.content.trim().is_empty() {
            return Err(SubmissionError::InvalidDream(ValidationError::single(
                RecordType::DreamIngestionObject,
                Violation::EmptyField {
                    field: "content_raw".to_string(),
                },
            )));
        }

        // 2. Capture the dream
        let mut dream = DreamIngestionObject::capture(cmd.user_id, cmd.modality, cmd.content);
        if let Some(at) = cmd.experienced_at {
            dream = dream.with_experience_time(at);
        }
        if let Some(context) = cmd.biometric_context {
            dream = dream.with_biometric_context(context);
        }

        // 3. Validate the outgoing body
        let body = serde_json::to_value(&dream).map_err(|e| {
            SubmissionError::InvalidDream(ValidationError::single(
                RecordType::DreamIngestionObject,
                Violation::InvalidFormat {
                    field: "$".to_string(),
                    format: "JSON document",
                    value: e.to_string(),
                },
            ))
        })?;
        let dream = validate_record_with_report::<DreamIngestionObject, _>(self.validator.as_ref(), &body)
            .map_err(SubmissionError::InvalidDream)?
            .record;

        // 4. Submit
        debug!(dream_id = %dream.dream_id, endpoint = self.client.endpoint(), "Submitting dream");
        let raw = self.client.ingest(&dream).await.map_err(|e| {
            warn!(dream_id = %dream.dream_id, error = %e, "Dream submission failed");
            SubmissionError::from(e)
        })?;

        // 5. Validate the response
        let outcome = validate_record_with_report::<IngestDreamResponse, _>(self.validator.as_ref(), &raw)
            .map_err(|e| {
                warn!(dream_id = %dream.dream_id, violations = e.error_count(), "Analysis response rejected");
                SubmissionError::InvalidResponse(e)
            })?;

        info!(
            dream_id = %dream.dream_id,
            pending = ?outcome.record.pending_sections(),
            "Dream analysis received"
        );

        self.record_logged(&dream, &outcome.record).await;

        Ok(SubmissionReceipt {
            dream,
            response: outcome.record,
            deprecations: outcome.deprecations,
        })
    }

    /// The submission already succeeded upstream, so a sink failure is logged, not returned.
    async fn record_logged(&self, dream: &DreamIngestionObject, response: &IngestDreamResponse) {
        let Some(sink) = &self.event_sink else {
            return;
        };
        let status = response.status.clone().unwrap_or_else(|| "submitted".to_string());
        let event = self
            .event_factory
            .dream_logged(dream.dream_id, dream.user_id, status);
        if let Err(e) = sink.publish(event).await {
            warn!(dream_id = %dream.dream_id, error = %e, "Failed to record dream.logged event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::events::InMemoryEventLog;
    use crate::adapters::validation::SchemaRecordValidator;
    use crate::domain::events::EventPayload;
    use crate::domain::vocabulary::SleepPhase;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::atomic::AtomicUsize;
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::sync::Notify;

    struct MockIngestionClient {
        result: Result<Value, IngestionError>,
        sent: Mutex<Vec<DreamIngestionObject>>,
    }

    impl MockIngestionClient {
        fn answering(body: Value) -> Self {
            Self {
                result: Ok(body),
                sent: Mutex::new(Vec::new()),
            }
        }

        fn failing(err: IngestionError) -> Self {
            Self {
                result: Err(err),
                sent: Mutex::new(Vec::new()),
            }
        }

        fn sent(&self) -> Vec<DreamIngestionObject> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl IngestionClient for MockIngestionClient {
        async fn ingest(&self, dream: &DreamIngestionObject) -> Result<Value, IngestionError> {
            self.sent.lock().unwrap().push(dream.clone());
            self.result.clone()
        }

        fn endpoint(&self) -> &str {
            "http://mock/ingest/dream"
        }
    }

    /// Blocks the first call until released.
    struct BlockingClient {
        calls: AtomicUsize,
        entered: Notify,
        release: Notify,
    }

    impl BlockingClient {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                entered: Notify::new(),
                release: Notify::new(),
            }
        }
    }

    #[async_trait]
    impl IngestionClient for BlockingClient {
        async fn ingest(&self, _dream: &DreamIngestionObject) -> Result<Value, IngestionError> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                self.entered.notify_one();
                self.release.notified().await;
            }
            Ok(json!({"status": "processing"}))
        }

        fn endpoint(&self) -> &str {
            "http://blocking/ingest/dream"
        }
    }

    fn handler_with(client: Arc<dyn IngestionClient>) -> SubmitDreamHandler {
        SubmitDreamHandler::new(client, Arc::new(SchemaRecordValidator::new()))
    }

    fn full_response() -> Value {
        json!({
            "status": "complete",
            "archetype": {
                "archetype_id": "SHADOW",
                "valence": -0.4,
                "integration_status": "confrontation",
                "symbolic_manifestations": ["locked door", "hallway"]
            },
            "transits": {
                "transit_id": "9a8b7c6d-5e4f-4a3b-8c2d-1e0f9a8b7c6d",
                "lunar_phase": 0.62,
                "active_aspects": [
                    {
                        "transit_planet": "Saturn",
                        "natal_planet": "Moon",
                        "aspect_type": "square",
                        "orb_degrees": 1.5,
                        "psychological_pressure": "restriction"
                    }
                ]
            },
            "narrative": "The locked door is a boundary you built yourself."
        })
    }

    #[tokio::test]
    async fn submits_and_returns_validated_response() {
        let client = Arc::new(MockIngestionClient::answering(full_response()));
        let handler = handler_with(client.clone());

        let receipt = handler
            .handle(SubmitDreamCommand::text(UserId::anonymous(), "A locked door in my old school"))
            .await
            .unwrap();

        let archetype = receipt.response.archetype.as_ref().unwrap();
        assert_eq!(archetype.valence, -0.4);
        assert_eq!(receipt.response.pending_sections(), vec!["cohort", "engagement_trigger"]);
        assert_eq!(client.sent(), vec![receipt.dream.clone()]);
        assert_eq!(receipt.dream.content_raw, "A locked door in my old school");
        assert!(!handler.is_submitting());
    }

    #[tokio::test]
    async fn partial_response_is_accepted() {
        let client = Arc::new(MockIngestionClient::answering(json!({"narrative": "Water rising."})));
        let receipt = handler_with(client)
            .handle(SubmitDreamCommand::text(UserId::anonymous(), "Flood"))
            .await
            .unwrap();

        assert_eq!(receipt.response.narrative.as_deref(), Some("Water rising."));
        assert!(receipt.response.archetype.is_none());
        assert!(receipt.response.transits.is_none());
    }

    #[tokio::test]
    async fn blank_content_is_rejected_without_network() {
        let client = Arc::new(MockIngestionClient::answering(json!({})));
        let handler = handler_with(client.clone());

        let err = handler
            .handle(SubmitDreamCommand::text(UserId::anonymous(), "   \n\t"))
            .await
            .unwrap_err();

        match err {
            SubmissionError::InvalidDream(e) => assert!(e.names_field("content_raw")),
            other => panic!("expected InvalidDream, got {:?}", other),
        }
        assert!(client.sent().is_empty());
    }

    #[tokio::test]
    async fn biometric_context_is_sent() {
        let client = Arc::new(MockIngestionClient::answering(json!({})));
        let cmd = SubmitDreamCommand::text(UserId::anonymous(), "Falling")
            .with_biometric_context(BiometricContext::new().with_sleep_phase(SleepPhase::Rem));

        handler_with(client.clone()).handle(cmd).await.unwrap();

        let sent = client.sent();
        let context = sent[0].biometric_context.as_ref().unwrap();
        assert_eq!(context.sleep_phase, Some(SleepPhase::Rem));
    }

    #[tokio::test]
    async fn out_of_range_response_is_invalid_not_network() {
        let client = Arc::new(MockIngestionClient::answering(json!({
            "archetype": {
                "archetype_id": "ANIMA",
                "valence": 2.0,
                "integration_status": "unconscious",
                "symbolic_manifestations": ["river"]
            }
        })));

        let err = handler_with(client)
            .handle(SubmitDreamCommand::text(UserId::anonymous(), "A singing river"))
            .await
            .unwrap_err();

        match &err {
            SubmissionError::InvalidResponse(e) => assert!(e.names_field("archetype.valence")),
            other => panic!("expected InvalidResponse, got {:?}", other),
        }
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn upstream_error_keeps_body() {
        let client = Arc::new(MockIngestionClient::failing(IngestionError::Upstream {
            status: 500,
            body: "{\n  \"detail\": \"model offline\"\n}".to_string(),
        }));

        let err = handler_with(client)
            .handle(SubmitDreamCommand::text(UserId::anonymous(), "Teeth falling out"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            SubmissionError::Upstream {
                status: 500,
                body: "{\n  \"detail\": \"model offline\"\n}".to_string(),
            }
        );
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn timeouts_surface_as_network_errors() {
        let client = Arc::new(MockIngestionClient::failing(IngestionError::Timeout { timeout_secs: 30 }));
        let err = handler_with(client)
            .handle(SubmitDreamCommand::text(UserId::anonymous(), "Chased"))
            .await
            .unwrap_err();

        assert!(matches!(err, SubmissionError::Network(_)));
        assert!(err.is_retryable());
    }

    #[test]
    fn malformed_body_maps_to_invalid_response() {
        let err = SubmissionError::from(IngestionError::MalformedBody("expected value".to_string()));
        match err {
            SubmissionError::InvalidResponse(e) => {
                assert_eq!(e.record_type(), RecordType::IngestDreamResponse)
            }
            other => panic!("expected InvalidResponse, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn concurrent_submission_is_refused() {
        let client = Arc::new(BlockingClient::new());
        let handler = Arc::new(handler_with(client.clone()));

        let first = tokio::spawn({
            let handler = handler.clone();
            async move {
                handler
                    .handle(SubmitDreamCommand::text(UserId::anonymous(), "First"))
                    .await
            }
        });
        client.entered.notified().await;
        assert!(handler.is_submitting());

        let second = handler
            .handle(SubmitDreamCommand::text(UserId::anonymous(), "Second"))
            .await;
        assert_eq!(second.unwrap_err(), SubmissionError::AlreadyInFlight);

        client.release.notify_one();
        assert!(first.await.unwrap().is_ok());
        assert!(!handler.is_submitting());
    }

    #[tokio::test]
    async fn cancelled_submission_releases_gate() {
        let client = Arc::new(BlockingClient::new());
        let handler = handler_with(client.clone());

        let cancelled = tokio::time::timeout(
            Duration::from_millis(20),
            handler.handle(SubmitDreamCommand::text(UserId::anonymous(), "Interrupted")),
        )
        .await;
        assert!(cancelled.is_err());
        assert!(!handler.is_submitting());

        let retry = handler
            .handle(SubmitDreamCommand::text(UserId::anonymous(), "Interrupted"))
            .await;
        assert!(retry.is_ok());
    }

    #[tokio::test]
    async fn accepted_submission_is_logged_as_event() {
        let validator: Arc<dyn RecordValidator> = Arc::new(SchemaRecordValidator::new());
        let log = Arc::new(InMemoryEventLog::new(validator.clone()));
        let client = Arc::new(MockIngestionClient::answering(json!({"status": "processing"})));
        let handler = SubmitDreamHandler::new(client, validator)
            .with_event_sink(log.clone(), CloudEventFactory::default());

        let receipt = handler
            .handle(SubmitDreamCommand::text(UserId::anonymous(), "Flying over water"))
            .await
            .unwrap();

        let history = log.history(Some("com.aetheria.dream.logged")).await.unwrap();
        assert_eq!(history.len(), 1);
        match &history[0].data {
            EventPayload::DreamLogged(data) => {
                assert_eq!(data.dream_id, receipt.dream.dream_id);
                assert_eq!(data.status, "processing");
            }
            other => panic!("expected DreamLogged, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn failed_submission_logs_no_event() {
        let validator: Arc<dyn RecordValidator> = Arc::new(SchemaRecordValidator::new());
        let log = Arc::new(InMemoryEventLog::new(validator.clone()));
        let client = Arc::new(MockIngestionClient::failing(IngestionError::Network("refused".to_string())));
        let handler = SubmitDreamHandler::new(client, validator)
            .with_event_sink(log.clone(), CloudEventFactory::default());

        assert!(handler
            .handle(SubmitDreamCommand::text(UserId::anonymous(), "Lost keys"))
            .await
            .is_err());
        assert_eq!(log.event_count(), 0);
    }
}

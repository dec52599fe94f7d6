//! In-memory CloudEvent log.
//!
//! Keeps every accepted event in publication order so a session's pipeline
//! can be replayed or exported for audit. Nothing is persisted unless
//! `export_json` is called.

use async_trait::async_trait;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{info, warn};

use crate::domain::events::CloudEvent;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::schema::RecordType;
use crate::ports::{CloudEventSink, RecordValidator};

/// Append-only event log guarded by an `RwLock`.
///
/// Each event is serialized and re-validated against the strict CloudEvent
/// envelope before it is appended.
///
/// # Example
///
/// ```ignore
/// let log = InMemoryEventLog::new(Arc::new(SchemaRecordValidator::new()));
/// log.publish(factory.dream_logged(dream_id, user_id, "processing")).await?;
///
/// assert_eq!(log.event_count(), 1);
/// log.export_json("events.json").await?;
/// ```
pub struct InMemoryEventLog {
    validator: Arc<dyn RecordValidator>,
    events: RwLock<Vec<CloudEvent>>,
}

impl InMemoryEventLog {
    pub fn new(validator: Arc<dyn RecordValidator>) -> Self {
        Self {
            validator,
            events: RwLock::new(Vec::new()),
        }
    }

    /// Returns a copy of every accepted event.
    pub fn events(&self) -> Vec<CloudEvent> {
        self.events
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn event_count(&self) -> usize {
        self.events.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Checks if an event of the given type was accepted.
    pub fn has_event(&self, event_type: &str) -> bool {
        self.events
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|e| e.event_type == event_type)
    }

    /// Writes the log as a pretty-printed JSON array.
    pub async fn export_json(&self, path: impl AsRef<Path>) -> Result<(), DomainError> {
        let path = path.as_ref();
        let events = self.events();
        let body = serde_json::to_vec_pretty(&events).map_err(|e| {
            DomainError::new(ErrorCode::InternalError, format!("Failed to encode event log: {}", e))
        })?;

        tokio::fs::write(path, body).await.map_err(|e| {
            DomainError::new(ErrorCode::StorageError, format!("Failed to export event log: {}", e))
                .with_detail("path", path.display().to_string())
        })?;

        info!(path = %path.display(), events = events.len(), "Exported event log");
        Ok(())
    }
}

#[async_trait]
impl CloudEventSink for InMemoryEventLog {
    async fn publish(&self, event: CloudEvent) -> Result<(), DomainError> {
        let raw = serde_json::to_value(&event).map_err(|e| {
            DomainError::new(ErrorCode::InternalError, format!("Failed to encode event: {}", e))
        })?;

        if let Err(err) = self.validator.validate(RecordType::CloudEvent, &raw) {
            warn!(event_type = %event.event_type, id = %event.id, error = %err, "Rejected CloudEvent");
            return Err(DomainError::new(ErrorCode::ValidationFailed, err.to_string())
                .with_detail("event_id", event.id.clone()));
        }

        info!(event_type = %event.event_type, id = %event.id, time = %event.time, "CloudEvent published");
        self.events
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
        Ok(())
    }

    async fn history(&self, event_type: Option<&str>) -> Result<Vec<CloudEvent>, DomainError> {
        let events = self.events.read().unwrap_or_else(PoisonError::into_inner);
        Ok(events
            .iter()
            .filter(|e| event_type.map_or(true, |t| e.event_type == t))
            .cloned()
            .collect())
    }
}

//! CloudEventSink port - Interface for publishing pipeline events.
//!
//! Decouples producers of `CloudEvent`s from the transport that carries them.
//! Only an in-memory log exists in this crate; a message broker would be
//! another adapter.

use async_trait::async_trait;

use crate::domain::events::CloudEvent;
use crate::domain::foundation::DomainError;

/// Port for publishing and replaying CloudEvents.
///
/// Implementations must:
/// - Reject events whose serialized envelope fails validation
/// - Keep accepted events in publication order
#[async_trait]
pub trait CloudEventSink: Send + Sync {
    /// Publish a single event.
    async fn publish(&self, event: CloudEvent) -> Result<(), DomainError>;

    /// Publish several events. Stops at the first rejected event.
    async fn publish_all(&self, events: Vec<CloudEvent>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }

    /// Accepted events in publication order, optionally filtered by `type`.
    async fn history(&self, event_type: Option<&str>) -> Result<Vec<CloudEvent>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn CloudEventSink) {}
}

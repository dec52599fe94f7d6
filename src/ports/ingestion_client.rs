//! IngestionClient port - Delivery of a dream to the analysis API.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::dream::DreamIngestionObject;

/// Port for posting a dream to the external analysis service.
///
/// Implementations send the dream as JSON and hand back the parsed success
/// body without interpreting it. Validating that body is the caller's job.
#[async_trait]
pub trait IngestionClient: Send + Sync {
    /// Submit one dream. Never retried internally.
    async fn ingest(&self, dream: &DreamIngestionObject) -> Result<Value, IngestionError>;

    /// The URL dreams are posted to, for logging.
    fn endpoint(&self) -> &str;
}

/// Failures talking to the analysis service.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IngestionError {
    /// Could not reach the service (DNS, refused connection, reset).
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// The service answered with a non-2xx status.
    #[error("ingestion service returned {status}: {body}")]
    Upstream { status: u16, body: String },

    /// A 2xx answer whose body is not JSON.
    #[error("response body is not JSON: {0}")]
    MalformedBody(String),
}

impl IngestionError {
    /// Returns true if the user may reasonably try again.
    pub fn is_retryable(&self) -> bool {
        match self {
            IngestionError::Network(_) | IngestionError::Timeout { .. } => true,
            IngestionError::Upstream { status, .. } => *status >= 500,
            IngestionError::MalformedBody(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn IngestionClient) {}

    #[test]
    fn transport_failures_are_retryable() {
        assert!(IngestionError::Network("connection refused".to_string()).is_retryable());
        assert!(IngestionError::Timeout { timeout_secs: 30 }.is_retryable());
    }

    #[test]
    fn only_server_side_upstream_errors_are_retryable() {
        let server = IngestionError::Upstream {
            status: 503,
            body: "{}".to_string(),
        };
        let client = IngestionError::Upstream {
            status: 422,
            body: "{}".to_string(),
        };
        assert!(server.is_retryable());
        assert!(!client.is_retryable());
        assert!(!IngestionError::MalformedBody("<html>".to_string()).is_retryable());
    }

    #[test]
    fn upstream_error_displays_status_and_body() {
        let err = IngestionError::Upstream {
            status: 500,
            body: r#"{"detail":"boom"}"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"ingestion service returned 500: {"detail":"boom"}"#
        );
    }
}

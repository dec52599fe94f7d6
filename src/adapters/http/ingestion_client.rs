//! HTTP Ingestion Client - Implementation of IngestionClient over reqwest.
//!
//! # Configuration
//!
//! ```ignore
//! let config = IngestionClientConfig::new("https://api.example.com")
//!     .with_timeout(Duration::from_secs(10))
//!     .with_api_token(token);
//!
//! let client = HttpIngestionClient::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::IngestionConfig;
use crate::domain::dream::DreamIngestionObject;
use crate::ports::{IngestionClient, IngestionError};

/// Configuration for the HTTP ingestion client.
#[derive(Debug, Clone)]
pub struct IngestionClientConfig {
    /// API root, without the `/ingest/dream` path.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Optional bearer token.
    api_token: Option<Secret<String>>,
}

impl IngestionClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(30),
            api_token: None,
        }
    }

    /// Builds the client configuration from application config.
    pub fn from_config(config: &IngestionConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout(),
            api_token: config.api_token.clone(),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the bearer token sent with each request.
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(Secret::new(token.into()));
        self
    }

    fn api_token(&self) -> Option<&str> {
        self.api_token.as_ref().map(|t| t.expose_secret().as_str())
    }
}

/// Posts dreams to `{base_url}/ingest/dream`.
pub struct HttpIngestionClient {
    config: IngestionClientConfig,
    endpoint: String,
    client: Client,
}

impl HttpIngestionClient {
    /// Creates a client. Fails only if the TLS backend cannot initialise.
    pub fn new(config: IngestionClientConfig) -> Result<Self, IngestionError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| IngestionError::Network(format!("Failed to create HTTP client: {}", e)))?;
        let endpoint = format!("{}/ingest/dream", config.base_url);

        Ok(Self {
            config,
            endpoint,
            client,
        })
    }

    fn map_send_error(&self, e: reqwest::Error) -> IngestionError {
        if e.is_timeout() {
            IngestionError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else if e.is_connect() {
            IngestionError::Network(format!("Connection failed: {}", e))
        } else {
            IngestionError::Network(e.to_string())
        }
    }

    /// Surfaces a non-2xx body verbatim: pretty JSON if it parses, raw text otherwise.
    async fn upstream_error(&self, response: Response) -> IngestionError {
        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();
        let body = match serde_json::from_str::<Value>(&text) {
            Ok(json) => serde_json::to_string_pretty(&json).unwrap_or(text),
            Err(_) => text,
        };
        IngestionError::Upstream { status, body }
    }
}

#[async_trait]
impl IngestionClient for HttpIngestionClient {
    async fn ingest(&self, dream: &DreamIngestionObject) -> Result<Value, IngestionError> {
        debug!(endpoint = %self.endpoint, dream_id = %dream.dream_id, "Submitting dream");

        let mut request = self.client.post(&self.endpoint).json(dream);
        if let Some(token) = self.config.api_token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| self.map_send_error(e))?;

        if !response.status().is_success() {
            let err = self.upstream_error(response).await;
            warn!(endpoint = %self.endpoint, error = %err, "Ingestion rejected");
            return Err(err);
        }

        let text = response.text().await.map_err(|e| self.map_send_error(e))?;
        let body = serde_json::from_str(&text).map_err(|e| IngestionError::MalformedBody(e.to_string()))?;

        info!(dream_id = %dream.dream_id, "Dream accepted for analysis");
        Ok(body)
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use crate::domain::vocabulary::InputModality;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn dream() -> DreamIngestionObject {
        DreamIngestionObject::capture(UserId::anonymous(), InputModality::Text, "A house with too many doors")
    }

    fn client_for(server: &MockServer) -> HttpIngestionClient {
        HttpIngestionClient::new(IngestionClientConfig::new(server.uri())).unwrap()
    }

    #[test]
    fn endpoint_appends_ingest_path() {
        let client = HttpIngestionClient::new(IngestionClientConfig::new("http://localhost:8000/")).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8000/ingest/dream");
    }

    #[test]
    fn config_debug_hides_token() {
        let config = IngestionClientConfig::new("http://localhost:8000").with_api_token("tok_secret");
        assert!(!format!("{:?}", config).contains("tok_secret"));
    }

    #[tokio::test]
    async fn posts_dream_as_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ingest/dream"))
            .and(body_partial_json(json!({"content_raw": "A house with too many doors"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "processing"})))
            .expect(1)
            .mount(&server)
            .await;

        let body = client_for(&server).ingest(&dream()).await.unwrap();
        assert_eq!(body, json!({"status": "processing"}));
    }

    #[tokio::test]
    async fn sends_bearer_token_when_configured() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("authorization", "Bearer tok_abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let config = IngestionClientConfig::new(server.uri()).with_api_token("tok_abc");
        let client = HttpIngestionClient::new(config).unwrap();
        assert!(client.ingest(&dream()).await.is_ok());
    }

    #[tokio::test]
    async fn non_success_surfaces_pretty_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({"detail": "content_raw missing"})))
            .mount(&server)
            .await;

        let err = client_for(&server).ingest(&dream()).await.unwrap_err();
        assert_eq!(
            err,
            IngestionError::Upstream {
                status: 422,
                body: "{\n  \"detail\": \"content_raw missing\"\n}".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn non_success_surfaces_raw_text_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let err = client_for(&server).ingest(&dream()).await.unwrap_err();
        assert_eq!(
            err,
            IngestionError::Upstream {
                status: 502,
                body: "Bad Gateway".to_string(),
            }
        );
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn non_json_success_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).ingest(&dream()).await.unwrap_err();
        assert!(matches!(err, IngestionError::MalformedBody(_)));
    }

    #[tokio::test]
    async fn slow_server_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let config = IngestionClientConfig::new(server.uri()).with_timeout(Duration::from_millis(50));
        let err = HttpIngestionClient::new(config).unwrap().ingest(&dream()).await.unwrap_err();
        assert!(matches!(err, IngestionError::Timeout { .. }));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_error() {
        let config = IngestionClientConfig::new("http://127.0.0.1:9");
        let err = HttpIngestionClient::new(config).unwrap().ingest(&dream()).await.unwrap_err();
        assert!(matches!(err, IngestionError::Network(_)));
        assert!(err.is_retryable());
    }
}

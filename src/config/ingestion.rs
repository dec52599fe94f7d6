//! Ingestion API configuration

use secrecy::Secret;
use serde::{Deserialize, Deserializer};
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::foundation::UserId;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Where and how dreams are submitted
#[derive(Debug, Clone, Deserialize)]
pub struct IngestionConfig {
    /// Analysis API root. Blank counts as unset.
    #[serde(default = "default_base_url", deserialize_with = "blank_as_default")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Dreamer id attached to submissions; the anonymous id when unset
    pub user_id: Option<String>,

    /// Bearer token sent with each submission
    pub api_token: Option<Secret<String>>,
}

impl IngestionConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full URL of the ingestion endpoint
    pub fn endpoint(&self) -> String {
        format!("{}/ingest/dream", self.base_url.trim_end_matches('/'))
    }

    /// Configured dreamer, or the anonymous one
    pub fn user_id(&self) -> Result<UserId, ValidationError> {
        match self.user_id.as_deref().map(str::trim) {
            None | Some("") => Ok(UserId::anonymous()),
            Some(raw) => raw
                .parse()
                .map_err(|_| ValidationError::InvalidUserId(raw.to_string())),
        }
    }

    /// Validate ingestion configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        self.user_id()?;
        Ok(())
    }
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            user_id: None,
            api_token: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn blank_as_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Ok(default_base_url())
    } else {
        Ok(trimmed.to_string())
    }
}

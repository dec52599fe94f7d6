//! Logging configuration

use serde::Deserialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::error::ValidationError;

/// Log output format
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Tracing subscriber settings
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

impl LoggingConfig {
    fn filter(&self) -> Result<EnvFilter, ValidationError> {
        EnvFilter::try_new(&self.level)
            .map_err(|e| ValidationError::InvalidLogFilter(e.to_string()))
    }

    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.filter().map(|_| ())
    }

    /// Install the global subscriber. `RUST_LOG` wins over `level`.
    ///
    /// Returns `false` if a subscriber was already installed.
    pub fn init_tracing(&self) -> bool {
        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => self.filter().unwrap_or_else(|_| EnvFilter::new(default_level())),
        };

        let registry = tracing_subscriber::registry().with(filter);
        let result = match self.format {
            LogFormat::Json => registry
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .try_init(),
            LogFormat::Pretty => registry
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .try_init(),
        };
        result.is_ok()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_level() -> String {
    "aetheria=info,warn".to_string()
}

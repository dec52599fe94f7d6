//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `validation` - Canonical-schema record validator
//! - `http` - reqwest client for the analysis API
//! - `events` - In-memory CloudEvent log
//! - `context` - In-memory user context registry

pub mod context;
pub mod events;
pub mod http;
pub mod validation;

pub use context::InMemoryContextRegistry;
pub use events::InMemoryEventLog;
pub use http::{HttpIngestionClient, IngestionClientConfig};
pub use validation::SchemaRecordValidator;

//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RecordValidator` - Raw JSON to typed record, at every trust boundary
//! - `IngestionClient` - Posting a dream to the analysis API
//! - `CloudEventSink` - Publishing and replaying pipeline events
//! - `ContextRegistry` - Per-user context store

mod context_registry;
mod event_sink;
mod ingestion_client;
mod record_validator;

pub use context_registry::ContextRegistry;
pub use event_sink::CloudEventSink;
pub use ingestion_client::{IngestionClient, IngestionError};
pub use record_validator::{validate_record, validate_record_with_report, RecordValidator};

//! HTTP adapters - Outbound calls to the analysis API.

mod ingestion_client;

pub use ingestion_client::{HttpIngestionClient, IngestionClientConfig};

//! Ingestion module - what the analysis API answers to a submitted dream.

mod response;

pub use response::IngestDreamResponse;

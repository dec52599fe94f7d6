//! Events module - CloudEvents v1.0 envelopes for the analysis pipeline.
//!
//! - `EventType` - The `com.aetheria.*` types the pipeline emits
//! - `EventPayload` - Typed `data` for known types, opaque object otherwise
//! - `CloudEvent` - The validated envelope
//! - `CloudEventFactory` - Builds envelopes with fresh ids and stage sources

mod cloud_event;
mod event_type;
mod factory;
mod payloads;

pub use cloud_event::{CloudEvent, DATA_CONTENT_TYPE, SPEC_VERSION};
pub use event_type::EventType;
pub use factory::{CloudEventFactory, DEFAULT_SOURCE_SERVICE};
pub use payloads::{
    ArchetypeExtractedData, DreamLoggedData, EventPayload, NarrativeSynthesizedData,
    ResonanceCohortFoundData, SecurityViolationData, TransitsCalculatedData,
};

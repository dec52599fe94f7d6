use serde::{Serialize, Serializer};

use super::{EventPayload, EventType};
use crate::domain::foundation::Timestamp;

/// The only CloudEvents version accepted.
pub const SPEC_VERSION: &str = "1.0";

/// The only `datacontenttype` accepted.
pub const DATA_CONTENT_TYPE: &str = "application/json";

/// A CloudEvents v1.0 envelope.
///
/// `specversion` and `datacontenttype` are fixed, so they are not stored and
/// are written back as literals on serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudEvent {
    pub id: String,
    pub source: String,
    pub event_type: String,
    pub time: Timestamp,
    pub subject: Option<String>,
    pub dataschema: Option<String>,
    pub data: EventPayload,
}

impl CloudEvent {
    /// Returns the known type of this event, if it is one.
    pub fn known_type(&self) -> Option<EventType> {
        EventType::parse(&self.event_type)
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }
}

#[derive(Serialize)]
struct WireCloudEvent<'a> {
    specversion: &'static str,
    #[serde(rename = "type")]
    event_type: &'a str,
    source: &'a str,
    id: &'a str,
    time: &'a Timestamp,
    datacontenttype: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    subject: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dataschema: Option<&'a str>,
    data: &'a EventPayload,
}

impl Serialize for CloudEvent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WireCloudEvent {
            specversion: SPEC_VERSION,
            event_type: &self.event_type,
            source: &self.source,
            id: &self.id,
            time: &self.time,
            datacontenttype: DATA_CONTENT_TYPE,
            subject: self.subject.as_deref(),
            dataschema: self.dataschema.as_deref(),
            data: &self.data,
        }
        .serialize(serializer)
    }
}

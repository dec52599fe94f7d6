//! RecordType enum naming every validated record shape.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::SchemaDefinitionError;

/// What happens to object keys the canonical schema does not declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownFieldPolicy {
    /// Undeclared keys are violations.
    #[default]
    Reject,
    /// Undeclared keys are dropped silently.
    Ignore,
}

/// Top-level record shapes known to the schema registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    DreamIngestionObject,
    ArchetypalNode,
    ActiveAspect,
    CelestialTransitMap,
    CloudEvent,
    RegistryEntry,
    IngestDreamResponse,
    DecagonAnalysisObject,
    ShadowWeaveNode,
    NakshatraSnapshot,
    ArabicLot,
    DashaPeriod,
    SomaticResonance,
    AncestralGhost,
    CollectiveRipple,
    DigitalDoppelganger,
    FirdariaPhase,
}

impl RecordType {
    /// Returns all record types.
    pub fn all() -> &'static [RecordType] {
        &[
            RecordType::DreamIngestionObject,
            RecordType::ArchetypalNode,
            RecordType::ActiveAspect,
            RecordType::CelestialTransitMap,
            RecordType::CloudEvent,
            RecordType::RegistryEntry,
            RecordType::IngestDreamResponse,
            RecordType::DecagonAnalysisObject,
            RecordType::ShadowWeaveNode,
            RecordType::NakshatraSnapshot,
            RecordType::ArabicLot,
            RecordType::DashaPeriod,
            RecordType::SomaticResonance,
            RecordType::AncestralGhost,
            RecordType::CollectiveRipple,
            RecordType::DigitalDoppelganger,
            RecordType::FirdariaPhase,
        ]
    }

    /// Returns the schema name.
    pub fn name(&self) -> &'static str {
        match self {
            RecordType::DreamIngestionObject => "DreamIngestionObject",
            RecordType::ArchetypalNode => "ArchetypalNode",
            RecordType::ActiveAspect => "ActiveAspect",
            RecordType::CelestialTransitMap => "CelestialTransitMap",
            RecordType::CloudEvent => "CloudEvent",
            RecordType::RegistryEntry => "RegistryEntry",
            RecordType::IngestDreamResponse => "IngestDreamResponse",
            RecordType::DecagonAnalysisObject => "DecagonAnalysisObject",
            RecordType::ShadowWeaveNode => "ShadowWeaveNode",
            RecordType::NakshatraSnapshot => "NakshatraSnapshot",
            RecordType::ArabicLot => "ArabicLot",
            RecordType::DashaPeriod => "DashaPeriod",
            RecordType::SomaticResonance => "SomaticResonance",
            RecordType::AncestralGhost => "AncestralGhost",
            RecordType::CollectiveRipple => "CollectiveRipple",
            RecordType::DigitalDoppelganger => "DigitalDoppelganger",
            RecordType::FirdariaPhase => "FirdariaPhase",
        }
    }

    /// Returns true for forward-compatible shapes whose top level tolerates
    /// undeclared keys regardless of the configured policy.
    pub fn is_open(&self) -> bool {
        matches!(self, RecordType::IngestDreamResponse)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for RecordType {
    type Err = SchemaDefinitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordType::all()
            .iter()
            .copied()
            .find(|rt| rt.name() == s)
            .ok_or_else(|| SchemaDefinitionError::UnknownRecordType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for rt in RecordType::all() {
            assert_eq!(rt.name().parse::<RecordType>(), Ok(*rt));
        }
    }

    #[test]
    fn unknown_record_type_is_a_definition_error() {
        assert!(matches!(
            "DreamJournal".parse::<RecordType>(),
            Err(SchemaDefinitionError::UnknownRecordType(_))
        ));
    }

    #[test]
    fn only_the_ingest_response_is_open() {
        let open: Vec<_> = RecordType::all().iter().filter(|rt| rt.is_open()).collect();
        assert_eq!(open, vec![&RecordType::IngestDreamResponse]);
    }

    #[test]
    fn decagon_sub_records_are_registered() {
        assert_eq!(
            "NakshatraSnapshot".parse::<RecordType>(),
            Ok(RecordType::NakshatraSnapshot)
        );
        assert_eq!(RecordType::all().len(), 17);
    }

    #[test]
    fn unknown_field_policy_defaults_to_reject() {
        assert_eq!(UnknownFieldPolicy::default(), UnknownFieldPolicy::Reject);
    }
}

//! Schema Record Validator - Implementation of RecordValidator.
//!
//! Walks raw `serde_json::Value`s against the canonical record shapes,
//! collecting every violation before deciding.

use serde_json::Value;
use tracing::{debug, warn};

use super::field_checker::{FieldChecker, ROOT};
use super::{json_schema, records};
use crate::config::ValidationConfig;
use crate::domain::schema::{
    RecordType, TypedRecord, UnknownFieldPolicy, ValidationError, ValidationOutcome,
};
use crate::domain::vocabulary::LegacyTokenPolicy;
use crate::ports::RecordValidator;

/// Validator for every record type in the canonical schema.
///
/// # Thread Safety
///
/// Holds only its two policies, so it is `Send + Sync` and cheap to share.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaRecordValidator {
    legacy_tokens: LegacyTokenPolicy,
    unknown_fields: UnknownFieldPolicy,
}

impl SchemaRecordValidator {
    /// Validator with default policies: legacy tokens accepted as deprecated,
    /// unknown fields rejected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policies(legacy_tokens: LegacyTokenPolicy, unknown_fields: UnknownFieldPolicy) -> Self {
        Self {
            legacy_tokens,
            unknown_fields,
        }
    }

    pub fn from_config(config: &ValidationConfig) -> Self {
        Self::with_policies(config.legacy_tokens, config.unknown_fields)
    }

    pub fn legacy_tokens(&self) -> LegacyTokenPolicy {
        self.legacy_tokens
    }

    pub fn unknown_fields(&self) -> UnknownFieldPolicy {
        self.unknown_fields
    }

    fn walk(
        &self,
        record_type: RecordType,
        raw: &Value,
    ) -> Result<ValidationOutcome<TypedRecord>, ValidationError> {
        let mut c = FieldChecker::new(self.legacy_tokens, self.unknown_fields);
        let record = match record_type {
            RecordType::DreamIngestionObject => {
                records::dream_ingestion_object(&mut c, raw, ROOT).map(TypedRecord::from)
            }
            RecordType::ArchetypalNode => records::archetypal_node(&mut c, raw, ROOT).map(TypedRecord::from),
            RecordType::ActiveAspect => records::active_aspect(&mut c, raw, ROOT).map(TypedRecord::from),
            RecordType::CelestialTransitMap => {
                records::celestial_transit_map(&mut c, raw, ROOT).map(TypedRecord::from)
            }
            RecordType::CloudEvent => records::cloud_event(&mut c, raw, ROOT).map(TypedRecord::from),
            RecordType::RegistryEntry => records::registry_entry(&mut c, raw, ROOT).map(TypedRecord::from),
            RecordType::IngestDreamResponse => {
                records::ingest_dream_response(&mut c, raw, ROOT).map(TypedRecord::from)
            }
            RecordType::DecagonAnalysisObject => {
                records::decagon_analysis_object(&mut c, raw, ROOT).map(TypedRecord::from)
            }
            RecordType::ShadowWeaveNode => {
                records::shadow_weave_node(&mut c, raw, ROOT).map(TypedRecord::from)
            }
            RecordType::NakshatraSnapshot => {
                records::nakshatra_snapshot(&mut c, raw, ROOT).map(TypedRecord::from)
            }
            RecordType::ArabicLot => records::arabic_lot(&mut c, raw, ROOT).map(TypedRecord::from),
            RecordType::DashaPeriod => {
                records::dasha_period(&mut c, raw, ROOT).map(TypedRecord::from)
            }
            RecordType::SomaticResonance => {
                records::somatic_resonance(&mut c, raw, ROOT).map(TypedRecord::from)
            }
            RecordType::AncestralGhost => {
                records::ancestral_ghost(&mut c, raw, ROOT).map(TypedRecord::from)
            }
            RecordType::CollectiveRipple => {
                records::collective_ripple(&mut c, raw, ROOT).map(TypedRecord::from)
            }
            RecordType::DigitalDoppelganger => {
                records::digital_doppelganger(&mut c, raw, ROOT).map(TypedRecord::from)
            }
            RecordType::FirdariaPhase => {
                records::firdaria_phase(&mut c, raw, ROOT).map(TypedRecord::from)
            }
        };
        c.finish(record_type, record)
    }
}

impl RecordValidator for SchemaRecordValidator {
    fn validate_with_report(
        &self,
        record_type: RecordType,
        raw: &Value,
    ) -> Result<ValidationOutcome<TypedRecord>, ValidationError> {
        let result = self.walk(record_type, raw);

        match &result {
            Ok(outcome) => {
                for deprecation in &outcome.deprecations {
                    warn!(
                        record_type = %record_type,
                        field = %deprecation.field,
                        legacy = deprecation.legacy,
                        canonical = deprecation.canonical,
                        "Deprecated vocabulary token accepted"
                    );
                }
            }
            Err(err) => {
                debug!(
                    record_type = %record_type,
                    violations = err.error_count(),
                    "Record failed validation"
                );
            }
        }

        result
    }

    fn schema_for(&self, record_type: RecordType) -> &Value {
        json_schema::schema_for(record_type)
    }
}

//! Published JSON Schemas for each record type.
//!
//! These describe the same contracts the walkers in `records` enforce and are
//! served to clients through `RecordValidator::schema_for`.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::domain::schema::RecordType;

fn load_raw_schema(record_type: RecordType) -> Value {
    let schema_str = match record_type {
        RecordType::DreamIngestionObject => {
            include_str!("../../domain/schema/schemas/dream_ingestion_object.json")
        }
        RecordType::ArchetypalNode => {
            include_str!("../../domain/schema/schemas/archetypal_node.json")
        }
        RecordType::ActiveAspect => include_str!("../../domain/schema/schemas/active_aspect.json"),
        RecordType::CelestialTransitMap => {
            include_str!("../../domain/schema/schemas/celestial_transit_map.json")
        }
        RecordType::CloudEvent => include_str!("../../domain/schema/schemas/cloud_event.json"),
        RecordType::RegistryEntry => {
            include_str!("../../domain/schema/schemas/registry_entry.json")
        }
        RecordType::IngestDreamResponse => {
            include_str!("../../domain/schema/schemas/ingest_dream_response.json")
        }
        RecordType::DecagonAnalysisObject => {
            include_str!("../../domain/schema/schemas/decagon_analysis_object.json")
        }
        RecordType::ShadowWeaveNode => {
            include_str!("../../domain/schema/schemas/shadow_weave_node.json")
        }
        RecordType::NakshatraSnapshot => {
            include_str!("../../domain/schema/schemas/nakshatra_snapshot.json")
        }
        RecordType::ArabicLot => include_str!("../../domain/schema/schemas/arabic_lot.json"),
        RecordType::DashaPeriod => include_str!("../../domain/schema/schemas/dasha_period.json"),
        RecordType::SomaticResonance => {
            include_str!("../../domain/schema/schemas/somatic_resonance.json")
        }
        RecordType::AncestralGhost => {
            include_str!("../../domain/schema/schemas/ancestral_ghost.json")
        }
        RecordType::CollectiveRipple => {
            include_str!("../../domain/schema/schemas/collective_ripple.json")
        }
        RecordType::DigitalDoppelganger => {
            include_str!("../../domain/schema/schemas/digital_doppelganger.json")
        }
        RecordType::FirdariaPhase => {
            include_str!("../../domain/schema/schemas/firdaria_phase.json")
        }
    };

    serde_json::from_str(schema_str)
        .unwrap_or_else(|e| panic!("Failed to parse schema for {}: {}", record_type, e))
}

/// Static storage for raw schemas.
static RAW_SCHEMAS: Lazy<HashMap<RecordType, Value>> = Lazy::new(|| {
    RecordType::all()
        .iter()
        .map(|rt| (*rt, load_raw_schema(*rt)))
        .collect()
});

pub(crate) fn schema_for(record_type: RecordType) -> &'static Value {
    &RAW_SCHEMAS[&record_type]
}

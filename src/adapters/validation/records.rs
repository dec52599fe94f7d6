//! Walkers turning raw JSON into typed records, one per canonical shape.
//!
//! Each walker checks every field before assembling the record, so a record
//! with three faults reports three violations.

use serde_json::{Map, Value};

use super::field_checker::FieldChecker;
use crate::domain::archetype::ArchetypalNode;
use crate::domain::celestial::{ActiveAspect, CelestialTransitMap};
use crate::domain::context::{
    ActiveNarrativeThread, RegistryEntry, SafetyConstraints, TemporalContext, UserContextTier,
};
use crate::domain::decagon::{
    AncestralGhost, ArabicLot, CollectiveRipple, DashaPeriod, DecagonAnalysisObject,
    DigitalDoppelganger, FirdariaPhase, NakshatraSnapshot, ShadowWeaveNode, SomaticResonance,
};
use crate::domain::dream::{BiometricContext, DreamIngestionObject};
use crate::domain::events::{
    ArchetypeExtractedData, CloudEvent, DreamLoggedData, EventPayload, EventType,
    NarrativeSynthesizedData, ResonanceCohortFoundData, SecurityViolationData,
    TransitsCalculatedData, DATA_CONTENT_TYPE, SPEC_VERSION,
};
use crate::domain::foundation::{DreamId, TransitId, UserId};
use crate::domain::ingestion::IngestDreamResponse;
use crate::domain::schema::NumericRange;

// =========================================================================
// Dream
// =========================================================================

const DREAM_FIELDS: &[&str] = &[
    "dream_id",
    "user_id",
    "timestamp_ingested",
    "timestamp_experience",
    "input_modality",
    "content_raw",
    "biometric_context",
];

const BIOMETRIC_KNOWN: &[&str] = BiometricContext::KNOWN_KEYS;

pub(crate) fn dream_ingestion_object(
    c: &mut FieldChecker,
    value: &Value,
    path: &str,
) -> Option<DreamIngestionObject> {
    let obj = c.object(value, path)?;
    c.declared(obj, path, DREAM_FIELDS);

    let dream_id = c.required(obj, path, "dream_id", FieldChecker::uuid::<DreamId>);
    let user_id = c.required(obj, path, "user_id", FieldChecker::uuid::<UserId>);
    let timestamp_ingested = c.required(obj, path, "timestamp_ingested", FieldChecker::timestamp);
    let timestamp_experience = c.optional(obj, path, "timestamp_experience", FieldChecker::timestamp);
    let input_modality = c.required(obj, path, "input_modality", FieldChecker::token);
    let content_raw = c.required(obj, path, "content_raw", FieldChecker::non_empty_string);
    let biometric_context = c.optional(obj, path, "biometric_context", biometric_context);

    Some(DreamIngestionObject {
        dream_id: dream_id?,
        user_id: user_id?,
        timestamp_ingested: timestamp_ingested?,
        timestamp_experience: timestamp_experience?,
        input_modality: input_modality?,
        content_raw: content_raw?,
        biometric_context: biometric_context?,
    })
}

/// Open payload: unknown keys are kept, never rejected.
fn biometric_context(c: &mut FieldChecker, value: &Value, path: &str) -> Option<BiometricContext> {
    let obj = c.object(value, path)?;

    let sleep_phase = c.optional(obj, path, "sleep_phase", FieldChecker::token);
    let heart_rate_variability = c.optional(obj, path, "heart_rate_variability", |c, v, f| {
        c.number_in(v, f, NumericRange::at_least(0.0))
    });
    let extra: Map<String, Value> = obj
        .iter()
        .filter(|(key, _)| !BIOMETRIC_KNOWN.contains(&key.as_str()))
        .map(|(key, v)| (key.clone(), v.clone()))
        .collect();

    Some(BiometricContext {
        sleep_phase: sleep_phase?,
        heart_rate_variability: heart_rate_variability?,
        extra,
    })
}

// =========================================================================
// Archetype
// =========================================================================

const ARCHETYPAL_NODE_FIELDS: &[&str] = &[
    "archetype_id",
    "valence",
    "integration_status",
    "symbolic_manifestations",
    "vector_embedding_ref",
];

pub(crate) fn archetypal_node(c: &mut FieldChecker, value: &Value, path: &str) -> Option<ArchetypalNode> {
    let obj = c.object(value, path)?;
    c.declared(obj, path, ARCHETYPAL_NODE_FIELDS);

    let archetype_id = c.required(obj, path, "archetype_id", FieldChecker::token);
    let valence = c.required(obj, path, "valence", |c, v, f| {
        c.number_in(v, f, ArchetypalNode::VALENCE_RANGE)
    });
    let integration_status = c.required(obj, path, "integration_status", FieldChecker::token);
    let symbolic_manifestations =
        c.required(obj, path, "symbolic_manifestations", FieldChecker::string_list);
    let vector_embedding_ref = c.optional(obj, path, "vector_embedding_ref", FieldChecker::string);

    Some(ArchetypalNode {
        archetype_id: archetype_id?,
        valence: valence?,
        integration_status: integration_status?,
        symbolic_manifestations: symbolic_manifestations?,
        vector_embedding_ref: vector_embedding_ref?,
    })
}

// =========================================================================
// Celestial
// =========================================================================

const ACTIVE_ASPECT_FIELDS: &[&str] = &[
    "transit_planet",
    "natal_planet",
    "aspect_type",
    "orb_degrees",
    "psychological_pressure",
];

const TRANSIT_MAP_FIELDS: &[&str] = &["transit_id", "active_aspects", "lunar_phase"];

pub(crate) fn active_aspect(c: &mut FieldChecker, value: &Value, path: &str) -> Option<ActiveAspect> {
    let obj = c.object(value, path)?;
    c.declared(obj, path, ACTIVE_ASPECT_FIELDS);

    let transit_planet = c.required(obj, path, "transit_planet", FieldChecker::token);
    let natal_planet = c.required(obj, path, "natal_planet", FieldChecker::token);
    let aspect_type = c.required(obj, path, "aspect_type", FieldChecker::token);
    let orb_degrees = c.required(obj, path, "orb_degrees", |c, v, f| {
        c.number_in(v, f, ActiveAspect::ORB_RANGE)
    });
    let psychological_pressure = c.required(obj, path, "psychological_pressure", FieldChecker::token);

    Some(ActiveAspect {
        transit_planet: transit_planet?,
        natal_planet: natal_planet?,
        aspect_type: aspect_type?,
        orb_degrees: orb_degrees?,
        psychological_pressure: psychological_pressure?,
    })
}

pub(crate) fn celestial_transit_map(
    c: &mut FieldChecker,
    value: &Value,
    path: &str,
) -> Option<CelestialTransitMap> {
    let obj = c.object(value, path)?;
    c.declared(obj, path, TRANSIT_MAP_FIELDS);

    let transit_id = c.required(obj, path, "transit_id", FieldChecker::uuid::<TransitId>);
    let active_aspects = c.required(obj, path, "active_aspects", |c, v, f| {
        c.list_of(v, f, active_aspect)
    });
    let lunar_phase = c.required(obj, path, "lunar_phase", |c, v, f| {
        c.number_in(v, f, CelestialTransitMap::LUNAR_PHASE_RANGE)
    });

    Some(CelestialTransitMap {
        transit_id: transit_id?,
        active_aspects: active_aspects?,
        lunar_phase: lunar_phase?,
    })
}

// =========================================================================
// CloudEvent
// =========================================================================

const CLOUD_EVENT_FIELDS: &[&str] = &[
    "specversion",
    "type",
    "source",
    "id",
    "time",
    "datacontenttype",
    "subject",
    "dataschema",
    "data",
];

/// Strict envelope; `data` is dispatched on `type`.
pub(crate) fn cloud_event(c: &mut FieldChecker, value: &Value, path: &str) -> Option<CloudEvent> {
    let obj = c.object(value, path)?;
    c.declared(obj, path, CLOUD_EVENT_FIELDS);

    let specversion = c.required(obj, path, "specversion", |c, v, f| c.literal(v, f, SPEC_VERSION));
    let event_type = c.required(obj, path, "type", FieldChecker::non_empty_string);
    let source = c.required(obj, path, "source", FieldChecker::non_empty_string);
    let id = c.required(obj, path, "id", FieldChecker::non_empty_string);
    let time = c.required(obj, path, "time", FieldChecker::timestamp);
    let datacontenttype = c.required(obj, path, "datacontenttype", |c, v, f| {
        c.literal(v, f, DATA_CONTENT_TYPE)
    });
    let subject = c.optional(obj, path, "subject", FieldChecker::string);
    let dataschema = c.optional(obj, path, "dataschema", FieldChecker::string);
    let known_type = event_type.as_deref().and_then(EventType::parse);
    let data = c.required(obj, path, "data", |c, v, f| event_payload(c, v, f, known_type));

    specversion?;
    datacontenttype?;
    Some(CloudEvent {
        id: id?,
        source: source?,
        event_type: event_type?,
        time: time?,
        subject: subject?,
        dataschema: dataschema?,
        data: data?,
    })
}

/// Payload keys are forward-compatible: undeclared ones are dropped.
fn event_payload(
    c: &mut FieldChecker,
    value: &Value,
    path: &str,
    event_type: Option<EventType>,
) -> Option<EventPayload> {
    let obj = c.object(value, path)?;

    let Some(event_type) = event_type else {
        return Some(EventPayload::Opaque(obj.clone()));
    };

    match event_type {
        EventType::DreamLogged => {
            let dream_id = c.required(obj, path, "dream_id", FieldChecker::uuid::<DreamId>);
            let user_id = c.required(obj, path, "user_id", FieldChecker::uuid::<UserId>);
            let status = c.required(obj, path, "status", FieldChecker::string);
            Some(EventPayload::DreamLogged(DreamLoggedData {
                dream_id: dream_id?,
                user_id: user_id?,
                status: status?,
            }))
        }
        EventType::ArchetypeExtracted => {
            let dream_id = c.required(obj, path, "dream_id", FieldChecker::uuid::<DreamId>);
            let user_id = c.required(obj, path, "user_id", FieldChecker::uuid::<UserId>);
            let archetypes = c.required(obj, path, "archetypes", |c, v, f| {
                c.list_of(v, f, archetypal_node)
            });
            Some(EventPayload::ArchetypeExtracted(ArchetypeExtractedData {
                dream_id: dream_id?,
                user_id: user_id?,
                archetypes: archetypes?,
            }))
        }
        EventType::TransitsCalculated => {
            let dream_id = c.required(obj, path, "dream_id", FieldChecker::uuid::<DreamId>);
            let user_id = c.required(obj, path, "user_id", FieldChecker::uuid::<UserId>);
            let transit_id = c.required(obj, path, "transit_id", FieldChecker::uuid::<TransitId>);
            Some(EventPayload::TransitsCalculated(TransitsCalculatedData {
                dream_id: dream_id?,
                user_id: user_id?,
                transit_id: transit_id?,
            }))
        }
        EventType::NarrativeSynthesized => {
            let dream_id = c.required(obj, path, "dream_id", FieldChecker::uuid::<DreamId>);
            let user_id = c.required(obj, path, "user_id", FieldChecker::uuid::<UserId>);
            Some(EventPayload::NarrativeSynthesized(NarrativeSynthesizedData {
                dream_id: dream_id?,
                user_id: user_id?,
            }))
        }
        EventType::SecurityViolation => {
            let user_id = c.required(obj, path, "user_id", FieldChecker::uuid::<UserId>);
            let safety_level = c.required(obj, path, "safety_level", FieldChecker::string);
            let violations = c.required(obj, path, "violations", FieldChecker::string_list);
            let action = c.required(obj, path, "action", FieldChecker::string);
            Some(EventPayload::SecurityViolation(SecurityViolationData {
                user_id: user_id?,
                safety_level: safety_level?,
                violations: violations?,
                action: action?,
            }))
        }
        EventType::ResonanceCohortFound => {
            let dream_id = c.required(obj, path, "dream_id", FieldChecker::uuid::<DreamId>);
            let user_id = c.required(obj, path, "user_id", FieldChecker::uuid::<UserId>);
            let cohort_size = c.required(obj, path, "cohort_size", FieldChecker::count);
            Some(EventPayload::ResonanceCohortFound(ResonanceCohortFoundData {
                dream_id: dream_id?,
                user_id: user_id?,
                cohort_size: cohort_size?,
            }))
        }
    }
}

// =========================================================================
// Context registry
// =========================================================================

const REGISTRY_ENTRY_FIELDS: &[&str] = &[
    "user_context_tier",
    "temporal_context",
    "active_narrative_threads",
    "safety_constraints",
];

pub(crate) fn registry_entry(c: &mut FieldChecker, value: &Value, path: &str) -> Option<RegistryEntry> {
    let obj = c.object(value, path)?;
    c.declared(obj, path, REGISTRY_ENTRY_FIELDS);

    let user_context_tier = c.required(obj, path, "user_context_tier", user_context_tier);
    let temporal_context = c.required(obj, path, "temporal_context", temporal_context);
    let active_narrative_threads = c.required(obj, path, "active_narrative_threads", |c, v, f| {
        c.list_of(v, f, narrative_thread)
    });
    let safety_constraints = c.required(obj, path, "safety_constraints", safety_constraints);

    Some(RegistryEntry {
        user_context_tier: user_context_tier?,
        temporal_context: temporal_context?,
        active_narrative_threads: active_narrative_threads?,
        safety_constraints: safety_constraints?,
    })
}

fn user_context_tier(c: &mut FieldChecker, value: &Value, path: &str) -> Option<UserContextTier> {
    let obj = c.object(value, path)?;
    c.declared(obj, path, &["tier_level", "access_grants"]);

    let tier_level = c.required(obj, path, "tier_level", FieldChecker::string);
    let access_grants = c.required(obj, path, "access_grants", FieldChecker::string_list);

    Some(UserContextTier {
        tier_level: tier_level?,
        access_grants: access_grants?,
    })
}

fn temporal_context(c: &mut FieldChecker, value: &Value, path: &str) -> Option<TemporalContext> {
    let obj = c.object(value, path)?;
    c.declared(obj, path, &["current_session_id", "last_interaction_delta_hours"]);

    let current_session_id = c.required(obj, path, "current_session_id", FieldChecker::string);
    let last_interaction_delta_hours =
        c.required(obj, path, "last_interaction_delta_hours", FieldChecker::number);

    Some(TemporalContext {
        current_session_id: current_session_id?,
        last_interaction_delta_hours: last_interaction_delta_hours?,
    })
}

fn narrative_thread(c: &mut FieldChecker, value: &Value, path: &str) -> Option<ActiveNarrativeThread> {
    let obj = c.object(value, path)?;
    c.declared(obj, path, &["thread_id", "archetype", "status"]);

    let thread_id = c.required(obj, path, "thread_id", FieldChecker::string);
    let archetype = c.required(obj, path, "archetype", FieldChecker::token);
    let status = c.required(obj, path, "status", FieldChecker::string);

    Some(ActiveNarrativeThread {
        thread_id: thread_id?,
        archetype: archetype?,
        status: status?,
    })
}

fn safety_constraints(c: &mut FieldChecker, value: &Value, path: &str) -> Option<SafetyConstraints> {
    let obj = c.object(value, path)?;
    c.declared(obj, path, &["trigger_warnings", "prohibited_topics"]);

    let trigger_warnings = c.required(obj, path, "trigger_warnings", FieldChecker::string_list);
    let prohibited_topics = c.required(obj, path, "prohibited_topics", FieldChecker::string_list);

    Some(SafetyConstraints {
        trigger_warnings: trigger_warnings?,
        prohibited_topics: prohibited_topics?,
    })
}

// =========================================================================
// Ingestion response
// =========================================================================

/// Open at the top level; nested analysis sections keep their own schemas.
pub(crate) fn ingest_dream_response(
    c: &mut FieldChecker,
    value: &Value,
    path: &str,
) -> Option<IngestDreamResponse> {
    let obj = c.object(value, path)?;

    let status = c.optional(obj, path, "status", FieldChecker::string);
    let archetype = c.optional(obj, path, "archetype", archetypal_node);
    let transits = c.optional(obj, path, "transits", celestial_transit_map);
    let narrative = c.optional(obj, path, "narrative", FieldChecker::string);
    let cohort = c.optional(obj, path, "cohort", FieldChecker::opaque);
    let engagement_trigger = c.optional(obj, path, "engagement_trigger", FieldChecker::opaque);

    Some(IngestDreamResponse {
        status: status?,
        archetype: archetype?,
        transits: transits?,
        narrative: narrative?,
        cohort: cohort?,
        engagement_trigger: engagement_trigger?,
    })
}

// =========================================================================
// Decagon analysis
// =========================================================================

const DECAGON_FIELDS: &[&str] = &[
    "analysis_id",
    "timestamp",
    "shadow_weave",
    "celestial_transit",
    "nakshatra_snapshot",
    "arabic_lot",
    "dasha_period",
    "somatic_resonance",
    "ancestral_ghost",
    "collective_ripple",
    "digital_doppelganger",
    "firdaria_phase",
];

const SHADOW_WEAVE_FIELDS: &[&str] = &[
    "archetype_id",
    "activation_strength",
    "integration_status",
    "symbolic_fragments",
    "mythological_resonance",
];

const NAKSHATRA_FIELDS: &[&str] = &["nakshatra", "pada", "ruling_planet", "deity", "archetypal_theme"];

const ARABIC_LOT_FIELDS: &[&str] = &["lot_name", "longitude", "house_position", "hermetic_meaning"];

const DASHA_FIELDS: &[&str] = &[
    "maha_dasha_lord",
    "antardasha_lord",
    "start_date",
    "end_date",
    "karmic_theme",
];

const SOMATIC_FIELDS: &[&str] = &["hrv_snapshot", "biometric_context", "body_map_activations"];

const ANCESTRAL_FIELDS: &[&str] = &["lineage_pattern", "generation_depth", "archetypal_burden"];

const RIPPLE_FIELDS: &[&str] = &["zeitgeist_theme", "cohort_similarity_score", "archetypal_current"];

const DOPPELGANGER_FIELDS: &[&str] = &["mirror_narrative", "shadow_inversion"];

const FIRDARIA_FIELDS: &[&str] = &[
    "ruling_planet",
    "start_age",
    "end_age",
    "current_phase",
    "archetypal_task",
];

pub(crate) fn decagon_analysis_object(
    c: &mut FieldChecker,
    value: &Value,
    path: &str,
) -> Option<DecagonAnalysisObject> {
    let obj = c.object(value, path)?;
    c.declared(obj, path, DECAGON_FIELDS);

    let analysis_id = c.required(obj, path, "analysis_id", FieldChecker::non_empty_string);
    let timestamp = c.required(obj, path, "timestamp", FieldChecker::timestamp);
    let shadow_weave = c.required(obj, path, "shadow_weave", |c, v, f| {
        c.list_of(v, f, shadow_weave_node)
    });
    let celestial_transit = c.required(obj, path, "celestial_transit", |c, v, f| {
        c.list_of(v, f, |c, v, f| c.object(v, f).cloned())
    });
    let nakshatra_snapshot = c.required(obj, path, "nakshatra_snapshot", nakshatra_snapshot);
    let arabic_lot = c.required(obj, path, "arabic_lot", |c, v, f| c.list_of(v, f, arabic_lot));
    let dasha_period = c.required(obj, path, "dasha_period", dasha_period);
    let somatic_resonance = c.required(obj, path, "somatic_resonance", somatic_resonance);
    let ancestral_ghost = c.optional(obj, path, "ancestral_ghost", ancestral_ghost);
    let collective_ripple = c.optional(obj, path, "collective_ripple", collective_ripple);
    let digital_doppelganger = c.optional(obj, path, "digital_doppelganger", digital_doppelganger);
    let firdaria_phase = c.required(obj, path, "firdaria_phase", firdaria_phase);

    Some(DecagonAnalysisObject {
        analysis_id: analysis_id?,
        timestamp: timestamp?,
        shadow_weave: shadow_weave?,
        celestial_transit: celestial_transit?,
        nakshatra_snapshot: nakshatra_snapshot?,
        arabic_lot: arabic_lot?,
        dasha_period: dasha_period?,
        somatic_resonance: somatic_resonance?,
        ancestral_ghost: ancestral_ghost?,
        collective_ripple: collective_ripple?,
        digital_doppelganger: digital_doppelganger?,
        firdaria_phase: firdaria_phase?,
    })
}

pub(crate) fn shadow_weave_node(c: &mut FieldChecker, value: &Value, path: &str) -> Option<ShadowWeaveNode> {
    let obj = c.object(value, path)?;
    c.declared(obj, path, SHADOW_WEAVE_FIELDS);

    let archetype_id = c.required(obj, path, "archetype_id", FieldChecker::token);
    let activation_strength = c.required(obj, path, "activation_strength", |c, v, f| {
        c.number_in(v, f, ShadowWeaveNode::ACTIVATION_RANGE)
    });
    let integration_status = c.required(obj, path, "integration_status", FieldChecker::token);
    let symbolic_fragments = c.required(obj, path, "symbolic_fragments", FieldChecker::string_list);
    let mythological_resonance = c.optional(obj, path, "mythological_resonance", FieldChecker::string);

    Some(ShadowWeaveNode {
        archetype_id: archetype_id?,
        activation_strength: activation_strength?,
        integration_status: integration_status?,
        symbolic_fragments: symbolic_fragments?,
        mythological_resonance: mythological_resonance?,
    })
}

pub(crate) fn nakshatra_snapshot(
    c: &mut FieldChecker,
    value: &Value,
    path: &str,
) -> Option<NakshatraSnapshot> {
    let obj = c.object(value, path)?;
    c.declared(obj, path, NAKSHATRA_FIELDS);

    let nakshatra = c.required(obj, path, "nakshatra", FieldChecker::token);
    let pada = c.required(obj, path, "pada", |c, v, f| {
        c.integer_in(v, f, NakshatraSnapshot::PADA_RANGE)
    });
    let ruling_planet = c.required(obj, path, "ruling_planet", FieldChecker::token);
    let deity = c.required(obj, path, "deity", FieldChecker::non_empty_string);
    let archetypal_theme = c.required(obj, path, "archetypal_theme", FieldChecker::non_empty_string);

    Some(NakshatraSnapshot {
        nakshatra: nakshatra?,
        pada: pada?,
        ruling_planet: ruling_planet?,
        deity: deity?,
        archetypal_theme: archetypal_theme?,
    })
}

pub(crate) fn arabic_lot(c: &mut FieldChecker, value: &Value, path: &str) -> Option<ArabicLot> {
    let obj = c.object(value, path)?;
    c.declared(obj, path, ARABIC_LOT_FIELDS);

    let lot_name = c.required(obj, path, "lot_name", FieldChecker::non_empty_string);
    let longitude = c.required(obj, path, "longitude", |c, v, f| {
        c.number_in(v, f, ArabicLot::LONGITUDE_RANGE)
    });
    let house_position = c.required(obj, path, "house_position", |c, v, f| {
        c.integer_in(v, f, ArabicLot::HOUSE_RANGE)
    });
    let hermetic_meaning = c.required(obj, path, "hermetic_meaning", FieldChecker::non_empty_string);

    Some(ArabicLot {
        lot_name: lot_name?,
        longitude: longitude?,
        house_position: house_position?,
        hermetic_meaning: hermetic_meaning?,
    })
}

pub(crate) fn dasha_period(c: &mut FieldChecker, value: &Value, path: &str) -> Option<DashaPeriod> {
    let obj = c.object(value, path)?;
    c.declared(obj, path, DASHA_FIELDS);

    let maha_dasha_lord = c.required(obj, path, "maha_dasha_lord", FieldChecker::token);
    let antardasha_lord = c.required(obj, path, "antardasha_lord", FieldChecker::token);
    let start_date = c.required(obj, path, "start_date", FieldChecker::timestamp);
    let end_date = c.required(obj, path, "end_date", FieldChecker::timestamp);
    let karmic_theme = c.required(obj, path, "karmic_theme", FieldChecker::non_empty_string);

    Some(DashaPeriod {
        maha_dasha_lord: maha_dasha_lord?,
        antardasha_lord: antardasha_lord?,
        start_date: start_date?,
        end_date: end_date?,
        karmic_theme: karmic_theme?,
    })
}

/// `biometric_context` here is a free-form device dump, unlike the typed
/// context on a dream submission.
pub(crate) fn somatic_resonance(
    c: &mut FieldChecker,
    value: &Value,
    path: &str,
) -> Option<SomaticResonance> {
    let obj = c.object(value, path)?;
    c.declared(obj, path, SOMATIC_FIELDS);

    let hrv_snapshot = c.required(obj, path, "hrv_snapshot", |c, v, f| {
        c.list_of(v, f, FieldChecker::number)
    });
    let biometric_context = c.required(obj, path, "biometric_context", |c, v, f| {
        c.object(v, f).cloned()
    });
    let body_map_activations = c.required(obj, path, "body_map_activations", |c, v, f| {
        c.map_of(v, f, |c, v, f| c.number_in(v, f, SomaticResonance::ACTIVATION_RANGE))
    });

    Some(SomaticResonance {
        hrv_snapshot: hrv_snapshot?,
        biometric_context: biometric_context?,
        body_map_activations: body_map_activations?,
    })
}

pub(crate) fn ancestral_ghost(c: &mut FieldChecker, value: &Value, path: &str) -> Option<AncestralGhost> {
    let obj = c.object(value, path)?;
    c.declared(obj, path, ANCESTRAL_FIELDS);

    let lineage_pattern = c.required(obj, path, "lineage_pattern", FieldChecker::non_empty_string);
    let generation_depth = c.required(obj, path, "generation_depth", |c, v, f| {
        c.integer_in(v, f, NumericRange::at_least(0.0))
    });
    let archetypal_burden = c.required(obj, path, "archetypal_burden", FieldChecker::non_empty_string);

    Some(AncestralGhost {
        lineage_pattern: lineage_pattern?,
        generation_depth: generation_depth?,
        archetypal_burden: archetypal_burden?,
    })
}

pub(crate) fn collective_ripple(
    c: &mut FieldChecker,
    value: &Value,
    path: &str,
) -> Option<CollectiveRipple> {
    let obj = c.object(value, path)?;
    c.declared(obj, path, RIPPLE_FIELDS);

    let zeitgeist_theme = c.required(obj, path, "zeitgeist_theme", FieldChecker::non_empty_string);
    let cohort_similarity_score = c.required(obj, path, "cohort_similarity_score", |c, v, f| {
        c.number_in(v, f, CollectiveRipple::SIMILARITY_RANGE)
    });
    let archetypal_current = c.required(obj, path, "archetypal_current", FieldChecker::non_empty_string);

    Some(CollectiveRipple {
        zeitgeist_theme: zeitgeist_theme?,
        cohort_similarity_score: cohort_similarity_score?,
        archetypal_current: archetypal_current?,
    })
}

pub(crate) fn digital_doppelganger(
    c: &mut FieldChecker,
    value: &Value,
    path: &str,
) -> Option<DigitalDoppelganger> {
    let obj = c.object(value, path)?;
    c.declared(obj, path, DOPPELGANGER_FIELDS);

    let mirror_narrative = c.required(obj, path, "mirror_narrative", FieldChecker::non_empty_string);
    let shadow_inversion = c.required(obj, path, "shadow_inversion", FieldChecker::non_empty_string);

    Some(DigitalDoppelganger {
        mirror_narrative: mirror_narrative?,
        shadow_inversion: shadow_inversion?,
    })
}

/// `end_age` is checked against `start_age` once the latter is known.
pub(crate) fn firdaria_phase(c: &mut FieldChecker, value: &Value, path: &str) -> Option<FirdariaPhase> {
    let obj = c.object(value, path)?;
    c.declared(obj, path, FIRDARIA_FIELDS);

    let ruling_planet = c.required(obj, path, "ruling_planet", FieldChecker::token);
    let start_age = c.required(obj, path, "start_age", |c, v, f| {
        c.number_in(v, f, FirdariaPhase::START_AGE_RANGE)
    });
    let end_floor = NumericRange::at_least(start_age.unwrap_or(0.0));
    let end_age = c.required(obj, path, "end_age", |c, v, f| c.number_in(v, f, end_floor));
    let current_phase = c.required(obj, path, "current_phase", FieldChecker::boolean);
    let archetypal_task = c.required(obj, path, "archetypal_task", FieldChecker::non_empty_string);

    Some(FirdariaPhase {
        ruling_planet: ruling_planet?,
        start_age: start_age?,
        end_age: end_age?,
        current_phase: current_phase?,
        archetypal_task: archetypal_task?,
    })
}

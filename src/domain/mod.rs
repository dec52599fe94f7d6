//! Domain layer containing the dream-analysis data contracts.
//!
//! # Module Organization
//!
//! - `foundation` - Identifiers, timestamps, and shared error types
//! - `vocabulary` - Canonical token sets and the legacy alias table
//! - `schema` - Record registry, validation errors, typed records
//! - `dream` - The journal entry submitted for analysis
//! - `archetype` - Archetypal nodes detected in a dream
//! - `celestial` - Planetary transits and aspects
//! - `decagon` - The ten-dimension analysis and its sub-records
//! - `events` - CloudEvents envelopes for the analysis pipeline
//! - `context` - Per-user context registry entries
//! - `ingestion` - The analysis API's answer to a submission

pub mod archetype;
pub mod celestial;
pub mod context;
pub mod decagon;
pub mod dream;
pub mod events;
pub mod foundation;
pub mod ingestion;
pub mod schema;
pub mod vocabulary;

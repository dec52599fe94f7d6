//! Canonical vocabularies - closed sets of string tokens.
//!
//! Each vocabulary has exactly one authoritative token set. Tokens from the
//! retired schema definition survive only as entries in the [`legacy`]
//! alias table, never as a second live vocabulary.
//!
//! # Example
//!
//! ```
//! use aetheria::domain::vocabulary::{validate_token, Vocabulary};
//!
//! assert!(validate_token(Vocabulary::ArchetypeId, "SHADOW"));
//! assert!(!validate_token(Vocabulary::ArchetypeId, "GHOST"));
//! ```

#[macro_use]
mod macros;

mod archetype;
mod celestial;
mod input_modality;
pub mod legacy;
mod nakshatra;
mod sleep_phase;

pub use archetype::{ArchetypeId, IntegrationStatus};
pub use celestial::{AspectType, Planet, PsychologicalPressure};
pub use input_modality::InputModality;
pub use legacy::{LegacyAlias, LegacyTokenPolicy, TokenResolution};
pub use nakshatra::Nakshatra;
pub use sleep_phase::SleepPhase;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::SchemaDefinitionError;

/// Names of every closed vocabulary in the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vocabulary {
    SleepPhase,
    ArchetypeId,
    IntegrationStatus,
    Planet,
    AspectType,
    PsychologicalPressure,
    InputModality,
    Nakshatra,
}

impl Vocabulary {
    /// Returns all vocabularies.
    pub fn all() -> &'static [Vocabulary] {
        &[
            Vocabulary::SleepPhase,
            Vocabulary::ArchetypeId,
            Vocabulary::IntegrationStatus,
            Vocabulary::Planet,
            Vocabulary::AspectType,
            Vocabulary::PsychologicalPressure,
            Vocabulary::InputModality,
            Vocabulary::Nakshatra,
        ]
    }

    /// Returns the schema name of this vocabulary.
    pub fn name(&self) -> &'static str {
        match self {
            Vocabulary::SleepPhase => "sleep_phase",
            Vocabulary::ArchetypeId => "archetype_id",
            Vocabulary::IntegrationStatus => "integration_status",
            Vocabulary::Planet => "planet",
            Vocabulary::AspectType => "aspect_type",
            Vocabulary::PsychologicalPressure => "psychological_pressure",
            Vocabulary::InputModality => "input_modality",
            Vocabulary::Nakshatra => "nakshatra",
        }
    }

    /// Returns the canonical tokens in their declared order.
    pub fn tokens(&self) -> &'static [&'static str] {
        match self {
            Vocabulary::SleepPhase => SleepPhase::TOKENS,
            Vocabulary::ArchetypeId => ArchetypeId::TOKENS,
            Vocabulary::IntegrationStatus => IntegrationStatus::TOKENS,
            Vocabulary::Planet => Planet::TOKENS,
            Vocabulary::AspectType => AspectType::TOKENS,
            Vocabulary::PsychologicalPressure => PsychologicalPressure::TOKENS,
            Vocabulary::InputModality => InputModality::TOKENS,
            Vocabulary::Nakshatra => Nakshatra::TOKENS,
        }
    }

    /// Case-sensitive membership test against the canonical set.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens().contains(&token)
    }
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Vocabulary {
    type Err = SchemaDefinitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Vocabulary::all()
            .iter()
            .copied()
            .find(|v| v.name() == s)
            .ok_or_else(|| SchemaDefinitionError::UnknownVocabulary(s.to_string()))
    }
}

/// Returns true when `value` is one of the canonical tokens of `vocabulary`.
///
/// Legacy aliases are not members; resolve them with
/// [`legacy::resolve`] first.
pub fn validate_token(vocabulary: Vocabulary, value: &str) -> bool {
    vocabulary.contains(value)
}

/// A typed member of one vocabulary.
pub trait VocabularyToken: Sized + Copy + 'static {
    /// The vocabulary this type enumerates.
    const VOCABULARY: Vocabulary;

    /// Parses a canonical token. Legacy aliases return `None`.
    fn from_token(token: &str) -> Option<Self>;

    /// Returns the canonical token.
    fn as_token(&self) -> &'static str;
}

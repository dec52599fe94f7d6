//! Legacy token aliases from the retired schema definition.
//!
//! Two schema sources once disagreed on several vocabularies. The
//! runtime-validated source is canonical; every token that only the
//! type-only source used is listed here with the canonical token it maps
//! to, or `None` when there is no faithful equivalent.
//!
//! | vocabulary     | legacy  | canonical   |
//! |----------------|---------|-------------|
//! | sleep_phase    | `light` | `NREM2`     |
//! | sleep_phase    | `deep`  | `NREM3`     |
//! | sleep_phase    | `NREM`  | unsupported |
//! | sleep_phase    | `awake` | unsupported |
//! | archetype_id   | `SENEX` | unsupported |
//!
//! The analysis producer still writes integration statuses in upper case
//! (`UNCONSCIOUS`, `CONFRONTATION`, ...). Each maps to its lower-case
//! canonical token.

use serde::Deserialize;

use super::{Vocabulary, VocabularyToken};

/// One entry of the alias table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyAlias {
    pub vocabulary: Vocabulary,
    pub legacy: &'static str,
    pub canonical: Option<&'static str>,
}

static LEGACY_ALIASES: &[LegacyAlias] = &[
    LegacyAlias {
        vocabulary: Vocabulary::SleepPhase,
        legacy: "light",
        canonical: Some("NREM2"),
    },
    LegacyAlias {
        vocabulary: Vocabulary::SleepPhase,
        legacy: "deep",
        canonical: Some("NREM3"),
    },
    LegacyAlias {
        vocabulary: Vocabulary::SleepPhase,
        legacy: "NREM",
        canonical: None,
    },
    LegacyAlias {
        vocabulary: Vocabulary::SleepPhase,
        legacy: "awake",
        canonical: None,
    },
    LegacyAlias {
        vocabulary: Vocabulary::ArchetypeId,
        legacy: "SENEX",
        canonical: None,
    },
    LegacyAlias {
        vocabulary: Vocabulary::IntegrationStatus,
        legacy: "UNCONSCIOUS",
        canonical: Some("unconscious"),
    },
    LegacyAlias {
        vocabulary: Vocabulary::IntegrationStatus,
        legacy: "CONFRONTATION",
        canonical: Some("confrontation"),
    },
    LegacyAlias {
        vocabulary: Vocabulary::IntegrationStatus,
        legacy: "ASSIMILATION",
        canonical: Some("assimilation"),
    },
    LegacyAlias {
        vocabulary: Vocabulary::IntegrationStatus,
        legacy: "INTEGRATED",
        canonical: Some("integrated"),
    },
];

/// What to do with tokens found in the alias table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegacyTokenPolicy {
    /// Every legacy token is a violation.
    Reject,
    /// Mapped legacy tokens are rewritten and reported as deprecated.
    #[default]
    AcceptDeprecated,
}

/// Outcome of resolving a raw token against a vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenResolution<T> {
    /// The token is canonical.
    Canonical(T),
    /// The token is a legacy alias that was rewritten.
    Deprecated { value: T, alias: &'static LegacyAlias },
    /// The token is a legacy alias that cannot be accepted.
    Unsupported { alias: &'static LegacyAlias },
    /// The token belongs to neither the canonical set nor the alias table.
    Unknown,
}

/// Returns every alias recorded for a vocabulary.
pub fn aliases_for(vocabulary: Vocabulary) -> impl Iterator<Item = &'static LegacyAlias> {
    LEGACY_ALIASES
        .iter()
        .filter(move |alias| alias.vocabulary == vocabulary)
}

/// Looks up a legacy token.
pub fn lookup(vocabulary: Vocabulary, token: &str) -> Option<&'static LegacyAlias> {
    aliases_for(vocabulary).find(|alias| alias.legacy == token)
}

/// Resolves a raw token into a typed vocabulary member.
pub fn resolve<T: VocabularyToken>(token: &str, policy: LegacyTokenPolicy) -> TokenResolution<T> {
    if let Some(value) = T::from_token(token) {
        return TokenResolution::Canonical(value);
    }

    let Some(alias) = lookup(T::VOCABULARY, token) else {
        return TokenResolution::Unknown;
    };

    match (policy, alias.canonical.and_then(T::from_token)) {
        (LegacyTokenPolicy::AcceptDeprecated, Some(value)) => {
            TokenResolution::Deprecated { value, alias }
        }
        _ => TokenResolution::Unsupported { alias },
    }
}

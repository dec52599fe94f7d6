//! Record validation configuration

use serde::Deserialize;

use crate::domain::schema::UnknownFieldPolicy;
use crate::domain::vocabulary::LegacyTokenPolicy;

/// How strictly external records are checked
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidationConfig {
    /// `reject` or `accept_deprecated`
    #[serde(default)]
    pub legacy_tokens: LegacyTokenPolicy,

    /// `reject` or `ignore`, for keys the schema does not declare
    #[serde(default)]
    pub unknown_fields: UnknownFieldPolicy,
}

use serde::Serialize;

use crate::domain::foundation::Timestamp;
use crate::domain::vocabulary::ArchetypeId;

/// Subscription tier and the features it unlocks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserContextTier {
    pub tier_level: String,
    pub access_grants: Vec<String>,
}

impl UserContextTier {
    pub fn grants(&self, feature: &str) -> bool {
        self.access_grants.iter().any(|g| g == feature)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemporalContext {
    pub current_session_id: String,
    pub last_interaction_delta_hours: f64,
}

/// A storyline the dreamer keeps returning to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveNarrativeThread {
    pub thread_id: String,
    pub archetype: ArchetypeId,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SafetyConstraints {
    pub trigger_warnings: Vec<String>,
    pub prohibited_topics: Vec<String>,
}

/// Everything the registry knows about one user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistryEntry {
    pub user_context_tier: UserContextTier,
    pub temporal_context: TemporalContext,
    pub active_narrative_threads: Vec<ActiveNarrativeThread>,
    pub safety_constraints: SafetyConstraints,
}

impl RegistryEntry {
    /// Sets the hours elapsed between `last_interaction` and `now`.
    pub fn touch(&mut self, last_interaction: Timestamp, now: Timestamp) {
        self.temporal_context.last_interaction_delta_hours = last_interaction.hours_until(&now);
    }

    pub fn replace_threads(&mut self, threads: Vec<ActiveNarrativeThread>) {
        self.active_narrative_threads = threads;
    }

    /// Threads following the given archetype.
    pub fn threads_for(&self, archetype: ArchetypeId) -> impl Iterator<Item = &ActiveNarrativeThread> {
        self.active_narrative_threads
            .iter()
            .filter(move |t| t.archetype == archetype)
    }
}

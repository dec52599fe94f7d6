//! Context module - per-user state the analysis pipeline reads before it
//! interprets a dream.

mod registry_entry;

pub use registry_entry::{
    ActiveNarrativeThread, RegistryEntry, SafetyConstraints, TemporalContext, UserContextTier,
};

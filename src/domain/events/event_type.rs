use std::fmt;

/// Event types emitted by the analysis pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    DreamLogged,
    ArchetypeExtracted,
    TransitsCalculated,
    NarrativeSynthesized,
    SecurityViolation,
    ResonanceCohortFound,
}

impl EventType {
    pub fn all() -> &'static [EventType] {
        &[
            EventType::DreamLogged,
            EventType::ArchetypeExtracted,
            EventType::TransitsCalculated,
            EventType::NarrativeSynthesized,
            EventType::SecurityViolation,
            EventType::ResonanceCohortFound,
        ]
    }

    /// The CloudEvents `type` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::DreamLogged => "com.aetheria.dream.logged",
            EventType::ArchetypeExtracted => "com.aetheria.archetype.extracted",
            EventType::TransitsCalculated => "com.aetheria.transits.calculated",
            EventType::NarrativeSynthesized => "com.aetheria.narrative.synthesized",
            EventType::SecurityViolation => "com.aetheria.security.violation",
            EventType::ResonanceCohortFound => "com.aetheria.resonance.cohort_found",
        }
    }

    /// Pipeline stage appended to the service source, e.g. `//aetheria.api/ingestion`.
    pub fn source_path(&self) -> &'static str {
        match self {
            EventType::DreamLogged => "ingestion",
            EventType::ArchetypeExtracted => "jungian-decoder",
            EventType::TransitsCalculated => "celestial-engine",
            EventType::NarrativeSynthesized => "narrative-weaver",
            EventType::SecurityViolation => "safety-sentinel",
            EventType::ResonanceCohortFound => "resonance-librarian",
        }
    }

    /// Looks up a known type. Unknown strings are legal event types, so this
    /// returns `None` instead of failing.
    pub fn parse(s: &str) -> Option<EventType> {
        EventType::all().iter().copied().find(|t| t.as_str() == s)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_types_round_trip() {
        for t in EventType::all() {
            assert_eq!(EventType::parse(t.as_str()), Some(*t));
        }
    }

    #[test]
    fn foreign_types_are_not_known() {
        assert_eq!(EventType::parse("com.example.object.created"), None);
        assert_eq!(EventType::parse("dream.logged"), None);
    }
}

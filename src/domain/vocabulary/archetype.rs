//! Jungian archetype vocabularies.

canonical_vocabulary! {
    /// Primary Jungian category of an archetypal activation.
    ArchetypeId => Vocabulary::ArchetypeId {
        SelfArchetype = "SELF",
        Shadow = "SHADOW",
        Anima = "ANIMA",
        Animus = "ANIMUS",
        Persona = "PERSONA",
        Hero = "HERO",
        WiseOldMan = "WISE_OLD_MAN",
        GreatMother = "GREAT_MOTHER",
        PuerAeternus = "PUER_AETERNUS",
        Trickster = "TRICKSTER",
    }
}

canonical_vocabulary! {
    /// Stage of the dreamer's relationship with an archetype.
    IntegrationStatus => Vocabulary::IntegrationStatus {
        Unconscious = "unconscious",
        Confrontation = "confrontation",
        Assimilation = "assimilation",
        Integrated = "integrated",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vocabulary::VocabularyToken;

    #[test]
    fn self_archetype_uses_self_token() {
        assert_eq!(ArchetypeId::SelfArchetype.as_token(), "SELF");
        assert_eq!(ArchetypeId::from_token("SELF"), Some(ArchetypeId::SelfArchetype));
    }

    #[test]
    fn senex_is_not_canonical() {
        assert_eq!(ArchetypeId::from_token("SENEX"), None);
    }

    #[test]
    fn integration_status_deserializes_lowercase() {
        let status: IntegrationStatus = serde_json::from_str(r#""assimilation""#).unwrap();
        assert_eq!(status, IntegrationStatus::Assimilation);
    }
}

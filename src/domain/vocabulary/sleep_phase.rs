//! Sleep stage during which a dream likely occurred.

canonical_vocabulary! {
    /// AASM sleep stages. The coarse wearable labels (`light`, `deep`) are
    /// legacy aliases resolved in [`super::legacy`].
    SleepPhase => Vocabulary::SleepPhase {
        Rem = "REM",
        Nrem1 = "NREM1",
        Nrem2 = "NREM2",
        Nrem3 = "NREM3",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vocabulary::VocabularyToken;

    #[test]
    fn tokens_are_case_sensitive() {
        assert_eq!(SleepPhase::from_token("REM"), Some(SleepPhase::Rem));
        assert_eq!(SleepPhase::from_token("rem"), None);
    }

    #[test]
    fn serializes_to_canonical_token() {
        let json = serde_json::to_string(&SleepPhase::Nrem3).unwrap();
        assert_eq!(json, r#""NREM3""#);
    }
}

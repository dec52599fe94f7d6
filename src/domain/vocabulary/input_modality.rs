//! How the dream narrative reached the journal.

canonical_vocabulary! {
    /// Source of the raw dream content.
    InputModality => Vocabulary::InputModality {
        Text = "text",
        VoiceTranscript = "voice_transcript",
        HapticSignal = "haptic_signal",
    }
}

impl Default for InputModality {
    fn default() -> Self {
        InputModality::Text
    }
}

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::vocabulary::SleepPhase;

/// Physiological readings captured alongside a dream.
///
/// Keys other than `sleep_phase` and `heart_rate_variability` are kept in
/// `extra` and serialized back at the top level of the object.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BiometricContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_phase: Option<SleepPhase>,

    /// Heart rate variability in milliseconds. Never negative.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_rate_variability: Option<f64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BiometricContext {
    /// Keys with a typed field. Never stored in `extra`.
    pub const KNOWN_KEYS: &'static [&'static str] = &["sleep_phase", "heart_rate_variability"];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sleep_phase(mut self, phase: SleepPhase) -> Self {
        self.sleep_phase = Some(phase);
        self
    }

    pub fn with_heart_rate_variability(mut self, hrv: f64) -> Self {
        self.heart_rate_variability = Some(hrv);
        self
    }

    /// Adds an opaque reading under `key`.
    ///
    /// Keys in [`Self::KNOWN_KEYS`] are ignored; set those through their
    /// typed builders.
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        let key = key.into();
        if !Self::KNOWN_KEYS.contains(&key.as_str()) {
            self.extra.insert(key, value);
        }
        self
    }

    /// Returns true when no reading of any kind is present.
    pub fn is_empty(&self) -> bool {
        self.sleep_phase.is_none() && self.heart_rate_variability.is_none() && self.extra.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extra_keys_serialize_at_top_level() {
        let ctx = BiometricContext::new()
            .with_sleep_phase(SleepPhase::Rem)
            .with_extra("skin_temp_c", json!(36.4));

        let value = serde_json::to_value(&ctx).unwrap();
        assert_eq!(value, json!({"sleep_phase": "REM", "skin_temp_c": 36.4}));
    }

    #[test]
    fn extra_cannot_shadow_typed_readings() {
        let ctx = BiometricContext::new()
            .with_sleep_phase(SleepPhase::Rem)
            .with_extra("sleep_phase", json!("NREM3"))
            .with_extra("heart_rate_variability", json!(-1.0));

        assert!(ctx.extra.is_empty());
        let value = serde_json::to_value(&ctx).unwrap();
        assert_eq!(value, json!({"sleep_phase": "REM"}));
    }

    #[test]
    fn absent_readings_are_omitted() {
        let value = serde_json::to_value(BiometricContext::new()).unwrap();
        assert_eq!(value, json!({}));
        assert!(BiometricContext::new().is_empty());
    }
}

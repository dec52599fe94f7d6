use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::schema::NumericRange;

/// Body signals captured around the dream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SomaticResonance {
    /// Heart-rate-variability samples in capture order.
    pub hrv_snapshot: Vec<f64>,

    /// Free-form device readings. Not checked against any vocabulary.
    pub biometric_context: Map<String, Value>,

    /// Activation per body region, 0.0 to 1.0.
    pub body_map_activations: BTreeMap<String, f64>,
}

impl SomaticResonance {
    pub const ACTIVATION_RANGE: NumericRange = NumericRange::closed(0.0, 1.0);

    /// The most activated body region. Ties go to the first region by name.
    pub fn peak_region(&self) -> Option<(&str, f64)> {
        let mut peak: Option<(&str, f64)> = None;
        for (region, &level) in &self.body_map_activations {
            if peak.map_or(true, |(_, top)| level > top) {
                peak = Some((region.as_str(), level));
            }
        }
        peak
    }

    pub fn mean_hrv(&self) -> Option<f64> {
        if self.hrv_snapshot.is_empty() {
            return None;
        }
        Some(self.hrv_snapshot.iter().sum::<f64>() / self.hrv_snapshot.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resonance() -> SomaticResonance {
        SomaticResonance {
            hrv_snapshot: vec![0.5, 0.6, 0.7],
            biometric_context: json!({"sleep_phase": "REM", "heart_rate_avg": 65})
                .as_object()
                .unwrap()
                .clone(),
            body_map_activations: [("chest", 0.7), ("solar_plexus", 0.7), ("throat", 0.4)]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        }
    }

    #[test]
    fn peak_region_prefers_first_on_tie() {
        assert_eq!(resonance().peak_region(), Some(("chest", 0.7)));
    }

    #[test]
    fn mean_hrv_of_empty_snapshot_is_none() {
        let mut r = resonance();
        assert!((r.mean_hrv().unwrap() - 0.6).abs() < 1e-9);
        r.hrv_snapshot.clear();
        assert_eq!(r.mean_hrv(), None);
    }
}

//! Vedic dimensions: the Moon's lunar mansion and the running dasha.

use serde::Serialize;

use crate::domain::foundation::Timestamp;
use crate::domain::schema::NumericRange;
use crate::domain::vocabulary::{Nakshatra, Planet};

/// The lunar mansion the transiting Moon occupies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NakshatraSnapshot {
    pub nakshatra: Nakshatra,

    /// Quarter of the mansion, 1 to 4.
    pub pada: u8,

    pub ruling_planet: Planet,
    pub deity: String,
    pub archetypal_theme: String,
}

impl NakshatraSnapshot {
    pub const PADA_RANGE: NumericRange = NumericRange::closed(1.0, 4.0);
}

/// A Vimshottari major period with its running sub-period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaPeriod {
    pub maha_dasha_lord: Planet,
    pub antardasha_lord: Planet,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub karmic_theme: String,
}

impl DashaPeriod {
    /// Returns true if `at` falls inside the period, ends included.
    pub fn covers(&self, at: &Timestamp) -> bool {
        self.start_date <= *at && *at <= self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pada_range_is_one_to_four() {
        assert!(NakshatraSnapshot::PADA_RANGE.contains(1.0));
        assert!(NakshatraSnapshot::PADA_RANGE.contains(4.0));
        assert!(!NakshatraSnapshot::PADA_RANGE.contains(0.0));
        assert!(!NakshatraSnapshot::PADA_RANGE.contains(5.0));
    }

    #[test]
    fn nakshatra_serializes_with_its_spaced_name() {
        let snapshot = NakshatraSnapshot {
            nakshatra: Nakshatra::PurvaAshadha,
            pada: 2,
            ruling_planet: Planet::Venus,
            deity: "Apas".to_string(),
            archetypal_theme: "Invincibility".to_string(),
        };
        let value = serde_json::to_value(snapshot).unwrap();
        assert_eq!(value["nakshatra"], "Purva Ashadha");
        assert_eq!(value["ruling_planet"], "Venus");
    }

    #[test]
    fn covers_includes_both_ends() {
        let start = Timestamp::parse_iso8601("2020-01-01T00:00:00Z").unwrap();
        let end = Timestamp::parse_iso8601("2027-01-01T00:00:00Z").unwrap();
        let period = DashaPeriod {
            maha_dasha_lord: Planet::Ketu,
            antardasha_lord: Planet::Venus,
            start_date: start,
            end_date: end,
            karmic_theme: "Release".to_string(),
        };
        assert!(period.covers(&start));
        assert!(period.covers(&end));
        assert!(!period.covers(&Timestamp::parse_iso8601("2019-12-31T23:59:59Z").unwrap()));
    }
}

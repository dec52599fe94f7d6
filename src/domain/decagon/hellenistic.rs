//! Hermetic and Persian dimensions: Arabic lots and the firdaria.

use serde::Serialize;

use crate::domain::schema::NumericRange;
use crate::domain::vocabulary::Planet;

/// A calculated point such as the Lot of Fortune.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArabicLot {
    pub lot_name: String,

    /// Ecliptic longitude in degrees, 0 up to but excluding 360.
    pub longitude: f64,

    pub house_position: u8,
    pub hermetic_meaning: String,
}

impl ArabicLot {
    pub const LONGITUDE_RANGE: NumericRange = NumericRange::half_open(0.0, 360.0);
    pub const HOUSE_RANGE: NumericRange = NumericRange::closed(1.0, 12.0);

    /// Zero-based sign index, 0 for Aries through 11 for Pisces.
    pub fn sign_index(&self) -> u8 {
        (self.longitude.rem_euclid(360.0) / 30.0) as u8
    }
}

/// The Persian time-lord governing the dreamer's current age band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FirdariaPhase {
    pub ruling_planet: Planet,

    /// Age in years at which the phase begins.
    pub start_age: f64,

    /// Age in years at which the phase ends. Never before `start_age`.
    pub end_age: f64,

    pub current_phase: bool,
    pub archetypal_task: String,
}

impl FirdariaPhase {
    pub const START_AGE_RANGE: NumericRange = NumericRange::at_least(0.0);

    pub fn span_years(&self) -> f64 {
        self.end_age - self.start_age
    }
}

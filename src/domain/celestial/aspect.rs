use serde::Serialize;

use crate::domain::schema::NumericRange;
use crate::domain::vocabulary::{AspectType, Planet, PsychologicalPressure};

/// A transiting planet in aspect to a natal one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveAspect {
    pub transit_planet: Planet,
    pub natal_planet: Planet,
    pub aspect_type: AspectType,

    /// Deviation from the exact angle, in degrees.
    pub orb_degrees: f64,

    pub psychological_pressure: PsychologicalPressure,
}

impl ActiveAspect {
    pub const ORB_RANGE: NumericRange = NumericRange::closed(0.0, 10.0);

    /// Orbs under one degree are read as exact.
    pub fn is_exact(&self) -> bool {
        self.orb_degrees < 1.0
    }
}

use serde::Serialize;

use super::ActiveAspect;
use crate::domain::foundation::TransitId;
use crate::domain::schema::NumericRange;

/// Transits in effect for one dream, plus the phase of the Moon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CelestialTransitMap {
    pub transit_id: TransitId,
    pub active_aspects: Vec<ActiveAspect>,

    /// 0.0 is new moon, 0.5 full, 1.0 the next new moon.
    pub lunar_phase: f64,
}

impl CelestialTransitMap {
    pub const LUNAR_PHASE_RANGE: NumericRange = NumericRange::closed(0.0, 1.0);

    /// Aspects with an orb under one degree.
    pub fn exact_aspects(&self) -> impl Iterator<Item = &ActiveAspect> {
        self.active_aspects.iter().filter(|a| a.is_exact())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vocabulary::{AspectType, Planet, PsychologicalPressure};

    #[test]
    fn exact_aspects_filters_by_orb() {
        let aspect = |orb| ActiveAspect {
            transit_planet: Planet::Neptune,
            natal_planet: Planet::Sun,
            aspect_type: AspectType::Trine,
            orb_degrees: orb,
            psychological_pressure: PsychologicalPressure::Dissolution,
        };
        let map = CelestialTransitMap {
            transit_id: TransitId::new(),
            active_aspects: vec![aspect(0.2), aspect(4.5), aspect(0.9)],
            lunar_phase: 0.5,
        };
        assert_eq!(map.exact_aspects().count(), 2);
    }
}

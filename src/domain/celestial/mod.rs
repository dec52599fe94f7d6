//! Celestial module - planetary transits active at the time of a dream.
//!
//! Values here are produced by an external ephemeris service. The crate only
//! carries and validates them.

mod aspect;
mod transit_map;

pub use aspect::ActiveAspect;
pub use transit_map::CelestialTransitMap;

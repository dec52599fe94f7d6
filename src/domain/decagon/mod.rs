//! Decagon module - the ten-dimension analysis returned for a dream.
//!
//! A [`DecagonAnalysisObject`] bundles one reading per dimension: shadow
//! work, planetary transits, the lunar mansion, Arabic lots, the Vedic
//! dasha, somatic signals, three optional reflections, and the Persian
//! firdaria. These types only describe and check the shape of an analysis;
//! nothing here computes positions or periods.

mod analysis;
mod hellenistic;
mod reflections;
mod shadow_weave;
mod somatic;
mod vedic;

pub use analysis::DecagonAnalysisObject;
pub use hellenistic::{ArabicLot, FirdariaPhase};
pub use reflections::{AncestralGhost, CollectiveRipple, DigitalDoppelganger};
pub use shadow_weave::ShadowWeaveNode;
pub use somatic::SomaticResonance;
pub use vedic::{DashaPeriod, NakshatraSnapshot};

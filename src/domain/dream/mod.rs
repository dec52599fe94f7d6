//! Dream module - the journal entry submitted for analysis.
//!
//! A `DreamIngestionObject` is built client-side at submission time and never
//! changes afterwards. Its optional `BiometricContext` is an open payload:
//! known keys are typed, everything else is carried through untouched.

mod biometric;
mod ingestion_object;

pub use biometric::BiometricContext;
pub use ingestion_object::DreamIngestionObject;

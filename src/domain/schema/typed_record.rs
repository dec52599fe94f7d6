//! A validated record of any registered type.

use super::RecordType;
use crate::domain::archetype::ArchetypalNode;
use crate::domain::celestial::{ActiveAspect, CelestialTransitMap};
use crate::domain::context::RegistryEntry;
use crate::domain::decagon::{
    AncestralGhost, ArabicLot, CollectiveRipple, DashaPeriod, DecagonAnalysisObject,
    DigitalDoppelganger, FirdariaPhase, NakshatraSnapshot, ShadowWeaveNode, SomaticResonance,
};
use crate::domain::dream::DreamIngestionObject;
use crate::domain::events::CloudEvent;
use crate::domain::ingestion::IngestDreamResponse;

/// Output of untyped validation: one variant per [`RecordType`].
#[derive(Debug, Clone, PartialEq)]
pub enum TypedRecord {
    DreamIngestionObject(DreamIngestionObject),
    ArchetypalNode(ArchetypalNode),
    ActiveAspect(ActiveAspect),
    CelestialTransitMap(CelestialTransitMap),
    CloudEvent(CloudEvent),
    RegistryEntry(RegistryEntry),
    IngestDreamResponse(IngestDreamResponse),
    DecagonAnalysisObject(DecagonAnalysisObject),
    ShadowWeaveNode(ShadowWeaveNode),
    NakshatraSnapshot(NakshatraSnapshot),
    ArabicLot(ArabicLot),
    DashaPeriod(DashaPeriod),
    SomaticResonance(SomaticResonance),
    AncestralGhost(AncestralGhost),
    CollectiveRipple(CollectiveRipple),
    DigitalDoppelganger(DigitalDoppelganger),
    FirdariaPhase(FirdariaPhase),
}

/// A record type with a canonical schema.
pub trait CanonicalRecord: Sized {
    const RECORD_TYPE: RecordType;

    /// Unwraps the matching variant, or returns `None` for any other.
    fn from_typed(record: TypedRecord) -> Option<Self>;

    fn into_typed(self) -> TypedRecord;
}

macro_rules! canonical_record {
    ($($ty:ident),+ $(,)?) => {
        impl TypedRecord {
            /// The record type of the wrapped value.
            pub fn record_type(&self) -> RecordType {
                match self {
                    $(TypedRecord::$ty(_) => RecordType::$ty,)+
                }
            }
        }

        $(
            impl CanonicalRecord for $ty {
                const RECORD_TYPE: RecordType = RecordType::$ty;

                fn from_typed(record: TypedRecord) -> Option<Self> {
                    match record {
                        TypedRecord::$ty(inner) => Some(inner),
                        _ => None,
                    }
                }

                fn into_typed(self) -> TypedRecord {
                    TypedRecord::$ty(self)
                }
            }

            impl From<$ty> for TypedRecord {
                fn from(record: $ty) -> Self {
                    TypedRecord::$ty(record)
                }
            }
        )+
    };
}

canonical_record!(
    DreamIngestionObject,
    ArchetypalNode,
    ActiveAspect,
    CelestialTransitMap,
    CloudEvent,
    RegistryEntry,
    IngestDreamResponse,
    DecagonAnalysisObject,
    ShadowWeaveNode,
    NakshatraSnapshot,
    ArabicLot,
    DashaPeriod,
    SomaticResonance,
    AncestralGhost,
    CollectiveRipple,
    DigitalDoppelganger,
    FirdariaPhase,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_typed_rejects_other_variants() {
        let record: TypedRecord = IngestDreamResponse::default().into();
        assert_eq!(record.record_type(), RecordType::IngestDreamResponse);
        assert!(ArchetypalNode::from_typed(record.clone()).is_none());
        assert_eq!(
            IngestDreamResponse::from_typed(record),
            Some(IngestDreamResponse::default())
        );
    }
}

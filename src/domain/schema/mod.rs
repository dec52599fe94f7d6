//! Schema module - the canonical record registry and validation outcomes.
//!
//! - `RecordType` - Every record shape the validator knows
//! - `TypedRecord` / `CanonicalRecord` - Validated output, untyped and typed
//! - `Violation` / `ValidationError` - Collected constraint failures
//! - `ValidationOutcome` - A record plus the legacy tokens rewritten in it

mod errors;
mod record_type;
mod typed_record;

pub use errors::{Deprecation, NumericRange, ValidationError, ValidationOutcome, Violation};
pub use record_type::{RecordType, UnknownFieldPolicy};
pub use typed_record::{CanonicalRecord, TypedRecord};

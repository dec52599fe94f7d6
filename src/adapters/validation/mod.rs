//! Validation adapters.
//!
//! - `SchemaRecordValidator` - Canonical-schema implementation of `RecordValidator`

mod field_checker;
mod json_schema;
mod record_validator;
mod records;

pub use record_validator::SchemaRecordValidator;

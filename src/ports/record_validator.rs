//! RecordValidator port - Validation of raw JSON against canonical schemas.
//!
//! Every value crossing a trust boundary (outgoing dream, incoming analysis
//! response, stored registry entry, logged event) passes through this port
//! before the rest of the crate sees it as a typed record.

use serde_json::Value;

use crate::domain::schema::{
    CanonicalRecord, RecordType, TypedRecord, ValidationError, ValidationOutcome,
};

/// Port for validating raw records.
///
/// # Contract
///
/// Implementations must:
/// - Walk the whole record and report every violation, not just the first
/// - Return no record at all when any violation is found
/// - Be pure: the same input always yields the same result
/// - Report legacy tokens they rewrote in `ValidationOutcome::deprecations`
///
/// # Usage
///
/// ```rust,ignore
/// let validator: &dyn RecordValidator = get_validator();
///
/// // Untyped
/// let record = validator.validate(RecordType::ArchetypalNode, &raw)?;
///
/// // Typed
/// let node: ArchetypalNode = validate_record(validator, &raw)?;
///
/// // Raw schema for client-side validation
/// let schema = validator.schema_for(RecordType::CloudEvent);
/// ```
pub trait RecordValidator: Send + Sync {
    /// Validate and report any legacy tokens that were rewritten.
    fn validate_with_report(
        &self,
        record_type: RecordType,
        raw: &Value,
    ) -> Result<ValidationOutcome<TypedRecord>, ValidationError>;

    /// Validate a raw value as the given record type.
    fn validate(&self, record_type: RecordType, raw: &Value) -> Result<TypedRecord, ValidationError> {
        self.validate_with_report(record_type, raw)
            .map(|outcome| outcome.record)
    }

    /// Get the JSON Schema for a record type.
    ///
    /// Schemas are public and safe to expose to clients.
    fn schema_for(&self, record_type: RecordType) -> &Value;
}

/// Typed validation with the deprecation report.
///
/// # Panics
///
/// Panics if the validator returns a record of a different type than was
/// asked for. That is a bug in the validator, not bad input.
pub fn validate_record_with_report<T, V>(
    validator: &V,
    raw: &Value,
) -> Result<ValidationOutcome<T>, ValidationError>
where
    T: CanonicalRecord,
    V: RecordValidator + ?Sized,
{
    let outcome = validator.validate_with_report(T::RECORD_TYPE, raw)?;
    Ok(outcome.map(|record| {
        let actual = record.record_type();
        T::from_typed(record).unwrap_or_else(|| {
            panic!(
                "validator returned {} when {} was requested",
                actual,
                T::RECORD_TYPE
            )
        })
    }))
}

/// Typed validation: `validate_record::<ArchetypalNode, _>(validator, &raw)`.
pub fn validate_record<T, V>(validator: &V, raw: &Value) -> Result<T, ValidationError>
where
    T: CanonicalRecord,
    V: RecordValidator + ?Sized,
{
    validate_record_with_report(validator, raw).map(|outcome| outcome.record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ingestion::IngestDreamResponse;
    use crate::domain::schema::Violation;
    use serde_json::json;

    struct FixedValidator(Option<TypedRecord>);

    impl RecordValidator for FixedValidator {
        fn validate_with_report(
            &self,
            record_type: RecordType,
            _raw: &Value,
        ) -> Result<ValidationOutcome<TypedRecord>, ValidationError> {
            match &self.0 {
                Some(record) => Ok(ValidationOutcome {
                    record: record.clone(),
                    deprecations: vec![],
                }),
                None => Err(ValidationError::single(
                    record_type,
                    Violation::MissingRequired {
                        field: "status".to_string(),
                    },
                )),
            }
        }

        fn schema_for(&self, _record_type: RecordType) -> &Value {
            static EMPTY: Value = Value::Null;
            &EMPTY
        }
    }

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn RecordValidator) {}

    #[test]
    fn typed_validation_unwraps_matching_record() {
        let validator = FixedValidator(Some(IngestDreamResponse::default().into()));
        let response: IngestDreamResponse = validate_record(&validator, &json!({})).unwrap();
        assert_eq!(response, IngestDreamResponse::default());
    }

    #[test]
    fn typed_validation_propagates_errors() {
        let validator = FixedValidator(None);
        let err = validate_record::<IngestDreamResponse, _>(&validator, &json!({})).unwrap_err();
        assert_eq!(err.record_type(), RecordType::IngestDreamResponse);
    }

    #[test]
    #[should_panic(expected = "validator returned IngestDreamResponse")]
    fn typed_validation_panics_on_mismatched_record() {
        use crate::domain::archetype::ArchetypalNode;
        let validator = FixedValidator(Some(IngestDreamResponse::default().into()));
        let _ = validate_record::<ArchetypalNode, _>(&validator, &json!({}));
    }
}

//! Field-level checks shared by every record walker.
//!
//! A `FieldChecker` never stops at the first problem. Each check records its
//! violation and returns `None`, so a walker can keep going and the caller
//! ends up with every violation in the record.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::domain::foundation::Timestamp;
use crate::domain::schema::{
    Deprecation, NumericRange, RecordType, UnknownFieldPolicy, ValidationError,
    ValidationOutcome, Violation,
};
use crate::domain::vocabulary::legacy::{self, LegacyTokenPolicy, TokenResolution};
use crate::domain::vocabulary::VocabularyToken;

/// Path of the record root.
pub(crate) const ROOT: &str = "$";

/// Path of `key` inside the object at `parent`.
pub(crate) fn join(parent: &str, key: &str) -> String {
    if parent == ROOT {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

/// Path of item `i` inside the list at `parent`.
pub(crate) fn index(parent: &str, i: usize) -> String {
    format!("{}[{}]", parent, i)
}

pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) struct FieldChecker {
    legacy_tokens: LegacyTokenPolicy,
    unknown_fields: UnknownFieldPolicy,
    violations: Vec<Violation>,
    deprecations: Vec<Deprecation>,
}

impl FieldChecker {
    pub(crate) fn new(legacy_tokens: LegacyTokenPolicy, unknown_fields: UnknownFieldPolicy) -> Self {
        Self {
            legacy_tokens,
            unknown_fields,
            violations: Vec::new(),
            deprecations: Vec::new(),
        }
    }

    fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    fn invalid_type(&mut self, field: &str, expected: &'static str, value: &Value) {
        self.push(Violation::InvalidType {
            field: field.to_string(),
            expected,
            actual: type_name(value),
        });
    }

    /// Converts the collected state into the final result.
    pub(crate) fn finish<T>(
        self,
        record_type: RecordType,
        record: Option<T>,
    ) -> Result<ValidationOutcome<T>, ValidationError> {
        match record {
            Some(record) if self.violations.is_empty() => Ok(ValidationOutcome {
                record,
                deprecations: self.deprecations,
            }),
            _ => Err(ValidationError::new(record_type, self.violations)),
        }
    }

    // =========================================================================
    // Structure
    // =========================================================================

    pub(crate) fn object<'v>(&mut self, value: &'v Value, path: &str) -> Option<&'v Map<String, Value>> {
        match value {
            Value::Object(map) => Some(map),
            other => {
                self.invalid_type(path, "object", other);
                None
            }
        }
    }

    /// Reports keys outside `declared`, subject to the configured policy.
    pub(crate) fn declared(&mut self, obj: &Map<String, Value>, path: &str, declared: &[&str]) {
        if self.unknown_fields == UnknownFieldPolicy::Ignore {
            return;
        }
        for key in obj.keys() {
            if !declared.contains(&key.as_str()) {
                self.push(Violation::UnknownField {
                    field: join(path, key),
                });
            }
        }
    }

    /// Runs `check` on a required field.
    pub(crate) fn required<T>(
        &mut self,
        obj: &Map<String, Value>,
        path: &str,
        key: &str,
        check: impl FnOnce(&mut Self, &Value, &str) -> Option<T>,
    ) -> Option<T> {
        let field = join(path, key);
        match obj.get(key) {
            Some(value) => check(self, value, &field),
            None => {
                self.push(Violation::MissingRequired { field });
                None
            }
        }
    }

    /// Runs `check` on an optional field. Absent and `null` are both `Some(None)`.
    pub(crate) fn optional<T>(
        &mut self,
        obj: &Map<String, Value>,
        path: &str,
        key: &str,
        check: impl FnOnce(&mut Self, &Value, &str) -> Option<T>,
    ) -> Option<Option<T>> {
        match obj.get(key) {
            None | Some(Value::Null) => Some(None),
            Some(value) => check(self, value, &join(path, key)).map(Some),
        }
    }

    // =========================================================================
    // Scalars
    // =========================================================================

    pub(crate) fn string(&mut self, value: &Value, field: &str) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            other => {
                self.invalid_type(field, "string", other);
                None
            }
        }
    }

    /// A string with at least one non-whitespace character.
    pub(crate) fn non_empty_string(&mut self, value: &Value, field: &str) -> Option<String> {
        let s = self.string(value, field)?;
        if s.trim().is_empty() {
            self.push(Violation::EmptyField {
                field: field.to_string(),
            });
            return None;
        }
        Some(s)
    }

    /// Any finite number.
    pub(crate) fn number(&mut self, value: &Value, field: &str) -> Option<f64> {
        match value.as_f64() {
            Some(n) if n.is_finite() => Some(n),
            Some(n) => {
                self.push(Violation::OutOfRange {
                    field: field.to_string(),
                    value: n,
                    range: NumericRange::unbounded(),
                });
                None
            }
            None => {
                self.invalid_type(field, "number", value);
                None
            }
        }
    }

    pub(crate) fn number_in(&mut self, value: &Value, field: &str, range: NumericRange) -> Option<f64> {
        let n = self.number(value, field)?;
        if !range.contains(n) {
            self.push(Violation::OutOfRange {
                field: field.to_string(),
                value: n,
                range,
            });
            return None;
        }
        Some(n)
    }

    /// A whole number inside `range`, narrowed to `T`.
    pub(crate) fn integer_in<T: TryFrom<i64>>(
        &mut self,
        value: &Value,
        field: &str,
        range: NumericRange,
    ) -> Option<T> {
        let Some(n) = value.as_i64() else {
            self.invalid_type(field, "integer", value);
            return None;
        };
        match T::try_from(n) {
            Ok(narrowed) if range.contains(n as f64) => Some(narrowed),
            _ => {
                self.push(Violation::OutOfRange {
                    field: field.to_string(),
                    value: n as f64,
                    range,
                });
                None
            }
        }
    }

    pub(crate) fn boolean(&mut self, value: &Value, field: &str) -> Option<bool> {
        match value {
            Value::Bool(b) => Some(*b),
            other => {
                self.invalid_type(field, "boolean", other);
                None
            }
        }
    }

    pub(crate) fn count(&mut self, value: &Value, field: &str) -> Option<u64> {
        match value.as_u64() {
            Some(n) => Some(n),
            None => {
                self.invalid_type(field, "non-negative integer", value);
                None
            }
        }
    }

    /// A UUID-shaped string parsed into an identifier type.
    pub(crate) fn uuid<T: FromStr>(&mut self, value: &Value, field: &str) -> Option<T> {
        let s = self.string(value, field)?;
        match s.parse() {
            Ok(id) => Some(id),
            Err(_) => {
                self.push(Violation::InvalidFormat {
                    field: field.to_string(),
                    format: "UUID",
                    value: s,
                });
                None
            }
        }
    }

    pub(crate) fn timestamp(&mut self, value: &Value, field: &str) -> Option<Timestamp> {
        let s = self.string(value, field)?;
        match Timestamp::parse_iso8601(&s) {
            Ok(ts) => Some(ts),
            Err(_) => {
                self.push(Violation::InvalidFormat {
                    field: field.to_string(),
                    format: "ISO-8601 date-time",
                    value: s,
                });
                None
            }
        }
    }

    /// A vocabulary member, with legacy aliases resolved per policy.
    pub(crate) fn token<T: VocabularyToken>(&mut self, value: &Value, field: &str) -> Option<T> {
        let s = self.string(value, field)?;
        match legacy::resolve::<T>(&s, self.legacy_tokens) {
            TokenResolution::Canonical(token) => Some(token),
            TokenResolution::Deprecated { value, alias } => {
                self.deprecations.push(Deprecation {
                    field: field.to_string(),
                    vocabulary: T::VOCABULARY,
                    legacy: alias.legacy,
                    canonical: value.as_token(),
                });
                Some(value)
            }
            TokenResolution::Unsupported { alias } => {
                self.push(Violation::UnsupportedLegacyToken {
                    field: field.to_string(),
                    vocabulary: T::VOCABULARY,
                    value: s,
                    replacement: alias.canonical,
                });
                None
            }
            TokenResolution::Unknown => {
                self.push(Violation::NotInVocabulary {
                    field: field.to_string(),
                    vocabulary: T::VOCABULARY,
                    value: s,
                });
                None
            }
        }
    }

    /// A string that must equal `expected` exactly.
    pub(crate) fn literal(&mut self, value: &Value, field: &str, expected: &'static str) -> Option<()> {
        match value {
            Value::String(s) if s == expected => Some(()),
            Value::String(s) => {
                self.push(Violation::LiteralMismatch {
                    field: field.to_string(),
                    expected,
                    actual: s.clone(),
                });
                None
            }
            other => {
                self.push(Violation::LiteralMismatch {
                    field: field.to_string(),
                    expected,
                    actual: other.to_string(),
                });
                None
            }
        }
    }

    /// Any JSON value, carried through untouched.
    pub(crate) fn opaque(&mut self, value: &Value, _field: &str) -> Option<Value> {
        Some(value.clone())
    }

    // =========================================================================
    // Lists
    // =========================================================================

    /// Checks every item, even after one fails.
    pub(crate) fn list_of<T>(
        &mut self,
        value: &Value,
        field: &str,
        mut item: impl FnMut(&mut Self, &Value, &str) -> Option<T>,
    ) -> Option<Vec<T>> {
        let Value::Array(items) = value else {
            self.invalid_type(field, "array", value);
            return None;
        };

        let mut out = Vec::with_capacity(items.len());
        let mut all_valid = true;
        for (i, raw) in items.iter().enumerate() {
            match item(self, raw, &index(field, i)) {
                Some(parsed) => out.push(parsed),
                None => all_valid = false,
            }
        }
        all_valid.then_some(out)
    }

    pub(crate) fn string_list(&mut self, value: &Value, field: &str) -> Option<Vec<String>> {
        self.list_of(value, field, Self::string)
    }

    /// An object whose values all pass `item`. Keys are free-form.
    pub(crate) fn map_of<T>(
        &mut self,
        value: &Value,
        field: &str,
        mut item: impl FnMut(&mut Self, &Value, &str) -> Option<T>,
    ) -> Option<BTreeMap<String, T>> {
        let obj = self.object(value, field)?;

        let mut out = BTreeMap::new();
        let mut all_valid = true;
        for (key, raw) in obj {
            match item(self, raw, &join(field, key)) {
                Some(parsed) => {
                    out.insert(key.clone(), parsed);
                }
                None => all_valid = false,
            }
        }
        all_valid.then_some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::DreamId;
    use crate::domain::vocabulary::{ArchetypeId, SleepPhase, Vocabulary};
    use serde_json::json;

    fn checker() -> FieldChecker {
        FieldChecker::new(LegacyTokenPolicy::AcceptDeprecated, UnknownFieldPolicy::Reject)
    }

    #[test]
    fn paths_nest_with_dots_and_brackets() {
        assert_eq!(join(ROOT, "transits"), "transits");
        assert_eq!(join("transits", "lunar_phase"), "transits.lunar_phase");
        assert_eq!(index("active_aspects", 1), "active_aspects[1]");
    }

    #[test]
    fn required_reports_missing_field() {
        let mut c = checker();
        let obj = json!({});
        let result = c.required(obj.as_object().unwrap(), ROOT, "content_raw", FieldChecker::string);
        assert!(result.is_none());
        assert_eq!(
            c.violations,
            vec![Violation::MissingRequired {
                field: "content_raw".to_string()
            }]
        );
    }

    #[test]
    fn optional_treats_null_as_absent() {
        let mut c = checker();
        let obj = json!({"vector_embedding_ref": null});
        let result = c.optional(
            obj.as_object().unwrap(),
            ROOT,
            "vector_embedding_ref",
            FieldChecker::string,
        );
        assert_eq!(result, Some(None));
        assert!(c.violations.is_empty());
    }

    #[test]
    fn whitespace_only_string_is_empty() {
        let mut c = checker();
        assert!(c.non_empty_string(&json!("  \n\t "), "content_raw").is_none());
        assert!(matches!(c.violations[0], Violation::EmptyField { .. }));
    }

    #[test]
    fn number_in_rejects_values_outside_range() {
        let mut c = checker();
        let range = NumericRange::closed(0.0, 1.0);
        assert_eq!(c.number_in(&json!(1.0), "lunar_phase", range), Some(1.0));
        assert!(c.number_in(&json!(1.5), "lunar_phase", range).is_none());
        assert!(c.number_in(&json!("0.5"), "lunar_phase", range).is_none());
        assert_eq!(c.violations.len(), 2);
    }

    #[test]
    fn integer_in_rejects_fractions_and_out_of_range() {
        let mut c = checker();
        let range = NumericRange::closed(1.0, 4.0);
        assert_eq!(c.integer_in::<u8>(&json!(4), "pada", range), Some(4));
        assert!(c.integer_in::<u8>(&json!(2.5), "pada", range).is_none());
        assert!(c.integer_in::<u8>(&json!(0), "pada", range).is_none());
        assert!(c.integer_in::<u8>(&json!(-3), "pada", range).is_none());
        assert!(matches!(
            c.violations[0],
            Violation::InvalidType { expected: "integer", .. }
        ));
        assert!(matches!(c.violations[1], Violation::OutOfRange { value, .. } if value == 0.0));
        assert_eq!(c.violations.len(), 3);
    }

    #[test]
    fn map_of_paths_use_the_key() {
        let mut c = checker();
        let range = NumericRange::closed(0.0, 1.0);
        let result = c.map_of(&json!({"chest": 0.7, "throat": 1.4}), "body_map_activations", |c, v, f| {
            c.number_in(v, f, range)
        });
        assert!(result.is_none());
        assert_eq!(c.violations[0].field(), "body_map_activations.throat");
    }

    #[test]
    fn uuid_reports_format_with_value() {
        let mut c = checker();
        assert!(c.uuid::<DreamId>(&json!("not-a-uuid"), "dream_id").is_none());
        assert_eq!(
            c.violations[0],
            Violation::InvalidFormat {
                field: "dream_id".to_string(),
                format: "UUID",
                value: "not-a-uuid".to_string(),
            }
        );
    }

    #[test]
    fn token_records_deprecation_for_mapped_alias() {
        let mut c = checker();
        let phase = c.token::<SleepPhase>(&json!("deep"), "biometric_context.sleep_phase");
        assert_eq!(phase, Some(SleepPhase::Nrem3));
        assert!(c.violations.is_empty());
        assert_eq!(c.deprecations[0].legacy, "deep");
        assert_eq!(c.deprecations[0].canonical, "NREM3");
    }

    #[test]
    fn token_reports_unknown_value_and_vocabulary() {
        let mut c = checker();
        assert!(c.token::<ArchetypeId>(&json!("GHOST"), "archetype_id").is_none());
        assert_eq!(
            c.violations[0],
            Violation::NotInVocabulary {
                field: "archetype_id".to_string(),
                vocabulary: Vocabulary::ArchetypeId,
                value: "GHOST".to_string(),
            }
        );
    }

    #[test]
    fn list_of_checks_every_item() {
        let mut c = checker();
        let result = c.string_list(&json!(["a", 1, "b", false]), "symbolic_manifestations");
        assert!(result.is_none());
        let fields: Vec<_> = c.violations.iter().map(|v| v.field().to_string()).collect();
        assert_eq!(
            fields,
            vec!["symbolic_manifestations[1]", "symbolic_manifestations[3]"]
        );
    }

    #[test]
    fn literal_reports_non_string_as_json() {
        let mut c = checker();
        assert!(c.literal(&json!(1.0), "specversion", "1.0").is_none());
        assert_eq!(c.violations[0].actual(), "1.0");
    }

    #[test]
    fn declared_respects_policy() {
        let obj = json!({"valence": 0.1, "mood": "calm"});
        let mut strict = checker();
        strict.declared(obj.as_object().unwrap(), ROOT, &["valence"]);
        assert_eq!(strict.violations.len(), 1);

        let mut lenient = FieldChecker::new(LegacyTokenPolicy::AcceptDeprecated, UnknownFieldPolicy::Ignore);
        lenient.declared(obj.as_object().unwrap(), ROOT, &["valence"]);
        assert!(lenient.violations.is_empty());
    }
}

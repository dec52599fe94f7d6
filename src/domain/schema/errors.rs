//! Validation failures and the reports that accompany successful validation.

use std::fmt;
use thiserror::Error;

use super::RecordType;
use crate::domain::vocabulary::Vocabulary;

/// Numeric bound declared on a schema field.
///
/// The lower bound is always inclusive. The upper bound is inclusive unless
/// `max_exclusive` is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub max_exclusive: bool,
}

impl NumericRange {
    /// Any finite number.
    pub const fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
            max_exclusive: false,
        }
    }

    /// Both ends inclusive.
    pub const fn closed(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            max_exclusive: false,
        }
    }

    /// Inclusive lower bound, exclusive upper bound.
    pub const fn half_open(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            max_exclusive: true,
        }
    }

    /// Lower bound only, inclusive.
    pub const fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
            max_exclusive: false,
        }
    }

    /// Returns true if `value` is finite and within the bounds.
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite()
            && self.min.map_or(true, |min| value >= min)
            && self.max.map_or(true, |max| {
                if self.max_exclusive {
                    value < max
                } else {
                    value <= max
                }
            })
    }
}

impl fmt::Display for NumericRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let close = if self.max_exclusive { ')' } else { ']' };
        match (self.min, self.max) {
            (Some(min), Some(max)) => write!(f, "within [{}, {}{}", min, max, close),
            (Some(min), None) => write!(f, "at least {}", min),
            (None, Some(max)) if self.max_exclusive => write!(f, "below {}", max),
            (None, Some(max)) => write!(f, "at most {}", max),
            (None, None) => write!(f, "a finite number"),
        }
    }
}

/// A single broken constraint, located by field path.
///
/// Paths use dots for nesting and brackets for list positions, e.g.
/// `transits.active_aspects[1].orb_degrees`. The record root is `$`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    #[error("missing required field '{field}'")]
    MissingRequired { field: String },

    #[error("unknown field '{field}'")]
    UnknownField { field: String },

    #[error("field '{field}' expected {expected}, got {actual}")]
    InvalidType {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("field '{field}' must not be empty")]
    EmptyField { field: String },

    #[error("field '{field}' must be {range}, got {value}")]
    OutOfRange {
        field: String,
        value: f64,
        range: NumericRange,
    },

    #[error("field '{field}' is not a valid {vocabulary} token: '{value}'")]
    NotInVocabulary {
        field: String,
        vocabulary: Vocabulary,
        value: String,
    },

    #[error("field '{field}' uses retired {vocabulary} token '{value}'")]
    UnsupportedLegacyToken {
        field: String,
        vocabulary: Vocabulary,
        value: String,
        replacement: Option<&'static str>,
    },

    #[error("field '{field}' must be a valid {format}, got '{value}'")]
    InvalidFormat {
        field: String,
        format: &'static str,
        value: String,
    },

    #[error("field '{field}' must equal '{expected}', got {actual}")]
    LiteralMismatch {
        field: String,
        expected: &'static str,
        actual: String,
    },
}

impl Violation {
    /// Path of the offending field.
    pub fn field(&self) -> &str {
        match self {
            Violation::MissingRequired { field }
            | Violation::UnknownField { field }
            | Violation::InvalidType { field, .. }
            | Violation::EmptyField { field }
            | Violation::OutOfRange { field, .. }
            | Violation::NotInVocabulary { field, .. }
            | Violation::UnsupportedLegacyToken { field, .. }
            | Violation::InvalidFormat { field, .. }
            | Violation::LiteralMismatch { field, .. } => field,
        }
    }

    /// The constraint the field was expected to satisfy.
    pub fn constraint(&self) -> String {
        match self {
            Violation::MissingRequired { .. } => "required".to_string(),
            Violation::UnknownField { .. } => "not declared by the schema".to_string(),
            Violation::InvalidType { expected, .. } => format!("type {}", expected),
            Violation::EmptyField { .. } => "non-empty".to_string(),
            Violation::OutOfRange { range, .. } => range.to_string(),
            Violation::NotInVocabulary { vocabulary, .. } => {
                format!("one of {}: {}", vocabulary, vocabulary.tokens().join(", "))
            }
            Violation::UnsupportedLegacyToken {
                vocabulary,
                replacement: Some(canonical),
                ..
            } => format!("canonical {} token (use '{}')", vocabulary, canonical),
            Violation::UnsupportedLegacyToken { vocabulary, .. } => {
                format!("canonical {} token", vocabulary)
            }
            Violation::InvalidFormat { format, .. } => format!("format {}", format),
            Violation::LiteralMismatch { expected, .. } => format!("literal '{}'", expected),
        }
    }

    /// The value that was found, rendered for display.
    pub fn actual(&self) -> String {
        match self {
            Violation::MissingRequired { .. } => "<absent>".to_string(),
            Violation::UnknownField { field } => field.clone(),
            Violation::InvalidType { actual, .. } => actual.to_string(),
            Violation::EmptyField { .. } => "\"\"".to_string(),
            Violation::OutOfRange { value, .. } => value.to_string(),
            Violation::NotInVocabulary { value, .. }
            | Violation::UnsupportedLegacyToken { value, .. }
            | Violation::InvalidFormat { value, .. }
            | Violation::LiteralMismatch { actual: value, .. } => value.clone(),
        }
    }
}

/// A record failed validation.
///
/// Carries every violation found in the record, never an empty list.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{record_type} failed validation: {}", summarize(.violations))]
pub struct ValidationError {
    record_type: RecordType,
    violations: Vec<Violation>,
}

impl ValidationError {
    /// Creates an error from a non-empty violation list.
    pub fn new(record_type: RecordType, violations: Vec<Violation>) -> Self {
        debug_assert!(!violations.is_empty(), "ValidationError without violations");
        Self {
            record_type,
            violations,
        }
    }

    /// Creates an error with a single violation.
    pub fn single(record_type: RecordType, violation: Violation) -> Self {
        Self::new(record_type, vec![violation])
    }

    /// The record type that was being validated.
    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    /// All violations, in discovery order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Get the count of violations.
    pub fn error_count(&self) -> usize {
        self.violations.len()
    }

    /// Returns the first violation located at `field`.
    pub fn violation_for(&self, field: &str) -> Option<&Violation> {
        self.violations.iter().find(|v| v.field() == field)
    }

    /// Returns true if any violation is located at `field`.
    pub fn names_field(&self, field: &str) -> bool {
        self.violation_for(field).is_some()
    }

    /// One line per violation: `field: expected <constraint>, got <actual>`.
    pub fn to_client_message(&self) -> String {
        self.violations
            .iter()
            .map(|v| format!("{}: expected {}, got {}", v.field(), v.constraint(), v.actual()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A legacy token that validation rewrote to its canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deprecation {
    pub field: String,
    pub vocabulary: Vocabulary,
    pub legacy: &'static str,
    pub canonical: &'static str,
}

impl fmt::Display for Deprecation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} token '{}' is deprecated, read as '{}'",
            self.field, self.vocabulary, self.legacy, self.canonical
        )
    }
}

/// A validated record plus the deprecations encountered on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationOutcome<T> {
    pub record: T,
    pub deprecations: Vec<Deprecation>,
}

impl<T> ValidationOutcome<T> {
    /// Maps the record, keeping the report.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ValidationOutcome<U> {
        ValidationOutcome {
            record: f(self.record),
            deprecations: self.deprecations,
        }
    }
}

//! Timestamp value object for immutable points in time.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Parses an ISO-8601 date-time.
    ///
    /// Accepts RFC 3339 strings with an explicit offset, and offset-less
    /// date-times (as emitted by Python's `datetime.isoformat()` on naive
    /// values), which are read as UTC.
    pub fn parse_iso8601(s: &str) -> Result<Self, chrono::ParseError> {
        match DateTime::parse_from_rfc3339(s) {
            Ok(dt) => Ok(Self(dt.with_timezone(&Utc))),
            Err(rfc_err) => NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|naive| Self(naive.and_utc()))
                .map_err(|_| rfc_err),
        }
    }

    /// Formats as RFC 3339 with a `Z` suffix.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true)
    }

    /// Returns fractional hours elapsed from this timestamp until `later`.
    ///
    /// Negative when `later` precedes `self`.
    pub fn hours_until(&self, later: &Timestamp) -> f64 {
        later.0.signed_duration_since(self.0).num_milliseconds() as f64 / 3_600_000.0
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_rfc3339())
    }
}

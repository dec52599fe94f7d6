//! Strongly-typed identifier value objects.
//!
//! Every identifier crossing the ingestion boundary is UUID-shaped, so all of
//! them share one representation generated by `uuid_identifier!`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Generates a `Copy` UUID newtype with the usual constructors and conversions.
macro_rules! uuid_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            #[doc = concat!("Creates a new random ", stringify!($name), ".")]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            #[doc = concat!("Creates a ", stringify!($name), " from an existing UUID.")]
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

uuid_identifier!(
    /// Unique identifier for a single dream journal entry.
    DreamId
);

uuid_identifier!(
    /// Identifier of the dreamer who owns an entry.
    UserId
);

uuid_identifier!(
    /// Unique identifier for a computed celestial transit map.
    TransitId
);

impl UserId {
    /// Placeholder identity used by the journal before accounts exist.
    pub fn anonymous() -> Self {
        Self(Uuid::from_u128(0x0000_0000_0000_4000_8000_0000_0000_0001))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dream_id_generates_unique_values() {
        assert_ne!(DreamId::new(), DreamId::new());
    }

    #[test]
    fn dream_id_parses_from_string() {
        let id: DreamId = "550e8400-e29b-41d4-a716-446655440000".parse().unwrap();
        assert_eq!(id.to_string(), "550e8400-e29b-41d4-a716-446655440000");
    }

    #[test]
    fn transit_id_rejects_non_uuid() {
        assert!("not-a-uuid".parse::<TransitId>().is_err());
    }

    #[test]
    fn user_id_serializes_as_plain_string() {
        let id = UserId::from_uuid(Uuid::nil());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""00000000-0000-0000-0000-000000000000""#);
    }

    #[test]
    fn anonymous_user_is_stable() {
        assert_eq!(
            UserId::anonymous().to_string(),
            "00000000-0000-4000-8000-000000000001"
        );
    }
}

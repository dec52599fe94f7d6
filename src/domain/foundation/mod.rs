//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, and error types that every record
//! type in the schema builds on.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, SchemaDefinitionError};
pub use ids::{DreamId, TransitId, UserId};
pub use timestamp::Timestamp;

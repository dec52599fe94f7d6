//! ContextRegistry port - Per-user context store.

use async_trait::async_trait;

use crate::domain::context::{ActiveNarrativeThread, RegistryEntry};
use crate::domain::foundation::{DomainError, Timestamp, UserId};

/// Port for reading and updating the context registry.
///
/// Updates to a user with no entry fail with `ErrorCode::ContextNotFound`
/// rather than inventing a default entry.
#[async_trait]
pub trait ContextRegistry: Send + Sync {
    async fn get(&self, user_id: &UserId) -> Result<Option<RegistryEntry>, DomainError>;

    /// Insert or replace the whole entry.
    async fn put(&self, user_id: &UserId, entry: RegistryEntry) -> Result<(), DomainError>;

    /// Set `last_interaction_delta_hours` to the time elapsed since `at`.
    async fn record_interaction(&self, user_id: &UserId, at: Timestamp) -> Result<(), DomainError>;

    async fn replace_threads(
        &self,
        user_id: &UserId,
        threads: Vec<ActiveNarrativeThread>,
    ) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn ContextRegistry) {}
}

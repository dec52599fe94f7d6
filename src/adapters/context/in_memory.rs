//! In-memory context registry.
//!
//! Entries are stored serialized, the way a key-value store would hold them,
//! and validated again on every read so a corrupted entry never comes back
//! as a typed `RegistryEntry`.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

use crate::domain::context::{ActiveNarrativeThread, RegistryEntry};
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::ports::{validate_record, ContextRegistry, RecordValidator};

pub struct InMemoryContextRegistry {
    validator: Arc<dyn RecordValidator>,
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryContextRegistry {
    pub fn new(validator: Arc<dyn RecordValidator>) -> Self {
        Self {
            validator,
            entries: RwLock::new(HashMap::new()),
        }
    }

    fn key(user_id: &UserId) -> String {
        format!("context:{}", user_id)
    }

    /// Stores a raw JSON entry after validating it.
    pub fn put_raw(&self, user_id: &UserId, raw: &serde_json::Value) -> Result<(), DomainError> {
        let entry: RegistryEntry = validate_record(self.validator.as_ref(), raw)
            .map_err(|e| DomainError::new(ErrorCode::ValidationFailed, e.to_string()))?;
        self.store(user_id, &entry)
    }

    fn load(&self, user_id: &UserId) -> Result<Option<RegistryEntry>, DomainError> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(&Self::key(user_id))
            .map(|stored| self.decode(user_id, stored))
            .transpose()
    }

    fn decode(&self, user_id: &UserId, stored: &str) -> Result<RegistryEntry, DomainError> {
        let raw: serde_json::Value = serde_json::from_str(stored).map_err(|e| {
            DomainError::new(ErrorCode::StorageError, format!("Corrupt registry entry: {}", e))
                .with_detail("user_id", user_id.to_string())
        })?;
        validate_record(self.validator.as_ref(), &raw).map_err(|e| {
            DomainError::new(ErrorCode::ValidationFailed, e.to_string())
                .with_detail("user_id", user_id.to_string())
        })
    }

    fn encode(entry: &RegistryEntry) -> Result<String, DomainError> {
        serde_json::to_string(entry).map_err(|e| {
            DomainError::new(ErrorCode::InternalError, format!("Failed to encode entry: {}", e))
        })
    }

    fn store(&self, user_id: &UserId, entry: &RegistryEntry) -> Result<(), DomainError> {
        let serialized = Self::encode(entry)?;
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(Self::key(user_id), serialized);
        Ok(())
    }

    /// Read, apply and write back under one write guard.
    fn update(
        &self,
        user_id: &UserId,
        apply: impl FnOnce(&mut RegistryEntry),
    ) -> Result<(), DomainError> {
        let key = Self::key(user_id);
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let stored = entries.get(&key).ok_or_else(|| {
            DomainError::new(ErrorCode::ContextNotFound, "No context for user")
                .with_detail("user_id", user_id.to_string())
        })?;
        let mut entry = self.decode(user_id, stored)?;
        apply(&mut entry);
        entries.insert(key, Self::encode(&entry)?);
        Ok(())
    }
}

#[async_trait]
impl ContextRegistry for InMemoryContextRegistry {
    async fn get(&self, user_id: &UserId) -> Result<Option<RegistryEntry>, DomainError> {
        self.load(user_id)
    }

    async fn put(&self, user_id: &UserId, entry: RegistryEntry) -> Result<(), DomainError> {
        // Typed entries can still carry values no schema allows, e.g. NaN hours.
        let raw = serde_json::to_value(&entry).map_err(|e| {
            DomainError::new(ErrorCode::InternalError, format!("Failed to encode entry: {}", e))
        })?;
        self.put_raw(user_id, &raw)
    }

    async fn record_interaction(&self, user_id: &UserId, at: Timestamp) -> Result<(), DomainError> {
        let now = Timestamp::now();
        self.update(user_id, |entry| entry.touch(at, now))?;
        debug!(user_id = %user_id, "Recorded interaction");
        Ok(())
    }

    async fn replace_threads(
        &self,
        user_id: &UserId,
        threads: Vec<ActiveNarrativeThread>,
    ) -> Result<(), DomainError> {
        self.update(user_id, |entry| entry.replace_threads(threads))
    }
}

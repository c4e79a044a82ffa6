use async_trait::async_trait;
use aware_core::model::User;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Fixed key under which the bootstrapped identity is kept.
pub const IDENTITY_KEY: &str = "user";

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Client-local durable home of the identity record.
///
/// There is a single writer per lifecycle event (bootstrap saves, logout clears),
/// so adapters need no coordination beyond their own consistency.
#[async_trait]
pub trait IdentityRepository: Send + Sync {
    /// Fetch the persisted identity, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the stored record cannot be decoded,
    /// or other storage errors.
    async fn load_identity(&self) -> Result<Option<User>, StorageError>;

    /// Persist the identity, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    async fn save_identity(&self, user: &User) -> Result<(), StorageError>;

    /// Remove the persisted identity. Removing a missing record is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be removed.
    async fn clear_identity(&self) -> Result<(), StorageError>;
}

pub(crate) fn encode_user(user: &User) -> Result<String, StorageError> {
    serde_json::to_string(user).map_err(|err| StorageError::Serialization(err.to_string()))
}

pub(crate) fn decode_user(raw: &str) -> Result<User, StorageError> {
    serde_json::from_str(raw).map_err(|err| StorageError::Serialization(err.to_string()))
}

/// Simple in-memory repository implementation for testing and prototyping.
///
/// Values are stored serialized, the same way the `SQLite` adapter keeps them.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Store a raw value under `key`, bypassing encoding.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn put_raw(&self, key: &str, value: impl Into<String>) -> Result<(), StorageError> {
        let mut guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value.into());
        Ok(())
    }
}

#[async_trait]
impl IdentityRepository for InMemoryRepository {
    async fn load_identity(&self) -> Result<Option<User>, StorageError> {
        let guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard
            .get(IDENTITY_KEY)
            .map(|raw| decode_user(raw))
            .transpose()
    }

    async fn save_identity(&self, user: &User) -> Result<(), StorageError> {
        let encoded = encode_user(user)?;
        self.put_raw(IDENTITY_KEY, encoded)
    }

    async fn clear_identity(&self) -> Result<(), StorageError> {
        let mut guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(IDENTITY_KEY);
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub identity: Arc<dyn IdentityRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let identity: Arc<dyn IdentityRepository> = Arc::new(InMemoryRepository::new());
        Self { identity }
    }
}

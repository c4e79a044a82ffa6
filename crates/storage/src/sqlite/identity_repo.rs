use async_trait::async_trait;
use aware_core::model::User;
use chrono::Utc;
use sqlx::Row;

use crate::repository::{
    IDENTITY_KEY, IdentityRepository, StorageError, decode_user, encode_user,
};

use super::SqliteRepository;

impl SqliteRepository {
    async fn get_value(&self, key: &str) -> Result<Option<String>, StorageError> {
        let row = sqlx::query("SELECT value FROM client_state WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        row.try_get::<String, _>("value")
            .map(Some)
            .map_err(|err| StorageError::Serialization(err.to_string()))
    }

    async fn put_value(&self, key: &str, value: &str) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO client_state (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            ",
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }

    /// Store a raw value under `key`, bypassing encoding.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the write fails.
    pub async fn put_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.put_value(key, value).await
    }
}

#[async_trait]
impl IdentityRepository for SqliteRepository {
    async fn load_identity(&self) -> Result<Option<User>, StorageError> {
        self.get_value(IDENTITY_KEY)
            .await?
            .map(|raw| decode_user(&raw))
            .transpose()
    }

    async fn save_identity(&self, user: &User) -> Result<(), StorageError> {
        let encoded = encode_user(user)?;
        self.put_value(IDENTITY_KEY, &encoded).await
    }

    async fn clear_identity(&self) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM client_state WHERE key = ?1")
            .bind(IDENTITY_KEY)
            .execute(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;
        Ok(())
    }
}

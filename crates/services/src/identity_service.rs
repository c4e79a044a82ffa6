use std::sync::Arc;

use aware_core::model::{User, UserDraft};
use storage::repository::{IdentityRepository, StorageError};

use crate::api::TrainingApi;
use crate::error::IdentityError;

/// Bootstraps, restores and forgets the local identity.
#[derive(Clone)]
pub struct IdentityService {
    api: Arc<dyn TrainingApi>,
    identity: Arc<dyn IdentityRepository>,
}

impl IdentityService {
    #[must_use]
    pub fn new(api: Arc<dyn TrainingApi>, identity: Arc<dyn IdentityRepository>) -> Self {
        Self { api, identity }
    }

    /// Create a user remotely and persist it as the local identity.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::Validation` for a blank name, before any network call.
    /// Returns `IdentityError::Api` if the service rejects the request.
    /// Returns `IdentityError::Storage` if the identity cannot be persisted.
    pub async fn register(&self, draft: UserDraft) -> Result<User, IdentityError> {
        let new_user = draft.validate()?;
        let user = self.api.create_user(&new_user).await?;
        self.identity.save_identity(&user).await?;
        tracing::info!(user_id = %user.id, role = user.role.as_str(), "Identity created");
        Ok(user)
    }

    /// The persisted identity, if any.
    ///
    /// An unreadable record is discarded and treated as absent.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::Storage` if the repository cannot be reached.
    pub async fn current(&self) -> Result<Option<User>, IdentityError> {
        match self.identity.load_identity().await {
            Ok(user) => Ok(user),
            Err(StorageError::Serialization(reason)) => {
                tracing::warn!(%reason, "Discarding unreadable identity record");
                self.identity.clear_identity().await?;
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Forget the local identity. Remote records are untouched.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::Storage` if the record cannot be removed.
    pub async fn logout(&self) -> Result<(), IdentityError> {
        self.identity.clear_identity().await?;
        tracing::info!("Identity cleared");
        Ok(())
    }
}

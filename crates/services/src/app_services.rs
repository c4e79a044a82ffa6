use std::sync::Arc;

use storage::repository::Storage;

use crate::api::{ApiConfig, HttpTrainingApi, TrainingApi};
use crate::dashboard_service::DashboardService;
use crate::error::AppServicesError;
use crate::identity_service::IdentityService;
use crate::module_service::ModuleService;

/// Assembles app-facing services over one API and one storage backend.
#[derive(Clone)]
pub struct AppServices {
    identity: Arc<IdentityService>,
    dashboard: Arc<DashboardService>,
    modules: Arc<ModuleService>,
}

impl AppServices {
    #[must_use]
    pub fn new(api: Arc<dyn TrainingApi>, storage: &Storage) -> Self {
        let identity = Arc::new(IdentityService::new(
            Arc::clone(&api),
            Arc::clone(&storage.identity),
        ));
        let dashboard = Arc::new(DashboardService::new(Arc::clone(&api)));
        let modules = Arc::new(ModuleService::new(api));
        Self {
            identity,
            dashboard,
            modules,
        }
    }

    /// Build services talking HTTP to `config` and persisting to `SQLite`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Sqlite` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, config: ApiConfig) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        let api: Arc<dyn TrainingApi> = Arc::new(HttpTrainingApi::new(config));
        Ok(Self::new(api, &storage))
    }

    /// Build services over `SQLite` with a caller-provided API, e.g. the offline demo.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Sqlite` if storage initialization fails.
    pub async fn with_api_sqlite(
        db_url: &str,
        api: Arc<dyn TrainingApi>,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::new(api, &storage))
    }

    #[must_use]
    pub fn identity(&self) -> Arc<IdentityService> {
        Arc::clone(&self.identity)
    }

    #[must_use]
    pub fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }

    #[must_use]
    pub fn modules(&self) -> Arc<ModuleService> {
        Arc::clone(&self.modules)
    }
}

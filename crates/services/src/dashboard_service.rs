use std::sync::Arc;

use aware_core::model::{ProgressOverview, TrainingModule, UserId, sort_by_order};

use crate::api::TrainingApi;
use crate::error::DashboardError;

/// Catalog plus the caller's progress, fetched together.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardSnapshot {
    pub modules: Vec<TrainingModule>,
    pub overview: ProgressOverview,
}

#[derive(Clone)]
pub struct DashboardService {
    api: Arc<dyn TrainingApi>,
}

impl DashboardService {
    #[must_use]
    pub fn new(api: Arc<dyn TrainingApi>) -> Self {
        Self { api }
    }

    /// Fetch modules and progress concurrently. Modules come back sorted by order.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::Api` if either request fails; partial data is dropped.
    pub async fn load(&self, user_id: &UserId) -> Result<DashboardSnapshot, DashboardError> {
        let (mut modules, records) =
            futures::try_join!(self.api.list_modules(), self.api.user_progress(user_id))?;
        sort_by_order(&mut modules);
        let overview = ProgressOverview::new(&modules, records);
        Ok(DashboardSnapshot { modules, overview })
    }
}

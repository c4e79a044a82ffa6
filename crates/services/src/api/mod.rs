//! The remote training API as seen by the client.

use async_trait::async_trait;

use aware_core::model::{
    Assessment, AssessmentResult, AssessmentSubmission, FeedbackReceipt, ModuleId, NewFeedback,
    NewUser, ProgressRecord, TrainingModule, User, UserId,
};

use crate::error::ApiError;

mod demo;
mod http;
mod memory;

pub use http::{ApiConfig, HttpTrainingApi};
pub use memory::{ApiCall, InMemoryTrainingApi};

/// One method per REST call the views make.
#[async_trait]
pub trait TrainingApi: Send + Sync {
    /// `POST users`
    async fn create_user(&self, user: &NewUser) -> Result<User, ApiError>;

    /// `GET modules`
    async fn list_modules(&self) -> Result<Vec<TrainingModule>, ApiError>;

    /// `GET modules/{id}`
    async fn get_module(&self, module_id: &ModuleId) -> Result<TrainingModule, ApiError>;

    /// `GET progress/{user_id}`
    async fn user_progress(&self, user_id: &UserId) -> Result<Vec<ProgressRecord>, ApiError>;

    /// `GET assessments/{module_id}`
    async fn get_assessment(&self, module_id: &ModuleId) -> Result<Assessment, ApiError>;

    /// `POST assessments/{module_id}/submit`
    async fn submit_assessment(
        &self,
        module_id: &ModuleId,
        submission: &AssessmentSubmission,
    ) -> Result<AssessmentResult, ApiError>;

    /// `POST feedback`
    async fn submit_feedback(&self, feedback: &NewFeedback) -> Result<FeedbackReceipt, ApiError>;
}

//! Shared error types for the services crate.

use thiserror::Error;

use aware_core::model::{AssessmentError, FeedbackError, UserError};
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `TrainingApi` implementations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("invalid API URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("API base URL cannot carry path segments: {0}")]
    InvalidBase(String),
    #[error("request failed with status {0}")]
    Status(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("{0} not found")]
    NotFound(String),
    #[error("service unavailable: {0}")]
    Unavailable(String),
}

/// Errors emitted by `IdentityService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IdentityError {
    #[error(transparent)]
    Validation(#[from] UserError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `DashboardService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DashboardError {
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `ModuleService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ModuleError {
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
    #[error(transparent)]
    Feedback(#[from] FeedbackError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}

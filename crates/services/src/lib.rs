#![forbid(unsafe_code)]

pub mod api;
pub mod app_services;
pub mod dashboard_service;
pub mod error;
pub mod identity_service;
pub mod module_service;

pub use api::{ApiCall, ApiConfig, HttpTrainingApi, InMemoryTrainingApi, TrainingApi};
pub use app_services::AppServices;
pub use dashboard_service::{DashboardService, DashboardSnapshot};
pub use error::{ApiError, AppServicesError, DashboardError, IdentityError, ModuleError};
pub use identity_service::IdentityService;
pub use module_service::{ModuleBundle, ModuleService};

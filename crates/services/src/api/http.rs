use std::env;

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use aware_core::model::{
    Assessment, AssessmentResult, AssessmentSubmission, FeedbackReceipt, ModuleId, NewFeedback,
    NewUser, ProgressRecord, TrainingModule, User, UserId,
};

use super::TrainingApi;
use crate::error::ApiError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8000";
    pub const ENV_BASE_URL: &'static str = "AWARE_API_URL";

    /// The base URL always ends with a slash so `api/` joins below it.
    #[must_use]
    pub fn new(mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self { base_url }
    }

    /// # Errors
    ///
    /// Returns `ApiError::Url` if `raw` is not an absolute URL.
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        Ok(Self::new(Url::parse(raw.trim())?))
    }

    /// Read the base URL from `AWARE_API_URL`, falling back to the local default.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Url` if the configured value is not a valid URL.
    pub fn from_env() -> Result<Self, ApiError> {
        let raw = env::var(Self::ENV_BASE_URL)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.into());
        Self::parse(&raw)
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build `{base}/api/{segments...}`, percent-encoding each segment.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidBase` if the base URL cannot have a path.
    pub fn for_api(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.join("api/")?;
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidBase(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// `reqwest`-backed implementation of the training API.
#[derive(Clone)]
pub struct HttpTrainingApi {
    client: Client,
    config: ApiConfig,
}

impl HttpTrainingApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        self.send::<(), T>(Method::GET, segments, None).await
    }

    async fn post<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T, ApiError> {
        self.send(Method::POST, segments, Some(body)).await
    }

    async fn send<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let url = self.config.for_api(segments)?;
        tracing::debug!(method = %method, url = %url, "Sending API request");

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = %status, "API request rejected");
            return Err(ApiError::Status(status));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl TrainingApi for HttpTrainingApi {
    async fn create_user(&self, user: &NewUser) -> Result<User, ApiError> {
        self.post(&["users"], user).await
    }

    async fn list_modules(&self) -> Result<Vec<TrainingModule>, ApiError> {
        self.get(&["modules"]).await
    }

    async fn get_module(&self, module_id: &ModuleId) -> Result<TrainingModule, ApiError> {
        self.get(&["modules", module_id.as_str()]).await
    }

    async fn user_progress(&self, user_id: &UserId) -> Result<Vec<ProgressRecord>, ApiError> {
        self.get(&["progress", user_id.as_str()]).await
    }

    async fn get_assessment(&self, module_id: &ModuleId) -> Result<Assessment, ApiError> {
        self.get(&["assessments", module_id.as_str()]).await
    }

    async fn submit_assessment(
        &self,
        module_id: &ModuleId,
        submission: &AssessmentSubmission,
    ) -> Result<AssessmentResult, ApiError> {
        self.post(&["assessments", module_id.as_str(), "submit"], submission)
            .await
    }

    async fn submit_feedback(&self, feedback: &NewFeedback) -> Result<FeedbackReceipt, ApiError> {
        self.post(&["feedback"], feedback).await
    }
}

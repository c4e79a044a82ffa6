use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use aware_core::model::{
    Assessment, AssessmentResult, AssessmentSubmission, FeedbackId, FeedbackReceipt, ModuleId,
    NewFeedback, NewUser, ProgressId, ProgressRecord, TrainingModule, User, UserId,
};

use super::TrainingApi;
use crate::error::ApiError;

/// Names each `TrainingApi` operation for failure injection and call counting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiCall {
    CreateUser,
    ListModules,
    GetModule,
    UserProgress,
    GetAssessment,
    SubmitAssessment,
    SubmitFeedback,
}

impl ApiCall {
    fn name(self) -> &'static str {
        match self {
            ApiCall::CreateUser => "create_user",
            ApiCall::ListModules => "list_modules",
            ApiCall::GetModule => "get_module",
            ApiCall::UserProgress => "user_progress",
            ApiCall::GetAssessment => "get_assessment",
            ApiCall::SubmitAssessment => "submit_assessment",
            ApiCall::SubmitFeedback => "submit_feedback",
        }
    }
}

#[derive(Default)]
struct State {
    users: Vec<User>,
    modules: Vec<TrainingModule>,
    assessments: HashMap<ModuleId, Assessment>,
    results: HashMap<ModuleId, AssessmentResult>,
    progress: Vec<ProgressRecord>,
    submissions: Vec<(ModuleId, AssessmentSubmission)>,
    feedback: Vec<NewFeedback>,
    failing: HashSet<ApiCall>,
    calls: HashMap<ApiCall, usize>,
}

/// In-process training API used for offline mode and tests.
///
/// Grading is scripted: `set_result` decides what a submission to a module returns.
/// Progress is written the way the service does it, only when the new score is better.
#[derive(Clone, Default)]
pub struct InMemoryTrainingApi {
    state: Arc<Mutex<State>>,
}

impl InMemoryTrainingApi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_module(self, module: TrainingModule) -> Self {
        if let Ok(mut state) = self.state.lock() {
            state.modules.retain(|existing| existing.id != module.id);
            state.modules.push(module);
        }
        self
    }

    #[must_use]
    pub fn with_assessment(self, assessment: Assessment) -> Self {
        if let Ok(mut state) = self.state.lock() {
            state
                .assessments
                .insert(assessment.module_id.clone(), assessment);
        }
        self
    }

    #[must_use]
    pub fn with_progress(self, record: ProgressRecord) -> Self {
        if let Ok(mut state) = self.state.lock() {
            state.progress.push(record);
        }
        self
    }

    /// Script the grading response for every later submission to `module_id`.
    pub fn set_result(&self, module_id: ModuleId, result: AssessmentResult) {
        if let Ok(mut state) = self.state.lock() {
            state.results.insert(module_id, result);
        }
    }

    /// Make `call` fail with `ApiError::Unavailable` until toggled back.
    pub fn fail(&self, call: ApiCall, failing: bool) {
        if let Ok(mut state) = self.state.lock() {
            if failing {
                state.failing.insert(call);
            } else {
                state.failing.remove(&call);
            }
        }
    }

    #[must_use]
    pub fn calls(&self, call: ApiCall) -> usize {
        self.state
            .lock()
            .map(|state| state.calls.get(&call).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    #[must_use]
    pub fn users(&self) -> Vec<User> {
        self.state
            .lock()
            .map(|state| state.users.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn submissions(&self) -> Vec<(ModuleId, AssessmentSubmission)> {
        self.state
            .lock()
            .map(|state| state.submissions.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn feedback(&self) -> Vec<NewFeedback> {
        self.state
            .lock()
            .map(|state| state.feedback.clone())
            .unwrap_or_default()
    }

    fn enter(&self, call: ApiCall) -> Result<MutexGuard<'_, State>, ApiError> {
        let mut state = self
            .state
            .lock()
            .map_err(|e| ApiError::Unavailable(e.to_string()))?;
        *state.calls.entry(call).or_insert(0) += 1;
        if state.failing.contains(&call) {
            return Err(ApiError::Unavailable(call.name().to_owned()));
        }
        Ok(state)
    }
}

#[async_trait]
impl TrainingApi for InMemoryTrainingApi {
    async fn create_user(&self, user: &NewUser) -> Result<User, ApiError> {
        let mut state = self.enter(ApiCall::CreateUser)?;
        let created = User {
            id: UserId::new(Uuid::new_v4().to_string()),
            name: user.name().to_owned(),
            role: user.role(),
            created_at: Some(Utc::now()),
        };
        state.users.push(created.clone());
        Ok(created)
    }

    async fn list_modules(&self) -> Result<Vec<TrainingModule>, ApiError> {
        let state = self.enter(ApiCall::ListModules)?;
        Ok(state.modules.clone())
    }

    async fn get_module(&self, module_id: &ModuleId) -> Result<TrainingModule, ApiError> {
        let state = self.enter(ApiCall::GetModule)?;
        state
            .modules
            .iter()
            .find(|module| &module.id == module_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("module {module_id}")))
    }

    async fn user_progress(&self, user_id: &UserId) -> Result<Vec<ProgressRecord>, ApiError> {
        let state = self.enter(ApiCall::UserProgress)?;
        Ok(state
            .progress
            .iter()
            .filter(|record| &record.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_assessment(&self, module_id: &ModuleId) -> Result<Assessment, ApiError> {
        let state = self.enter(ApiCall::GetAssessment)?;
        state
            .assessments
            .get(module_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("assessment for module {module_id}")))
    }

    async fn submit_assessment(
        &self,
        module_id: &ModuleId,
        submission: &AssessmentSubmission,
    ) -> Result<AssessmentResult, ApiError> {
        let mut state = self.enter(ApiCall::SubmitAssessment)?;
        let result = state
            .results
            .get(module_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("assessment for module {module_id}")))?;
        state
            .submissions
            .push((module_id.clone(), submission.clone()));

        let existing = state.progress.iter().position(|record| {
            record.user_id == submission.user_id && &record.module_id == module_id
        });
        if let Some(index) = existing {
            let record = &mut state.progress[index];
            if record.score.is_none_or(|score| result.score > score) {
                record.completed = result.passed;
                record.score = Some(result.score);
                record.total_questions = Some(result.total);
                record.completed_at = result.passed.then(Utc::now);
            }
        } else {
            state.progress.push(ProgressRecord {
                id: Some(ProgressId::new(Uuid::new_v4().to_string())),
                user_id: submission.user_id.clone(),
                module_id: module_id.clone(),
                completed: result.passed,
                score: Some(result.score),
                total_questions: Some(result.total),
                completed_at: result.passed.then(Utc::now),
            });
        }

        Ok(result)
    }

    async fn submit_feedback(&self, feedback: &NewFeedback) -> Result<FeedbackReceipt, ApiError> {
        let mut state = self.enter(ApiCall::SubmitFeedback)?;
        state.feedback.push(feedback.clone());
        Ok(FeedbackReceipt {
            id: Some(FeedbackId::new(Uuid::new_v4().to_string())),
            created_at: Some(Utc::now()),
        })
    }
}

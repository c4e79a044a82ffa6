use std::sync::Arc;

use aware_core::model::{
    AnswerSheet, Assessment, AssessmentResult, AssessmentSubmission, FeedbackDraft,
    FeedbackReceipt, ModuleId, TrainingModule, UserId,
};

use crate::api::TrainingApi;
use crate::error::ModuleError;

/// Everything the module page needs before it can render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleBundle {
    pub module: TrainingModule,
    pub assessment: Assessment,
}

/// Drives one module: content, grading and feedback.
#[derive(Clone)]
pub struct ModuleService {
    api: Arc<dyn TrainingApi>,
}

impl ModuleService {
    #[must_use]
    pub fn new(api: Arc<dyn TrainingApi>) -> Self {
        Self { api }
    }

    /// Fetch the module and its assessment concurrently.
    ///
    /// # Errors
    ///
    /// Returns `ModuleError::Api` if either request fails.
    pub async fn load(&self, module_id: &ModuleId) -> Result<ModuleBundle, ModuleError> {
        let (module, assessment) = futures::try_join!(
            self.api.get_module(module_id),
            self.api.get_assessment(module_id)
        )?;
        Ok(ModuleBundle { module, assessment })
    }

    /// Submit a complete answer sheet for grading.
    ///
    /// # Errors
    ///
    /// Returns `ModuleError::Assessment` when questions remain unanswered; nothing is sent.
    /// Returns `ModuleError::Api` if grading fails.
    pub async fn submit_assessment(
        &self,
        user_id: &UserId,
        assessment: &Assessment,
        answers: &AnswerSheet,
    ) -> Result<AssessmentResult, ModuleError> {
        let answers = answers.complete_for(assessment)?;
        let submission = AssessmentSubmission {
            user_id: user_id.clone(),
            answers,
        };
        let result = self
            .api
            .submit_assessment(&assessment.module_id, &submission)
            .await?;
        tracing::debug!(
            module_id = %assessment.module_id,
            score = result.score,
            total = result.total,
            passed = result.passed,
            "Assessment graded"
        );
        Ok(result)
    }

    /// Validate and send module feedback.
    ///
    /// # Errors
    ///
    /// Returns `ModuleError::Feedback` for blank comments; nothing is sent.
    /// Returns `ModuleError::Api` if the request fails.
    pub async fn submit_feedback(
        &self,
        user_id: &UserId,
        module_id: &ModuleId,
        draft: FeedbackDraft,
    ) -> Result<FeedbackReceipt, ModuleError> {
        let feedback = draft.validate(user_id.clone(), module_id.clone())?;
        let receipt = self.api.submit_feedback(&feedback).await?;
        Ok(receipt)
    }
}

//! The content → assessment → results → feedback flow of a module page.
//!
//! State lives only for one visit; nothing here is persisted.

use thiserror::Error;

use super::assessment::{AnswerSheet, AssessmentResult};
use super::ids::QuestionId;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ModulePhase {
    #[default]
    Content,
    Assessment,
    Results,
    Feedback,
}

/// A user action that moves the wizard between phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardStep {
    StartAssessment,
    BackToContent,
    ShowResults,
    ReviewContent,
    Retake,
    ContinueToFeedback,
}

/// Actions offered on the results screen besides "review content".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultsAction {
    Retake,
    ContinueToFeedback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum WizardError {
    #[error("cannot {step:?} from the {from:?} phase")]
    InvalidTransition { from: ModulePhase, step: WizardStep },
}

/// Allowed phase transitions. `passed` is the outcome of the last graded attempt.
#[must_use]
pub fn next_phase(from: ModulePhase, step: WizardStep, passed: Option<bool>) -> Option<ModulePhase> {
    use ModulePhase as P;
    use WizardStep as S;

    match (from, step) {
        (P::Content, S::StartAssessment) => Some(P::Assessment),
        (P::Assessment, S::BackToContent) => Some(P::Content),
        (P::Assessment, S::ShowResults) => Some(P::Results),
        (P::Results, S::ReviewContent) => Some(P::Content),
        (P::Results, S::Retake) if passed == Some(false) => Some(P::Assessment),
        (P::Results, S::ContinueToFeedback) if passed == Some(true) => Some(P::Feedback),
        _ => None,
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModuleWizard {
    phase: ModulePhase,
    answers: AnswerSheet,
    result: Option<AssessmentResult>,
}

impl ModuleWizard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> ModulePhase {
        self.phase
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    #[must_use]
    pub fn result(&self) -> Option<&AssessmentResult> {
        self.result.as_ref()
    }

    /// Results screen action besides "review content"; `None` outside the results phase.
    #[must_use]
    pub fn results_action(&self) -> Option<ResultsAction> {
        if self.phase != ModulePhase::Results {
            return None;
        }
        self.result.as_ref().map(|result| {
            if result.passed {
                ResultsAction::ContinueToFeedback
            } else {
                ResultsAction::Retake
            }
        })
    }

    /// Select an option while the assessment is open. Ignored in other phases.
    pub fn select_answer(&mut self, question_id: QuestionId, option: impl Into<String>) {
        if self.phase == ModulePhase::Assessment {
            self.answers.select(question_id, option);
        }
    }

    /// # Errors
    ///
    /// Returns `WizardError::InvalidTransition` unless in `Content`.
    pub fn start_assessment(&mut self) -> Result<(), WizardError> {
        self.apply(WizardStep::StartAssessment)?;
        self.answers.clear();
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `WizardError::InvalidTransition` unless in `Assessment`.
    pub fn back_to_content(&mut self) -> Result<(), WizardError> {
        self.apply(WizardStep::BackToContent)
    }

    /// Store a graded attempt and show it.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::InvalidTransition` unless in `Assessment`.
    pub fn record_result(&mut self, result: AssessmentResult) -> Result<(), WizardError> {
        self.apply(WizardStep::ShowResults)?;
        self.result = Some(result);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `WizardError::InvalidTransition` unless in `Results`.
    pub fn review_content(&mut self) -> Result<(), WizardError> {
        self.apply(WizardStep::ReviewContent)
    }

    /// # Errors
    ///
    /// Returns `WizardError::InvalidTransition` unless in `Results` after a failed attempt.
    pub fn retake(&mut self) -> Result<(), WizardError> {
        self.apply(WizardStep::Retake)?;
        self.answers.clear();
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `WizardError::InvalidTransition` unless in `Results` after a passed attempt.
    pub fn continue_to_feedback(&mut self) -> Result<(), WizardError> {
        self.apply(WizardStep::ContinueToFeedback)
    }

    fn apply(&mut self, step: WizardStep) -> Result<(), WizardError> {
        let passed = self.result.as_ref().map(|result| result.passed);
        let next = next_phase(self.phase, step, passed).ok_or(WizardError::InvalidTransition {
            from: self.phase,
            step,
        })?;
        self.phase = next;
        Ok(())
    }
}

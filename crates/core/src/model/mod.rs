mod assessment;
mod feedback;
mod ids;
mod module;
mod progress;
mod user;
mod wizard;

pub use ids::{AssessmentId, FeedbackId, ModuleId, ParseIdError, ProgressId, QuestionId, UserId};

pub use assessment::{
    AnswerSheet, Assessment, AssessmentError, AssessmentResult, AssessmentSubmission,
    PASS_THRESHOLD_PERCENT, Question, QuestionKind, format_percentage,
};
pub use feedback::{FeedbackDraft, FeedbackError, FeedbackReceipt, NewFeedback, Rating};
pub use module::{TrainingModule, sort_by_order};
pub use progress::{ModuleStatus, ProgressOverview, ProgressRecord};
pub use user::{NewUser, Role, User, UserDraft, UserError};
pub use wizard::{ModulePhase, ModuleWizard, ResultsAction, WizardError, WizardStep, next_phase};

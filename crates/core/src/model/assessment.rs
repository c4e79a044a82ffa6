use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use super::ids::{AssessmentId, ModuleId, QuestionId, UserId};

/// Passing grade as communicated by the assessment service.
///
/// Used for copy only. Pass/fail always comes from the grading response.
pub const PASS_THRESHOLD_PERCENT: u32 = 70;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    #[default]
    Mcq,
    TrueFalse,
}

/// A question as exposed to the client. The correct answer is never sent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    #[serde(rename = "question")]
    pub prompt: String,
    #[serde(rename = "type", default)]
    pub kind: QuestionKind,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub options: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub id: AssessmentId,
    pub module_id: ModuleId,
    pub questions: Vec<Question>,
}

impl Assessment {
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AssessmentError {
    #[error("please answer all questions ({remaining} remaining)")]
    Incomplete { remaining: usize },
}

/// Selected options keyed by question, for one attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    answers: BTreeMap<QuestionId, String>,
}

impl AnswerSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the selected option for a question, replacing any earlier choice.
    pub fn select(&mut self, question_id: QuestionId, option: impl Into<String>) {
        self.answers.insert(question_id, option.into());
    }

    #[must_use]
    pub fn selected(&self, question_id: &QuestionId) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Number of questions in `assessment` without a non-empty selection.
    #[must_use]
    pub fn unanswered(&self, assessment: &Assessment) -> usize {
        assessment
            .questions
            .iter()
            .filter(|question| {
                self.selected(&question.id)
                    .is_none_or(|answer| answer.is_empty())
            })
            .count()
    }

    /// Returns the answer map for submission once every question has a selection.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::Incomplete` naming the number of unanswered questions.
    pub fn complete_for(
        &self,
        assessment: &Assessment,
    ) -> Result<BTreeMap<QuestionId, String>, AssessmentError> {
        let remaining = self.unanswered(assessment);
        if remaining > 0 {
            return Err(AssessmentError::Incomplete { remaining });
        }
        Ok(assessment
            .questions
            .iter()
            .filter_map(|question| {
                self.answers
                    .get(&question.id)
                    .map(|answer| (question.id.clone(), answer.clone()))
            })
            .collect())
    }
}

/// Body of the grading call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AssessmentSubmission {
    pub user_id: UserId,
    pub answers: BTreeMap<QuestionId, String>,
}

/// Grading response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub score: u32,
    pub total: u32,
    pub percentage: f64,
    pub passed: bool,
}

impl AssessmentResult {
    #[must_use]
    pub fn percentage_label(&self) -> String {
        format_percentage(self.percentage)
    }
}

/// Formats a percentage the way the service reports it: whole numbers without a
/// fractional part, otherwise one decimal place.
#[must_use]
pub fn format_percentage(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

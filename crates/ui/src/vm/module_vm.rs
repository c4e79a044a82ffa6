use aware_core::model::{AssessmentResult, PASS_THRESHOLD_PERCENT, Question, QuestionId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub id: QuestionId,
    pub number: usize,
    pub prompt: String,
    pub options: Vec<String>,
}

#[must_use]
pub fn map_questions(questions: &[Question]) -> Vec<QuestionVm> {
    questions
        .iter()
        .enumerate()
        .map(|(index, question)| QuestionVm {
            id: question.id.clone(),
            number: index + 1,
            prompt: question.prompt.clone(),
            options: question.options.clone(),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub passed: bool,
    pub heading: &'static str,
    pub subheading: String,
    pub percentage_label: String,
    pub percentage_width: u32,
    pub score_details: String,
}

impl From<&AssessmentResult> for ResultsVm {
    fn from(result: &AssessmentResult) -> Self {
        let (heading, subheading) = if result.passed {
            (
                "Congratulations!",
                "You have successfully completed this module".to_owned(),
            )
        } else {
            (
                "Keep Trying!",
                format!(
                    "You need {PASS_THRESHOLD_PERCENT}% to pass. Review the content and try again."
                ),
            )
        };
        Self {
            passed: result.passed,
            heading,
            subheading,
            percentage_label: format!("{}%", result.percentage_label()),
            percentage_width: percentage_width(result.percentage),
            score_details: format!(
                "You scored {} out of {} questions correctly",
                result.score, result.total
            ),
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percentage_width(percentage: f64) -> u32 {
    percentage.clamp(0.0, 100.0).round() as u32
}

#[must_use]
pub fn assessment_copy() -> String {
    format!("Answer all questions to complete this module. Passing score: {PASS_THRESHOLD_PERCENT}%")
}

#[must_use]
pub fn incomplete_message(remaining: usize) -> String {
    format!("Please answer all questions ({remaining} remaining)")
}

/// Toast shown once a submission has been graded.
#[must_use]
pub fn graded_message(result: &AssessmentResult) -> String {
    let percentage = result.percentage_label();
    if result.passed {
        format!("Congratulations! You passed with {percentage}%")
    } else {
        format!("You scored {percentage}%. You need {PASS_THRESHOLD_PERCENT}% to pass.")
    }
}

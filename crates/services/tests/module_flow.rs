use std::sync::Arc;

use aware_core::model::{
    AnswerSheet, AssessmentError, AssessmentResult, FeedbackDraft, FeedbackError, ModuleId,
    ModulePhase, ModuleStatus, ModuleWizard, QuestionId, Rating, ResultsAction, Role, UserDraft,
};
use services::{
    ApiCall, AppServices, DashboardError, InMemoryTrainingApi, ModuleError, TrainingApi,
};
use storage::repository::Storage;

fn graded(score: u32, total: u32, passed: bool) -> AssessmentResult {
    let percentage = (f64::from(score) * 1000.0 / f64::from(total)).round() / 10.0;
    AssessmentResult {
        score,
        total,
        percentage,
        passed,
    }
}

fn services(api: &InMemoryTrainingApi) -> AppServices {
    let api: Arc<dyn TrainingApi> = Arc::new(api.clone());
    AppServices::new(api, &Storage::in_memory())
}

#[tokio::test]
async fn passing_attempt_completes_module_on_dashboard() {
    let api = InMemoryTrainingApi::demo();
    let services = services(&api);

    let user = services
        .identity()
        .register(UserDraft::new("Asha", Role::Student))
        .await
        .unwrap();

    let module_id = ModuleId::new("module-1");
    let bundle = services.modules().load(&module_id).await.unwrap();
    assert_eq!(bundle.module.order_label(), "Module 1");

    let mut wizard = ModuleWizard::new();
    wizard.start_assessment().unwrap();
    for question in &bundle.assessment.questions {
        wizard.select_answer(question.id.clone(), question.options[0].clone());
    }

    let result = services
        .modules()
        .submit_assessment(&user.id, &bundle.assessment, wizard.answers())
        .await
        .unwrap();
    wizard.record_result(result).unwrap();
    assert_eq!(wizard.phase(), ModulePhase::Results);
    assert_eq!(wizard.results_action(), Some(ResultsAction::ContinueToFeedback));

    wizard.continue_to_feedback().unwrap();
    let draft = FeedbackDraft {
        rating: Rating::new(4).unwrap(),
        comments: "  Clear and useful  ".into(),
    };
    services
        .modules()
        .submit_feedback(&user.id, &module_id, draft)
        .await
        .unwrap();
    let sent = api.feedback();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].comments, "Clear and useful");
    assert_eq!(sent[0].rating.value(), 4);

    let snapshot = services.dashboard().load(&user.id).await.unwrap();
    assert_eq!(snapshot.modules.len(), 4);
    assert_eq!(snapshot.overview.completed_count(), 1);
    assert_eq!(snapshot.overview.rounded_percentage(), 25);
    assert_eq!(
        snapshot.overview.status(&module_id),
        ModuleStatus::Completed
    );
}

#[tokio::test]
async fn failing_attempt_offers_retake_with_cleared_answers() {
    let api = InMemoryTrainingApi::demo();
    let module_id = ModuleId::new("module-2");
    api.set_result(module_id.clone(), graded(2, 3, false));
    let services = services(&api);

    let user = services
        .identity()
        .register(UserDraft::new("Omar", Role::Staff))
        .await
        .unwrap();
    let bundle = services.modules().load(&module_id).await.unwrap();

    let mut wizard = ModuleWizard::new();
    wizard.start_assessment().unwrap();
    for question in &bundle.assessment.questions {
        wizard.select_answer(question.id.clone(), question.options[1].clone());
    }
    let result = services
        .modules()
        .submit_assessment(&user.id, &bundle.assessment, wizard.answers())
        .await
        .unwrap();
    assert_eq!(result.percentage_label(), "66.7");
    wizard.record_result(result).unwrap();
    assert_eq!(wizard.results_action(), Some(ResultsAction::Retake));

    wizard.retake().unwrap();
    assert_eq!(wizard.phase(), ModulePhase::Assessment);
    assert!(wizard.answers().is_empty());

    let snapshot = services.dashboard().load(&user.id).await.unwrap();
    assert_eq!(snapshot.overview.completed_count(), 0);
    assert_eq!(
        snapshot.overview.status(&module_id),
        ModuleStatus::Attempted
    );
}

#[tokio::test]
async fn incomplete_answers_never_reach_the_service() {
    let api = InMemoryTrainingApi::demo();
    let services = services(&api);
    let bundle = services
        .modules()
        .load(&ModuleId::new("module-3"))
        .await
        .unwrap();

    let mut answers = AnswerSheet::new();
    answers.select(bundle.assessment.questions[0].id.clone(), "Refuse");
    answers.select(QuestionId::new("not-in-this-assessment"), "True");

    let err = services
        .modules()
        .submit_assessment(
            &aware_core::model::UserId::new("u-1"),
            &bundle.assessment,
            &answers,
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ModuleError::Assessment(AssessmentError::Incomplete { remaining: 2 })
    ));
    assert_eq!(api.calls(ApiCall::SubmitAssessment), 0);
}

#[tokio::test]
async fn blank_feedback_is_rejected_locally() {
    let api = InMemoryTrainingApi::demo();
    let services = services(&api);
    let err = services
        .modules()
        .submit_feedback(
            &aware_core::model::UserId::new("u-1"),
            &ModuleId::new("module-1"),
            FeedbackDraft {
                rating: Rating::default(),
                comments: " \n ".into(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ModuleError::Feedback(FeedbackError::EmptyComments)
    ));
    assert_eq!(api.calls(ApiCall::SubmitFeedback), 0);
}

#[tokio::test]
async fn missing_assessment_fails_module_load() {
    let api = InMemoryTrainingApi::demo();
    api.fail(ApiCall::GetAssessment, true);
    let services = services(&api);
    let err = services
        .modules()
        .load(&ModuleId::new("module-1"))
        .await
        .unwrap_err();
    assert!(matches!(err, ModuleError::Api(_)));
}

#[tokio::test]
async fn dashboard_fails_when_catalog_is_unavailable() {
    let api = InMemoryTrainingApi::demo();
    api.fail(ApiCall::ListModules, true);
    let services = services(&api);
    let err = services
        .dashboard()
        .load(&aware_core::model::UserId::new("u-1"))
        .await
        .unwrap_err();
    assert!(matches!(err, DashboardError::Api(_)));
}

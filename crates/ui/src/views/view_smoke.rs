use std::sync::Arc;

use async_trait::async_trait;
use aware_core::model::{ModuleId, ProgressRecord, Role, User, UserId};
use services::{ApiCall, InMemoryTrainingApi};
use storage::repository::{IdentityRepository, Storage, StorageError};

use super::test_harness::{
    ViewKind, setup_view_harness, setup_view_harness_with_storage, signed_in_user,
};

struct FailingClearRepo;

#[async_trait]
impl IdentityRepository for FailingClearRepo {
    async fn load_identity(&self) -> Result<Option<User>, StorageError> {
        Ok(None)
    }

    async fn save_identity(&self, _user: &User) -> Result<(), StorageError> {
        Ok(())
    }

    async fn clear_identity(&self) -> Result<(), StorageError> {
        Err(StorageError::Connection("disk unavailable".to_owned()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn landing_view_smoke_renders_registration_form() {
    let mut harness = setup_view_harness(ViewKind::Landing, InMemoryTrainingApi::demo(), None);

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Start Training"), "missing button in {html}");
    assert!(html.contains("Enter your full name"), "missing input in {html}");
    assert!(html.contains("Student"), "missing role in {html}");
    assert!(html.contains("Staff"), "missing role in {html}");
    assert!(html.contains("Interactive Assessments"), "missing feature tile in {html}");
    assert_eq!(harness.api.calls(ApiCall::CreateUser), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_renders_catalog_for_new_user() {
    let user = signed_in_user("Asha", Role::Student);
    let mut harness =
        setup_view_harness(ViewKind::Dashboard, InMemoryTrainingApi::demo(), Some(user));

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Training Dashboard"), "missing heading in {html}");
    assert!(html.contains("Asha"), "missing user name in {html}");
    assert!(html.contains("0%"), "missing percentage in {html}");
    assert!(html.contains("0 of 4 modules completed"), "missing summary in {html}");
    assert!(html.contains("Module 1"), "missing first module in {html}");
    assert!(html.contains("Module 4"), "missing last module in {html}");
    assert!(!html.contains("Completed"), "unexpected completed badge in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_marks_completed_module() {
    let user = signed_in_user("Omar", Role::Staff);
    let api = InMemoryTrainingApi::demo().with_progress(ProgressRecord {
        id: None,
        user_id: UserId::new("user-omar"),
        module_id: ModuleId::new("module-2"),
        completed: true,
        score: Some(3),
        total_questions: Some(3),
        completed_at: None,
    });
    let mut harness = setup_view_harness(ViewKind::Dashboard, api, Some(user));

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Staff Member"), "missing role badge in {html}");
    assert!(html.contains("25%"), "missing percentage in {html}");
    assert!(html.contains("1 of 4 modules completed"), "missing summary in {html}");
    assert!(html.contains("Completed"), "missing completed badge in {html}");
    assert!(html.contains("3/3"), "missing score in {html}");
    assert!(html.contains("Review"), "missing review action in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_renders_empty_on_failure() {
    let user = signed_in_user("Asha", Role::Student);
    let api = InMemoryTrainingApi::demo();
    api.fail(ApiCall::ListModules, true);
    let mut harness = setup_view_harness(ViewKind::Dashboard, api, Some(user));

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Failed to load modules"), "missing toast in {html}");
    assert!(html.contains("0 of 0 modules completed"), "missing summary in {html}");
    assert!(!html.contains("Module 1"), "unexpected module in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn module_view_smoke_renders_content_step() {
    let user = signed_in_user("Asha", Role::Student);
    let mut harness = setup_view_harness(
        ViewKind::Module("module-1".to_owned()),
        InMemoryTrainingApi::demo(),
        Some(user),
    );

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Back to Dashboard"), "missing back link in {html}");
    assert!(html.contains("How Social Engineering Works"), "missing title in {html}");
    assert!(html.contains("Training Video"), "missing video in {html}");
    assert!(html.contains("youtube.com/embed"), "missing embed url in {html}");
    assert!(html.contains("Module Content"), "missing content in {html}");
    assert!(html.contains("Start Assessment"), "missing start button in {html}");
    assert!(!html.contains("Submit Assessment"), "assessment shown too early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn module_view_smoke_hides_video_without_url() {
    let user = signed_in_user("Asha", Role::Student);
    let mut harness = setup_view_harness(
        ViewKind::Module("module-4".to_owned()),
        InMemoryTrainingApi::demo(),
        Some(user),
    );

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Module 4"), "missing order badge in {html}");
    assert!(!html.contains("Training Video"), "unexpected video in {html}");
    assert!(html.contains("Start Assessment"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn module_view_smoke_reports_load_failure() {
    let user = signed_in_user("Asha", Role::Student);
    let api = InMemoryTrainingApi::demo();
    api.fail(ApiCall::GetAssessment, true);
    let mut harness =
        setup_view_harness(ViewKind::Module("module-1".to_owned()), api, Some(user));

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Failed to load module"), "missing toast in {html}");
    assert!(
        html.contains("The training service is unavailable right now."),
        "missing error in {html}"
    );
    assert!(!html.contains("Start Assessment"), "unexpected content in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn module_view_smoke_reports_unknown_module() {
    let user = signed_in_user("Asha", Role::Student);
    let mut harness = setup_view_harness(
        ViewKind::Module("module-99".to_owned()),
        InMemoryTrainingApi::demo(),
        Some(user),
    );

    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("This module could not be found."),
        "missing not-found message in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn landing_view_rejects_blank_name() {
    let mut harness = setup_view_harness(ViewKind::Landing, InMemoryTrainingApi::demo(), None);

    harness.rebuild();
    harness.submit_landing("   ").await;
    let html = harness.render();
    assert!(html.contains("Please enter your name"), "missing toast in {html}");
    assert!(html.contains("Start Training"), "left landing page in {html}");
    assert_eq!(harness.api.calls(ApiCall::CreateUser), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn stored_identity_skips_landing() {
    let user = signed_in_user("Asha", Role::Student);
    let mut harness = setup_view_harness(ViewKind::Routed, InMemoryTrainingApi::demo(), Some(user));

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Training Dashboard"), "missing dashboard in {html}");
    assert!(html.contains("Module 1"), "missing catalog in {html}");
    assert!(!html.contains("Start Training"), "landing still shown in {html}");
    assert_eq!(harness.api.calls(ApiCall::CreateUser), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn registration_opens_dashboard() {
    let mut harness = setup_view_harness(ViewKind::Routed, InMemoryTrainingApi::demo(), None);

    harness.settle().await;
    assert!(harness.render().contains("Start Training"));

    harness.submit_landing("Asha").await;
    for _ in 0..3 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(html.contains("Welcome to the training program!"), "missing toast in {html}");
    assert!(html.contains("Training Dashboard"), "missing dashboard in {html}");
    assert_eq!(harness.api.calls(ApiCall::CreateUser), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_without_identity_loads_nothing() {
    let mut harness = setup_view_harness(ViewKind::Dashboard, InMemoryTrainingApi::demo(), None);

    harness.settle().await;
    let html = harness.render();
    assert!(!html.contains("Training Dashboard"), "unexpected dashboard in {html}");
    assert_eq!(harness.api.calls(ApiCall::ListModules), 0);
    assert_eq!(harness.api.calls(ApiCall::UserProgress), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn module_without_identity_loads_nothing() {
    let mut harness = setup_view_harness(
        ViewKind::Module("module-1".to_owned()),
        InMemoryTrainingApi::demo(),
        None,
    );

    harness.settle().await;
    let html = harness.render();
    assert!(!html.contains("How Social Engineering Works"), "unexpected content in {html}");
    assert!(!html.contains("Failed to load module"), "unexpected toast in {html}");
    assert_eq!(harness.api.calls(ApiCall::GetModule), 0);
    assert_eq!(harness.api.calls(ApiCall::GetAssessment), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn logout_returns_to_landing() {
    let user = signed_in_user("Asha", Role::Student);
    let mut harness = setup_view_harness(ViewKind::Routed, InMemoryTrainingApi::demo(), Some(user));

    harness.settle().await;
    assert!(harness.render().contains("Training Dashboard"));

    harness.press_logout().await;
    let html = harness.render();
    assert!(html.contains("Start Training"), "landing not shown in {html}");
    assert!(!html.contains("Training Dashboard"), "dashboard still shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn logout_failure_keeps_dashboard() {
    let user = signed_in_user("Asha", Role::Student);
    let storage = Storage {
        identity: Arc::new(FailingClearRepo),
    };
    let mut harness = setup_view_harness_with_storage(
        ViewKind::Dashboard,
        InMemoryTrainingApi::demo(),
        Some(user),
        storage,
    );

    harness.settle().await;
    harness.press_logout().await;
    let html = harness.render();
    assert!(html.contains("Failed to log out"), "missing toast in {html}");
    assert!(html.contains("Training Dashboard"), "dashboard closed in {html}");
}

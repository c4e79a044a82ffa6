use std::sync::Arc;

use aware_core::model::{Role, UserDraft};
use services::{AppServices, InMemoryTrainingApi, TrainingApi};

#[tokio::test]
async fn identity_survives_restart_and_is_forgotten_on_logout() {
    let db_url = "sqlite:file:memdb_services_identity?mode=memory&cache=shared";
    let api: Arc<dyn TrainingApi> = Arc::new(InMemoryTrainingApi::demo());

    let first = AppServices::with_api_sqlite(db_url, Arc::clone(&api))
        .await
        .expect("services");
    let user = first
        .identity()
        .register(UserDraft::new("Lina", Role::Staff))
        .await
        .unwrap();

    let second = AppServices::with_api_sqlite(db_url, Arc::clone(&api))
        .await
        .expect("services");
    let restored = second.identity().current().await.unwrap();
    assert_eq!(restored, Some(user));

    second.identity().logout().await.unwrap();
    assert_eq!(first.identity().current().await.unwrap(), None);
}

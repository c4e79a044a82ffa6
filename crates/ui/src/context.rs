use std::sync::Arc;

use aware_core::model::User;
use dioxus::prelude::*;
use services::{DashboardService, IdentityService, ModuleService};

pub trait UiApp: Send + Sync {
    fn identity(&self) -> Arc<IdentityService>;
    fn dashboard(&self) -> Arc<DashboardService>;
    fn modules(&self) -> Arc<ModuleService>;

    /// Identity restored from local storage at launch, if any.
    fn initial_user(&self) -> Option<User>;
}

#[derive(Clone)]
pub struct AppContext {
    identity: Arc<IdentityService>,
    dashboard: Arc<DashboardService>,
    modules: Arc<ModuleService>,
    initial_user: Option<User>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            identity: app.identity(),
            dashboard: app.dashboard(),
            modules: app.modules(),
            initial_user: app.initial_user(),
        }
    }

    #[must_use]
    pub fn identity(&self) -> Arc<IdentityService> {
        Arc::clone(&self.identity)
    }

    #[must_use]
    pub fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }

    #[must_use]
    pub fn modules(&self) -> Arc<ModuleService> {
        Arc::clone(&self.modules)
    }

    #[must_use]
    pub fn initial_user(&self) -> Option<User> {
        self.initial_user.clone()
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// The in-memory view of the local identity.
///
/// Created by the landing view, read by gated views, emptied on logout.
/// Persistence goes through `IdentityService`; this only mirrors it.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionContext {
    user: Signal<Option<User>>,
}

impl SessionContext {
    #[must_use]
    pub fn new(user: Signal<Option<User>>) -> Self {
        Self { user }
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.user.read().clone()
    }

    pub fn sign_in(&mut self, user: User) {
        self.user.set(Some(user));
    }

    pub fn sign_out(&mut self) {
        self.user.set(None);
    }
}

/// Provide `SessionContext` seeded from the restored identity.
pub fn use_session_provider(initial_user: Option<User>) -> SessionContext {
    let user = use_signal(move || initial_user);
    use_context_provider(|| SessionContext::new(user))
}

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use aware_core::model::{Role, User, UserId};
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{AppServices, DashboardService, IdentityService, InMemoryTrainingApi, ModuleService};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context, use_session_provider};
use crate::routes::Route;
use crate::toast::{Toaster, use_toasts_provider};
use crate::views::{DashboardView, LandingView, ModuleView};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
    initial_user: Option<User>,
}

impl UiApp for TestApp {
    fn identity(&self) -> Arc<IdentityService> {
        self.services.identity()
    }

    fn dashboard(&self) -> Arc<DashboardService> {
        self.services.dashboard()
    }

    fn modules(&self) -> Arc<ModuleService> {
        self.services.modules()
    }

    fn initial_user(&self) -> Option<User> {
        self.initial_user.clone()
    }
}

/// Which view the harness mounts. `Routed` mounts the app router at `/`.
#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Landing,
    Dashboard,
    Module(String),
    Routed,
}

/// Actions and inputs a view registers so tests can drive it without DOM events.
#[derive(Clone, Default)]
pub struct ViewTestHandles {
    start: Rc<RefCell<Option<Callback<()>>>>,
    name: Rc<RefCell<Option<Signal<String>>>>,
    logout: Rc<RefCell<Option<Callback<()>>>>,
}

impl ViewTestHandles {
    pub fn register_landing(&self, start: Callback<()>, name: Signal<String>) {
        *self.start.borrow_mut() = Some(start);
        *self.name.borrow_mut() = Some(name);
    }

    pub fn register_logout(&self, logout: Callback<()>) {
        *self.logout.borrow_mut() = Some(logout);
    }

    pub fn start(&self) -> Callback<()> {
        (*self.start.borrow()).expect("landing start registered")
    }

    pub fn name(&self) -> Signal<String> {
        (*self.name.borrow()).expect("landing name registered")
    }

    pub fn logout(&self) -> Callback<()> {
        (*self.logout.borrow()).expect("dashboard logout registered")
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: ViewTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    use_session_provider(ctx.initial_user());
    use_toasts_provider();
    let handles = props.handles.clone();
    use_context_provider(|| handles);
    let view = props.view.clone();
    use_context_provider(|| view.clone());
    if view == ViewKind::Routed {
        return rsx! {
            Router::<Route> {}
            Toaster {}
        };
    }
    rsx! {
        Router::<TestRoute> {}
        Toaster {}
    }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Landing => rsx! { LandingView {} },
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::Module(module_id) => rsx! { ModuleView { module_id } },
        ViewKind::Routed => rsx! {},
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub api: InMemoryTrainingApi,
    pub handles: ViewTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild, then let pending resources resolve.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    /// Set the landing name field, then press "Start Training".
    pub async fn submit_landing(&mut self, name: &str) {
        let handles = self.handles.clone();
        let name = name.to_owned();
        self.dom.in_runtime(|| {
            let mut field = handles.name();
            field.set(name);
            handles.start().call(());
        });
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    pub async fn press_logout(&mut self) {
        let handles = self.handles.clone();
        self.dom.in_runtime(|| handles.logout().call(()));
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn signed_in_user(name: &str, role: Role) -> User {
    User {
        id: UserId::new(format!("user-{}", name.to_lowercase())),
        name: name.to_owned(),
        role,
        created_at: None,
    }
}

pub fn setup_view_harness(
    view: ViewKind,
    api: InMemoryTrainingApi,
    user: Option<User>,
) -> ViewHarness {
    setup_view_harness_with_storage(view, api, user, Storage::in_memory())
}

pub fn setup_view_harness_with_storage(
    view: ViewKind,
    api: InMemoryTrainingApi,
    user: Option<User>,
    storage: Storage,
) -> ViewHarness {
    let services = AppServices::new(Arc::new(api.clone()), &storage);
    let app = Arc::new(TestApp {
        services,
        initial_user: user,
    });

    let handles = ViewTestHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, api, handles }
}

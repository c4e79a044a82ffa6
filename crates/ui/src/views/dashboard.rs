use dioxus::prelude::*;
use dioxus_router::use_navigator;

use aware_core::model::User;
use services::DashboardSnapshot;

use crate::context::{AppContext, SessionContext};
use crate::routes::Route;
use crate::toast::Toasts;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{DashboardVm, ModuleCardVm, map_dashboard};

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<SessionContext>();
    let toasts = use_context::<Toasts>();
    let navigator = use_navigator();
    let dashboard = ctx.dashboard();
    let identity = ctx.identity();

    let user = session.user();
    use_effect(move || {
        if session.user().is_none() {
            let _ = navigator.replace(Route::Landing {});
        }
    });

    let user_for_resource = user.clone();
    let resource = use_resource(move || {
        let dashboard = dashboard.clone();
        let user = user_for_resource.clone();
        let mut toasts = toasts;
        async move {
            let Some(user) = user else {
                return Ok::<_, ViewError>(DashboardSnapshot::default());
            };
            // A failed load still renders the page, empty.
            match dashboard.load(&user.id).await {
                Ok(snapshot) => Ok(snapshot),
                Err(err) => {
                    tracing::warn!(error = %err, "Failed to load dashboard");
                    toasts.error("Failed to load modules");
                    Ok(DashboardSnapshot::default())
                }
            }
        }
    });
    let state = view_state_from_resource(resource);

    let on_logout = use_callback(move |()| {
        let identity = identity.clone();
        let mut session = session;
        let mut toasts = toasts;
        spawn(async move {
            match identity.logout().await {
                Ok(()) => {
                    session.sign_out();
                    let _ = navigator.replace(Route::Landing {});
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Failed to clear identity");
                    toasts.error("Failed to log out");
                }
            }
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<super::test_harness::ViewTestHandles>() {
                handles.register_logout(on_logout);
            }
        }
    }

    let Some(user) = user else {
        return rsx! {};
    };

    rsx! {
        div { class: "page dashboard-page",
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    div { class: "loading",
                        div { class: "spinner" }
                        p { "Loading..." }
                    }
                },
                ViewState::Ready(snapshot) => rsx! {
                    DashboardBody {
                        vm: dashboard_vm(&user, &snapshot),
                        on_logout,
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}

fn dashboard_vm(user: &User, snapshot: &DashboardSnapshot) -> DashboardVm {
    map_dashboard(user, &snapshot.modules, &snapshot.overview)
}

#[component]
fn DashboardBody(vm: DashboardVm, on_logout: EventHandler<()>) -> Element {
    rsx! {
        header { class: "dashboard-header",
            div {
                h1 { "Training Dashboard" }
                p {
                    "Welcome back, "
                    span { class: "user-name", "{vm.user_name}" }
                }
                span { class: "badge badge-outline", "{vm.role_badge}" }
            }
            button {
                class: "secondary",
                r#type: "button",
                onclick: move |_| on_logout.call(()),
                "Logout"
            }
        }

        section { class: "card progress-card",
            h2 { "Your Progress" }
            p { class: "muted", "Complete all modules to master social engineering defense" }
            div { class: "progress-row",
                span { class: "muted", "Overall Completion" }
                span { class: "progress-percentage", "{vm.percentage_label}" }
            }
            div { class: "progress-bar",
                div { class: "progress-fill", style: "width: {vm.percentage_width}%" }
            }
            p { class: "muted", "{vm.completed_summary}" }
        }

        section { class: "module-list",
            h2 { "Training Modules" }
            for card in vm.cards {
                ModuleCard { key: "{card.id}", card }
            }
        }
    }
}

#[component]
fn ModuleCard(card: ModuleCardVm) -> Element {
    let navigator = use_navigator();
    let module_id = card.id.to_string();

    rsx! {
        div {
            class: "card module-card",
            onclick: move |_| {
                let _ = navigator.push(Route::Module {
                    module_id: module_id.clone(),
                });
            },
            div { class: "module-badges",
                span { class: "badge", "{card.order_label}" }
                if card.completed {
                    span { class: "badge badge-success", "Completed" }
                }
            }
            h3 { "{card.title}" }
            p { class: "muted", "{card.description}" }
            div { class: "module-meta",
                span { class: "duration", "{card.duration}" }
                if let Some(score) = card.score_label.as_ref() {
                    span { class: "score",
                        "Score: "
                        strong { "{score}" }
                    }
                }
                button { class: "primary", r#type: "button", "{card.action_label}" }
            }
        }
    }
}

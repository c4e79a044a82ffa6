use dioxus::prelude::*;
use dioxus_router::use_navigator;

use aware_core::model::{ModuleId, ModulePhase, ModuleWizard};
use services::ModuleBundle;

use crate::context::{AppContext, SessionContext};
use crate::routes::Route;
use crate::toast::Toasts;
use crate::views::{ViewError, ViewState, view_state_from_resource};

use super::assessment::AssessmentSection;
use super::content::ContentSection;
use super::feedback::FeedbackSection;
use super::results::ResultsSection;

#[component]
pub fn ModuleView(module_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<SessionContext>();
    let toasts = use_context::<Toasts>();
    let navigator = use_navigator();
    let modules = ctx.modules();

    use_effect(move || {
        if session.user().is_none() {
            let _ = navigator.replace(Route::Landing {});
        }
    });

    let mut wizard = use_signal(ModuleWizard::new);

    let resource = use_resource(move || {
        let modules = modules.clone();
        let module_id = ModuleId::new(module_id.clone());
        let signed_in = session.user().is_some();
        let mut toasts = toasts;
        async move {
            if !signed_in {
                return Err(ViewError::Unknown);
            }
            modules.load(&module_id).await.map_err(|err| {
                tracing::warn!(module_id = %module_id, error = %err, "Failed to load module");
                toasts.error("Failed to load module");
                ViewError::from(err)
            })
        }
    });
    let state = view_state_from_resource(resource);

    let Some(user) = session.user() else {
        return rsx! {};
    };

    rsx! {
        div { class: "page module-page",
            button {
                class: "link-button",
                r#type: "button",
                onclick: move |_| {
                    let _ = navigator.push(Route::Dashboard {});
                },
                "← Back to Dashboard"
            }

            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    div { class: "loading",
                        div { class: "spinner" }
                        p { "Loading module..." }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
                ViewState::Ready(ModuleBundle { module, assessment }) => {
                    let phase = wizard.read().phase();
                    rsx! {
                        header { class: "module-header",
                            span { class: "badge", "{module.order_label()}" }
                            h1 { "{module.title}" }
                            p { class: "muted", "{module.description}" }
                        }
                        match phase {
                            ModulePhase::Content => rsx! {
                                ContentSection {
                                    module: module.clone(),
                                    on_start: move |()| {
                                        if let Err(err) = wizard.write().start_assessment() {
                                            tracing::debug!(error = %err, "Ignored wizard step");
                                        }
                                    },
                                }
                            },
                            ModulePhase::Assessment => rsx! {
                                AssessmentSection { assessment: assessment.clone(), user: user.clone(), wizard }
                            },
                            ModulePhase::Results => rsx! {
                                ResultsSection { wizard }
                            },
                            ModulePhase::Feedback => rsx! {
                                FeedbackSection { module_id: module.id.clone(), user: user.clone() }
                            },
                        }
                    }
                }
            }
        }
    }
}

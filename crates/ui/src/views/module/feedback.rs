use dioxus::prelude::*;
use dioxus_router::use_navigator;

use aware_core::model::{FeedbackDraft, FeedbackError, ModuleId, Rating, User};
use services::ModuleError;

use crate::context::AppContext;
use crate::routes::Route;
use crate::toast::Toasts;

#[component]
pub(super) fn FeedbackSection(module_id: ModuleId, user: User) -> Element {
    let ctx = use_context::<AppContext>();
    let toasts = use_context::<Toasts>();
    let navigator = use_navigator();
    let modules = ctx.modules();

    let mut rating = use_signal(Rating::default);
    let mut comments = use_signal(String::new);
    let submitting = use_signal(|| false);

    let on_submit = use_callback(move |()| {
        if submitting() {
            return;
        }
        let draft = FeedbackDraft {
            rating: rating(),
            comments: comments(),
        };
        let modules = modules.clone();
        let user_id = user.id.clone();
        let module_id = module_id.clone();
        let mut toasts = toasts;
        let mut submitting = submitting;
        submitting.set(true);
        spawn(async move {
            match modules.submit_feedback(&user_id, &module_id, draft).await {
                Ok(_) => {
                    toasts.success("Thank you for your feedback!");
                    submitting.set(false);
                    let _ = navigator.push(Route::Dashboard {});
                }
                Err(ModuleError::Feedback(FeedbackError::EmptyComments)) => {
                    toasts.error("Please provide your comments");
                    submitting.set(false);
                }
                Err(err) => {
                    tracing::warn!(module_id = %module_id, error = %err, "Failed to submit feedback");
                    toasts.error("Failed to submit feedback");
                    submitting.set(false);
                }
            }
        });
    });

    let current = rating();
    let submit_label = if submitting() {
        "Submitting..."
    } else {
        "Submit Feedback"
    };

    rsx! {
        section { class: "card feedback-card",
            h2 { "Module Feedback" }
            p { class: "muted", "Help us improve this training module with your feedback" }

            label { "Rate this module" }
            div { class: "rating",
                for star in Rating::all() {
                    button {
                        key: "{star.value()}",
                        class: if star <= current { "star filled" } else { "star" },
                        r#type: "button",
                        aria_label: "{star.value()} stars",
                        onclick: move |_| rating.set(star),
                        "★"
                    }
                }
            }

            label { r#for: "comments", "Your Comments" }
            textarea {
                id: "comments",
                rows: 5,
                placeholder: "Share your thoughts about this module...",
                value: "{comments}",
                oninput: move |evt| comments.set(evt.value()),
            }

            div { class: "feedback-actions",
                button {
                    class: "secondary",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Dashboard {});
                    },
                    "Skip for Now"
                }
                button {
                    class: "primary",
                    r#type: "button",
                    disabled: submitting(),
                    onclick: move |_| on_submit.call(()),
                    "{submit_label}"
                }
            }
        }
    }
}

use dioxus::prelude::*;

use aware_core::model::{ModuleWizard, ResultsAction};

use crate::vm::ResultsVm;

#[component]
pub(super) fn ResultsSection(wizard: Signal<ModuleWizard>) -> Element {
    let mut wizard = wizard;
    let (vm, action) = {
        let current = wizard.read();
        (current.result().map(ResultsVm::from), current.results_action())
    };
    let Some(vm) = vm else {
        return rsx! {};
    };
    let card_class = if vm.passed {
        "card results-card passed"
    } else {
        "card results-card failed"
    };

    rsx! {
        section { class: card_class,
            h2 { class: "results-heading", "{vm.heading}" }
            p { class: "muted", "{vm.subheading}" }
            div { class: "score-percentage", "{vm.percentage_label}" }
            p { class: "score-details", "{vm.score_details}" }
            div { class: "progress-bar",
                div { class: "progress-fill", style: "width: {vm.percentage_width}%" }
            }

            div { class: "results-actions",
                button {
                    class: "secondary",
                    r#type: "button",
                    onclick: move |_| {
                        if let Err(err) = wizard.write().review_content() {
                            tracing::debug!(error = %err, "Ignored wizard step");
                        }
                    },
                    "Review Content"
                }
                match action {
                    Some(ResultsAction::Retake) => rsx! {
                        button {
                            class: "primary",
                            r#type: "button",
                            onclick: move |_| {
                                if let Err(err) = wizard.write().retake() {
                                    tracing::debug!(error = %err, "Ignored wizard step");
                                }
                            },
                            "Retake Assessment"
                        }
                    },
                    Some(ResultsAction::ContinueToFeedback) => rsx! {
                        button {
                            class: "primary",
                            r#type: "button",
                            onclick: move |_| {
                                if let Err(err) = wizard.write().continue_to_feedback() {
                                    tracing::debug!(error = %err, "Ignored wizard step");
                                }
                            },
                            "Continue to Feedback"
                        }
                    },
                    None => rsx! {},
                }
            }
        }
    }
}

use dioxus::prelude::*;

use aware_core::model::{Assessment, AssessmentError, ModuleWizard, User};
use services::ModuleError;

use crate::context::AppContext;
use crate::toast::Toasts;
use crate::vm::{QuestionVm, assessment_copy, graded_message, incomplete_message, map_questions};

#[component]
pub(super) fn AssessmentSection(
    assessment: Assessment,
    user: User,
    wizard: Signal<ModuleWizard>,
) -> Element {
    let mut wizard = wizard;
    let ctx = use_context::<AppContext>();
    let toasts = use_context::<Toasts>();
    let modules = ctx.modules();
    let submitting = use_signal(|| false);
    let questions = map_questions(&assessment.questions);

    let on_submit = use_callback(move |()| {
        if submitting() {
            return;
        }
        let mut toasts = toasts;
        let answers = wizard.read().answers().clone();
        let remaining = answers.unanswered(&assessment);
        if remaining > 0 {
            toasts.error(incomplete_message(remaining));
            return;
        }

        let modules = modules.clone();
        let assessment = assessment.clone();
        let user_id = user.id.clone();
        let mut submitting = submitting;
        submitting.set(true);
        spawn(async move {
            match modules
                .submit_assessment(&user_id, &assessment, &answers)
                .await
            {
                Ok(result) => {
                    if result.passed {
                        toasts.success(graded_message(&result));
                    } else {
                        toasts.error(graded_message(&result));
                    }
                    if let Err(err) = wizard.write().record_result(result) {
                        tracing::warn!(error = %err, "Graded result arrived outside the assessment");
                    }
                }
                Err(ModuleError::Assessment(AssessmentError::Incomplete { remaining })) => {
                    toasts.error(incomplete_message(remaining));
                }
                Err(err) => {
                    tracing::warn!(module_id = %assessment.module_id, error = %err, "Failed to submit assessment");
                    toasts.error("Failed to submit assessment");
                }
            }
            submitting.set(false);
        });
    });

    let submit_label = if submitting() {
        "Submitting..."
    } else {
        "Submit Assessment"
    };

    rsx! {
        section { class: "card assessment-card",
            h2 { "Module Assessment" }
            p { class: "muted", "{assessment_copy()}" }

            for question in questions {
                QuestionBlock { key: "{question.id}", question, wizard }
            }

            div { class: "assessment-actions",
                button {
                    class: "secondary",
                    r#type: "button",
                    onclick: move |_| {
                        if let Err(err) = wizard.write().back_to_content() {
                            tracing::debug!(error = %err, "Ignored wizard step");
                        }
                    },
                    "Back to Content"
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

#[component]
fn QuestionBlock(question: QuestionVm, wizard: Signal<ModuleWizard>) -> Element {
    let mut wizard = wizard;
    let selected = wizard
        .read()
        .answers()
        .selected(&question.id)
        .map(str::to_owned);
    let group = question.id.to_string();

    rsx! {
        div { class: "question",
            span { class: "badge badge-outline", "{question.number}" }
            div { class: "question-body",
                p { class: "question-text", "{question.prompt}" }
                for option in question.options.clone() {
                    label { class: "answer-option",
                        input {
                            r#type: "radio",
                            name: "{group}",
                            value: "{option}",
                            checked: selected.as_deref() == Some(option.as_str()),
                            onchange: {
                                let question_id = question.id.clone();
                                let option = option.clone();
                                move |_| {
                                    wizard
                                        .write()
                                        .select_answer(question_id.clone(), option.clone());
                                }
                            },
                        }
                        "{option}"
                    }
                }
            }
        }
    }
}

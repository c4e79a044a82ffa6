use dioxus::prelude::*;
use dioxus_router::use_navigator;

use aware_core::model::{Role, UserDraft, UserError};
use services::IdentityError;

use crate::context::{AppContext, SessionContext};
use crate::routes::Route;
use crate::toast::Toasts;

const FEATURES: [(&str, &str); 3] = [
    (
        "4 Comprehensive Modules",
        "From psychology to protocols, covering all aspects of human hacking",
    ),
    (
        "Interactive Assessments",
        "Test your knowledge with quizzes after each module",
    ),
    (
        "Progress Tracking",
        "Monitor your completion status and scores",
    ),
];

#[component]
pub fn LandingView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<SessionContext>();
    let toasts = use_context::<Toasts>();
    let navigator = use_navigator();
    let identity = ctx.identity();

    use_effect(move || {
        if session.user().is_some() {
            let _ = navigator.replace(Route::Dashboard {});
        }
    });

    let mut name = use_signal(String::new);
    let mut role = use_signal(Role::default);
    let submitting = use_signal(|| false);

    let on_start = use_callback(move |()| {
        if submitting() {
            return;
        }
        let draft = UserDraft::new(name(), role());
        let identity = identity.clone();
        let mut session = session;
        let mut toasts = toasts;
        let mut submitting = submitting;
        submitting.set(true);
        spawn(async move {
            match identity.register(draft).await {
                Ok(user) => {
                    session.sign_in(user);
                    toasts.success("Welcome to the training program!");
                    submitting.set(false);
                    let _ = navigator.push(Route::Dashboard {});
                }
                Err(IdentityError::Validation(UserError::EmptyName)) => {
                    toasts.error("Please enter your name");
                    submitting.set(false);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Failed to create user");
                    toasts.error("Failed to start. Please try again.");
                    submitting.set(false);
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
                handles.register_landing(on_start, name);
            }
        }
    }

    let button_label = if submitting() {
        "Starting..."
    } else {
        "Start Training"
    };

    rsx! {
        div { class: "page landing-page",
            header { class: "landing-header",
                h1 { "Social Engineering & Human Hacking" }
                p {
                    "Comprehensive training program to protect yourself and your organization from social engineering attacks"
                }
            }

            div { class: "feature-grid",
                for (title, blurb) in FEATURES {
                    div { class: "card feature-card",
                        h3 { "{title}" }
                        p { "{blurb}" }
                    }
                }
            }

            div { class: "card registration-card",
                h2 { "Get Started" }
                p { class: "muted", "Enter your details to begin the training program" }

                label { r#for: "name", "Your Name" }
                input {
                    id: "name",
                    r#type: "text",
                    placeholder: "Enter your full name",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            on_start.call(());
                        }
                    },
                }

                fieldset { class: "role-selector",
                    legend { "Select Your Role" }
                    for option in Role::ALL {
                        label { class: "role-option",
                            input {
                                r#type: "radio",
                                name: "role",
                                value: option.as_str(),
                                checked: role() == option,
                                onchange: move |_| role.set(option),
                            }
                            "{option.label()}"
                        }
                    }
                }

                button {
                    class: "primary",
                    r#type: "button",
                    disabled: submitting(),
                    onclick: move |_| on_start.call(()),
                    "{button_label}"
                }
            }
        }
    }
}

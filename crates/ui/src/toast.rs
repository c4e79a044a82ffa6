use std::time::Duration;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;

/// How long a toast stays on screen unless closed earlier.
pub const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Global transient notifications, provided at the app root.
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    items: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    #[must_use]
    pub fn items(&self) -> Vec<Toast> {
        self.items.read().clone()
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.write().retain(|toast| toast.id != id);
    }

    fn push(&mut self, kind: ToastKind, message: String) {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);
        self.items.write().push(Toast { id, kind, message });

        // Root scope, so the timer outlives the view that raised the toast.
        let mut toasts = *self;
        spawn_forever(async move {
            tokio::time::sleep(TOAST_TTL).await;
            toasts.dismiss(id);
        });
    }
}

pub fn use_toasts_provider() -> Toasts {
    let items = use_signal(Vec::new);
    let next_id = use_signal(|| 0_u64);
    use_context_provider(|| Toasts { items, next_id })
}

#[component]
pub fn Toaster() -> Element {
    let toasts = use_context::<Toasts>();
    let items = toasts.items();

    rsx! {
        div { class: "toaster", role: "status",
            for toast in items {
                div { key: "{toast.id}", class: toast.kind.class(),
                    span { class: "toast-message", "{toast.message}" }
                    button {
                        class: "toast-close",
                        r#type: "button",
                        aria_label: "Close",
                        onclick: move |_| {
                            let mut toasts = toasts;
                            toasts.dismiss(toast.id);
                        },
                        "×"
                    }
                }
            }
        }
    }
}

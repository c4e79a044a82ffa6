use dioxus::prelude::*;

use aware_core::model::TrainingModule;

use crate::vm::{embeddable_video_url, markdown_to_html};

#[component]
pub(super) fn ContentSection(module: TrainingModule, on_start: EventHandler<()>) -> Element {
    let video_url = embeddable_video_url(&module.video_url);
    let content_html = markdown_to_html(&module.content);

    rsx! {
        div { class: "module-content",
            if let Some(src) = video_url {
                section { class: "card video-card",
                    h2 { "Training Video" }
                    div { class: "video-frame",
                        iframe {
                            src: "{src}",
                            title: "Training Video",
                            width: "100%",
                            height: "100%",
                            allow: "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture",
                            allowfullscreen: true,
                        }
                    }
                }
            }

            section { class: "card content-card",
                h2 { "Module Content" }
                div { class: "prose", dangerous_inner_html: "{content_html}" }
            }

            section { class: "card assessment-prompt",
                h3 { "Ready to Test Your Knowledge?" }
                p { class: "muted", "Complete the assessment to earn your certificate" }
                button {
                    class: "primary",
                    r#type: "button",
                    onclick: move |_| on_start.call(()),
                    "Start Assessment"
                }
            }
        }
    }
}

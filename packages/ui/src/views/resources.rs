use dioxus::prelude::*;
use session::library::RESOURCES;
use session::pipeline::resources;

use crate::context::{use_host, use_session};

#[component]
pub fn ResourcesPage() -> Element {
    let mut host = use_host();
    let session = use_session();
    let used: Vec<String> = session
        .read()
        .resource_uses()
        .iter()
        .map(|u| u.resource_id.clone())
        .collect();

    rsx! {
        div {
            class: "form-container",
            h1 { "Self-help Resources" }
            p {
                class: "form-intro",
                "Short exercises you can do on your own, any time."
            }
            div {
                class: "resource-grid",
                for resource in RESOURCES {
                    div {
                        key: "{resource.id}",
                        class: "resource-card",
                        h3 { "{resource.title}" }
                        p { "{resource.summary}" }
                        span { class: "badge", "{resource.minutes} min" }
                        if used.iter().any(|id| id == resource.id) {
                            span { class: "resource-used", "\u{2713} Used" }
                        }
                        button {
                            class: "btn btn-outline",
                            onclick: move |_| { resources::open_resource(&mut host, resource.id); },
                            "Start"
                        }
                    }
                }
            }
        }
    }
}

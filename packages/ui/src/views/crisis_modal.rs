use dioxus::prelude::*;
use session::pipeline::crisis;

use crate::context::{use_config, use_host, use_view};
use crate::views::ModalOverlay;

#[component]
pub fn CrisisModal() -> Element {
    let mut host = use_host();
    let config = use_config();
    let view = use_view();

    if !view.read().crisis_modal_open {
        return rsx! {};
    }
    let line = config.read().crisis.clone();

    rsx! {
        ModalOverlay {
            id: "crisisModal",
            title: "Immediate Help",
            on_close: move |_| crisis::close_modal(&mut host),

            div {
                class: "crisis-body",
                p {
                    "If you are in danger or thinking about harming yourself, "
                    "please reach out now. "
                    "You deserve support."
                }
                ul {
                    class: "crisis-list",
                    li { strong { "{line.line_name}: " } "call or text {line.number}" }
                    li { strong { "Crisis Text Line: " } "text HOME to 741741" }
                    li { strong { "Emergency services: " } "call 911" }
                }
                button {
                    class: "btn btn-danger btn-block",
                    onclick: move |_| {
                        let line = config.read().crisis.clone();
                        crisis::call_crisis_line(&mut host, &line);
                    },
                    "Call {line.number} now"
                }
            }
        }
    }
}

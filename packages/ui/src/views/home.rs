use dioxus::prelude::*;
use session::pipeline::{checkin, crisis, navigation};
use session::Page;

use crate::context::use_host;

#[component]
pub fn HomePage() -> Element {
    let mut host = use_host();

    rsx! {
        div {
            class: "hero",
            h1 { "You don't have to face it alone" }
            p {
                class: "hero-subtitle",
                "MindConnect links you with peer support, counselors and groups near you, "
                "and helps you keep track of how you are doing day to day."
            }
            div {
                class: "hero-actions",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| { navigation::show_page(&mut host, Page::Register.id()); },
                    "Get Started"
                }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| { navigation::show_page(&mut host, Page::Support.id()); },
                    "Find Support"
                }
            }
        }

        div {
            class: "feature-grid",
            div {
                class: "feature-card",
                h3 { "Daily check-ins" }
                p { "Rate your mood and note what helped. It takes less than a minute." }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| checkin::open_modal(&mut host),
                    "Check in now"
                }
            }
            div {
                class: "feature-card",
                h3 { "Support near you" }
                p { "Search peer groups, counseling and coaching by location and format." }
            }
            div {
                class: "feature-card crisis-card",
                h3 { "In crisis?" }
                p { "Free, confidential help is available 24/7." }
                button {
                    class: "btn btn-danger",
                    onclick: move |_| crisis::open_modal(&mut host),
                    "Get help now"
                }
            }
        }
    }
}

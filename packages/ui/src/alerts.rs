use dioxus::prelude::*;
use session::{Notice, Severity};

use crate::context::use_alerts;

#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub id: u64,
    pub notice: Notice,
}

/// Notices currently on screen, oldest first.
#[derive(Clone, Debug, Default)]
pub struct Alerts {
    next_id: u64,
    pub entries: Vec<Alert>,
}

impl Alerts {
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Alert { id, notice });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|a| a.id != id);
    }
}

#[component]
pub fn AlertStack() -> Element {
    let mut alerts = use_alerts();
    let entries = alerts().entries.clone();

    rsx! {
        div {
            class: "alert-stack",
            for alert in entries {
                div {
                    key: "{alert.id}",
                    class: match alert.notice.severity {
                        Severity::Error => "alert alert-error",
                        Severity::Success => "alert alert-success",
                    },
                    role: "alert",
                    span { "{alert.notice.message}" }
                    button {
                        class: "alert-close",
                        title: "Dismiss",
                        onclick: move |_| alerts.write().dismiss(alert.id),
                        "\u{00D7}"
                    }
                }
            }
        }
    }
}

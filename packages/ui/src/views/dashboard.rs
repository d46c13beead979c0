//! Dashboard with the metrics computed by [`session::update_dashboard`].

use dioxus::prelude::*;
use session::pipeline::{checkin, navigation};
use session::Page;

use crate::context::{use_host, use_session, use_view};

#[component]
pub fn DashboardPage() -> Element {
    let mut host = use_host();
    let session = use_session();
    let view = use_view();

    let Some(metrics) = view.read().dashboard else {
        return rsx! {
            div {
                class: "empty-state",
                h1 { "Your Dashboard" }
                p { "Create an account to start tracking your wellbeing." }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| { navigation::show_page(&mut host, Page::Register.id()); },
                    "Get Started"
                }
            }
        };
    };

    let name = session
        .read()
        .current_user()
        .map(|u| u.full_name.clone())
        .unwrap_or_default();
    let recent: Vec<_> = session.read().checkins().iter().rev().take(5).cloned().collect();

    rsx! {
        div {
            class: "dashboard",
            h1 { "Welcome back, {name}" }

            div {
                class: "stat-grid",
                div {
                    class: "stat-card",
                    span { id: "daysJoined", class: "stat-value", "{metrics.days_joined}" }
                    span { class: "stat-label", "Days with MindConnect" }
                }
                div {
                    class: "stat-card",
                    span { id: "connectionsCount", class: "stat-value", "{metrics.connections}" }
                    span { class: "stat-label", "Support connections" }
                }
                div {
                    class: "stat-card",
                    span { id: "checkinsCount", class: "stat-value", "{metrics.checkins}" }
                    span { class: "stat-label", "Check-ins" }
                }
                div {
                    class: "stat-card",
                    span { id: "resourcesUsed", class: "stat-value", "{metrics.resources_used}" }
                    span { class: "stat-label", "Resources used" }
                }
            }

            div {
                class: "dashboard-actions",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| checkin::open_modal(&mut host),
                    "Daily Check-in"
                }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| { navigation::show_page(&mut host, Page::Support.id()); },
                    "Find Support"
                }
            }

            h2 { "Recent check-ins" }
            if recent.is_empty() {
                p { class: "empty-state", "No check-ins yet." }
            }
            ul {
                class: "checkin-list",
                for entry in recent {
                    li {
                        key: "{entry.id}",
                        strong { "{entry.mood.label()} ({entry.mood.get()}/5)" }
                        if !entry.notes.is_empty() {
                            span { ": {entry.notes}" }
                        }
                    }
                }
            }
        }
    }
}

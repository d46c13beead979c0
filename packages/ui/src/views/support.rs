//! Support search form and results.

use dioxus::prelude::*;
use session::pipeline::search;
use session::{MeetingFormat, SupportOption, SupportType};

use crate::context::{use_config, use_forms, use_host, use_session, use_view};
use crate::delay::TimerDelay;

#[component]
pub fn SupportPage() -> Element {
    let host = use_host();
    let config = use_config();
    let view = use_view();
    let mut forms = use_forms();
    let mut error = use_signal(|| Option::<String>::None);

    let searching = !view.read().search.is_idle();
    let draft = forms.read().search.clone();
    let results = view.read().support_results.clone();

    let handle_search = move |evt: FormEvent| {
        evt.prevent_default();
        let criteria = forms.read().search.clone();
        let timing = config.read().timing.clone();
        spawn(async move {
            let mut host = host;
            error.set(None);
            if let Err(e) = search::submit(&mut host, &TimerDelay, &timing, criteria).await {
                error.set(Some(e.to_string()));
            }
        });
    };

    rsx! {
        div {
            class: "form-container",
            h1 { "Find Support" }

            form {
                id: "supportSearchForm",
                class: "search-form",
                onsubmit: handle_search,

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                div {
                    class: "form-row",
                    div {
                        class: "form-group",
                        label { r#for: "searchLocation", "Location" }
                        input {
                            id: "searchLocation",
                            name: "searchLocation",
                            r#type: "text",
                            placeholder: "City or zip code",
                            value: draft.location.clone(),
                            oninput: move |evt: FormEvent| {
                                forms.write().search.location = evt.value();
                            },
                        }
                    }
                    div {
                        class: "form-group",
                        label { r#for: "supportType", "Type of support" }
                        select {
                            id: "supportType",
                            name: "supportType",
                            value: draft.support_type.map(SupportType::value).unwrap_or(""),
                            onchange: move |evt: FormEvent| {
                                let support_type = SupportType::from_value(&evt.value());
                                forms.write().search.support_type = support_type;
                            },
                            option { value: "", "Any type" }
                            for support_type in SupportType::ALL {
                                option {
                                    key: "{support_type.value()}",
                                    value: support_type.value(),
                                    selected: draft.support_type == Some(support_type),
                                    "{support_type.label()}"
                                }
                            }
                        }
                    }
                    div {
                        class: "form-group",
                        label { r#for: "meetingFormat", "Format" }
                        select {
                            id: "meetingFormat",
                            name: "meetingFormat",
                            value: draft.format.map(MeetingFormat::value).unwrap_or(""),
                            onchange: move |evt: FormEvent| {
                                let format = MeetingFormat::from_value(&evt.value());
                                forms.write().search.format = format;
                            },
                            option { value: "", "Any format" }
                            for format in MeetingFormat::ALL {
                                option {
                                    key: "{format.value()}",
                                    value: format.value(),
                                    selected: draft.format == Some(format),
                                    "{format.label()}"
                                }
                            }
                        }
                    }
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: searching,
                    if searching { "Searching..." } else { "Search" }
                }
            }

            if let Some(results) = results {
                div {
                    class: "search-results",
                    h2 { "Support options near {results.criteria.location_text()}" }
                    if results.options.is_empty() {
                        p { class: "empty-state", "No matching options. Try widening your search." }
                    }
                    for entry in results.options.iter().cloned() {
                        SupportCard { key: "{entry.id}", entry }
                    }
                }
            }
        }
    }
}

#[component]
fn SupportCard(entry: SupportOption) -> Element {
    let mut host = use_host();
    let session = use_session();
    let connected = session.read().is_connected(entry.id);
    let option_id = entry.id;

    rsx! {
        div {
            class: "support-card",
            div {
                class: "support-card-header",
                h3 { "{entry.name}" }
                span { class: "badge", "{entry.format.label()}" }
            }
            p {
                class: "support-card-meta",
                "{entry.support_type.label()} \u{00B7} {entry.location}"
            }
            p { "{entry.description}" }
            button {
                class: "btn btn-outline",
                disabled: connected,
                onclick: move |_| { search::connect(&mut host, option_id); },
                if connected { "Connected" } else { "Connect" }
            }
        }
    }
}

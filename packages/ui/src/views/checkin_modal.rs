use dioxus::prelude::*;
use session::pipeline::checkin;
use session::{Activity, MoodRating};

use crate::context::{use_forms, use_host, use_view};
use crate::views::ModalOverlay;

#[component]
pub fn CheckinModal() -> Element {
    let mut host = use_host();
    let view = use_view();
    let mut forms = use_forms();

    if !view.read().checkin_modal_open {
        return rsx! {};
    }
    let draft = forms.read().checkin.clone();
    let error = view.read().checkin_error.clone();

    let handle_checkin = move |evt: FormEvent| {
        evt.prevent_default();
        let form = forms.read().checkin.clone();
        if let Err(e) = checkin::submit(&mut host, &form) {
            tracing::debug!("Check-in rejected: {}", e);
        }
    };

    rsx! {
        ModalOverlay {
            id: "checkinModal",
            title: "Daily Check-in",
            on_close: move |_| checkin::close_modal(&mut host),

            form {
                id: "checkinForm",
                onsubmit: handle_checkin,

                if let Some(err) = error {
                    div { class: "form-error", "{err}" }
                }

                fieldset {
                    class: "form-group",
                    legend { "How are you feeling today?" }
                    div {
                        class: "mood-scale",
                        for value in MoodRating::MIN..=MoodRating::MAX {
                            label {
                                key: "{value}",
                                class: "mood-option",
                                input {
                                    r#type: "radio",
                                    name: "moodRating",
                                    value: "{value}",
                                    required: true,
                                    checked: draft.mood.map(MoodRating::get) == Some(value),
                                    onchange: move |_| {
                                        forms.write().checkin.mood = MoodRating::new(value);
                                    },
                                }
                                "{value}"
                            }
                        }
                    }
                }

                fieldset {
                    class: "form-group",
                    legend { "What did you do today?" }
                    div {
                        class: "checkbox-grid",
                        for activity in Activity::ALL {
                            label {
                                key: "{activity.value()}",
                                class: "checkbox-label",
                                input {
                                    r#type: "checkbox",
                                    name: "activities",
                                    value: activity.value(),
                                    checked: draft.activities.contains(&activity),
                                    onchange: move |_| {
                                        let mut forms = forms.write();
                                        let on = !forms.checkin.activities.contains(&activity);
                                        forms.checkin.set_activity(activity, on);
                                    },
                                }
                                "{activity.label()}"
                            }
                        }
                    }
                }

                div {
                    class: "form-group",
                    label { r#for: "notes", "Notes" }
                    textarea {
                        id: "notes",
                        name: "notes",
                        rows: "3",
                        value: draft.notes.clone(),
                        oninput: move |evt: FormEvent| forms.write().checkin.notes = evt.value(),
                    }
                }

                button {
                    class: "btn btn-primary btn-block",
                    r#type: "submit",
                    "Save Check-in"
                }
            }
        }
    }
}

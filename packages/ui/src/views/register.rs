//! Registration page with the full intake form.

use dioxus::prelude::*;
use session::pipeline::registration;
use session::{Phase, SupportType, UrgencyLevel};

use crate::context::{use_config, use_forms, use_host, use_view};
use crate::delay::TimerDelay;

#[component]
pub fn RegisterPage() -> Element {
    let host = use_host();
    let config = use_config();
    let view = use_view();
    let mut forms = use_forms();
    let mut error = use_signal(|| Option::<String>::None);

    let phase = view.read().registration;
    let loading = phase == Phase::Submitting;
    let draft = forms.read().registration.clone();

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let form = forms.read().registration.clone();
        let timing = config.read().timing.clone();
        spawn(async move {
            let mut host = host;
            error.set(None);
            if let Err(e) = registration::submit(&mut host, &TimerDelay, &timing, &form).await {
                tracing::warn!("Registration rejected: {}", e);
                error.set(Some(e.to_string()));
            }
        });
    };

    rsx! {
        div {
            class: "form-container",
            h1 { "Join MindConnect" }
            p {
                class: "form-intro",
                "Tell us a little about yourself so we can point you to the right kind of support."
            }

            form {
                id: "registrationForm",
                onsubmit: handle_register,

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                div {
                    class: "form-row",
                    div {
                        class: "form-group",
                        label { r#for: "fullName", "Full name *" }
                        input {
                            id: "fullName",
                            name: "fullName",
                            r#type: "text",
                            required: true,
                            value: draft.full_name.clone(),
                            oninput: move |evt: FormEvent| {
                                forms.write().registration.full_name = evt.value();
                            },
                        }
                    }
                    div {
                        class: "form-group",
                        label { r#for: "email", "Email *" }
                        input {
                            id: "email",
                            name: "email",
                            r#type: "email",
                            required: true,
                            value: draft.email.clone(),
                            oninput: move |evt: FormEvent| {
                                forms.write().registration.email = evt.value();
                            },
                        }
                    }
                }

                div {
                    class: "form-row",
                    div {
                        class: "form-group",
                        label { r#for: "phone", "Phone" }
                        input {
                            id: "phone",
                            name: "phone",
                            r#type: "tel",
                            value: draft.phone.clone(),
                            oninput: move |evt: FormEvent| {
                                forms.write().registration.phone = evt.value();
                            },
                        }
                    }
                    div {
                        class: "form-group",
                        label { r#for: "age", "Age" }
                        input {
                            id: "age",
                            name: "age",
                            r#type: "number",
                            min: "13",
                            value: draft.age.clone(),
                            oninput: move |evt: FormEvent| {
                                forms.write().registration.age = evt.value();
                            },
                        }
                    }
                }

                div {
                    class: "form-group",
                    label { r#for: "location", "City or region" }
                    input {
                        id: "location",
                        name: "location",
                        r#type: "text",
                        value: draft.location.clone(),
                        oninput: move |evt: FormEvent| {
                            forms.write().registration.location = evt.value();
                        },
                    }
                }

                fieldset {
                    class: "form-group",
                    legend { "What kind of support are you looking for?" }
                    div {
                        class: "checkbox-grid",
                        for support_type in SupportType::ALL {
                            label {
                                key: "{support_type.value()}",
                                class: "checkbox-label",
                                input {
                                    r#type: "checkbox",
                                    name: "supportTypes",
                                    value: support_type.value(),
                                    checked: draft.support_types.contains(&support_type),
                                    onchange: move |_| {
                                        let mut forms = forms.write();
                                        let draft = &mut forms.registration;
                                        let on = !draft.support_types.contains(&support_type);
                                        draft.set_support_type(support_type, on);
                                    },
                                }
                                "{support_type.label()}"
                            }
                        }
                    }
                }

                div {
                    class: "form-group",
                    label { r#for: "urgencyLevel", "How soon would you like support?" }
                    select {
                        id: "urgencyLevel",
                        name: "urgencyLevel",
                        value: draft.urgency_level.value(),
                        onchange: move |evt: FormEvent| {
                            if let Some(level) = UrgencyLevel::from_value(&evt.value()) {
                                forms.write().registration.urgency_level = level;
                            }
                        },
                        for level in UrgencyLevel::ALL {
                            option {
                                key: "{level.value()}",
                                value: level.value(),
                                selected: level == draft.urgency_level,
                                "{level.label()}"
                            }
                        }
                    }
                }

                div {
                    class: "form-group",
                    label { r#for: "additionalInfo", "Anything else you'd like us to know?" }
                    textarea {
                        id: "additionalInfo",
                        name: "additionalInfo",
                        rows: "4",
                        value: draft.additional_info.clone(),
                        oninput: move |evt: FormEvent| {
                            forms.write().registration.additional_info = evt.value();
                        },
                    }
                }

                label {
                    class: "checkbox-label",
                    input {
                        r#type: "checkbox",
                        name: "privacy",
                        required: true,
                        checked: draft.privacy,
                        onchange: move |_| {
                            let privacy = forms.read().registration.privacy;
                            forms.write().registration.privacy = !privacy;
                        },
                    }
                    "I agree to the privacy policy and terms of use *"
                }

                label {
                    class: "checkbox-label",
                    input {
                        r#type: "checkbox",
                        name: "newsletter",
                        checked: draft.newsletter,
                        onchange: move |_| {
                            let newsletter = forms.read().registration.newsletter;
                            forms.write().registration.newsletter = !newsletter;
                        },
                    }
                    "Send me wellbeing tips and updates"
                }

                button {
                    class: "btn btn-primary btn-block",
                    r#type: "submit",
                    disabled: !phase.is_idle(),
                    span {
                        id: "registerButtonText",
                        style: if loading { "display: none" } else { "display: inline-block" },
                        "Create My Account"
                    }
                    span {
                        id: "registerButtonLoader",
                        class: "spinner",
                        style: if loading { "display: inline-block" } else { "display: none" },
                    }
                }
            }
        }
    }
}

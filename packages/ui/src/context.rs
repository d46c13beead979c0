//! Application-wide signals and the hooks that read them.

use dioxus::prelude::*;
use session::{
    CheckinForm, PlatformConfig, RegistrationForm, SessionState, SupportSearchCriteria, ViewState,
};

use crate::alerts::Alerts;
use crate::host::SignalHost;

/// Drafts of every form on the page.
///
/// Kept in context rather than per-component so a pipeline can reset a form
/// after its component has been re-rendered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Forms {
    pub registration: RegistrationForm,
    pub checkin: CheckinForm,
    pub search: SupportSearchCriteria,
}

/// Provider component that owns all session and view state.
/// Wrap the page with this component.
#[component]
pub fn AppProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(crate::config::load_config()));
    use_context_provider(|| Signal::new(SessionState::new()));
    use_context_provider(|| Signal::new(ViewState::new()));
    use_context_provider(|| Signal::new(Forms::default()));
    use_context_provider(|| Signal::new(Alerts::default()));

    rsx! {
        {children}
    }
}

pub fn use_config() -> Signal<PlatformConfig> {
    use_context::<Signal<PlatformConfig>>()
}

pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

pub fn use_view() -> Signal<ViewState> {
    use_context::<Signal<ViewState>>()
}

pub fn use_forms() -> Signal<Forms> {
    use_context::<Signal<Forms>>()
}

pub fn use_alerts() -> Signal<Alerts> {
    use_context::<Signal<Alerts>>()
}

/// A [`session::Host`] over the context signals, cheap to copy into tasks.
pub fn use_host() -> SignalHost {
    SignalHost {
        config: use_config(),
        session: use_session(),
        view: use_view(),
        forms: use_forms(),
        alerts: use_alerts(),
    }
}

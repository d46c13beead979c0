//! Signal-backed [`Host`] used by every component that runs a pipeline.
//!
//! Browser effects go through `web_sys` on WASM. Native builds (desktop)
//! run the same components inside a webview, so scrolling is done with a
//! script; confirmation uses a native dialog and URIs open in the system
//! handler.

use dioxus::prelude::*;
use session::{FormKind, Host, Notice, PlatformConfig, SessionState, ViewState};

use crate::alerts::Alerts;
use crate::context::Forms;
use crate::delay::TimerDelay;
use session::Delay;

#[derive(Clone, Copy)]
pub struct SignalHost {
    pub config: Signal<PlatformConfig>,
    pub session: Signal<SessionState>,
    pub view: Signal<ViewState>,
    pub forms: Signal<Forms>,
    pub alerts: Signal<Alerts>,
}

impl Host for SignalHost {
    fn now_ms(&self) -> i64 {
        crate::clock::now_ms()
    }

    fn read_session<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        f(&self.session.read())
    }

    fn update_session<R>(&mut self, f: impl FnOnce(&mut SessionState) -> R) -> R {
        f(&mut self.session.write())
    }

    fn read_view<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        f(&self.view.read())
    }

    fn update_view<R>(&mut self, f: impl FnOnce(&mut ViewState) -> R) -> R {
        f(&mut self.view.write())
    }

    fn notify(&mut self, notice: Notice) {
        let id = self.alerts.write().push(notice);
        let Some(after) = self.config.read().timing.alert_dismiss() else {
            return;
        };
        let mut alerts = self.alerts;
        spawn(async move {
            TimerDelay.sleep(after).await;
            alerts.write().dismiss(id);
        });
    }

    fn reset_form(&mut self, form: FormKind) {
        let mut forms = self.forms.write();
        match form {
            FormKind::Registration => forms.registration = Default::default(),
            FormKind::Checkin => forms.checkin = Default::default(),
        }
    }

    fn scroll_to_top(&mut self) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let options = web_sys::ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = document::eval("window.scrollTo({ top: 0, behavior: 'smooth' });");
        }
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::window()
                .and_then(|window| window.confirm_with_message(prompt).ok())
                .unwrap_or(false)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let answer = rfd::MessageDialog::new()
                .set_title("MindConnect")
                .set_description(prompt)
                .set_buttons(rfd::MessageButtons::OkCancel)
                .show();
            answer == rfd::MessageDialogResult::Ok
        }
    }

    fn open_uri(&mut self, uri: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(uri) {
                    tracing::error!("Failed to open {uri}: {e:?}");
                    self.notify(Notice::error(format!("Couldn't open {uri}.")));
                }
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Err(e) = open::that(uri) {
                tracing::error!("Failed to open {uri}: {e}");
                self.notify(Notice::error(format!("Couldn't open {uri}.")));
            }
        }
    }
}

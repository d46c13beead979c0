//! # The seam between pipelines and the page
//!
//! Pipelines never touch a renderer directly. Everything observable they do
//! goes through a [`Host`]: reading and writing session and view state,
//! raising notices, resetting forms, scrolling and leaving the page.
//!
//! State access is closure-based so an implementation can hand out a short
//! borrow of whatever it stores state in (reactive signals in the UI, plain
//! fields in tests) without a guard living across an `.await`.

use crate::notice::Notice;
use crate::state::SessionState;
use crate::view::ViewState;

/// Which form a pipeline wants cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Registration,
    Checkin,
}

pub trait Host {
    /// Wall-clock time in milliseconds since the Unix epoch.
    fn now_ms(&self) -> i64;

    fn read_session<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R;

    fn update_session<R>(&mut self, f: impl FnOnce(&mut SessionState) -> R) -> R;

    fn read_view<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R;

    fn update_view<R>(&mut self, f: impl FnOnce(&mut ViewState) -> R) -> R;

    fn notify(&mut self, notice: Notice);

    fn reset_form(&mut self, form: FormKind);

    /// Smoothly scroll the viewport back to the top.
    fn scroll_to_top(&mut self);

    /// Ask the user a yes/no question.
    fn confirm(&mut self, prompt: &str) -> bool;

    /// Leave the application for `uri` (e.g. a `tel:` link).
    fn open_uri(&mut self, uri: &str);
}

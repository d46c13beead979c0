//! # Session crate: in-memory state and form flows for MindConnect
//!
//! Everything the application does that is not rendering lives here, with no
//! dependency on Dioxus. The UI crate implements [`Host`] and [`Delay`] on top
//! of signals and browser timers; the tests in this crate implement them with
//! plain fields and instant futures.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Records (`UserRecord`, `CheckinRecord`, …) and categorical enums |
//! | [`forms`] | Form drafts and the pure draft → record conversions |
//! | [`state`] | [`SessionState`]: current user and the append-only logs |
//! | [`view`] | [`ViewState`]: active page, menu, modals, pipeline phases |
//! | [`dashboard`] | Derived dashboard metrics |
//! | [`directory`] / [`library`] | Static support options and self-help resources |
//! | [`pipeline`] | Registration, check-in, search, crisis, navigation, resources |
//! | [`config`] | `mindconnect.toml` timings and crisis line |

pub mod config;
pub mod dashboard;
pub mod delay;
pub mod directory;
pub mod error;
pub mod forms;
pub mod host;
pub mod library;
pub mod models;
pub mod notice;
pub mod pipeline;
pub mod state;
pub mod view;

#[cfg(test)]
mod testing;

pub use config::{CrisisConfig, PlatformConfig, TimingConfig};
pub use dashboard::{update_dashboard, DashboardMetrics};
pub use delay::Delay;
pub use directory::{SearchResults, SupportOption};
pub use error::{FormError, SubmitError};
pub use forms::{CheckinForm, RegistrationForm};
pub use host::{FormKind, Host};
pub use library::Resource;
pub use models::{
    Activity, CheckinRecord, MeetingFormat, MoodRating, SupportSearchCriteria, SupportType,
    UrgencyLevel, UserRecord,
};
pub use notice::{Notice, Severity};
pub use state::SessionState;
pub use view::{Page, Phase, ViewState};

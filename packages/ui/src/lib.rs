//! This crate contains all shared UI for the workspace.

mod alerts;
mod app;
mod clock;
mod config;
mod context;
mod delay;
mod host;
mod navbar;
pub mod views;

pub use alerts::{Alert, AlertStack, Alerts};
pub use app::{Shell, MAIN_CSS};
pub use config::load_config;
pub use context::{
    use_alerts, use_config, use_forms, use_host, use_session, use_view, AppProvider, Forms,
};
pub use delay::TimerDelay;
pub use host::SignalHost;
pub use navbar::Navbar;

//! # Application configuration: `mindconnect.toml`
//!
//! Timings of the simulated flows and the crisis line details. Every field
//! has a default, so a missing or partial file is equivalent to the defaults.
//!
//! ```toml
//! [timing]
//! registration_processing_ms = 2000   # spinner shown while "creating the account"
//! registration_redirect_ms = 2000     # success message shown before the dashboard opens
//! search_ms = 1500
//! alert_dismiss_ms = 5000             # 0 keeps alerts until dismissed
//!
//! [crisis]
//! line_name = "Suicide & Crisis Lifeline"
//! number = "988"
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformConfig {
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub crisis: CrisisConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub registration_processing_ms: u64,
    pub registration_redirect_ms: u64,
    pub search_ms: u64,
    pub alert_dismiss_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            registration_processing_ms: 2000,
            registration_redirect_ms: 2000,
            search_ms: 1500,
            alert_dismiss_ms: 5000,
        }
    }
}

impl TimingConfig {
    pub fn registration_processing(&self) -> Duration {
        Duration::from_millis(self.registration_processing_ms)
    }

    pub fn registration_redirect(&self) -> Duration {
        Duration::from_millis(self.registration_redirect_ms)
    }

    pub fn search(&self) -> Duration {
        Duration::from_millis(self.search_ms)
    }

    /// `None` when alerts should stay until dismissed.
    pub fn alert_dismiss(&self) -> Option<Duration> {
        (self.alert_dismiss_ms > 0).then(|| Duration::from_millis(self.alert_dismiss_ms))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrisisConfig {
    pub line_name: String,
    pub number: String,
}

impl Default for CrisisConfig {
    fn default() -> Self {
        Self {
            line_name: "Suicide & Crisis Lifeline".to_string(),
            number: "988".to_string(),
        }
    }
}

impl CrisisConfig {
    pub fn tel_uri(&self) -> String {
        format!("tel:{}", self.number)
    }

    pub fn confirmation_prompt(&self) -> String {
        format!("This will call the {} ({}). Continue?", self.line_name, self.number)
    }
}

impl PlatformConfig {
    /// Builder method to override all delays at once.
    pub fn with_timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "mindconnect.toml"
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

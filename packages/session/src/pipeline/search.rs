//! # Support search pipeline
//!
//! Announces the search immediately, waits `search_ms`, announces completion
//! and hands the criteria to [`update_support_results`], which filters the
//! static [`crate::directory`] and publishes the matches into view state.

use crate::config::TimingConfig;
use crate::dashboard::update_dashboard;
use crate::delay::Delay;
use crate::directory::{self, SearchResults, SupportOption};
use crate::error::SubmitError;
use crate::host::Host;
use crate::models::{SupportConnection, SupportSearchCriteria};
use crate::notice::Notice;
use crate::view::Phase;

pub const COMPLETED_MESSAGE: &str =
    "Search completed! Here are the available support options in your area.";

pub fn searching_message(criteria: &SupportSearchCriteria) -> String {
    format!("Searching for support options in {}...", criteria.location_text())
}

pub async fn submit<H: Host, D: Delay>(
    host: &mut H,
    delay: &D,
    timing: &TimingConfig,
    criteria: SupportSearchCriteria,
) -> Result<SearchResults, SubmitError> {
    if !host.read_view(|v| v.search.is_idle()) {
        tracing::warn!("search submitted while another is in progress");
        return Err(SubmitError::InFlight);
    }

    host.update_view(|v| v.search = Phase::Submitting);
    host.notify(Notice::success(searching_message(&criteria)));
    delay.sleep(timing.search()).await;

    host.update_view(|v| v.search = Phase::Success);
    host.notify(Notice::success(COMPLETED_MESSAGE));
    let results = update_support_results(host, &criteria);
    host.update_view(|v| v.search = Phase::Idle);

    Ok(results)
}

/// Results hook: filter the directory for `criteria` and show the matches.
pub fn update_support_results<H: Host>(
    host: &mut H,
    criteria: &SupportSearchCriteria,
) -> SearchResults {
    tracing::debug!(?criteria, "updating support results");
    let results = directory::search(criteria);
    host.update_view(|v| v.support_results = Some(results.clone()));
    results
}

/// Connect with a listed option. Returns `None` for an unknown id or an
/// option that is already connected.
pub fn connect<H: Host>(host: &mut H, option_id: &str) -> Option<&'static SupportOption> {
    let option = directory::find_option(option_id)?;
    let now = host.now_ms();
    let added = host.update_session(|s| {
        s.connect(SupportConnection {
            id: now,
            option_id: option.id.to_string(),
            option_name: option.name.to_string(),
            connected_at_ms: now,
        })
    });
    if !added {
        return None;
    }

    tracing::info!(option_id, "support connection added");
    host.notify(Notice::success(format!(
        "You're now connected with {}. They will reach out soon.",
        option.name
    )));
    update_dashboard(host);
    Some(option)
}

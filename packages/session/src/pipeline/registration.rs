//! # Registration pipeline
//!
//! Two fixed delays shape this flow and both are part of its contract:
//!
//! 1. **Processing** (`registration_processing_ms`): the phase is
//!    [`Phase::Submitting`], so the button shows its spinner and stays
//!    disabled.
//! 2. **Redirect** (`registration_redirect_ms`): the record is committed,
//!    the welcome notice is showing and the phase is [`Phase::Success`].
//!
//! Then the phase passes through [`Phase::Navigating`] while the dashboard
//! opens, and ends at [`Phase::Idle`]. Every step in between is
//! unconditional: the simulated backend always accepts.

use crate::config::TimingConfig;
use crate::delay::Delay;
use crate::error::SubmitError;
use crate::forms::RegistrationForm;
use crate::host::{FormKind, Host};
use crate::models::UserRecord;
use crate::notice::Notice;
use crate::pipeline::navigation;
use crate::view::{Page, Phase};

pub fn welcome_message(user: &UserRecord) -> String {
    format!(
        "Welcome to MindConnect, {}! Your account has been created successfully.",
        user.full_name
    )
}

pub async fn submit<H: Host, D: Delay>(
    host: &mut H,
    delay: &D,
    timing: &TimingConfig,
    form: &RegistrationForm,
) -> Result<UserRecord, SubmitError> {
    if !host.read_view(|v| v.registration.is_idle()) {
        tracing::warn!("registration submitted while another is in progress");
        return Err(SubmitError::InFlight);
    }
    let user = form.to_record(host.now_ms())?;

    host.update_view(|v| v.registration = Phase::Submitting);
    delay.sleep(timing.registration_processing()).await;

    host.update_session(|s| s.register(user.clone()));
    tracing::info!(user_id = user.id, "registration committed");
    host.update_view(|v| v.registration = Phase::Success);
    host.notify(Notice::success(welcome_message(&user)));
    host.reset_form(FormKind::Registration);

    delay.sleep(timing.registration_redirect()).await;

    host.update_view(|v| v.registration = Phase::Navigating);
    navigation::show_page(host, Page::Dashboard.id());
    host.update_view(|v| v.registration = Phase::Idle);

    Ok(user)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::error::FormError;
    use crate::testing::{RecordingHost, Step};

    const NOW: i64 = 1_700_000_000_000;

    fn ada() -> RegistrationForm {
        RegistrationForm {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            privacy: true,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_registration_lands_on_dashboard() {
        let mut host = RecordingHost::new(NOW);
        let delay = host.delay();

        let user = submit(&mut host, &delay, &TimingConfig::default(), &ada())
            .await
            .unwrap();

        assert_eq!(host.session.registrations().len(), 1);
        assert_eq!(host.session.current_user(), Some(&user));
        assert!(host.view.is_active(Page::Dashboard));
        assert_eq!(host.view.dashboard.map(|d| d.days_joined), Some(0));
        assert_eq!(host.view.registration, Phase::Idle);
    }

    #[tokio::test]
    async fn test_loading_then_success_then_navigation() {
        let mut host = RecordingHost::new(NOW);
        let delay = host.delay();

        submit(&mut host, &delay, &TimingConfig::default(), &ada())
            .await
            .unwrap();

        assert_eq!(
            host.steps(),
            vec![
                Step::Registration(Phase::Submitting),
                Step::Sleep(Duration::from_millis(2000)),
                Step::Registration(Phase::Success),
                Step::Notice(
                    "Welcome to MindConnect, Ada Lovelace! Your account has been created successfully."
                        .to_string()
                ),
                Step::Reset(FormKind::Registration),
                Step::Sleep(Duration::from_millis(2000)),
                Step::Registration(Phase::Navigating),
                Step::Page(Some(Page::Dashboard)),
                Step::Scroll,
                Step::Registration(Phase::Idle),
            ]
        );
    }

    #[tokio::test]
    async fn test_duplicate_submission_is_rejected() {
        let mut host = RecordingHost::new(NOW);
        host.view.registration = Phase::Submitting;
        let delay = host.delay();

        let result = submit(&mut host, &delay, &TimingConfig::default(), &ada()).await;

        assert_eq!(result, Err(SubmitError::InFlight));
        assert!(host.session.registrations().is_empty());
        assert!(host.steps().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_form_never_starts() {
        let mut host = RecordingHost::new(NOW);
        let delay = host.delay();
        let form = RegistrationForm {
            privacy: false,
            ..ada()
        };

        let result = submit(&mut host, &delay, &TimingConfig::default(), &form).await;

        assert_eq!(result, Err(SubmitError::Invalid(FormError::PrivacyNotAccepted)));
        assert_eq!(host.view.registration, Phase::Idle);
        assert!(host.session.current_user().is_none());
    }

    #[tokio::test]
    async fn test_second_registration_replaces_current_user() {
        let mut host = RecordingHost::new(NOW);
        let delay = host.delay();
        submit(&mut host, &delay, &TimingConfig::default(), &ada())
            .await
            .unwrap();

        host.now = NOW + 1;
        let grace = RegistrationForm {
            full_name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
            ..ada()
        };
        submit(&mut host, &delay, &TimingConfig::default(), &grace)
            .await
            .unwrap();

        assert_eq!(host.session.registrations().len(), 2);
        assert_eq!(host.session.current_user().unwrap().full_name, "Grace Hopper");
    }
}

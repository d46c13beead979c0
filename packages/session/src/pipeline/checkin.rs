use crate::dashboard::update_dashboard;
use crate::error::SubmitError;
use crate::forms::CheckinForm;
use crate::host::{FormKind, Host};
use crate::models::CheckinRecord;
use crate::notice::Notice;
use crate::view::{Page, ViewState};

pub const SAVED_MESSAGE: &str = "Check-in saved successfully! Keep up the great work.";

pub fn open_modal<H: Host>(host: &mut H) {
    host.update_view(ViewState::open_checkin_modal);
}

pub fn close_modal<H: Host>(host: &mut H) {
    host.update_view(ViewState::close_checkin_modal);
}

/// Record a check-in. Runs synchronously; there is no simulated latency.
pub fn submit<H: Host>(host: &mut H, form: &CheckinForm) -> Result<CheckinRecord, SubmitError> {
    let record = match form.to_record(host.now_ms()) {
        Ok(record) => record,
        Err(e) => {
            host.update_view(|v| v.checkin_error = Some(e.to_string()));
            return Err(e.into());
        }
    };

    host.update_session(|s| s.record_checkin(record.clone()));
    tracing::info!(checkin_id = record.id, mood = record.mood.get(), "check-in recorded");
    host.notify(Notice::success(SAVED_MESSAGE));
    close_modal(host);
    host.reset_form(FormKind::Checkin);

    if host.read_view(|v| v.is_active(Page::Dashboard)) {
        update_dashboard(host);
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::RegistrationForm;
    use crate::models::{Activity, MoodRating};
    use crate::testing::RecordingHost;

    fn form(mood: u8, activities: &[Activity], notes: &str) -> CheckinForm {
        CheckinForm {
            mood: MoodRating::new(mood),
            activities: activities.to_vec(),
            notes: notes.to_string(),
        }
    }

    #[test]
    fn test_checkin_appends_and_closes_modal() {
        let mut host = RecordingHost::new(10);
        open_modal(&mut host);
        assert!(host.view.checkin_modal_open);

        let submitted = form(4, &[Activity::Exercise, Activity::Outdoors], "long walk");
        submit(&mut host, &submitted).unwrap();

        assert_eq!(host.session.checkins().len(), 1);
        let last = host.session.checkins().last().unwrap();
        assert_eq!(last.mood.get(), 4);
        assert_eq!(last.activities, submitted.activities);
        assert_eq!(last.notes, "long walk");
        assert!(!host.view.checkin_modal_open);
        assert_eq!(host.notices.last().unwrap().message, SAVED_MESSAGE);
    }

    #[test]
    fn test_two_checkins_keep_submission_order() {
        let mut host = RecordingHost::new(10);
        submit(&mut host, &form(3, &[], "")).unwrap();
        host.now = 11;
        submit(&mut host, &form(5, &[], "")).unwrap();

        let moods: Vec<u8> = host.session.checkins().iter().map(|c| c.mood.get()).collect();
        assert_eq!(moods, vec![3, 5]);
    }

    #[test]
    fn test_dashboard_refreshes_only_when_active() {
        let mut host = RecordingHost::new(10);
        host.session.register(
            RegistrationForm {
                full_name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                privacy: true,
                ..Default::default()
            }
            .to_record(10)
            .unwrap(),
        );

        submit(&mut host, &form(2, &[], "")).unwrap();
        assert_eq!(host.view.dashboard, None);

        host.view.show_page("dashboard");
        submit(&mut host, &form(3, &[], "")).unwrap();
        assert_eq!(host.view.dashboard.map(|d| d.checkins), Some(2));
    }

    #[test]
    fn test_missing_mood_records_nothing() {
        let mut host = RecordingHost::new(10);
        open_modal(&mut host);
        assert!(submit(&mut host, &CheckinForm::default()).is_err());
        assert!(host.session.checkins().is_empty());
        assert!(host.view.checkin_modal_open);
        assert!(host.view.checkin_error.is_some());
    }

    #[test]
    fn test_rejection_does_not_survive_reopening() {
        let mut host = RecordingHost::new(10);
        open_modal(&mut host);
        let _ = submit(&mut host, &CheckinForm::default());
        assert!(host.view.checkin_error.is_some());

        close_modal(&mut host);
        open_modal(&mut host);
        assert_eq!(host.view.checkin_error, None);
    }
}

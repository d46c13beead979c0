use crate::config::CrisisConfig;
use crate::host::Host;
use crate::view::ViewState;

pub fn open_modal<H: Host>(host: &mut H) {
    host.update_view(ViewState::open_crisis_modal);
}

pub fn close_modal<H: Host>(host: &mut H) {
    host.update_view(ViewState::close_crisis_modal);
}

/// Dial the crisis line after the user confirms. Returns whether it dialled.
pub fn call_crisis_line<H: Host>(host: &mut H, crisis: &CrisisConfig) -> bool {
    if !host.confirm(&crisis.confirmation_prompt()) {
        tracing::debug!("crisis call cancelled");
        return false;
    }
    tracing::info!(number = %crisis.number, "opening crisis line");
    host.open_uri(&crisis.tel_uri());
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingHost;

    #[test]
    fn test_declined_confirmation_goes_nowhere() {
        let mut host = RecordingHost::new(0);
        host.confirm_answer = false;

        assert!(!call_crisis_line(&mut host, &CrisisConfig::default()));
        assert_eq!(
            host.prompts,
            vec!["This will call the Suicide & Crisis Lifeline (988). Continue?".to_string()]
        );
        assert!(host.opened.is_empty());
    }

    #[test]
    fn test_confirmed_call_opens_tel_uri() {
        let mut host = RecordingHost::new(0);
        host.confirm_answer = true;

        assert!(call_crisis_line(&mut host, &CrisisConfig::default()));
        assert_eq!(host.opened, vec!["tel:988".to_string()]);
    }

    #[test]
    fn test_modal_close_from_any_state() {
        let mut host = RecordingHost::new(0);
        close_modal(&mut host);
        assert!(!host.view.crisis_modal_open);
        open_modal(&mut host);
        assert!(host.view.crisis_modal_open);
        close_modal(&mut host);
        assert!(!host.view.crisis_modal_open);
    }
}

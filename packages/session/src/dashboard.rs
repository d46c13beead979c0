use crate::host::Host;
use crate::state::SessionState;

pub const MILLIS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

/// Numbers shown on the dashboard page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardMetrics {
    pub days_joined: i64,
    pub connections: usize,
    pub checkins: usize,
    pub resources_used: usize,
}

impl DashboardMetrics {
    /// `None` when nobody has registered in this session.
    pub fn compute(state: &SessionState, now_ms: i64) -> Option<Self> {
        let user = state.current_user()?;
        Some(Self {
            days_joined: days_between(user.registered_at_ms, now_ms),
            connections: state.support_connections().len(),
            checkins: state.checkins().len(),
            resources_used: state.distinct_resources_used(),
        })
    }
}

/// Whole elapsed days, counted in fixed 24h blocks rather than calendar days.
pub fn days_between(from_ms: i64, to_ms: i64) -> i64 {
    (to_ms - from_ms).div_euclid(MILLIS_PER_DAY)
}

/// Recompute the dashboard snapshot. Leaves the view untouched without a user.
pub fn update_dashboard<H: Host>(host: &mut H) {
    let now = host.now_ms();
    let Some(metrics) = host.read_session(|s| DashboardMetrics::compute(s, now)) else {
        return;
    };
    host.update_view(|v| v.dashboard = Some(metrics));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::RegistrationForm;
    use crate::testing::RecordingHost;

    const REGISTERED: i64 = 1_700_000_000_000;

    fn registered_state() -> SessionState {
        let mut state = SessionState::new();
        let user = RegistrationForm {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            privacy: true,
            ..Default::default()
        }
        .to_record(REGISTERED)
        .unwrap();
        state.register(user);
        state
    }

    #[test]
    fn test_days_are_fixed_length_blocks() {
        assert_eq!(days_between(REGISTERED, REGISTERED), 0);
        assert_eq!(days_between(REGISTERED, REGISTERED + MILLIS_PER_DAY - 1), 0);
        assert_eq!(days_between(REGISTERED, REGISTERED + MILLIS_PER_DAY), 1);
        assert_eq!(days_between(REGISTERED, REGISTERED + 10 * MILLIS_PER_DAY + 5), 10);
    }

    #[test]
    fn test_compute_without_user_is_none() {
        assert_eq!(DashboardMetrics::compute(&SessionState::new(), REGISTERED), None);
    }

    #[test]
    fn test_compute_counts() {
        let state = registered_state();
        let metrics = DashboardMetrics::compute(&state, REGISTERED + 3 * MILLIS_PER_DAY).unwrap();
        assert_eq!(
            metrics,
            DashboardMetrics {
                days_joined: 3,
                connections: 0,
                checkins: 0,
                resources_used: 0,
            }
        );
    }

    #[test]
    fn test_update_without_user_writes_nothing() {
        let mut host = RecordingHost::new(REGISTERED);
        let before = host.view.clone();
        update_dashboard(&mut host);
        assert_eq!(host.view, before);
        assert_eq!(host.view_writes, 0);
    }

    #[test]
    fn test_update_with_user_stores_snapshot() {
        let mut host = RecordingHost::new(REGISTERED + MILLIS_PER_DAY);
        host.session = registered_state();
        update_dashboard(&mut host);
        assert_eq!(host.view.dashboard.map(|d| d.days_joined), Some(1));
    }
}

use crate::dashboard::update_dashboard;
use crate::host::Host;
use crate::library::{self, Resource};
use crate::models::ResourceUse;

/// Record that the user opened a resource from the library.
pub fn open_resource<H: Host>(host: &mut H, resource_id: &str) -> Option<&'static Resource> {
    let resource = library::find_resource(resource_id)?;
    let now = host.now_ms();
    host.update_session(|s| {
        s.record_resource_use(ResourceUse {
            resource_id: resource.id.to_string(),
            used_at_ms: now,
        })
    });
    tracing::debug!(resource_id, "resource opened");
    update_dashboard(host);
    Some(resource)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimingConfig;
    use crate::forms::RegistrationForm;
    use crate::pipeline::{navigation, registration, search};
    use crate::testing::RecordingHost;

    #[test]
    fn test_unknown_resource_is_ignored() {
        let mut host = RecordingHost::new(0);
        assert!(open_resource(&mut host, "missing").is_none());
        assert!(host.session.resource_uses().is_empty());
    }

    #[tokio::test]
    async fn test_activity_on_other_pages_reaches_dashboard() {
        let mut host = RecordingHost::new(0);
        let delay = host.delay();
        let form = RegistrationForm {
            full_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            privacy: true,
            ..Default::default()
        };
        registration::submit(&mut host, &delay, &TimingConfig::default(), &form)
            .await
            .unwrap();

        navigation::show_page(&mut host, "resources");
        open_resource(&mut host, "box-breathing");
        open_resource(&mut host, "sleep-hygiene");
        open_resource(&mut host, "box-breathing");
        navigation::show_page(&mut host, "support");
        search::connect(&mut host, "warmline");
        navigation::show_page(&mut host, "dashboard");

        let metrics = host.view.dashboard.unwrap();
        assert_eq!(metrics.resources_used, 2);
        assert_eq!(metrics.connections, 1);
        assert_eq!(metrics.checkins, 0);
    }

    #[test]
    fn test_snapshot_follows_activity_without_navigation() {
        let mut host = RecordingHost::new(0);
        host.session.register(
            RegistrationForm {
                full_name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                privacy: true,
                ..Default::default()
            }
            .to_record(0)
            .unwrap(),
        );

        open_resource(&mut host, "thought-record");
        search::connect(&mut host, "virtual-peer-room");

        let metrics = host.view.dashboard.unwrap();
        assert_eq!(metrics.resources_used, 1);
        assert_eq!(metrics.connections, 1);
    }
}

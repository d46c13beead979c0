use std::collections::BTreeSet;

use crate::models::{CheckinRecord, ResourceUse, SupportConnection, UserRecord};

/// Everything the application remembers during one page load.
///
/// Logs only grow. There is at most one current user, which is always the
/// most recent registration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    current_user: Option<UserRecord>,
    registrations: Vec<UserRecord>,
    checkins: Vec<CheckinRecord>,
    support_connections: Vec<SupportConnection>,
    resource_uses: Vec<ResourceUse>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_user(&self) -> Option<&UserRecord> {
        self.current_user.as_ref()
    }

    pub fn registrations(&self) -> &[UserRecord] {
        &self.registrations
    }

    pub fn checkins(&self) -> &[CheckinRecord] {
        &self.checkins
    }

    pub fn support_connections(&self) -> &[SupportConnection] {
        &self.support_connections
    }

    pub fn resource_uses(&self) -> &[ResourceUse] {
        &self.resource_uses
    }

    /// Number of different resources opened at least once.
    pub fn distinct_resources_used(&self) -> usize {
        self.resource_uses
            .iter()
            .map(|u| u.resource_id.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Append a registration and make it the current user.
    pub fn register(&mut self, user: UserRecord) {
        self.registrations.push(user.clone());
        self.current_user = Some(user);
    }

    pub fn record_checkin(&mut self, checkin: CheckinRecord) {
        self.checkins.push(checkin);
    }

    /// Returns `false` when the option is already connected.
    pub fn connect(&mut self, connection: SupportConnection) -> bool {
        if self.is_connected(&connection.option_id) {
            return false;
        }
        self.support_connections.push(connection);
        true
    }

    pub fn is_connected(&self, option_id: &str) -> bool {
        self.support_connections
            .iter()
            .any(|c| c.option_id == option_id)
    }

    pub fn record_resource_use(&mut self, resource_use: ResourceUse) {
        self.resource_uses.push(resource_use);
    }
}

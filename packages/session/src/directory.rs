//! # Support directory
//!
//! A fixed catalogue of support options that the search page filters. There
//! is no backend: the list ships with the application and a search is a
//! linear filter over it.
//!
//! Matching rules, each applied only when the criterion is set:
//!
//! - **location**: case-insensitive substring of the option's location.
//!   Options whose location is `"Anywhere"` match every location.
//! - **support type**: exact match.
//! - **format**: exact match.

use crate::models::{MeetingFormat, SupportSearchCriteria, SupportType};

#[derive(Clone, Debug, PartialEq)]
pub struct SupportOption {
    pub id: &'static str,
    pub name: &'static str,
    pub location: &'static str,
    pub support_type: SupportType,
    pub format: MeetingFormat,
    pub description: &'static str,
}

const ANYWHERE: &str = "Anywhere";

pub const SUPPORT_OPTIONS: &[SupportOption] = &[
    SupportOption {
        id: "peer-circle-springfield",
        name: "Springfield Peer Circle",
        location: "Springfield",
        support_type: SupportType::PeerSupport,
        format: MeetingFormat::InPerson,
        description: "Weekly evening meetups led by trained peer supporters.",
    },
    SupportOption {
        id: "riverside-counseling",
        name: "Riverside Counseling Center",
        location: "Springfield",
        support_type: SupportType::Counseling,
        format: MeetingFormat::InPerson,
        description: "Licensed counselors with sliding-scale fees.",
    },
    SupportOption {
        id: "shelbyville-anxiety-group",
        name: "Shelbyville Anxiety Support Group",
        location: "Shelbyville",
        support_type: SupportType::SupportGroup,
        format: MeetingFormat::InPerson,
        description: "A facilitated group for living with anxiety.",
    },
    SupportOption {
        id: "online-counseling",
        name: "Telehealth Counseling",
        location: ANYWHERE,
        support_type: SupportType::Counseling,
        format: MeetingFormat::Online,
        description: "Video sessions with a licensed therapist.",
    },
    SupportOption {
        id: "virtual-peer-room",
        name: "Virtual Peer Room",
        location: ANYWHERE,
        support_type: SupportType::PeerSupport,
        format: MeetingFormat::Online,
        description: "Drop-in video chat with peers, open every day.",
    },
    SupportOption {
        id: "warmline",
        name: "Community Warmline",
        location: ANYWHERE,
        support_type: SupportType::PeerSupport,
        format: MeetingFormat::Phone,
        description: "Talk to someone who has been there, before things become a crisis.",
    },
    SupportOption {
        id: "crisis-lifeline",
        name: "Suicide & Crisis Lifeline",
        location: ANYWHERE,
        support_type: SupportType::CrisisSupport,
        format: MeetingFormat::Phone,
        description: "Free, confidential support 24/7. Call or text 988.",
    },
    SupportOption {
        id: "capital-wellness",
        name: "Capital City Wellness Coaching",
        location: "Capital City",
        support_type: SupportType::WellnessCoaching,
        format: MeetingFormat::InPerson,
        description: "Goal-focused coaching for stress, sleep and routines.",
    },
];

/// Output of the search results hook.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResults {
    pub criteria: SupportSearchCriteria,
    pub options: Vec<SupportOption>,
}

impl SupportOption {
    pub fn matches(&self, criteria: &SupportSearchCriteria) -> bool {
        let location = criteria.location.trim().to_lowercase();
        let location_ok = location.is_empty()
            || self.location == ANYWHERE
            || self.location.to_lowercase().contains(&location);
        let type_ok = criteria.support_type.map_or(true, |t| t == self.support_type);
        let format_ok = criteria.format.map_or(true, |f| f == self.format);
        location_ok && type_ok && format_ok
    }
}

pub fn search(criteria: &SupportSearchCriteria) -> SearchResults {
    SearchResults {
        criteria: criteria.clone(),
        options: SUPPORT_OPTIONS
            .iter()
            .filter(|option| option.matches(criteria))
            .cloned()
            .collect(),
    }
}

pub fn find_option(id: &str) -> Option<&'static SupportOption> {
    SUPPORT_OPTIONS.iter().find(|option| option.id == id)
}

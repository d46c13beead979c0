//! # Session records and categorical values
//!
//! Records are created once from a submitted form and appended to a log in
//! [`crate::SessionState`]. None of them is ever mutated afterwards.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`UserRecord`] | One registration submission. Its `id` is the registration timestamp in milliseconds. |
//! | [`CheckinRecord`] | One daily check-in: mood, activities and notes. |
//! | [`SupportSearchCriteria`] | Transient search input, consumed by the search results hook. |
//! | [`SupportConnection`] | A support option the user chose to connect with from the search results. |
//! | [`ResourceUse`] | One opening of a library resource. |
//!
//! Categorical enums carry the kebab-case value used by the form controls
//! (`value()`/`from_value()`) and a human label for rendering.

use serde::{Deserialize, Serialize};

/// Kind of help a user asks for, or a support option offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SupportType {
    PeerSupport,
    Counseling,
    SupportGroup,
    CrisisSupport,
    WellnessCoaching,
}

impl SupportType {
    pub const ALL: [SupportType; 5] = [
        SupportType::PeerSupport,
        SupportType::Counseling,
        SupportType::SupportGroup,
        SupportType::CrisisSupport,
        SupportType::WellnessCoaching,
    ];

    pub fn value(self) -> &'static str {
        match self {
            SupportType::PeerSupport => "peer-support",
            SupportType::Counseling => "counseling",
            SupportType::SupportGroup => "support-group",
            SupportType::CrisisSupport => "crisis-support",
            SupportType::WellnessCoaching => "wellness-coaching",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SupportType::PeerSupport => "Peer support",
            SupportType::Counseling => "Professional counseling",
            SupportType::SupportGroup => "Support group",
            SupportType::CrisisSupport => "Crisis support",
            SupportType::WellnessCoaching => "Wellness coaching",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value)
    }
}

/// How urgently a registering user wants to be contacted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UrgencyLevel {
    #[default]
    Low,
    Moderate,
    High,
    Urgent,
}

impl UrgencyLevel {
    pub const ALL: [UrgencyLevel; 4] = [
        UrgencyLevel::Low,
        UrgencyLevel::Moderate,
        UrgencyLevel::High,
        UrgencyLevel::Urgent,
    ];

    pub fn value(self) -> &'static str {
        match self {
            UrgencyLevel::Low => "low",
            UrgencyLevel::Moderate => "moderate",
            UrgencyLevel::High => "high",
            UrgencyLevel::Urgent => "urgent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UrgencyLevel::Low => "Low - just exploring options",
            UrgencyLevel::Moderate => "Moderate - would like support soon",
            UrgencyLevel::High => "High - need support this week",
            UrgencyLevel::Urgent => "Urgent - need support today",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.value() == value)
    }
}

/// Where a support option meets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeetingFormat {
    InPerson,
    Online,
    Phone,
}

impl MeetingFormat {
    pub const ALL: [MeetingFormat; 3] = [
        MeetingFormat::InPerson,
        MeetingFormat::Online,
        MeetingFormat::Phone,
    ];

    pub fn value(self) -> &'static str {
        match self {
            MeetingFormat::InPerson => "in-person",
            MeetingFormat::Online => "online",
            MeetingFormat::Phone => "phone",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MeetingFormat::InPerson => "In person",
            MeetingFormat::Online => "Online",
            MeetingFormat::Phone => "Phone",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.value() == value)
    }
}

/// Something the user did today, ticked on the check-in form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Activity {
    Exercise,
    Meditation,
    Socializing,
    Journaling,
    Outdoors,
    GoodSleep,
}

impl Activity {
    pub const ALL: [Activity; 6] = [
        Activity::Exercise,
        Activity::Meditation,
        Activity::Socializing,
        Activity::Journaling,
        Activity::Outdoors,
        Activity::GoodSleep,
    ];

    pub fn value(self) -> &'static str {
        match self {
            Activity::Exercise => "exercise",
            Activity::Meditation => "meditation",
            Activity::Socializing => "socializing",
            Activity::Journaling => "journaling",
            Activity::Outdoors => "outdoors",
            Activity::GoodSleep => "good-sleep",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Activity::Exercise => "Exercise",
            Activity::Meditation => "Meditation",
            Activity::Socializing => "Time with others",
            Activity::Journaling => "Journaling",
            Activity::Outdoors => "Time outdoors",
            Activity::GoodSleep => "Good sleep",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.value() == value)
    }
}

/// Mood on a 1 (very low) to 5 (great) scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MoodRating(u8);

impl MoodRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Very low",
            2 => "Low",
            3 => "Okay",
            4 => "Good",
            _ => "Great",
        }
    }
}

impl Default for MoodRating {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u8> for MoodRating {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("mood rating {value} is outside 1-5"))
    }
}

impl From<MoodRating> for u8 {
    fn from(rating: MoodRating) -> u8 {
        rating.0
    }
}

/// A registered user. Lives only for the current session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Registration timestamp in milliseconds, reused as identifier.
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub age: Option<u32>,
    pub location: String,
    pub support_types: Vec<SupportType>,
    pub urgency_level: UrgencyLevel,
    pub additional_info: String,
    pub registered_at_ms: i64,
    /// Privacy policy consent. Always `true` for a committed record.
    pub privacy: bool,
    pub newsletter: bool,
}

/// A daily mood check-in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CheckinRecord {
    pub id: i64,
    pub recorded_at_ms: i64,
    pub mood: MoodRating,
    pub activities: Vec<Activity>,
    pub notes: String,
}

/// Input of one support search. Every field is optional; blank matches all.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportSearchCriteria {
    pub location: String,
    pub support_type: Option<SupportType>,
    pub format: Option<MeetingFormat>,
}

impl SupportSearchCriteria {
    /// The location as shown to the user, or "your area" when none was given.
    pub fn location_text(&self) -> &str {
        let location = self.location.trim();
        if location.is_empty() {
            "your area"
        } else {
            location
        }
    }
}

/// A support option the user connected with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SupportConnection {
    pub id: i64,
    pub option_id: String,
    pub option_name: String,
    pub connected_at_ms: i64,
}

/// One opening of a resource from the library page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourceUse {
    pub resource_id: String,
    pub used_at_ms: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_values_round_trip_through_enums() {
        for t in SupportType::ALL {
            assert_eq!(SupportType::from_value(t.value()), Some(t));
        }
        for a in Activity::ALL {
            assert_eq!(Activity::from_value(a.value()), Some(a));
        }
        assert_eq!(MeetingFormat::from_value("in-person"), Some(MeetingFormat::InPerson));
        assert_eq!(UrgencyLevel::from_value("nope"), None);
    }

    #[test]
    fn test_mood_rating_bounds() {
        assert!(MoodRating::new(0).is_none());
        assert_eq!(MoodRating::new(1).map(MoodRating::get), Some(1));
        assert_eq!(MoodRating::new(5).map(MoodRating::get), Some(5));
        assert!(MoodRating::new(6).is_none());
    }

    #[test]
    fn test_location_text_falls_back_when_blank() {
        let mut criteria = SupportSearchCriteria::default();
        assert_eq!(criteria.location_text(), "your area");
        criteria.location = "   ".to_string();
        assert_eq!(criteria.location_text(), "your area");
        criteria.location = "Springfield".to_string();
        assert_eq!(criteria.location_text(), "Springfield");
    }
}

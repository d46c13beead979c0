//! Form drafts and their conversion into records.
//!
//! The UI binds every input to a field of a draft; on submit the draft is
//! turned into a record by a pure function that only needs the current time.
//! The checks performed here are the ones the markup declares (`required`,
//! `type="email"`, `type="number"`), nothing more.

use serde::{Deserialize, Serialize};

use crate::error::FormError;
use crate::models::{Activity, CheckinRecord, MoodRating, SupportType, UrgencyLevel, UserRecord};

/// Inputs of `registrationForm`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub location: String,
    pub support_types: Vec<SupportType>,
    pub urgency_level: UrgencyLevel,
    pub additional_info: String,
    pub privacy: bool,
    pub newsletter: bool,
}

impl RegistrationForm {
    pub fn set_support_type(&mut self, support_type: SupportType, checked: bool) {
        set_member(&mut self.support_types, support_type, checked);
    }

    /// Build the user record registered at `now_ms`.
    pub fn to_record(&self, now_ms: i64) -> Result<UserRecord, FormError> {
        let full_name = self.full_name.trim();
        if full_name.is_empty() {
            return Err(FormError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(FormError::InvalidEmail);
        }
        let age = match self.age.trim() {
            "" => None,
            raw => Some(raw.parse::<u32>().map_err(|_| FormError::InvalidAge)?),
        };
        if !self.privacy {
            return Err(FormError::PrivacyNotAccepted);
        }

        Ok(UserRecord {
            id: now_ms,
            full_name: full_name.to_string(),
            email: email.to_string(),
            phone: self.phone.trim().to_string(),
            age,
            location: self.location.trim().to_string(),
            support_types: self.support_types.clone(),
            urgency_level: self.urgency_level,
            additional_info: self.additional_info.clone(),
            registered_at_ms: now_ms,
            privacy: self.privacy,
            newsletter: self.newsletter,
        })
    }
}

/// Inputs of `checkinForm`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckinForm {
    pub mood: Option<MoodRating>,
    pub activities: Vec<Activity>,
    pub notes: String,
}

impl CheckinForm {
    pub fn set_activity(&mut self, activity: Activity, checked: bool) {
        set_member(&mut self.activities, activity, checked);
    }

    pub fn to_record(&self, now_ms: i64) -> Result<CheckinRecord, FormError> {
        let mood = self.mood.ok_or(FormError::InvalidMood)?;
        Ok(CheckinRecord {
            id: now_ms,
            recorded_at_ms: now_ms,
            mood,
            activities: self.activities.clone(),
            notes: self.notes.clone(),
        })
    }
}

/// Insert or remove `item`, keeping first-selection order and no duplicates.
fn set_member<T: PartialEq>(set: &mut Vec<T>, item: T, present: bool) {
    let position = set.iter().position(|existing| *existing == item);
    match (present, position) {
        (true, None) => set.push(item),
        (false, Some(index)) => {
            set.remove(index);
        }
        _ => {}
    }
}

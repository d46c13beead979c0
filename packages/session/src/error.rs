//! Errors surfaced by the form pipelines.

use thiserror::Error;

/// A form field failed one of its HTML-level constraints.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter your full name")]
    MissingName,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Age must be a whole number")]
    InvalidAge,
    #[error("Please accept the privacy policy to continue")]
    PrivacyNotAccepted,
    #[error("Please choose a mood rating between 1 and 5")]
    InvalidMood,
}

/// Why a submission was not started.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] FormError),
    #[error("A submission is already in progress")]
    InFlight,
}

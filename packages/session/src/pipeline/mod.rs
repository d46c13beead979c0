//! User-triggered flows. Each function drives a [`crate::Host`] through one
//! submission or click, start to finish.

pub mod checkin;
pub mod crisis;
pub mod navigation;
pub mod registration;
pub mod resources;
pub mod search;

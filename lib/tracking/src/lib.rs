//! Tracking domain for interview-tracker.
//!
//! - `application`: job applications and their pipeline status
//! - `interview`: interviews pulled from the calendar, employer guessing
//! - `note`: per-interview notes and ratings

pub mod application;
pub mod error;
pub mod interview;
pub mod note;

pub use application::{Application, ApplicationDraft, ApplicationForm, ApplicationStatus};
pub use error::TrackingError;
pub use interview::{
    Interview, InterviewSchedule, UNKNOWN_COMPANY, employer_from_email, guess_company,
    is_interview,
};
pub use note::{Note, Rating};

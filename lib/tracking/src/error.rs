//! Validation errors for tracking input.

use std::fmt;

/// Errors raised when user input does not describe a valid record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackingError {
    /// A required field was missing or blank.
    MissingField { field: &'static str },
    /// The application status is not one of the known values.
    UnknownStatus { value: String },
    /// The rating is not one of the known values.
    UnknownRating { value: String },
    /// A date could not be parsed as `YYYY-MM-DD`.
    InvalidDate { value: String },
}

impl fmt::Display for TrackingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "missing required field '{field}'"),
            Self::UnknownStatus { value } => write!(f, "unknown application status '{value}'"),
            Self::UnknownRating { value } => write!(f, "unknown rating '{value}'"),
            Self::InvalidDate { value } => write!(f, "invalid date '{value}'"),
        }
    }
}

impl std::error::Error for TrackingError {}

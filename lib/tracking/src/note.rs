//! Notes and ratings attached to interviews.

use chrono::{DateTime, Utc};
use interview_tracker_core::NoteId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TrackingError;

/// How the interview went.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rating {
    ThumbsDown,
    #[default]
    ThumbsUp,
    StrongThumbsUp,
}

impl Rating {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ThumbsDown => "thumbs-down",
            Self::ThumbsUp => "thumbs-up",
            Self::StrongThumbsUp => "strong-thumbs-up",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rating {
    type Err = TrackingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "thumbs-down" => Ok(Self::ThumbsDown),
            "thumbs-up" => Ok(Self::ThumbsUp),
            "strong-thumbs-up" => Ok(Self::StrongThumbsUp),
            other => Err(TrackingError::UnknownRating {
                value: other.to_string(),
            }),
        }
    }
}

/// A user's note on one interview. At most one per `(user_id, interview_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub user_id: String,
    /// Calendar event id of the interview.
    pub interview_id: String,
    pub content: String,
    pub rating: Rating,
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Creates a fresh note.
    #[must_use]
    pub fn new(user_id: String, interview_id: String, content: String, rating: Rating) -> Self {
        Self {
            id: NoteId::new(),
            user_id,
            interview_id,
            content,
            rating,
            created_at: Utc::now(),
        }
    }
}

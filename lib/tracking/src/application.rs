//! Job applications and their pipeline status.

use chrono::{DateTime, NaiveDate, Utc};
use interview_tracker_core::ApplicationId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TrackingError;

/// Where an application stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    /// Submitted, no response yet.
    #[default]
    Applied,
    /// At least one interview scheduled.
    Interviewing,
    /// An offer was extended.
    Offer,
    /// The employer declined.
    Rejected,
    /// The applicant took the offer.
    Accepted,
}

impl ApplicationStatus {
    /// Every status, in pipeline order.
    pub const ALL: [Self; 5] = [
        Self::Applied,
        Self::Interviewing,
        Self::Offer,
        Self::Rejected,
        Self::Accepted,
    ];

    /// Returns the value stored in the `application_status` column.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Interviewing => "interviewing",
            Self::Offer => "offer",
            Self::Rejected => "rejected",
            Self::Accepted => "accepted",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = TrackingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == wanted)
            .ok_or_else(|| TrackingError::UnknownStatus {
                value: s.to_string(),
            })
    }
}

/// A stored application row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    /// Provider profile id of the owner.
    pub user_id: String,
    pub company_name: String,
    pub job_title: String,
    /// Link to the job posting.
    pub url: Option<String>,
    pub date_applied: NaiveDate,
    pub status: ApplicationStatus,
    pub salary: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Raw add/edit form fields as submitted by the browser.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationForm {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub date_applied: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub location: String,
}

/// Validated field values for inserting or updating an application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationDraft {
    pub company_name: String,
    pub job_title: String,
    pub url: Option<String>,
    pub date_applied: NaiveDate,
    pub status: ApplicationStatus,
    pub salary: Option<String>,
    pub location: Option<String>,
}

impl TryFrom<ApplicationForm> for ApplicationDraft {
    type Error = TrackingError;

    fn try_from(form: ApplicationForm) -> Result<Self, Self::Error> {
        let company_name = required(form.company_name, "company_name")?;
        let job_title = required(form.job_title, "job_title")?;
        let date_raw = required(form.date_applied, "date_applied")?;
        let date_applied = NaiveDate::parse_from_str(&date_raw, "%Y-%m-%d")
            .map_err(|_| TrackingError::InvalidDate { value: date_raw })?;
        let status = match optional(form.status) {
            Some(raw) => raw.parse()?,
            None => ApplicationStatus::default(),
        };

        Ok(Self {
            company_name,
            job_title,
            url: optional(form.url),
            date_applied,
            status,
            salary: optional(form.salary),
            location: optional(form.location),
        })
    }
}

impl ApplicationDraft {
    /// Builds a new row owned by `user_id`.
    #[must_use]
    pub fn into_application(self, user_id: String) -> Application {
        Application {
            id: ApplicationId::new(),
            user_id,
            company_name: self.company_name,
            job_title: self.job_title,
            url: self.url,
            date_applied: self.date_applied,
            status: self.status,
            salary: self.salary,
            location: self.location,
            created_at: Utc::now(),
        }
    }
}

fn required(value: String, field: &'static str) -> Result<String, TrackingError> {
    optional(value).ok_or(TrackingError::MissingField { field })
}

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

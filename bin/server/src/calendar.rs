//! Google Calendar API client.
//!
//! Reads the signed-in user's primary calendar with their access token and
//! turns interview events into `Interview`s.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use interview_tracker_tracking::{Interview, guess_company, is_interview};
use serde::Deserialize;
use std::collections::HashSet;

use crate::error::CalendarError;

/// Base URL for Google Calendar API v3.
pub const CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";

/// How far back the interview listing reaches.
const LOOKBACK_DAYS: i64 = 90;

/// How far ahead the interview listing reaches.
const LOOKAHEAD_DAYS: i64 = 180;

/// Free-text query sent to the API. Matching is re-checked locally since
/// Google also matches attendee names and locations.
const INTERVIEW_QUERY: &str = "interview";

/// Upper bound on pages fetched for one listing.
const MAX_PAGES: usize = 20;

/// Google Calendar API client.
#[derive(Debug, Clone)]
pub struct GoogleCalendarClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl GoogleCalendarClient {
    /// Creates a client for the real Google Calendar API.
    pub fn new(http_client: reqwest::Client) -> Self {
        Self::with_base_url(http_client, CALENDAR_API_BASE)
    }

    /// Creates a client against another API base, e.g. a test server.
    pub fn with_base_url(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Lists interviews on the user's primary calendar around `now`.
    ///
    /// `user_email` keeps the user's own address out of the company guess.
    pub async fn list_interviews(
        &self,
        access_token: &str,
        user_email: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<Interview>, CalendarError> {
        let time_min = now - Duration::days(LOOKBACK_DAYS);
        let time_max = now + Duration::days(LOOKAHEAD_DAYS);

        let events = self.list_events(access_token, time_min, time_max).await?;
        let interviews: Vec<Interview> = events
            .into_iter()
            .filter_map(|event| event.into_interview(user_email))
            .collect();

        tracing::debug!(count = interviews.len(), "fetched interviews from calendar");
        Ok(interviews)
    }

    /// Lists every event in the window, following pagination.
    async fn list_events(
        &self,
        access_token: &str,
        time_min: DateTime<Utc>,
        time_max: DateTime<Utc>,
    ) -> Result<Vec<ApiEvent>, CalendarError> {
        let mut all_events = Vec::new();
        let mut page_token: Option<String> = None;
        let mut seen_tokens = HashSet::new();

        for page_number in 1..=MAX_PAGES {
            let page = self
                .list_events_page(access_token, time_min, time_max, page_token.as_deref())
                .await?;
            all_events.extend(page.items);

            let Some(token) = page.next_page_token else {
                return Ok(all_events);
            };
            if !seen_tokens.insert(token.clone()) {
                tracing::warn!(page = page_number, "calendar repeated a page token; stopping");
                return Ok(all_events);
            }
            page_token = Some(token);
        }

        tracing::warn!(max_pages = MAX_PAGES, "calendar listing truncated");
        Ok(all_events)
    }

    /// Fetches a single page of events.
    async fn list_events_page(
        &self,
        access_token: &str,
        time_min: DateTime<Utc>,
        time_max: DateTime<Utc>,
        page_token: Option<&str>,
    ) -> Result<EventListResponse, CalendarError> {
        let url = format!("{}/calendars/primary/events", self.base_url);

        let mut request = self
            .http_client
            .get(&url)
            .bearer_auth(access_token)
            .query(&[
                ("timeMin", time_min.to_rfc3339()),
                ("timeMax", time_max.to_rfc3339()),
                ("singleEvents", "true".to_string()),
                ("orderBy", "startTime".to_string()),
                ("q", INTERVIEW_QUERY.to_string()),
            ]);

        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }

        let response = request.send().await.map_err(|e| CalendarError::Network {
            details: e.to_string(),
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(CalendarError::Unauthorized {
                status: status.as_u16(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CalendarError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| CalendarError::Decode {
                details: e.to_string(),
            })
    }
}

/// Response from the events list endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventListResponse {
    #[serde(default)]
    items: Vec<ApiEvent>,
    next_page_token: Option<String>,
}

/// Event as returned by the API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiEvent {
    id: Option<String>,
    status: Option<String>,
    summary: Option<String>,
    description: Option<String>,
    #[serde(default)]
    start: ApiEventTime,
    organizer: Option<ApiPerson>,
    attendees: Option<Vec<ApiPerson>>,
}

/// Event start; timed events carry `dateTime`, all-day events `date`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiEventTime {
    date_time: Option<String>,
    date: Option<String>,
}

/// Organizer or attendee.
#[derive(Debug, Deserialize)]
struct ApiPerson {
    email: Option<String>,
    #[serde(rename = "self", default)]
    is_self: bool,
}

impl ApiEventTime {
    fn to_utc(&self) -> Option<DateTime<Utc>> {
        if let Some(date_time) = &self.date_time {
            return DateTime::parse_from_rfc3339(date_time)
                .map_err(|e| tracing::warn!("failed to parse start time: {}", e))
                .ok()
                .map(|parsed| parsed.with_timezone(&Utc));
        }

        let date = NaiveDate::parse_from_str(self.date.as_deref()?, "%Y-%m-%d")
            .map_err(|e| tracing::warn!("failed to parse start date: {}", e))
            .ok()?;
        Some(date.and_hms_opt(0, 0, 0)?.and_utc())
    }
}

impl ApiEvent {
    /// Converts an interview event; anything else yields `None`.
    fn into_interview(self, user_email: &str) -> Option<Interview> {
        if self.status.as_deref() == Some("cancelled") {
            return None;
        }

        let summary = self.summary.unwrap_or_default();
        if !is_interview(&summary, self.description.as_deref()) {
            return None;
        }

        let id = self.id?;
        let Some(starts_at) = self.start.to_utc() else {
            tracing::warn!(event_id = %id, "interview event has no usable start time");
            return None;
        };

        let organizer = self.organizer.and_then(|person| person.email);
        let attendees = self.attendees.unwrap_or_default();
        let others = attendees
            .iter()
            .filter(|person| !person.is_self)
            .filter_map(|person| person.email.as_deref())
            .filter(|email| !email.eq_ignore_ascii_case(user_email));
        let company = guess_company(organizer.as_deref().into_iter().chain(others));

        Some(Interview {
            id,
            title: summary,
            company,
            starts_at,
            rating: None,
        })
    }
}

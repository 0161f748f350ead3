//! Domain error types for server operations.
//!
//! Each enum carries enough detail for logs; `IntoResponse` impls only ever
//! show users a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use interview_tracker_tracking::TrackingError;
use std::fmt;

/// Session cookie errors.
#[derive(Debug)]
pub enum SessionError {
    /// The session could not be written into a cookie.
    Encode { details: String },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode { details } => write!(f, "failed to encode session cookie: {}", details),
        }
    }
}

impl std::error::Error for SessionError {}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "session error");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}

/// Google Calendar API errors.
#[derive(Debug)]
pub enum CalendarError {
    /// The access token was rejected (HTTP 401 or 403).
    Unauthorized { status: u16 },
    /// Any other non-success response.
    Api { status: u16, body: String },
    /// The request never completed.
    Network { details: String },
    /// The response body was not the expected JSON.
    Decode { details: String },
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthorized { status } => {
                write!(f, "calendar access rejected with HTTP {}", status)
            }
            Self::Api { status, body } => {
                write!(f, "calendar API returned HTTP {}: {}", status, body)
            }
            Self::Network { details } => write!(f, "calendar request failed: {}", details),
            Self::Decode { details } => {
                write!(f, "undecodable calendar response: {}", details)
            }
        }
    }
}

impl std::error::Error for CalendarError {}

impl IntoResponse for CalendarError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "calendar error");
        (StatusCode::BAD_GATEWAY, "Could not load your calendar").into_response()
    }
}

/// Errors from application and note routes.
#[derive(Debug)]
pub enum RouteError {
    /// Database error while reading or writing rows.
    Database { details: String },
    /// A submitted form failed validation.
    InvalidForm { details: String },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Database { details } => write!(f, "database error: {}", details),
            Self::InvalidForm { details } => write!(f, "invalid form: {}", details),
        }
    }
}

impl std::error::Error for RouteError {}

impl From<sqlx::Error> for RouteError {
    fn from(error: sqlx::Error) -> Self {
        Self::Database {
            details: error.to_string(),
        }
    }
}

impl From<TrackingError> for RouteError {
    fn from(error: TrackingError) -> Self {
        Self::InvalidForm {
            details: error.to_string(),
        }
    }
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        match &self {
            Self::Database { .. } => {
                tracing::error!(error = %self, "route failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response()
            }
            Self::InvalidForm { details } => {
                tracing::debug!(error = %self, "rejected form");
                (StatusCode::UNPROCESSABLE_ENTITY, details.clone()).into_response()
            }
        }
    }
}

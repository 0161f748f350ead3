//! Authentication for the interview-tracker server.
//!
//! This module provides:
//! - Google OAuth sign-in (authorization URL, code exchange, profile fetch)
//! - Encrypted cookie sessions holding the signed-in `Identity`
//! - Authentication extractors for Axum routes
//!
//! Google access tokens are kept in the session so the calendar can be read
//! on the user's behalf. When Google rejects one, the session is ended and the
//! user signs in again; refresh tokens are stored but never exchanged.

pub mod google;
pub mod middleware;
pub mod routes;
pub mod session;

use sqlx::PgPool;

use crate::calendar::GoogleCalendarClient;

pub use google::{GoogleEndpoints, GoogleOAuthClient};
pub use middleware::{OptionalIdentity, RequireIdentity};
pub use routes::{callback, login, logout, sign_out};
pub use session::SessionBinder;

/// Shared application state.
pub struct AppState {
    /// Database connection pool.
    pub db_pool: PgPool,
    /// Google sign-in client.
    pub oauth_client: GoogleOAuthClient,
    /// Session cookie binder.
    pub sessions: SessionBinder,
    /// Google Calendar client.
    pub calendar: GoogleCalendarClient,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        db_pool: PgPool,
        oauth_client: GoogleOAuthClient,
        sessions: SessionBinder,
        calendar: GoogleCalendarClient,
    ) -> Self {
        Self {
            db_pool,
            oauth_client,
            sessions,
            calendar,
        }
    }
}

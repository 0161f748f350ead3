//! Authentication routes for login, callback, and logout.

use axum::{
    extract::{Query, State},
    http::{HeaderMap, header::SET_COOKIE},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use std::sync::Arc;

use super::AppState;

/// Query parameters for the OAuth callback.
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    /// Absent when the user backed out of the consent screen.
    code: Option<String>,
}

/// Starts the Google sign-in flow by redirecting to the consent screen.
pub async fn login(State(state): State<Arc<AppState>>) -> Redirect {
    Redirect::to(&state.oauth_client.authorization_url())
}

/// Handles the redirect back from Google.
///
/// Any failure sends the user home signed out; nothing is bound to the
/// session unless the whole login succeeded.
pub async fn callback(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<CallbackQuery>,
) -> Response {
    let Some(code) = query.code.filter(|code| !code.is_empty()) else {
        tracing::debug!("callback without code, sign-in abandoned");
        return Redirect::to("/").into_response();
    };

    let identity = match state.oauth_client.complete_login(&code).await {
        Ok(identity) => identity,
        Err(e) => {
            tracing::warn!(error = %e, "Google sign-in failed");
            return Redirect::to("/").into_response();
        }
    };

    match state.sessions.bind_identity(&headers, &identity) {
        Ok(cookie) => {
            let home = format!("/calendar/{}", identity.profile().id());
            ([(SET_COOKIE, cookie)], Redirect::to(&home)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Signs the user out by clearing the session cookie.
pub async fn logout(State(state): State<Arc<AppState>>) -> Response {
    sign_out(&state)
}

/// Clears the session and sends the user home.
///
/// Also used when Google rejects a stored access token.
pub fn sign_out(state: &AppState) -> Response {
    match state.sessions.end_session() {
        Ok(cookie) => ([(SET_COOKIE, cookie)], Redirect::to("/")).into_response(),
        Err(e) => e.into_response(),
    }
}

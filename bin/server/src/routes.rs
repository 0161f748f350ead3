//! JSON and form route handlers.
//!
//! Handlers render JSON for the browser client and answer form posts with
//! redirects. Each one acts on the signed-in user's own rows only.

pub mod applications;
pub mod home;
pub mod interviews;
pub mod notes;

use axum::response::{IntoResponse, Redirect, Response};

/// Redirects to a page on the signed-in user's own path.
fn redirect_to(prefix: &str, user_id: &str) -> Response {
    Redirect::to(&format!("{prefix}/{user_id}")).into_response()
}

//! HTTP router.

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::auth::{self, AppState};
use crate::routes::{applications, home, interviews, notes};

/// Builds the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home::index))
        // Auth routes
        .route("/auth/google", post(auth::login))
        .route("/auth/google/callback", get(auth::callback))
        .route("/logout", post(auth::logout))
        // Interviews and notes
        .route("/calendar/{user_id}", get(interviews::list))
        .route(
            "/notes/{user_id}/{event_id}",
            get(notes::show).post(notes::save),
        )
        // Applications; `{id}` is the owner's id on the list and an application id on edit
        .route("/applications/add", post(applications::create))
        .route(
            "/applications/{id}",
            get(applications::list).post(applications::update_status),
        )
        .route(
            "/applications/{id}/edit",
            get(applications::edit).post(applications::update),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

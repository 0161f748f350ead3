//! Notes on individual interviews.

use axum::{
    Form, Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use interview_tracker_tracking::{Note, Rating};
use serde::Deserialize;
use std::sync::Arc;

use super::redirect_to;
use crate::auth::{AppState, RequireIdentity};
use crate::db::NoteRepository;
use crate::error::RouteError;

/// Note form fields.
#[derive(Debug, Deserialize)]
pub struct NoteForm {
    #[serde(default)]
    note: String,
    #[serde(default)]
    rating: String,
}

/// Returns the user's note on an interview, or `null`.
pub async fn show(
    State(state): State<Arc<AppState>>,
    RequireIdentity(identity): RequireIdentity,
    Path((user_id, event_id)): Path<(String, String)>,
) -> Result<Response, RouteError> {
    if !identity.owns(&user_id) {
        return Ok(redirect_to("/calendar", identity.profile().id()));
    }

    let note = NoteRepository::new(state.db_pool.clone())
        .find(&user_id, &event_id)
        .await?;

    Ok(Json(note).into_response())
}

/// Creates or replaces the user's note on an interview.
pub async fn save(
    State(state): State<Arc<AppState>>,
    RequireIdentity(identity): RequireIdentity,
    Path((user_id, event_id)): Path<(String, String)>,
    Form(form): Form<NoteForm>,
) -> Result<Response, RouteError> {
    if !identity.owns(&user_id) {
        return Ok(redirect_to("/calendar", identity.profile().id()));
    }

    let rating = match form.rating.trim() {
        "" => Rating::default(),
        raw => raw.parse::<Rating>()?,
    };

    let note = Note::new(user_id, event_id, form.note.trim().to_string(), rating);
    let saved = NoteRepository::new(state.db_pool.clone())
        .upsert(&note)
        .await?;

    tracing::info!(note_id = %saved.id, interview_id = %saved.interview_id, "saved note");
    Ok(redirect_to("/calendar", &saved.user_id))
}

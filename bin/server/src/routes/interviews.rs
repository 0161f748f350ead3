//! Interview listing built from the user's Google Calendar.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use interview_tracker_platform_access::AuthenticationError;
use interview_tracker_tracking::InterviewSchedule;
use std::sync::Arc;

use super::redirect_to;
use crate::auth::{AppState, RequireIdentity, sign_out};
use crate::db::NoteRepository;
use crate::error::CalendarError;

/// Lists the user's upcoming and past interviews with their ratings.
///
/// If Google rejects the stored access token, the session is ended and the
/// user is sent home to sign in again.
pub async fn list(
    State(state): State<Arc<AppState>>,
    RequireIdentity(identity): RequireIdentity,
    Path(user_id): Path<String>,
) -> Response {
    let profile = identity.profile();
    if !identity.owns(&user_id) {
        return redirect_to("/calendar", profile.id());
    }

    let now = Utc::now();
    let mut interviews = match state
        .calendar
        .list_interviews(identity.access_token(), profile.email(), now)
        .await
    {
        Ok(interviews) => interviews,
        Err(CalendarError::Unauthorized { status }) => {
            let error = AuthenticationError::UpstreamAuthorizationExpired { status };
            tracing::info!(user_id = %profile.id(), %error, "ending session");
            return sign_out(&state);
        }
        Err(e) => return e.into_response(),
    };

    let ids: Vec<String> = interviews.iter().map(|i| i.id.clone()).collect();
    let ratings = NoteRepository::new(state.db_pool.clone())
        .ratings_for(profile.id(), &ids)
        .await
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load interview ratings");
            Default::default()
        });

    for interview in &mut interviews {
        interview.rating = ratings.get(&interview.id).copied();
    }

    Json(InterviewSchedule::partition(interviews, now)).into_response()
}

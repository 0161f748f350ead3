//! Job application tracking routes.

use axum::{
    Form, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use interview_tracker_core::ApplicationId;
use interview_tracker_tracking::{
    Application, ApplicationDraft, ApplicationForm, ApplicationStatus,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::redirect_to;
use crate::auth::{AppState, RequireIdentity};
use crate::db::ApplicationRepository;
use crate::error::RouteError;

/// The application list page.
#[derive(Debug, Serialize)]
pub struct ApplicationList {
    pub applications: Vec<Application>,
    /// Statuses the user can pick from.
    pub statuses: Vec<ApplicationStatus>,
}

/// Quick status change form.
#[derive(Debug, Deserialize)]
pub struct StatusForm {
    id: String,
    status: String,
}

/// Lists the user's applications.
///
/// A database failure shows an empty list rather than an error page.
pub async fn list(
    State(state): State<Arc<AppState>>,
    RequireIdentity(identity): RequireIdentity,
    Path(user_id): Path<String>,
) -> Response {
    if !identity.owns(&user_id) {
        return redirect_to("/applications", identity.profile().id());
    }

    let applications = ApplicationRepository::new(state.db_pool.clone())
        .list_for_user(&user_id)
        .await
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "failed to list applications");
            Vec::new()
        });

    Json(ApplicationList {
        applications,
        statuses: ApplicationStatus::ALL.to_vec(),
    })
    .into_response()
}

/// Changes one application's status.
pub async fn update_status(
    State(state): State<Arc<AppState>>,
    RequireIdentity(identity): RequireIdentity,
    Path(user_id): Path<String>,
    Form(form): Form<StatusForm>,
) -> Result<Response, RouteError> {
    if !identity.owns(&user_id) {
        return Ok(redirect_to("/applications", identity.profile().id()));
    }

    let id = parse_id(&form.id)?;
    let status: ApplicationStatus = form.status.parse()?;

    let updated = ApplicationRepository::new(state.db_pool.clone())
        .update_status(&id, &user_id, status)
        .await?;
    if !updated {
        tracing::debug!(application_id = %id, "status update matched no application");
    }

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Adds an application for the signed-in user.
pub async fn create(
    State(state): State<Arc<AppState>>,
    RequireIdentity(identity): RequireIdentity,
    Form(form): Form<ApplicationForm>,
) -> Result<Response, RouteError> {
    let user_id = identity.profile().id();
    let application = ApplicationDraft::try_from(form)?.into_application(user_id.to_string());

    ApplicationRepository::new(state.db_pool.clone())
        .create(&application)
        .await?;

    tracing::info!(application_id = %application.id, "added application");
    Ok(redirect_to("/applications", user_id))
}

/// Returns one application for editing.
///
/// Unknown ids go back to the list, as does a failed lookup.
pub async fn edit(
    State(state): State<Arc<AppState>>,
    RequireIdentity(identity): RequireIdentity,
    Path(id): Path<String>,
) -> Response {
    let user_id = identity.profile().id();
    let Ok(id) = id.parse::<ApplicationId>() else {
        return redirect_to("/applications", user_id);
    };

    match ApplicationRepository::new(state.db_pool.clone())
        .find(&id, user_id)
        .await
    {
        Ok(Some(application)) => Json(application).into_response(),
        Ok(None) => redirect_to("/applications", user_id),
        Err(e) => {
            tracing::error!(application_id = %id, error = %e, "failed to load application");
            redirect_to("/applications", user_id)
        }
    }
}

/// Saves an edited application.
///
/// Database failures are logged and the user still lands back on the list.
pub async fn update(
    State(state): State<Arc<AppState>>,
    RequireIdentity(identity): RequireIdentity,
    Path(id): Path<String>,
    Form(form): Form<ApplicationForm>,
) -> Result<Response, RouteError> {
    let user_id = identity.profile().id();
    let id = parse_id(&id)?;
    let draft = ApplicationDraft::try_from(form)?;

    match ApplicationRepository::new(state.db_pool.clone())
        .update(&id, user_id, &draft)
        .await
    {
        Ok(true) => tracing::info!(application_id = %id, "updated application"),
        Ok(false) => tracing::debug!(application_id = %id, "edit matched no application"),
        Err(e) => tracing::error!(application_id = %id, error = %e, "failed to update application"),
    }

    Ok(redirect_to("/applications", user_id))
}

fn parse_id(raw: &str) -> Result<ApplicationId, RouteError> {
    raw.parse::<ApplicationId>()
        .map_err(|e| RouteError::InvalidForm {
            details: e.to_string(),
        })
}

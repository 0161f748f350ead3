//! Authentication extractors for Axum.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use interview_tracker_platform_access::Identity;
use std::sync::Arc;

use super::AppState;

/// Extractor for requiring a signed-in user.
///
/// If there is no valid session, the user is redirected home.
pub struct RequireIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequireIdentity
where
    Arc<AppState>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = Arc::<AppState>::from_ref(state);
        app_state
            .sessions
            .current_user(&parts.headers)
            .map(RequireIdentity)
            .ok_or(AuthRejection::NotAuthenticated)
    }
}

/// Extractor for optionally getting the signed-in user.
pub struct OptionalIdentity(pub Option<Identity>);

impl<S> FromRequestParts<S> for OptionalIdentity
where
    Arc<AppState>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match RequireIdentity::from_request_parts(parts, state).await {
            Ok(RequireIdentity(identity)) => Ok(OptionalIdentity(Some(identity))),
            Err(_) => Ok(OptionalIdentity(None)),
        }
    }
}

/// Rejection type for authentication extractors.
#[derive(Debug)]
pub enum AuthRejection {
    NotAuthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::NotAuthenticated => Redirect::to("/").into_response(),
        }
    }
}

//! Landing route.

use axum::Json;
use interview_tracker_platform_access::Profile;
use serde::Serialize;

use crate::auth::OptionalIdentity;

/// What the landing page needs to know.
#[derive(Debug, Serialize)]
pub struct HomeView {
    /// Signed-in user's profile, `null` when signed out.
    pub user: Option<Profile>,
}

/// Returns the signed-in user's profile, if any.
pub async fn index(OptionalIdentity(identity): OptionalIdentity) -> Json<HomeView> {
    Json(HomeView {
        user: identity.map(|identity| identity.profile().clone()),
    })
}

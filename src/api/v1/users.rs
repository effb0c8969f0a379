//! Current-user handlers

use axum::{extract::State, http::StatusCode};
use tracing::{error, info, warn};

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, PingUserRequest};
use crate::domain::identity::{IdentityError, UserProfile};
use crate::domain::ErrorContext;

const SYNC_USER_PROFILE: ErrorContext<'static> =
    ErrorContext::new("user", "sync user profile");

fn identity_failure(err: IdentityError) -> ApiError {
    error!(error = %err, "GitHub identity lookup failed");
    ApiError::internal("unable to get user details from github")
}

/// POST /v1/users/me/ping
///
/// Refreshes the caller's profile from GitHub using the supplied OAuth token.
pub async fn ping_user(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Json(request): Json<PingUserRequest>,
) -> Result<StatusCode, ApiError> {
    let github_user = state
        .identity_provider
        .current_user(&request.github_token)
        .await
        .map_err(identity_failure)?;

    if let Some(linked) = user.github_user_id.filter(|id| *id != github_user.id) {
        warn!(
            user_id = %user.id,
            linked,
            presented = github_user.id,
            "GitHub account does not match the linked account"
        );
        return Err(ApiError::forbidden("forbidden"));
    }

    let emails = state
        .identity_provider
        .list_emails(&request.github_token)
        .await
        .map_err(identity_failure)?
        .into_iter()
        .filter(|e| e.verified)
        .map(|e| e.email)
        .collect();

    let profile = UserProfile {
        user_id: user.id.clone(),
        github_user_id: github_user.id,
        username: github_user.username,
        emails,
    };

    state
        .backend
        .sync_user_profile(profile)
        .await
        .map_err(|e| ApiError::from_backend(e, &SYNC_USER_PROFILE))?;

    info!(user_id = %user.id, "User profile synced");

    Ok(StatusCode::NO_CONTENT)
}

//! Saved search bookmark handlers

use axum::{extract::State, http::StatusCode};
use tracing::info;

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Path};
use crate::domain::ErrorContext;

const PUT_BOOKMARK: ErrorContext<'static> = ErrorContext::new("saved search", "put bookmark");
const REMOVE_BOOKMARK: ErrorContext<'static> =
    ErrorContext::new("saved search", "remove bookmark");

/// PUT /v1/users/me/saved-searches/{search_id}/bookmark
pub async fn put_bookmark(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(search_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .backend
        .put_bookmark(&search_id, &user.id)
        .await
        .map_err(|e| ApiError::from_backend(e, &PUT_BOOKMARK))?;

    info!(search_id = %search_id, user_id = %user.id, "Bookmark added");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /v1/users/me/saved-searches/{search_id}/bookmark
pub async fn remove_bookmark(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(search_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .backend
        .remove_bookmark(&search_id, &user.id)
        .await
        .map_err(|e| ApiError::from_backend(e, &REMOVE_BOOKMARK))?;

    info!(search_id = %search_id, user_id = %user.id, "Bookmark removed");

    Ok(StatusCode::NO_CONTENT)
}

//! Notification subscription handlers

use axum::{extract::State, http::StatusCode};
use tracing::info;

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Path};
use crate::domain::ErrorContext;

const DELETE_SUBSCRIPTION: ErrorContext<'static> =
    ErrorContext::new("subscription", "delete subscription");

/// DELETE /v1/users/me/subscriptions/{subscription_id}
pub async fn delete_subscription(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(subscription_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .backend
        .delete_subscription(&subscription_id, &user.id)
        .await
        .map_err(|e| ApiError::from_backend(e, &DELETE_SUBSCRIPTION))?;

    info!(subscription_id = %subscription_id, user_id = %user.id, "Subscription deleted");

    Ok(StatusCode::NO_CONTENT)
}

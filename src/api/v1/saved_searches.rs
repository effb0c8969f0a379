//! Saved search handlers
//!
//! None of these responses depend only on the request (they vary with the
//! caller and with later edits), so they bypass the operation caches.

use axum::{extract::State, http::StatusCode};
use tracing::{debug, info};

use crate::api::middleware::{OptionalUser, RequireUser};
use crate::api::state::AppState;
use crate::api::types::{normalize_page_size, ApiError, Json, PaginationQuery, Path, Query};
use crate::domain::model::{NewSavedSearch, Page, SavedSearch, SavedSearchUpdate};
use crate::domain::query::QueryParser;
use crate::domain::ErrorContext;

pub const MAX_NAME_LENGTH: usize = 32;
pub const MAX_QUERY_LENGTH: usize = 256;

const GET_SAVED_SEARCH: ErrorContext<'static> =
    ErrorContext::new("saved search", "get saved search");
const CREATE_SAVED_SEARCH: ErrorContext<'static> =
    ErrorContext::new("saved search", "create saved search");
const UPDATE_SAVED_SEARCH: ErrorContext<'static> =
    ErrorContext::new("saved search", "update saved search");
const DELETE_SAVED_SEARCH: ErrorContext<'static> =
    ErrorContext::new("saved search", "delete saved search");
const LIST_USER_SAVED_SEARCHES: ErrorContext<'static> =
    ErrorContext::new("saved searches", "list user saved searches");

fn validate_name(name: &str) -> Result<(), ApiError> {
    if name.trim().is_empty() {
        return Err(ApiError::bad_request("name must not be empty"));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ApiError::bad_request(format!(
            "name must be at most {} characters",
            MAX_NAME_LENGTH
        )));
    }
    Ok(())
}

fn validate_query(query: &str, parser: &dyn QueryParser) -> Result<(), ApiError> {
    if query.chars().count() > MAX_QUERY_LENGTH {
        return Err(ApiError::bad_request(format!(
            "query must be at most {} characters",
            MAX_QUERY_LENGTH
        )));
    }

    parser.parse(query).map(|_| ()).map_err(|e| {
        debug!(error = %e, "Saved search query failed to parse");
        ApiError::bad_request("query string cannot be parsed")
    })
}

/// GET /v1/saved-searches/{search_id}
pub async fn get_saved_search(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    Path(search_id): Path<String>,
) -> Result<Json<SavedSearch>, ApiError> {
    debug!(search_id = %search_id, authenticated = user.is_some(), "Getting saved search");

    let search = state
        .backend
        .get_saved_search(&search_id, user.map(|u| u.id))
        .await
        .map_err(|e| ApiError::from_backend(e, &GET_SAVED_SEARCH))?;

    Ok(Json(search))
}

/// POST /v1/saved-searches
pub async fn create_saved_search(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Json(request): Json<NewSavedSearch>,
) -> Result<(StatusCode, Json<SavedSearch>), ApiError> {
    validate_name(&request.name)?;
    validate_query(&request.query, state.query_parser.as_ref())?;

    let search = state
        .backend
        .create_saved_search(&user.id, request)
        .await
        .map_err(|e| ApiError::from_backend(e, &CREATE_SAVED_SEARCH))?;

    info!(search_id = %search.id, user_id = %user.id, "Saved search created");

    Ok((StatusCode::CREATED, Json(search)))
}

/// PATCH /v1/saved-searches/{search_id}
pub async fn update_saved_search(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(search_id): Path<String>,
    Json(update): Json<SavedSearchUpdate>,
) -> Result<Json<SavedSearch>, ApiError> {
    if update.is_empty() {
        return Err(ApiError::bad_request("at least one field must be updated"));
    }
    if let Some(name) = &update.name {
        validate_name(name)?;
    }
    if let Some(query) = &update.query {
        validate_query(query, state.query_parser.as_ref())?;
    }

    let search = state
        .backend
        .update_saved_search(&search_id, &user.id, update)
        .await
        .map_err(|e| ApiError::from_backend(e, &UPDATE_SAVED_SEARCH))?;

    info!(search_id = %search_id, user_id = %user.id, "Saved search updated");

    Ok(Json(search))
}

/// DELETE /v1/saved-searches/{search_id}
pub async fn delete_saved_search(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(search_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .backend
        .delete_saved_search(&search_id, &user.id)
        .await
        .map_err(|e| ApiError::from_backend(e, &DELETE_SAVED_SEARCH))?;

    info!(search_id = %search_id, user_id = %user.id, "Saved search deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /v1/users/me/saved-searches
pub async fn list_user_saved_searches(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<Page<SavedSearch>>, ApiError> {
    debug!(user_id = %user.id, "Listing user saved searches");

    let page = state
        .backend
        .list_user_saved_searches(
            &user.id,
            query.page_token.clone(),
            normalize_page_size(query.page_size),
        )
        .await
        .map_err(|e| {
            ApiError::from_backend(
                e,
                &LIST_USER_SAVED_SEARCHES.with_page_token(query.page_token.as_deref()),
            )
        })?;

    Ok(Json(page))
}

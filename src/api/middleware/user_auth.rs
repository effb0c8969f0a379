//! Bearer token authentication extractors

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::identity::{AuthError, AuthenticatedUser};

/// Extractor that requires a valid bearer token
///
/// Rejects with a 401 `{code, message}` body before the handler runs.
#[derive(Debug, Clone)]
pub struct RequireUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(&parts.headers)?.ok_or_else(|| {
            ApiError::unauthorized(
                "authentication required, provide 'Authorization: Bearer <token>'",
            )
        })?;

        authenticate(&token, state).await.map(RequireUser)
    }
}

/// Extractor for endpoints where identity only enriches the response
///
/// An absent header yields `None`; a present but invalid token is still a 401.
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl FromRequestParts<AppState> for OptionalUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match extract_bearer_token(&parts.headers)? {
            Some(token) => authenticate(&token, state).await.map(|u| OptionalUser(Some(u))),
            None => Ok(OptionalUser(None)),
        }
    }
}

async fn authenticate(token: &str, state: &AppState) -> Result<AuthenticatedUser, ApiError> {
    debug!("Validating bearer token");

    state
        .authenticator
        .authenticate(token)
        .await
        .map_err(|e| match e {
            AuthError::Expired => ApiError::unauthorized("token expired"),
            AuthError::InvalidToken(_) => ApiError::unauthorized("invalid token"),
        })
}

/// Extract the bearer token from the Authorization header
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<Option<String>, ApiError> {
    let Some(auth_header) = headers.get(header::AUTHORIZATION) else {
        return Ok(None);
    };

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::unauthorized("invalid Authorization header encoding"))?;

    match auth_str.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(Some(token.trim().to_string())),
        _ => Err(ApiError::unauthorized(
            "unsupported authorization scheme, expected a bearer token",
        )),
    }
}

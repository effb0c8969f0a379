//! Authentication gate interface

use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

use super::AuthenticatedUser;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("token expired")]
    Expired,
}

/// Resolves a bearer token to the calling user
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}

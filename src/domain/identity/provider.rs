//! External identity provider interface (GitHub)

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

/// Account returned by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubUser {
    pub id: i64,
    #[serde(rename = "login")]
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubEmail {
    pub email: String,
    pub verified: bool,
}

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("identity provider request failed: {0}")]
    Request(String),

    #[error("identity provider rejected the token")]
    Unauthorized,

    #[error("identity provider returned status {0}")]
    UnexpectedStatus(u16),
}

/// Client for the identity provider, acting on behalf of the token owner
#[cfg_attr(test, automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn current_user(&self, token: &str) -> Result<GitHubUser, IdentityError>;

    async fn list_emails(&self, token: &str) -> Result<Vec<GitHubEmail>, IdentityError>;
}

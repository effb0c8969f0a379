use serde::{Deserialize, Serialize};

/// Caller resolved by the authentication gate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Internal user ID
    pub id: String,
    /// Linked GitHub account, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_user_id: Option<i64>,
}

impl AuthenticatedUser {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            github_user_id: None,
        }
    }

    pub fn with_github_user_id(mut self, github_user_id: i64) -> Self {
        self.github_user_id = Some(github_user_id);
        self
    }
}

/// Profile data synchronized from the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    pub github_user_id: i64,
    pub username: String,
    /// Verified email addresses only
    pub emails: Vec<String>,
}

//! Current-user request bodies

use serde::{Deserialize, Serialize};

/// Body of `POST /v1/users/me/ping`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingUserRequest {
    pub github_token: String,
}

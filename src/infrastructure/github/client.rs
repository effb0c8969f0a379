//! REST client for the GitHub user endpoints

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::domain::identity::{GitHubEmail, GitHubUser, IdentityError, IdentityProvider};

/// GitHub client configuration (`[github]` section)
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_base_url() -> String {
    "https://api.github.com".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Identity provider backed by the GitHub REST API
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new(config: &GitHubConfig) -> Result<Self, IdentityError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("webstatus-api/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| IdentityError::Request(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, token: &str) -> Result<T, IdentityError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "Calling GitHub API");

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .header(header::ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| IdentityError::Request(e.to_string()))?;

        match response.status() {
            status if status.is_success() => response
                .json::<T>()
                .await
                .map_err(|e| IdentityError::Request(e.to_string())),
            StatusCode::UNAUTHORIZED => Err(IdentityError::Unauthorized),
            status => Err(IdentityError::UnexpectedStatus(status.as_u16())),
        }
    }
}

#[async_trait]
impl IdentityProvider for GitHubClient {
    async fn current_user(&self, token: &str) -> Result<GitHubUser, IdentityError> {
        self.get_json("/user", token).await
    }

    async fn list_emails(&self, token: &str) -> Result<Vec<GitHubEmail>, IdentityError> {
        self.get_json("/user/emails", token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header as header_matcher, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> GitHubClient {
        GitHubClient::new(&GitHubConfig {
            api_base_url: server.uri(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_current_user() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/user"))
            .and(header_matcher("authorization", "Bearer gh-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 1234,
                "login": "octocat",
                "name": "The Octocat"
            })))
            .mount(&server)
            .await;

        let user = client_for(&server).await.current_user("gh-token").await.unwrap();

        assert_eq!(user.id, 1234);
        assert_eq!(user.username, "octocat");
    }

    #[tokio::test]
    async fn test_list_emails() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/user/emails"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"email": "octo@example.com", "verified": true, "primary": true},
                {"email": "old@example.com", "verified": false, "primary": false}
            ])))
            .mount(&server)
            .await;

        let emails = client_for(&server).await.list_emails("gh-token").await.unwrap();

        assert_eq!(emails.len(), 2);
        assert!(emails[0].verified);
        assert!(!emails[1].verified);
    }

    #[tokio::test]
    async fn test_unauthorized() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/user"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let result = client_for(&server).await.current_user("expired").await;
        assert!(matches!(result, Err(IdentityError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_server_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/user/emails"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let result = client_for(&server).await.list_emails("gh-token").await;
        assert!(matches!(result, Err(IdentityError::UnexpectedStatus(502))));
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = GitHubClient::new(&GitHubConfig {
            api_base_url: "https://github.example.com/api/v3/".to_string(),
            timeout_secs: 5,
        })
        .unwrap();

        assert_eq!(client.base_url, "https://github.example.com/api/v3");
    }
}

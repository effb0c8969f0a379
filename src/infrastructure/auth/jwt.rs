//! JWT token issuing and validation

use std::fmt::Debug;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::identity::{AuthError, AuthenticatedUser, Authenticator};

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Linked GitHub account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_user_id: Option<i64>,
    /// Issued at timestamp (Unix epoch)
    pub iat: i64,
    /// Expiration timestamp (Unix epoch)
    pub exp: i64,
}

impl JwtClaims {
    /// Create new claims for a user
    pub fn new(user: &AuthenticatedUser, expiration_hours: u64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours as i64);

        Self {
            sub: user.id.clone(),
            github_user_id: user.github_user_id,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        }
    }

    /// Check if the token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

impl From<JwtClaims> for AuthenticatedUser {
    fn from(claims: JwtClaims) -> Self {
        Self {
            id: claims.sub,
            github_user_id: claims.github_user_id,
        }
    }
}

/// Configuration for JWT authentication (`[auth]` section)
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    /// Secret key for signing tokens
    pub jwt_secret: String,
    /// Token expiration time in hours
    #[serde(default = "default_expiration_hours")]
    pub expiration_hours: u64,
}

fn default_expiration_hours() -> u64 {
    24
}

impl JwtConfig {
    /// Create new JWT configuration
    pub fn new(secret: impl Into<String>, expiration_hours: u64) -> Self {
        Self {
            jwt_secret: secret.into(),
            expiration_hours,
        }
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "change-me-in-production".to_string(),
            expiration_hours: default_expiration_hours(),
        }
    }
}

/// Authenticator validating HS256 bearer tokens
#[derive(Clone)]
pub struct JwtAuthenticator {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Debug for JwtAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtAuthenticator")
            .field("expiration_hours", &self.config.expiration_hours)
            .field("encoding_key", &"[hidden]")
            .field("decoding_key", &"[hidden]")
            .finish()
    }
}

impl JwtAuthenticator {
    /// Create a new authenticator with the given configuration
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Issue a token for a user
    pub fn issue(&self, user: &AuthenticatedUser) -> Result<String, AuthError> {
        let claims = JwtClaims::new(user, self.config.expiration_hours);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::InvalidToken(format!("failed to sign token: {}", e)))
    }

    /// Validate a token and return its claims
    pub fn validate(&self, token: &str) -> Result<JwtClaims, AuthError> {
        let validation = Validation::default();

        decode::<JwtClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::Expired,
                _ => AuthError::InvalidToken(e.to_string()),
            })
    }
}

#[async_trait]
impl Authenticator for JwtAuthenticator {
    async fn authenticate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        self.validate(token).map(AuthenticatedUser::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_authenticator() -> JwtAuthenticator {
        JwtAuthenticator::new(JwtConfig::new("test-secret-key-12345", 24))
    }

    #[tokio::test]
    async fn test_issue_and_authenticate() {
        let auth = create_authenticator();
        let user = AuthenticatedUser::new("user-1").with_github_user_id(42);

        let token = auth.issue(&user).unwrap();
        assert!(!token.is_empty());

        let resolved = auth.authenticate(&token).await.unwrap();
        assert_eq!(resolved, user);
    }

    #[test]
    fn test_claims_not_expired() {
        let auth = create_authenticator();
        let token = auth.issue(&AuthenticatedUser::new("user-1")).unwrap();

        let claims = auth.validate(&token).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert!(claims.github_user_id.is_none());
        assert!(!claims.is_expired());
    }

    #[tokio::test]
    async fn test_invalid_token() {
        let auth = create_authenticator();

        let result = auth.authenticate("invalid-token").await;
        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn test_wrong_secret() {
        let issuer = JwtAuthenticator::new(JwtConfig::new("secret-1", 24));
        let verifier = JwtAuthenticator::new(JwtConfig::new("secret-2", 24));

        let token = issuer.issue(&AuthenticatedUser::new("user-1")).unwrap();

        assert!(verifier.validate(&token).is_err());
    }

    #[test]
    fn test_expired_token() {
        let auth = create_authenticator();
        let claims = JwtClaims {
            sub: "user-1".to_string(),
            github_user_id: None,
            iat: Utc::now().timestamp() - 7200,
            exp: Utc::now().timestamp() - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("test-secret-key-12345".as_bytes()),
        )
        .unwrap();

        assert_eq!(auth.validate(&token).unwrap_err(), AuthError::Expired);
    }
}

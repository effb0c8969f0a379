//! Backend error classification
//!
//! Every handler funnels backend failures through [`classify`] so that the
//! mapping from sentinel errors to response kinds lives in one place.

use tracing::error;

use super::backend::BackendError;
use super::DomainError;

pub const MAX_BOOKMARKS_MESSAGE: &str =
    "user has reached the maximum number of allowed bookmarks";

/// What the failing request was doing, used to build response messages
#[derive(Debug, Clone, Copy)]
pub struct ErrorContext<'a> {
    /// Entity the operation acts on, e.g. "subscription"
    pub resource: &'a str,
    /// Verb phrase for internal failures, e.g. "delete subscription"
    pub action: &'a str,
    pub page_token: Option<&'a str>,
}

impl<'a> ErrorContext<'a> {
    pub const fn new(resource: &'a str, action: &'a str) -> Self {
        Self {
            resource,
            action,
            page_token: None,
        }
    }

    pub fn with_page_token(mut self, page_token: Option<&'a str>) -> Self {
        self.page_token = page_token;
        self
    }
}

/// Maps a backend error to exactly one domain error
///
/// Unrecognized errors are logged here and replaced by a generic message so the
/// cause never reaches the caller.
pub fn classify(err: &BackendError, ctx: &ErrorContext<'_>) -> DomainError {
    match err {
        BackendError::EntityDoesNotExist => {
            DomainError::not_found(format!("{} not found", ctx.resource))
        }
        BackendError::UserNotAuthorizedForAction => DomainError::forbidden("forbidden"),
        BackendError::UserMaxBookmarks => DomainError::quota_exceeded(MAX_BOOKMARKS_MESSAGE),
        BackendError::InvalidPageToken => {
            error!(page_token = ?ctx.page_token, action = ctx.action, "invalid page token");
            match ctx.page_token {
                Some(token) => DomainError::invalid_input(format!("invalid page token: {}", token)),
                None => DomainError::invalid_input("invalid page token"),
            }
        }
        BackendError::Other(cause) => {
            error!(error = ?cause, action = ctx.action, "backend call failed");
            DomainError::internal(format!("unable to {}", ctx.action))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CTX: ErrorContext<'static> = ErrorContext::new("subscription", "delete subscription");

    #[test]
    fn test_not_found() {
        let err = classify(&BackendError::EntityDoesNotExist, &CTX);
        assert_eq!(err, DomainError::not_found("subscription not found"));
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_forbidden() {
        let err = classify(&BackendError::UserNotAuthorizedForAction, &CTX);
        assert_eq!(err.status_code(), 403);
        assert!(matches!(err, DomainError::Forbidden { .. }));
    }

    #[test]
    fn test_max_bookmarks() {
        let err = classify(&BackendError::UserMaxBookmarks, &CTX);
        assert_eq!(err, DomainError::quota_exceeded(MAX_BOOKMARKS_MESSAGE));
        assert_eq!(err.status_code(), 403);
    }

    #[test]
    fn test_invalid_page_token_names_token() {
        let ctx = CTX.with_page_token(Some("bm90LWEtdG9rZW4"));
        let err = classify(&BackendError::InvalidPageToken, &ctx);

        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "invalid page token: bm90LWEtdG9rZW4");
    }

    #[test]
    fn test_invalid_page_token_without_token() {
        let err = classify(&BackendError::InvalidPageToken, &CTX);
        assert_eq!(err, DomainError::invalid_input("invalid page token"));
    }

    #[test]
    fn test_unclassified_error_is_hidden() {
        let err = classify(&BackendError::other("spanner: session pool exhausted"), &CTX);

        assert_eq!(err.status_code(), 500);
        assert_eq!(err.message(), "unable to delete subscription");
        assert!(!err.to_string().contains("spanner"));
    }
}

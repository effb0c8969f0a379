//! Errors returned by the storage backend

use thiserror::Error;

/// Backend failures
///
/// The unit variants are sentinels the handlers recognize; everything else is
/// wrapped in `Other` and treated as an internal failure.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("entity does not exist")]
    EntityDoesNotExist,

    #[error("user not authorized for action")]
    UserNotAuthorizedForAction,

    #[error("invalid page token")]
    InvalidPageToken,

    #[error("user has reached the maximum number of bookmarks")]
    UserMaxBookmarks,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BackendError {
    pub fn other(message: impl std::fmt::Display) -> Self {
        Self::Other(anyhow::anyhow!("{}", message))
    }
}

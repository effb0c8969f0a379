use thiserror::Error;

/// Domain error kinds surfaced to API callers
///
/// Values are produced by the error classifier from backend errors; each kind
/// carries the message that ends up in the response body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Quota exceeded: {message}")]
    QuotaExceeded { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn quota_exceeded(message: impl Into<String>) -> Self {
        Self::QuotaExceeded {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Message intended for the response body
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound { message }
            | Self::Forbidden { message }
            | Self::InvalidInput { message }
            | Self::QuotaExceeded { message }
            | Self::Internal { message } => message,
        }
    }

    /// Conventional HTTP status code for the error kind
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Forbidden { .. } => 403,
            Self::InvalidInput { .. } => 400,
            Self::QuotaExceeded { .. } => 403,
            Self::Internal { .. } => 500,
        }
    }
}

pub mod backend;
pub mod cache;
pub mod classifier;
pub mod error;
pub mod identity;
pub mod model;
pub mod query;

pub use backend::{BackendError, WebStatusBackend};
pub use classifier::{classify, ErrorContext};
pub use error::DomainError;
pub use identity::{AuthenticatedUser, Authenticator, IdentityProvider};

//! Caller identity - authentication gate and external identity provider

mod authenticator;
mod provider;
mod user;

pub use authenticator::{AuthError, Authenticator};
pub use provider::{GitHubEmail, GitHubUser, IdentityError, IdentityProvider};
pub use user::{AuthenticatedUser, UserProfile};

#[cfg(test)]
pub use authenticator::MockAuthenticator;
#[cfg(test)]
pub use provider::MockIdentityProvider;

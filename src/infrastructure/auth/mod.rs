//! Authentication infrastructure module
//!
//! Bearer tokens are HS256 JWTs carrying the internal user ID and, once the
//! account is linked, the GitHub user ID.

mod jwt;

pub use jwt::{JwtAuthenticator, JwtClaims, JwtConfig};

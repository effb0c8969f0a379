//! Infrastructure layer - concrete collaborators behind the domain traits

pub mod auth;
pub mod backend;
pub mod cache;
pub mod github;
pub mod logging;
pub mod observability;

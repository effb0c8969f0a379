//! GitHub identity provider client

mod client;

pub use client::{GitHubClient, GitHubConfig};

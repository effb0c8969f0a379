//! Web platform status API
//!
//! HTTP handlers for feature search, WPT metric time series, saved searches,
//! bookmarks and subscriptions, with a per-operation response cache in front
//! of the deterministic read endpoints.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use anyhow::Context;
use api::state::{AppState, OperationCaches};
use domain::cache::OperationKeyGenerator;
use domain::query::SimpleQueryParser;
use infrastructure::{
    auth::JwtAuthenticator,
    backend::{InMemoryBackend, SeedData},
    cache::CacheFactory,
    github::GitHubClient,
};
use tracing::info;

/// Create the application state from configuration
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let store = CacheFactory::new()
        .create(&config.cache)
        .await
        .context("failed to create response cache store")?;
    let caches = OperationCaches::new(store, OperationKeyGenerator::new(&config.cache.namespace));

    let backend = InMemoryBackend::new(config.backend.clone());
    if let Some(path) = &config.backend.seed_file {
        let seed = SeedData::load(path).await?;
        info!(
            features = seed.features.len(),
            path = %path.display(),
            "Seeding in-memory backend"
        );
        backend.seed(seed).await;
    }

    let identity_provider =
        GitHubClient::new(&config.github).context("failed to build GitHub client")?;

    Ok(AppState::new(
        Arc::new(backend),
        caches,
        Arc::new(JwtAuthenticator::new(config.auth.clone())),
        Arc::new(identity_provider),
        Arc::new(SimpleQueryParser::new()),
    ))
}

//! Cache factory for runtime selection

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use tracing::info;

use crate::domain::cache::{CacheError, RawCache};

use super::in_memory::{InMemoryCache, InMemoryCacheConfig};
use super::redis::{RedisCache, RedisCacheConfig};

/// Supported cache types
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheType {
    /// In-memory cache using moka
    #[default]
    #[serde(alias = "inmemory", alias = "memory")]
    InMemory,
    /// Redis cache
    Redis,
}

impl std::fmt::Display for CacheType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheType::InMemory => write!(f, "in_memory"),
            CacheType::Redis => write!(f, "redis"),
        }
    }
}

/// Response cache configuration (`[cache]` section)
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Type of store backing the operation caches
    #[serde(default)]
    pub backend: CacheType,
    /// Redis URL (required for Redis type)
    #[serde(default)]
    pub redis_url: Option<String>,
    /// Prefix of every cache key
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Store-level TTL in seconds; unset means entries live until evicted
    #[serde(default)]
    pub ttl_secs: Option<u64>,
    /// Maximum number of entries (in-memory only)
    #[serde(default = "default_max_capacity")]
    pub max_capacity: u64,
}

fn default_namespace() -> String {
    "webstatus".to_string()
}

fn default_max_capacity() -> u64 {
    10_000
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: CacheType::InMemory,
            redis_url: None,
            namespace: default_namespace(),
            ttl_secs: None,
            max_capacity: default_max_capacity(),
        }
    }
}

impl CacheConfig {
    /// Creates a new configuration for in-memory cache
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Creates a new configuration for Redis cache
    pub fn redis(url: impl Into<String>) -> Self {
        Self {
            backend: CacheType::Redis,
            redis_url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Sets the store-level TTL
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl_secs = Some(ttl.as_secs());
        self
    }

    /// Sets the maximum capacity (in-memory only)
    pub fn with_max_capacity(mut self, capacity: u64) -> Self {
        self.max_capacity = capacity;
        self
    }

    pub fn ttl(&self) -> Option<Duration> {
        self.ttl_secs.map(Duration::from_secs)
    }
}

/// Factory for creating cache instances
#[derive(Debug, Default)]
pub struct CacheFactory;

impl CacheFactory {
    /// Creates a new cache factory
    pub fn new() -> Self {
        Self
    }

    /// Creates a store based on configuration
    pub async fn create(&self, config: &CacheConfig) -> Result<Arc<dyn RawCache>, CacheError> {
        info!(backend = %config.backend, ttl_secs = ?config.ttl_secs, "Creating response cache store");

        match config.backend {
            CacheType::InMemory => {
                let mut in_memory_config =
                    InMemoryCacheConfig::default().with_max_capacity(config.max_capacity);

                if let Some(ttl) = config.ttl() {
                    in_memory_config = in_memory_config.with_time_to_live(ttl);
                }

                Ok(Arc::new(InMemoryCache::with_config(in_memory_config)))
            }
            CacheType::Redis => {
                let url = config.redis_url.clone().ok_or_else(|| {
                    CacheError::configuration("Redis URL is required for Redis cache type")
                })?;

                let mut redis_config = RedisCacheConfig::new(url);

                if let Some(ttl) = config.ttl() {
                    redis_config = redis_config.with_time_to_live(ttl);
                }

                Ok(Arc::new(RedisCache::new(redis_config).await?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_type_deserialization() {
        let parse = |s: &str| serde_json::from_str::<CacheType>(&format!("\"{}\"", s));

        assert_eq!(parse("in_memory").unwrap(), CacheType::InMemory);
        assert_eq!(parse("memory").unwrap(), CacheType::InMemory);
        assert_eq!(parse("redis").unwrap(), CacheType::Redis);
        assert!(parse("memcached").is_err());
    }

    #[test]
    fn test_cache_config_defaults() {
        let config: CacheConfig = serde_json::from_str("{}").unwrap();

        assert_eq!(config.backend, CacheType::InMemory);
        assert_eq!(config.namespace, "webstatus");
        assert_eq!(config.ttl(), None);
        assert_eq!(config.max_capacity, 10_000);
    }

    #[test]
    fn test_cache_config_redis() {
        let config = CacheConfig::redis("redis://localhost:6379").with_ttl(Duration::from_secs(600));

        assert_eq!(config.backend, CacheType::Redis);
        assert_eq!(config.redis_url, Some("redis://localhost:6379".to_string()));
        assert_eq!(config.ttl(), Some(Duration::from_secs(600)));
    }

    #[tokio::test]
    async fn test_factory_create_in_memory() {
        let factory = CacheFactory::new();
        let config = CacheConfig::in_memory().with_max_capacity(10);

        let cache = factory.create(&config).await.unwrap();

        cache.set("test", b"value").await.unwrap();
        assert_eq!(cache.get("test").await.unwrap(), Some(b"value".to_vec()));
    }

    #[tokio::test]
    async fn test_factory_create_redis_missing_url() {
        let factory = CacheFactory::new();
        let config = CacheConfig {
            backend: CacheType::Redis,
            redis_url: None,
            ..Default::default()
        };

        let result = factory.create(&config).await;
        assert!(matches!(result, Err(CacheError::Configuration(_))));
    }

    #[test]
    fn test_cache_type_display() {
        assert_eq!(CacheType::InMemory.to_string(), "in_memory");
        assert_eq!(CacheType::Redis.to_string(), "redis");
    }
}

//! In-memory cache implementation using moka

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache as MokaCache;

use crate::domain::cache::{CacheError, RawCache};

/// Configuration for in-memory cache
#[derive(Debug, Clone)]
pub struct InMemoryCacheConfig {
    /// Maximum number of entries
    pub max_capacity: u64,
    /// Store-level expiry; `None` keeps entries until evicted by capacity
    pub time_to_live: Option<Duration>,
}

impl Default for InMemoryCacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: 10_000,
            time_to_live: None,
        }
    }
}

impl InMemoryCacheConfig {
    /// Creates a new configuration with specified max capacity
    pub fn with_max_capacity(mut self, capacity: u64) -> Self {
        self.max_capacity = capacity;
        self
    }

    /// Sets the store-level TTL
    pub fn with_time_to_live(mut self, ttl: Duration) -> Self {
        self.time_to_live = Some(ttl);
        self
    }
}

/// Thread-safe in-memory byte store backed by moka
///
/// Eviction is size-bounded (TinyLFU) with an optional TTL.
#[derive(Debug)]
pub struct InMemoryCache {
    cache: MokaCache<String, Arc<[u8]>>,
    config: InMemoryCacheConfig,
}

impl InMemoryCache {
    /// Creates a new in-memory cache with default configuration
    pub fn new() -> Self {
        Self::with_config(InMemoryCacheConfig::default())
    }

    /// Creates a new in-memory cache with the given configuration
    pub fn with_config(config: InMemoryCacheConfig) -> Self {
        let mut builder = MokaCache::builder().max_capacity(config.max_capacity);

        if let Some(ttl) = config.time_to_live {
            builder = builder.time_to_live(ttl);
        }

        Self {
            cache: builder.build(),
            config,
        }
    }

    pub fn config(&self) -> &InMemoryCacheConfig {
        &self.config
    }

    /// Approximate entry count after pending maintenance has run
    pub async fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RawCache for InMemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Ok(self.cache.get(key).await.map(|bytes| bytes.to_vec()))
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        self.cache.insert(key.to_string(), Arc::from(value)).await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.cache.remove(key).await.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let cache = InMemoryCache::new();

        cache.set("key1", b"value1").await.unwrap();

        let result = cache.get("key1").await.unwrap();
        assert_eq!(result, Some(b"value1".to_vec()));
    }

    #[tokio::test]
    async fn test_get_missing() {
        let cache = InMemoryCache::new();

        let result = cache.get("missing").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_overwrite() {
        let cache = InMemoryCache::new();

        cache.set("key1", b"first").await.unwrap();
        cache.set("key1", b"second").await.unwrap();

        assert_eq!(cache.get("key1").await.unwrap(), Some(b"second".to_vec()));
    }

    #[tokio::test]
    async fn test_delete() {
        let cache = InMemoryCache::new();

        cache.set("key1", b"value1").await.unwrap();

        assert!(cache.delete("key1").await.unwrap());
        assert!(!cache.delete("key1").await.unwrap());
        assert!(cache.get("key1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_no_expiry_by_default() {
        let cache = InMemoryCache::new();
        assert!(cache.config().time_to_live.is_none());

        cache.set("key1", b"value1").await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(cache.get("key1").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_store_ttl_expiration() {
        let cache = InMemoryCache::with_config(
            InMemoryCacheConfig::default().with_time_to_live(Duration::from_millis(50)),
        );

        cache.set("key1", b"value1").await.unwrap();
        assert!(cache.get("key1").await.unwrap().is_some());

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert!(cache.get("key1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_entry_count() {
        let cache = InMemoryCache::new();

        cache.set("key1", b"a").await.unwrap();
        cache.set("key2", b"b").await.unwrap();

        assert_eq!(cache.entry_count().await, 2);
    }

    #[tokio::test]
    async fn test_concurrent_writers_same_key() {
        let cache = Arc::new(InMemoryCache::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = cache.clone();
                tokio::spawn(async move { cache.set("shared", b"same-content").await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(
            cache.get("shared").await.unwrap(),
            Some(b"same-content".to_vec())
        );
    }

    #[test]
    fn test_config() {
        let config = InMemoryCacheConfig::default()
            .with_max_capacity(100)
            .with_time_to_live(Duration::from_secs(300));

        let cache = InMemoryCache::with_config(config);

        assert_eq!(cache.config().max_capacity, 100);
        assert_eq!(cache.config().time_to_live, Some(Duration::from_secs(300)));
    }
}

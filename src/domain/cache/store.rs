//! Raw byte cache store trait

use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache backend error: {0}")]
    Backend(String),

    #[error("cache serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("cache configuration error: {0}")]
    Configuration(String),
}

impl CacheError {
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Byte-oriented key-value store shared by all operation caches
///
/// Entries never expire through this interface; stores may apply their own
/// eviction or TTL. Implementations must tolerate concurrent access.
#[async_trait]
pub trait RawCache: Send + Sync + Debug {
    /// Gets the stored bytes for a key
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Stores bytes under a key, replacing any previous value
    async fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError>;

    /// Removes a key, returning whether it was present
    async fn delete(&self, key: &str) -> Result<bool, CacheError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Mock store that records calls and can be told to fail
    #[derive(Debug, Default)]
    pub struct MockRawCache {
        entries: Mutex<HashMap<String, Vec<u8>>>,
        read_error: Option<String>,
        write_error: Option<String>,
        gets: AtomicUsize,
        sets: AtomicUsize,
    }

    impl MockRawCache {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_entry(self, key: &str, value: &[u8]) -> Self {
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_vec());
            self
        }

        pub fn with_read_error(mut self, error: impl Into<String>) -> Self {
            self.read_error = Some(error.into());
            self
        }

        pub fn with_write_error(mut self, error: impl Into<String>) -> Self {
            self.write_error = Some(error.into());
            self
        }

        pub fn get_calls(&self) -> usize {
            self.gets.load(Ordering::SeqCst)
        }

        pub fn set_calls(&self) -> usize {
            self.sets.load(Ordering::SeqCst)
        }

        pub fn len(&self) -> usize {
            self.entries.lock().unwrap().len()
        }

        pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
            self.entries.lock().unwrap().get(key).cloned()
        }
    }

    #[async_trait]
    impl RawCache for MockRawCache {
        async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
            self.gets.fetch_add(1, Ordering::SeqCst);

            if let Some(error) = &self.read_error {
                return Err(CacheError::backend(error.clone()));
            }

            Ok(self.entries.lock().unwrap().get(key).cloned())
        }

        async fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
            self.sets.fetch_add(1, Ordering::SeqCst);

            if let Some(error) = &self.write_error {
                return Err(CacheError::backend(error.clone()));
            }

            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_vec());
            Ok(())
        }

        async fn delete(&self, key: &str) -> Result<bool, CacheError> {
            if let Some(error) = &self.write_error {
                return Err(CacheError::backend(error.clone()));
            }

            Ok(self.entries.lock().unwrap().remove(key).is_some())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_set_get() {
            let cache = MockRawCache::new();
            cache.set("key1", b"value1").await.unwrap();

            assert_eq!(cache.get("key1").await.unwrap(), Some(b"value1".to_vec()));
            assert_eq!(cache.get_calls(), 1);
            assert_eq!(cache.set_calls(), 1);
        }

        #[tokio::test]
        async fn test_mock_with_errors() {
            let cache = MockRawCache::new()
                .with_read_error("down")
                .with_write_error("down");

            assert!(cache.get("key").await.is_err());
            assert!(cache.set("key", b"v").await.is_err());
            assert_eq!(cache.len(), 0);
        }

        #[tokio::test]
        async fn test_mock_delete() {
            let cache = MockRawCache::new().with_entry("key1", b"v");

            assert!(cache.delete("key1").await.unwrap());
            assert!(!cache.delete("key1").await.unwrap());
        }
    }
}

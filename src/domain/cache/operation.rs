//! Per-operation response cache

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use metrics::counter;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use super::{OperationKeyGenerator, RawCache};

/// Outcome of a cache interaction, exported as a metric label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheEvent {
    Hit,
    Miss,
    LookupError,
    DecodeError,
    Stored,
    StoreError,
}

impl CacheEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Miss => "miss",
            Self::LookupError => "lookup_error",
            Self::DecodeError => "decode_error",
            Self::Stored => "stored",
            Self::StoreError => "store_error",
        }
    }
}

/// Response cache for a single API operation
///
/// Stores the JSON form of `Resp` under a key derived from the operation name
/// and the full `Req` value. Store and serialization faults are logged and
/// counted, then treated as a miss (lookup) or ignored (population), so the
/// cache can never fail a request.
pub struct OperationCache<Req, Resp> {
    operation: &'static str,
    store: Arc<dyn RawCache>,
    keys: OperationKeyGenerator,
    _types: PhantomData<fn(&Req) -> Resp>,
}

impl<Req, Resp> Clone for OperationCache<Req, Resp> {
    fn clone(&self) -> Self {
        Self {
            operation: self.operation,
            store: self.store.clone(),
            keys: self.keys.clone(),
            _types: PhantomData,
        }
    }
}

impl<Req, Resp> fmt::Debug for OperationCache<Req, Resp> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationCache")
            .field("operation", &self.operation)
            .field("namespace", &self.keys.namespace())
            .finish()
    }
}

impl<Req, Resp> OperationCache<Req, Resp>
where
    Req: Serialize,
    Resp: Serialize + DeserializeOwned,
{
    pub fn new(operation: &'static str, store: Arc<dyn RawCache>, keys: OperationKeyGenerator) -> Self {
        Self {
            operation,
            store,
            keys,
            _types: PhantomData,
        }
    }

    /// Key under which the response to `request` is stored
    pub fn key(&self, request: &Req) -> Option<String> {
        match self.keys.generate(self.operation, request) {
            Ok(key) => Some(key),
            Err(e) => {
                warn!(operation = self.operation, error = %e, "failed to derive cache key");
                None
            }
        }
    }

    /// Returns the cached response for `request`, if any
    pub async fn lookup(&self, request: &Req) -> Option<Resp> {
        let Some(key) = self.key(request) else {
            self.record(CacheEvent::LookupError);
            return None;
        };

        let bytes = match self.store.get(&key).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                self.record(CacheEvent::Miss);
                return None;
            }
            Err(e) => {
                warn!(operation = self.operation, error = %e, "cache lookup failed");
                self.record(CacheEvent::LookupError);
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(response) => {
                debug!(operation = self.operation, "cache hit");
                self.record(CacheEvent::Hit);
                Some(response)
            }
            Err(e) => {
                warn!(operation = self.operation, error = %e, "cached response could not be decoded");
                self.record(CacheEvent::DecodeError);
                None
            }
        }
    }

    /// Stores `response` as the answer to `request`
    ///
    /// Concurrent calls for the same request race with last-write-wins; they
    /// carry identical content.
    pub async fn attempt_cache(&self, request: &Req, response: &Resp) {
        let Some(key) = self.key(request) else {
            self.record(CacheEvent::StoreError);
            return;
        };

        let bytes = match serde_json::to_vec(response) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(operation = self.operation, error = %e, "failed to serialize response for cache");
                self.record(CacheEvent::StoreError);
                return;
            }
        };

        match self.store.set(&key, &bytes).await {
            Ok(()) => {
                debug!(operation = self.operation, bytes = bytes.len(), "response cached");
                self.record(CacheEvent::Stored);
            }
            Err(e) => {
                warn!(operation = self.operation, error = %e, "failed to cache response");
                self.record(CacheEvent::StoreError);
            }
        }
    }

    fn record(&self, event: CacheEvent) {
        counter!(
            "operation_cache_events_total",
            "operation" => self.operation,
            "event" => event.as_str()
        )
        .increment(1);
    }
}

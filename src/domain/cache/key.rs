//! Cache key derivation

use serde::Serialize;
use sha2::{Digest, Sha256};

use super::CacheError;

/// Derives deterministic keys from an operation name and its request
///
/// The request is first converted to a `serde_json::Value`, whose objects keep
/// their keys sorted, so two equal requests always produce the same text no
/// matter how their maps were built. The text is hashed to keep keys short.
#[derive(Debug, Clone, Default)]
pub struct OperationKeyGenerator {
    namespace: String,
}

impl OperationKeyGenerator {
    /// Creates a generator that prefixes every key with `namespace`
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Canonical JSON text of a request
    pub fn canonical_json<T: Serialize>(request: &T) -> Result<String, CacheError> {
        let value = serde_json::to_value(request)?;
        Ok(serde_json::to_string(&value)?)
    }

    /// Generates the full key for `request` under `operation`
    pub fn generate<T: Serialize>(&self, operation: &str, request: &T) -> Result<String, CacheError> {
        let canonical = Self::canonical_json(request)?;
        let digest = hex::encode(Sha256::digest(canonical.as_bytes()));

        if self.namespace.is_empty() {
            Ok(format!("{}:{}", operation, digest))
        } else {
            Ok(format!("{}:{}:{}", self.namespace, operation, digest))
        }
    }
}

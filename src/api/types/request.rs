//! Cache key shape for cached operations

use serde::Serialize;

/// Path parameters and normalized query of one request
///
/// Cached handlers key their responses on this value. The query half holds
/// arguments after defaults are applied, so an omitted page size and an
/// explicit default share a cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationRequest<P, Q> {
    pub path: P,
    pub query: Q,
}

impl<P, Q> OperationRequest<P, Q> {
    pub fn new(path: P, query: Q) -> Self {
        Self { path, query }
    }
}

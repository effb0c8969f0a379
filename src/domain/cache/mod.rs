//! Cache domain - per-operation response caching over a shared byte store

mod key;
mod operation;
mod store;

pub use key::OperationKeyGenerator;
pub use operation::{CacheEvent, OperationCache};
pub use store::{CacheError, RawCache};

#[cfg(test)]
pub use store::mock::MockRawCache;

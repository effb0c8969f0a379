//! Storage backend implementations

mod in_memory;
mod pagination;
mod seed;

pub use in_memory::{BackendConfig, InMemoryBackend};
pub use pagination::{decode_page_token, encode_page_token, paginate};
pub use seed::{SeedData, SeriesRuns};

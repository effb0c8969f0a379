//! Storage backend collaborator - the interface handlers call into

mod error;
mod params;
mod repository;

pub use error::BackendError;
pub use params::{MetricsRange, SearchFeaturesParams, WptSeries};
pub use repository::WebStatusBackend;

#[cfg(test)]
pub use repository::MockWebStatusBackend;

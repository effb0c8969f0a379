//! Request and response types shared by the v1 handlers

pub mod error;
pub mod features;
pub mod json;
pub mod pagination;
pub mod query;
pub mod request;
pub mod stats;
pub mod user;

pub use error::{ApiError, ApiErrorResponse};
pub use features::{GetFeatureQuery, GetFeatureRequest, SearchFeaturesQuery};
pub use json::Json;
pub use pagination::{normalize_page_size, PaginationQuery, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use query::{Path, Query};
pub use request::OperationRequest;
pub use stats::{
    AggregatedWptMetricsRequest, BrowserFeatureCountsRequest, FeatureWptMetricsRequest,
    FeatureWptSeriesPath, MetricsQuery, WptSeriesPath,
};
pub use user::PingUserRequest;

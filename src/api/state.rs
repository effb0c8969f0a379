//! Application state for shared collaborators

use std::sync::Arc;

use crate::api::types::{
    AggregatedWptMetricsRequest, BrowserFeatureCountsRequest, FeatureWptMetricsRequest,
    GetFeatureRequest,
};
use crate::domain::backend::SearchFeaturesParams;
use crate::domain::cache::{OperationCache, OperationKeyGenerator, RawCache};
use crate::domain::model::{BrowserReleaseFeatureMetric, Feature, Page, WptRunMetric};
use crate::domain::query::QueryParser;
use crate::domain::{Authenticator, IdentityProvider, WebStatusBackend};

/// One response cache per cacheable operation, all over the same store
#[derive(Debug, Clone)]
pub struct OperationCaches {
    pub search_features: OperationCache<SearchFeaturesParams, Page<Feature>>,
    pub get_feature: OperationCache<GetFeatureRequest, Feature>,
    pub list_feature_wpt_metrics: OperationCache<FeatureWptMetricsRequest, Page<WptRunMetric>>,
    pub list_aggregated_wpt_metrics:
        OperationCache<AggregatedWptMetricsRequest, Page<WptRunMetric>>,
    pub list_browser_feature_counts:
        OperationCache<BrowserFeatureCountsRequest, Page<BrowserReleaseFeatureMetric>>,
}

impl OperationCaches {
    pub fn new(store: Arc<dyn RawCache>, keys: OperationKeyGenerator) -> Self {
        Self {
            search_features: OperationCache::new("search_features", store.clone(), keys.clone()),
            get_feature: OperationCache::new("get_feature", store.clone(), keys.clone()),
            list_feature_wpt_metrics: OperationCache::new(
                "list_feature_wpt_metrics",
                store.clone(),
                keys.clone(),
            ),
            list_aggregated_wpt_metrics: OperationCache::new(
                "list_aggregated_wpt_metrics",
                store.clone(),
                keys.clone(),
            ),
            list_browser_feature_counts: OperationCache::new(
                "list_browser_feature_counts",
                store,
                keys,
            ),
        }
    }
}

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn WebStatusBackend>,
    pub caches: OperationCaches,
    pub authenticator: Arc<dyn Authenticator>,
    pub identity_provider: Arc<dyn IdentityProvider>,
    pub query_parser: Arc<dyn QueryParser>,
}

impl AppState {
    pub fn new(
        backend: Arc<dyn WebStatusBackend>,
        caches: OperationCaches,
        authenticator: Arc<dyn Authenticator>,
        identity_provider: Arc<dyn IdentityProvider>,
        query_parser: Arc<dyn QueryParser>,
    ) -> Self {
        Self {
            backend,
            caches,
            authenticator,
            identity_provider,
            query_parser,
        }
    }
}

//! Backend trait definition

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::{BackendError, MetricsRange, SearchFeaturesParams, WptSeries};
use crate::domain::identity::UserProfile;
use crate::domain::model::{
    BrowserReleaseFeatureMetric, Feature, NewSavedSearch, Page, SavedSearch, SavedSearchUpdate,
    WptMetricView, WptRunMetric,
};

/// Storage operations backing the API, one method per operation
///
/// Arguments are already validated and defaulted by the handler.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WebStatusBackend: Send + Sync {
    /// Searches features matching the parsed query
    async fn search_features(
        &self,
        params: &SearchFeaturesParams,
    ) -> Result<Page<Feature>, BackendError>;

    /// Fetches a single feature
    async fn get_feature(
        &self,
        feature_id: &str,
        metric_view: WptMetricView,
    ) -> Result<Feature, BackendError>;

    /// Lists WPT run metrics for one feature
    async fn list_feature_wpt_metrics(
        &self,
        feature_id: &str,
        series: &WptSeries,
        range: &MetricsRange,
    ) -> Result<Page<WptRunMetric>, BackendError>;

    /// Lists WPT run metrics aggregated over all features
    async fn list_aggregated_wpt_metrics(
        &self,
        series: &WptSeries,
        range: &MetricsRange,
    ) -> Result<Page<WptRunMetric>, BackendError>;

    /// Lists how many features a browser supported per release
    async fn list_browser_feature_counts(
        &self,
        browser: &str,
        range: &MetricsRange,
    ) -> Result<Page<BrowserReleaseFeatureMetric>, BackendError>;

    /// Fetches a saved search; `viewer` adds bookmark and permission details
    async fn get_saved_search(
        &self,
        search_id: &str,
        viewer: Option<String>,
    ) -> Result<SavedSearch, BackendError>;

    /// Lists the saved searches owned or bookmarked by a user
    async fn list_user_saved_searches(
        &self,
        user_id: &str,
        page_token: Option<String>,
        page_size: u32,
    ) -> Result<Page<SavedSearch>, BackendError>;

    async fn create_saved_search(
        &self,
        user_id: &str,
        search: NewSavedSearch,
    ) -> Result<SavedSearch, BackendError>;

    async fn update_saved_search(
        &self,
        search_id: &str,
        user_id: &str,
        update: SavedSearchUpdate,
    ) -> Result<SavedSearch, BackendError>;

    async fn delete_saved_search(&self, search_id: &str, user_id: &str)
        -> Result<(), BackendError>;

    async fn put_bookmark(&self, search_id: &str, user_id: &str) -> Result<(), BackendError>;

    async fn remove_bookmark(&self, search_id: &str, user_id: &str) -> Result<(), BackendError>;

    async fn delete_subscription(
        &self,
        subscription_id: &str,
        user_id: &str,
    ) -> Result<(), BackendError>;

    /// Stores the latest identity-provider profile of a user
    async fn sync_user_profile(&self, profile: UserProfile) -> Result<(), BackendError>;
}

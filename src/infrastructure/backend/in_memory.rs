//! In-memory storage backend

use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::pagination::paginate;
use super::seed::SeedData;
use crate::domain::backend::{
    BackendError, MetricsRange, SearchFeaturesParams, WebStatusBackend, WptSeries,
};
use crate::domain::identity::UserProfile;
use crate::domain::model::{
    BookmarkState, BookmarkStatus, BrowserReleaseFeatureMetric, Feature, ImplementationStatus,
    NewSavedSearch, Page, SavedSearch, SavedSearchPermissions, SavedSearchRole, SavedSearchUpdate,
    WptMetricView, WptRunMetric,
};
use crate::domain::query::SearchTerm;

/// Backend settings (`[backend]` section)
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Bookmarks a user may hold, excluding their own searches
    #[serde(default = "default_max_bookmarks")]
    pub max_bookmarks: usize,
    /// JSON file with features and metrics to preload
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
}

fn default_max_bookmarks() -> usize {
    25
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            max_bookmarks: default_max_bookmarks(),
            seed_file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SeriesKey {
    feature_id: Option<String>,
    browser: String,
    channel: String,
    metric_view: WptMetricView,
}

impl SeriesKey {
    fn new(feature_id: Option<&str>, series: &WptSeries) -> Self {
        Self {
            feature_id: feature_id.map(str::to_string),
            browser: series.browser.clone(),
            channel: series.channel.clone(),
            metric_view: series.metric_view,
        }
    }
}

#[derive(Debug, Clone)]
struct StoredSavedSearch {
    search: SavedSearch,
    owner_id: String,
}

#[derive(Debug, Default)]
struct State {
    features: HashMap<String, Feature>,
    wpt_runs: HashMap<SeriesKey, Vec<WptRunMetric>>,
    browser_feature_counts: HashMap<String, Vec<BrowserReleaseFeatureMetric>>,
    saved_searches: HashMap<String, StoredSavedSearch>,
    bookmarks: HashMap<String, BTreeSet<String>>,
    subscriptions: HashMap<String, String>,
    profiles: HashMap<String, UserProfile>,
}

impl State {
    fn view_saved_search(&self, stored: &StoredSavedSearch, viewer: Option<&str>) -> SavedSearch {
        let mut search = stored.search.clone();

        if let Some(user_id) = viewer {
            let bookmarked = self
                .bookmarks
                .get(user_id)
                .is_some_and(|ids| ids.contains(&search.id));

            search.bookmark_status = Some(BookmarkStatus {
                status: if bookmarked {
                    BookmarkState::BookmarkActive
                } else {
                    BookmarkState::BookmarkNone
                },
            });
            search.permissions = Some(SavedSearchPermissions {
                role: (stored.owner_id == user_id).then_some(SavedSearchRole::SavedSearchOwner),
            });
        }

        search
    }

    fn owned_search_mut(
        &mut self,
        search_id: &str,
        user_id: &str,
    ) -> Result<&mut StoredSavedSearch, BackendError> {
        let stored = self
            .saved_searches
            .get_mut(search_id)
            .ok_or(BackendError::EntityDoesNotExist)?;

        if stored.owner_id != user_id {
            return Err(BackendError::UserNotAuthorizedForAction);
        }

        Ok(stored)
    }

    fn bookmark_count(&self, user_id: &str) -> usize {
        self.bookmarks.get(user_id).map_or(0, |ids| {
            ids.iter()
                .filter(|id| {
                    self.saved_searches
                        .get(*id)
                        .is_some_and(|s| s.owner_id != user_id)
                })
                .count()
        })
    }
}

/// Thread-safe in-memory implementation of [`WebStatusBackend`]
#[derive(Debug, Clone)]
pub struct InMemoryBackend {
    state: Arc<RwLock<State>>,
    config: BackendConfig,
}

impl InMemoryBackend {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            state: Arc::new(RwLock::new(State::default())),
            config,
        }
    }

    /// Loads features, metrics and subscriptions from seed data
    pub async fn seed(&self, data: SeedData) {
        let mut state = self.state.write().await;

        for feature in data.features {
            state.features.insert(feature.feature_id.clone(), feature);
        }

        for series in data.wpt_runs {
            let key = SeriesKey {
                feature_id: series.feature_id,
                browser: series.browser,
                channel: series.channel,
                metric_view: series.metric_view,
            };
            state.wpt_runs.entry(key).or_default().extend(series.runs);
        }

        for counts in data.browser_feature_counts {
            state
                .browser_feature_counts
                .entry(counts.browser)
                .or_default()
                .extend(counts.metrics);
        }

        for subscription in data.subscriptions {
            state
                .subscriptions
                .insert(subscription.id, subscription.user_id);
        }
    }

    pub async fn add_feature(&self, feature: Feature) {
        self.state
            .write()
            .await
            .features
            .insert(feature.feature_id.clone(), feature);
    }

    /// Adds WPT runs, scoped to a feature or aggregated when `feature_id` is `None`
    pub async fn add_wpt_runs(&self, feature_id: Option<&str>, series: &WptSeries, runs: Vec<WptRunMetric>) {
        self.state
            .write()
            .await
            .wpt_runs
            .entry(SeriesKey::new(feature_id, series))
            .or_default()
            .extend(runs);
    }

    pub async fn add_browser_feature_counts(&self, browser: &str, metrics: Vec<BrowserReleaseFeatureMetric>) {
        self.state
            .write()
            .await
            .browser_feature_counts
            .entry(browser.to_string())
            .or_default()
            .extend(metrics);
    }

    pub async fn add_subscription(&self, subscription_id: &str, user_id: &str) {
        self.state
            .write()
            .await
            .subscriptions
            .insert(subscription_id.to_string(), user_id.to_string());
    }

    pub async fn user_profile(&self, user_id: &str) -> Option<UserProfile> {
        self.state.read().await.profiles.get(user_id).cloned()
    }

    async fn list_wpt_runs(
        &self,
        key: SeriesKey,
        range: &MetricsRange,
    ) -> Result<Page<WptRunMetric>, BackendError> {
        let state = self.state.read().await;

        let mut runs: Vec<WptRunMetric> = state
            .wpt_runs
            .get(&key)
            .map(|runs| {
                runs.iter()
                    .filter(|run| range.contains(run.run_timestamp.date_naive()))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        runs.sort_by_key(|run| run.run_timestamp);

        let (data, next) = paginate(&runs, range.page_token.as_deref(), range.page_size)?;
        Ok(Page::new(data, next))
    }
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new(BackendConfig::default())
    }
}

fn feature_matches(feature: &Feature, term: &SearchTerm) -> bool {
    let value = term.value.to_lowercase();

    match term.key.as_deref() {
        None => {
            feature.name.to_lowercase().contains(&value)
                || feature.feature_id.to_lowercase().contains(&value)
        }
        Some("id") => feature.feature_id.eq_ignore_ascii_case(&value),
        Some("name") => feature.name.to_lowercase().contains(&value),
        Some("baseline_status") => feature
            .baseline
            .as_ref()
            .is_some_and(|b| b.status.to_string() == value),
        Some("available_on") => feature
            .browser_implementations
            .get(&value)
            .is_some_and(|i| i.status == ImplementationStatus::Available),
        Some(_) => false,
    }
}

fn sort_features(features: &mut [Feature], sort: Option<&str>) {
    match sort {
        Some("name_asc") => features.sort_by(|a, b| a.name.cmp(&b.name)),
        Some("name_desc") => features.sort_by(|a, b| b.name.cmp(&a.name)),
        Some("id_desc") => features.sort_by(|a, b| b.feature_id.cmp(&a.feature_id)),
        _ => features.sort_by(|a, b| a.feature_id.cmp(&b.feature_id)),
    }
}

#[async_trait]
impl WebStatusBackend for InMemoryBackend {
    async fn search_features(
        &self,
        params: &SearchFeaturesParams,
    ) -> Result<Page<Feature>, BackendError> {
        let state = self.state.read().await;

        let mut matched: Vec<Feature> = state
            .features
            .values()
            .filter(|feature| {
                params
                    .search
                    .as_ref()
                    .is_none_or(|node| node.evaluate(&|term: &SearchTerm| feature_matches(feature, term)))
            })
            .cloned()
            .collect();
        sort_features(&mut matched, params.sort.as_deref());

        let total = matched.len() as i64;
        let (data, next) = paginate(&matched, params.page_token.as_deref(), params.page_size)?;

        debug!(total, returned = data.len(), "In-memory feature search");
        Ok(Page::new(data, next).with_total(total))
    }

    async fn get_feature(
        &self,
        feature_id: &str,
        _metric_view: WptMetricView,
    ) -> Result<Feature, BackendError> {
        self.state
            .read()
            .await
            .features
            .get(feature_id)
            .cloned()
            .ok_or(BackendError::EntityDoesNotExist)
    }

    async fn list_feature_wpt_metrics(
        &self,
        feature_id: &str,
        series: &WptSeries,
        range: &MetricsRange,
    ) -> Result<Page<WptRunMetric>, BackendError> {
        self.list_wpt_runs(SeriesKey::new(Some(feature_id), series), range)
            .await
    }

    async fn list_aggregated_wpt_metrics(
        &self,
        series: &WptSeries,
        range: &MetricsRange,
    ) -> Result<Page<WptRunMetric>, BackendError> {
        self.list_wpt_runs(SeriesKey::new(None, series), range).await
    }

    async fn list_browser_feature_counts(
        &self,
        browser: &str,
        range: &MetricsRange,
    ) -> Result<Page<BrowserReleaseFeatureMetric>, BackendError> {
        let state = self.state.read().await;

        let mut metrics: Vec<BrowserReleaseFeatureMetric> = state
            .browser_feature_counts
            .get(browser)
            .map(|metrics| {
                metrics
                    .iter()
                    .filter(|m| range.contains(m.timestamp.date_naive()))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        metrics.sort_by_key(|m| m.timestamp);

        let (data, next) = paginate(&metrics, range.page_token.as_deref(), range.page_size)?;
        Ok(Page::new(data, next))
    }

    async fn get_saved_search(
        &self,
        search_id: &str,
        viewer: Option<String>,
    ) -> Result<SavedSearch, BackendError> {
        let state = self.state.read().await;
        let stored = state
            .saved_searches
            .get(search_id)
            .ok_or(BackendError::EntityDoesNotExist)?;

        Ok(state.view_saved_search(stored, viewer.as_deref()))
    }

    async fn list_user_saved_searches(
        &self,
        user_id: &str,
        page_token: Option<String>,
        page_size: u32,
    ) -> Result<Page<SavedSearch>, BackendError> {
        let state = self.state.read().await;
        let bookmarked = state.bookmarks.get(user_id);

        let mut searches: Vec<SavedSearch> = state
            .saved_searches
            .values()
            .filter(|s| {
                s.owner_id == user_id || bookmarked.is_some_and(|ids| ids.contains(&s.search.id))
            })
            .map(|s| state.view_saved_search(s, Some(user_id)))
            .collect();
        searches.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));

        let (data, next) = paginate(&searches, page_token.as_deref(), page_size)?;
        Ok(Page::new(data, next))
    }

    async fn create_saved_search(
        &self,
        user_id: &str,
        search: NewSavedSearch,
    ) -> Result<SavedSearch, BackendError> {
        let mut state = self.state.write().await;
        let now = Utc::now();
        let id = Uuid::new_v4().to_string();

        let stored = StoredSavedSearch {
            search: SavedSearch {
                id: id.clone(),
                name: search.name,
                query: search.query,
                description: search.description,
                created_at: now,
                updated_at: now,
                bookmark_status: None,
                permissions: None,
            },
            owner_id: user_id.to_string(),
        };

        state
            .bookmarks
            .entry(user_id.to_string())
            .or_default()
            .insert(id.clone());
        state.saved_searches.insert(id, stored.clone());

        Ok(state.view_saved_search(&stored, Some(user_id)))
    }

    async fn update_saved_search(
        &self,
        search_id: &str,
        user_id: &str,
        update: SavedSearchUpdate,
    ) -> Result<SavedSearch, BackendError> {
        let mut state = self.state.write().await;
        let stored = state.owned_search_mut(search_id, user_id)?;

        if let Some(name) = update.name {
            stored.search.name = name;
        }
        if let Some(query) = update.query {
            stored.search.query = query;
        }
        if let Some(description) = update.description {
            stored.search.description = Some(description);
        }
        stored.search.updated_at = Utc::now();

        let stored = stored.clone();
        Ok(state.view_saved_search(&stored, Some(user_id)))
    }

    async fn delete_saved_search(
        &self,
        search_id: &str,
        user_id: &str,
    ) -> Result<(), BackendError> {
        let mut state = self.state.write().await;
        state.owned_search_mut(search_id, user_id)?;

        state.saved_searches.remove(search_id);
        for ids in state.bookmarks.values_mut() {
            ids.remove(search_id);
        }

        Ok(())
    }

    async fn put_bookmark(&self, search_id: &str, user_id: &str) -> Result<(), BackendError> {
        let mut state = self.state.write().await;

        if !state.saved_searches.contains_key(search_id) {
            return Err(BackendError::EntityDoesNotExist);
        }

        let already = state
            .bookmarks
            .get(user_id)
            .is_some_and(|ids| ids.contains(search_id));
        if already {
            return Ok(());
        }

        if state.bookmark_count(user_id) >= self.config.max_bookmarks {
            return Err(BackendError::UserMaxBookmarks);
        }

        state
            .bookmarks
            .entry(user_id.to_string())
            .or_default()
            .insert(search_id.to_string());
        Ok(())
    }

    async fn remove_bookmark(&self, search_id: &str, user_id: &str) -> Result<(), BackendError> {
        let mut state = self.state.write().await;

        let stored = state
            .saved_searches
            .get(search_id)
            .ok_or(BackendError::EntityDoesNotExist)?;

        if stored.owner_id == user_id {
            return Err(BackendError::UserNotAuthorizedForAction);
        }

        if let Some(ids) = state.bookmarks.get_mut(user_id) {
            ids.remove(search_id);
        }
        Ok(())
    }

    async fn delete_subscription(
        &self,
        subscription_id: &str,
        user_id: &str,
    ) -> Result<(), BackendError> {
        let mut state = self.state.write().await;

        match state.subscriptions.get(subscription_id) {
            Some(owner) if owner == user_id => {
                state.subscriptions.remove(subscription_id);
                Ok(())
            }
            // Other users' subscriptions are reported as missing
            _ => Err(BackendError::EntityDoesNotExist),
        }
    }

    async fn sync_user_profile(&self, profile: UserProfile) -> Result<(), BackendError> {
        self.state
            .write()
            .await
            .profiles
            .insert(profile.user_id.clone(), profile);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{BaselineStatus, BrowserImplementation};
    use crate::domain::query::{QueryParser, SimpleQueryParser};
    use chrono::{NaiveDate, TimeZone};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn run(day: u32, passes: i64) -> WptRunMetric {
        WptRunMetric {
            run_timestamp: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
            total_tests_count: Some(100),
            test_pass_count: Some(passes),
        }
    }

    fn series() -> WptSeries {
        WptSeries {
            browser: "chrome".to_string(),
            channel: "stable".to_string(),
            metric_view: WptMetricView::SubtestCounts,
        }
    }

    fn range(page_size: u32) -> MetricsRange {
        MetricsRange {
            start_at: date(2024, 1, 1),
            end_at: date(2024, 1, 31),
            page_token: None,
            page_size,
        }
    }

    fn new_search(name: &str) -> NewSavedSearch {
        NewSavedSearch {
            name: name.to_string(),
            query: "baseline_status:widely".to_string(),
            description: None,
        }
    }

    async fn seeded_features() -> InMemoryBackend {
        let backend = InMemoryBackend::default();
        backend
            .add_feature(
                Feature::new("grid", "CSS Grid")
                    .with_baseline(BaselineStatus::Widely)
                    .with_implementation(
                        "chrome",
                        BrowserImplementation {
                            status: ImplementationStatus::Available,
                            date: None,
                            version: Some("57".to_string()),
                        },
                    ),
            )
            .await;
        backend
            .add_feature(Feature::new("subgrid", "Subgrid").with_baseline(BaselineStatus::Newly))
            .await;
        backend
            .add_feature(Feature::new("popover", "Popover").with_baseline(BaselineStatus::Limited))
            .await;
        backend
    }

    fn search_params(query: Option<&str>, page_size: u32) -> SearchFeaturesParams {
        SearchFeaturesParams {
            search: query.map(|q| SimpleQueryParser::new().parse(q).unwrap()),
            sort: None,
            page_token: None,
            page_size,
            metric_view: WptMetricView::SubtestCounts,
        }
    }

    #[tokio::test]
    async fn test_search_all_features_sorted_by_id() {
        let backend = seeded_features().await;

        let page = backend.search_features(&search_params(None, 10)).await.unwrap();
        let ids: Vec<&str> = page.data.iter().map(|f| f.feature_id.as_str()).collect();

        assert_eq!(ids, vec!["grid", "popover", "subgrid"]);
        assert_eq!(page.metadata.total, Some(3));
        assert!(page.metadata.next_page_token.is_none());
    }

    #[tokio::test]
    async fn test_search_with_query() {
        let backend = seeded_features().await;

        let page = backend
            .search_features(&search_params(Some("baseline_status:widely OR baseline_status:newly"), 10))
            .await
            .unwrap();
        assert_eq!(page.data.len(), 2);

        let page = backend
            .search_features(&search_params(Some("grid -id:subgrid"), 10))
            .await
            .unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].feature_id, "grid");

        let page = backend
            .search_features(&search_params(Some("available_on:chrome"), 10))
            .await
            .unwrap();
        assert_eq!(page.data.len(), 1);
    }

    #[tokio::test]
    async fn test_search_pagination() {
        let backend = seeded_features().await;

        let first = backend.search_features(&search_params(None, 2)).await.unwrap();
        assert_eq!(first.data.len(), 2);

        let mut params = search_params(None, 2);
        params.page_token = first.metadata.next_page_token.clone();
        let second = backend.search_features(&params).await.unwrap();

        assert_eq!(second.data.len(), 1);
        assert_eq!(second.data[0].feature_id, "subgrid");
    }

    #[tokio::test]
    async fn test_search_invalid_page_token() {
        let backend = seeded_features().await;
        let mut params = search_params(None, 2);
        params.page_token = Some("garbage".to_string());

        let result = backend.search_features(&params).await;
        assert!(matches!(result, Err(BackendError::InvalidPageToken)));
    }

    #[tokio::test]
    async fn test_get_feature() {
        let backend = seeded_features().await;

        let feature = backend
            .get_feature("grid", WptMetricView::SubtestCounts)
            .await
            .unwrap();
        assert_eq!(feature.name, "CSS Grid");

        let missing = backend.get_feature("nope", WptMetricView::SubtestCounts).await;
        assert!(matches!(missing, Err(BackendError::EntityDoesNotExist)));
    }

    #[tokio::test]
    async fn test_wpt_runs_filtered_by_range_and_scope() {
        let backend = InMemoryBackend::default();
        backend
            .add_wpt_runs(None, &series(), vec![run(20, 90), run(5, 50)])
            .await;
        backend
            .add_wpt_runs(Some("grid"), &series(), vec![run(10, 70)])
            .await;

        let mut narrow = range(10);
        narrow.start_at = date(2024, 1, 6);
        let page = backend.list_aggregated_wpt_metrics(&series(), &narrow).await.unwrap();
        assert_eq!(page.data, vec![run(20, 90)]);

        let page = backend.list_aggregated_wpt_metrics(&series(), &range(10)).await.unwrap();
        assert_eq!(page.data, vec![run(5, 50), run(20, 90)]);

        let page = backend
            .list_feature_wpt_metrics("grid", &series(), &range(10))
            .await
            .unwrap();
        assert_eq!(page.data, vec![run(10, 70)]);
    }

    #[tokio::test]
    async fn test_browser_feature_counts() {
        let backend = InMemoryBackend::default();
        let metric = BrowserReleaseFeatureMetric {
            timestamp: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
            count: Some(120),
        };
        backend
            .add_browser_feature_counts("firefox", vec![metric.clone()])
            .await;

        let page = backend
            .list_browser_feature_counts("firefox", &range(10))
            .await
            .unwrap();
        assert_eq!(page.data, vec![metric]);

        let empty = backend
            .list_browser_feature_counts("safari", &range(10))
            .await
            .unwrap();
        assert!(empty.data.is_empty());
    }

    #[tokio::test]
    async fn test_saved_search_lifecycle() {
        let backend = InMemoryBackend::default();

        let created = backend
            .create_saved_search("owner", new_search("Widely available"))
            .await
            .unwrap();
        assert_eq!(
            created.permissions.as_ref().and_then(|p| p.role),
            Some(SavedSearchRole::SavedSearchOwner)
        );

        let anonymous = backend.get_saved_search(&created.id, None).await.unwrap();
        assert!(anonymous.permissions.is_none());
        assert!(anonymous.bookmark_status.is_none());

        let update = SavedSearchUpdate {
            name: Some("Renamed".to_string()),
            ..Default::default()
        };
        let updated = backend
            .update_saved_search(&created.id, "owner", update)
            .await
            .unwrap();
        assert_eq!(updated.name, "Renamed");

        backend.delete_saved_search(&created.id, "owner").await.unwrap();
        assert!(matches!(
            backend.get_saved_search(&created.id, None).await,
            Err(BackendError::EntityDoesNotExist)
        ));
    }

    #[tokio::test]
    async fn test_only_owner_may_modify() {
        let backend = InMemoryBackend::default();
        let created = backend
            .create_saved_search("owner", new_search("Mine"))
            .await
            .unwrap();

        assert!(matches!(
            backend.delete_saved_search(&created.id, "intruder").await,
            Err(BackendError::UserNotAuthorizedForAction)
        ));
        assert!(matches!(
            backend
                .update_saved_search(&created.id, "intruder", SavedSearchUpdate::default())
                .await,
            Err(BackendError::UserNotAuthorizedForAction)
        ));
    }

    #[tokio::test]
    async fn test_bookmark_limit() {
        let backend = InMemoryBackend::new(BackendConfig {
            max_bookmarks: 1,
            seed_file: None,
        });
        let first = backend.create_saved_search("owner", new_search("a")).await.unwrap();
        let second = backend.create_saved_search("owner", new_search("b")).await.unwrap();

        backend.put_bookmark(&first.id, "reader").await.unwrap();
        backend.put_bookmark(&first.id, "reader").await.unwrap();

        assert!(matches!(
            backend.put_bookmark(&second.id, "reader").await,
            Err(BackendError::UserMaxBookmarks)
        ));

        let listed = backend
            .list_user_saved_searches("reader", None, 10)
            .await
            .unwrap();
        assert_eq!(listed.data.len(), 1);
        assert_eq!(
            listed.data[0].bookmark_status.as_ref().map(|b| b.status),
            Some(BookmarkState::BookmarkActive)
        );
    }

    #[tokio::test]
    async fn test_owner_cannot_remove_own_bookmark() {
        let backend = InMemoryBackend::default();
        let created = backend.create_saved_search("owner", new_search("a")).await.unwrap();

        assert!(matches!(
            backend.remove_bookmark(&created.id, "owner").await,
            Err(BackendError::UserNotAuthorizedForAction)
        ));
        assert!(matches!(
            backend.remove_bookmark("missing", "owner").await,
            Err(BackendError::EntityDoesNotExist)
        ));
    }

    #[tokio::test]
    async fn test_delete_subscription() {
        let backend = InMemoryBackend::default();
        backend.add_subscription("sub-1", "user-1").await;

        assert!(matches!(
            backend.delete_subscription("sub-1", "user-2").await,
            Err(BackendError::EntityDoesNotExist)
        ));
        backend.delete_subscription("sub-1", "user-1").await.unwrap();
        assert!(matches!(
            backend.delete_subscription("sub-1", "user-1").await,
            Err(BackendError::EntityDoesNotExist)
        ));
    }

    #[tokio::test]
    async fn test_sync_user_profile() {
        let backend = InMemoryBackend::default();
        let profile = UserProfile {
            user_id: "user-1".to_string(),
            github_user_id: 7,
            username: "octocat".to_string(),
            emails: vec!["octo@example.com".to_string()],
        };

        backend.sync_user_profile(profile.clone()).await.unwrap();

        assert_eq!(backend.user_profile("user-1").await, Some(profile));
    }

    #[tokio::test]
    async fn test_seed() {
        let backend = InMemoryBackend::default();
        let seed: SeedData = serde_json::from_str(
            r#"{
                "features": [{"feature_id": "grid", "name": "CSS Grid"}],
                "subscriptions": [{"id": "sub-1", "user_id": "user-1"}]
            }"#,
        )
        .unwrap();

        backend.seed(seed).await;

        assert!(backend.get_feature("grid", WptMetricView::TestCounts).await.is_ok());
        assert!(backend.delete_subscription("sub-1", "user-1").await.is_ok());
    }
}

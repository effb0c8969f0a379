//! Metric time series handlers

use axum::extract::State;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{
    AggregatedWptMetricsRequest, ApiError, BrowserFeatureCountsRequest, FeatureWptMetricsRequest,
    FeatureWptSeriesPath, Json, MetricsQuery, Path, Query, WptSeriesPath,
};
use crate::domain::model::{BrowserReleaseFeatureMetric, Page, WptRunMetric};
use crate::domain::ErrorContext;

const FEATURE_WPT_METRICS: ErrorContext<'static> =
    ErrorContext::new("feature", "list feature wpt metrics");
const AGGREGATED_WPT_METRICS: ErrorContext<'static> =
    ErrorContext::new("metrics", "list aggregated wpt metrics");
const BROWSER_FEATURE_COUNTS: ErrorContext<'static> =
    ErrorContext::new("browser", "list browser feature counts");

/// GET /v1/features/{feature_id}/stats/wpt/browsers/{browser}/channels/{channel}/{metric_view}
pub async fn list_feature_wpt_metrics(
    State(state): State<AppState>,
    Path(path): Path<FeatureWptSeriesPath>,
    Query(query): Query<MetricsQuery>,
) -> Result<Json<Page<WptRunMetric>>, ApiError> {
    debug!(feature_id = %path.feature_id, browser = %path.browser, channel = %path.channel, "Listing feature WPT metrics");

    let request = FeatureWptMetricsRequest::new(path, query.to_range()?);
    let cache = &state.caches.list_feature_wpt_metrics;

    if let Some(page) = cache.lookup(&request).await {
        return Ok(Json(page));
    }

    let range = &request.query;
    let page = state
        .backend
        .list_feature_wpt_metrics(&request.path.feature_id, &request.path.series(), range)
        .await
        .map_err(|e| {
            ApiError::from_backend(e, &FEATURE_WPT_METRICS.with_page_token(range.page_token.as_deref()))
        })?;

    cache.attempt_cache(&request, &page).await;

    Ok(Json(page))
}

/// GET /v1/stats/wpt/browsers/{browser}/channels/{channel}/{metric_view}
pub async fn list_aggregated_wpt_metrics(
    State(state): State<AppState>,
    Path(path): Path<WptSeriesPath>,
    Query(query): Query<MetricsQuery>,
) -> Result<Json<Page<WptRunMetric>>, ApiError> {
    debug!(browser = %path.browser, channel = %path.channel, "Listing aggregated WPT metrics");

    let request = AggregatedWptMetricsRequest::new(path, query.to_range()?);
    let cache = &state.caches.list_aggregated_wpt_metrics;

    if let Some(page) = cache.lookup(&request).await {
        return Ok(Json(page));
    }

    let range = &request.query;
    let page = state
        .backend
        .list_aggregated_wpt_metrics(&request.path.series(), range)
        .await
        .map_err(|e| {
            ApiError::from_backend(
                e,
                &AGGREGATED_WPT_METRICS.with_page_token(range.page_token.as_deref()),
            )
        })?;

    cache.attempt_cache(&request, &page).await;

    Ok(Json(page))
}

/// GET /v1/stats/features/browsers/{browser}/feature_counts
pub async fn list_browser_feature_counts(
    State(state): State<AppState>,
    Path(browser): Path<String>,
    Query(query): Query<MetricsQuery>,
) -> Result<Json<Page<BrowserReleaseFeatureMetric>>, ApiError> {
    debug!(browser = %browser, "Listing browser feature counts");

    let request = BrowserFeatureCountsRequest::new(browser, query.to_range()?);
    let cache = &state.caches.list_browser_feature_counts;

    if let Some(page) = cache.lookup(&request).await {
        return Ok(Json(page));
    }

    let range = &request.query;
    let page = state
        .backend
        .list_browser_feature_counts(&request.path, range)
        .await
        .map_err(|e| {
            ApiError::from_backend(
                e,
                &BROWSER_FEATURE_COUNTS.with_page_token(range.page_token.as_deref()),
            )
        })?;

    cache.attempt_cache(&request, &page).await;

    Ok(Json(page))
}

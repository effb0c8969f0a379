//! Feature search and lookup handlers

use axum::extract::State;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{
    normalize_page_size, ApiError, GetFeatureQuery, GetFeatureRequest, Json, Path, Query,
    SearchFeaturesQuery,
};
use crate::domain::backend::SearchFeaturesParams;
use crate::domain::model::{Feature, Page};
use crate::domain::query::{decode_query, QueryParser, SearchNode};
use crate::domain::ErrorContext;

const SEARCH_FEATURES: ErrorContext<'static> = ErrorContext::new("features", "search features");
const GET_FEATURE: ErrorContext<'static> = ErrorContext::new("feature", "get feature");

/// Decodes and parses the `q` parameter of a feature search
fn parse_search_query(
    raw: &str,
    parser: &dyn QueryParser,
) -> Result<SearchNode, ApiError> {
    let decoded = decode_query(raw).map_err(|e| {
        debug!(error = %e, "Search query failed to decode");
        ApiError::bad_request("query string cannot be decoded")
    })?;

    parser.parse(&decoded).map_err(|e| {
        debug!(error = %e, "Search query failed to parse");
        ApiError::bad_request("query string cannot be parsed")
    })
}

/// Resolves the defaults of a search and parses its `q` parameter
fn search_params(
    query: &SearchFeaturesQuery,
    parser: &dyn QueryParser,
) -> Result<SearchFeaturesParams, ApiError> {
    let search = query
        .q
        .as_deref()
        .filter(|q| !q.trim().is_empty())
        .map(|q| parse_search_query(q, parser))
        .transpose()?;

    Ok(SearchFeaturesParams {
        search,
        sort: query.sort.clone(),
        page_token: query.page_token.clone(),
        page_size: normalize_page_size(query.page_size),
        metric_view: query.wpt_metric_view.unwrap_or_default(),
    })
}

/// GET /v1/features
pub async fn search_features(
    State(state): State<AppState>,
    Query(query): Query<SearchFeaturesQuery>,
) -> Result<Json<Page<Feature>>, ApiError> {
    debug!(q = ?query.q, sort = ?query.sort, "Searching features");

    let params = search_params(&query, state.query_parser.as_ref())?;
    let cache = &state.caches.search_features;

    if let Some(page) = cache.lookup(&params).await {
        return Ok(Json(page));
    }

    let page = state
        .backend
        .search_features(&params)
        .await
        .map_err(|e| {
            ApiError::from_backend(e, &SEARCH_FEATURES.with_page_token(params.page_token.as_deref()))
        })?;

    cache.attempt_cache(&params, &page).await;

    Ok(Json(page))
}

/// GET /v1/features/{feature_id}
pub async fn get_feature(
    State(state): State<AppState>,
    Path(feature_id): Path<String>,
    Query(query): Query<GetFeatureQuery>,
) -> Result<Json<Feature>, ApiError> {
    debug!(feature_id = %feature_id, "Getting feature");

    let request = GetFeatureRequest::new(feature_id, query.wpt_metric_view.unwrap_or_default());
    let cache = &state.caches.get_feature;

    if let Some(feature) = cache.lookup(&request).await {
        return Ok(Json(feature));
    }

    let feature = state
        .backend
        .get_feature(&request.path, request.query)
        .await
        .map_err(|e| ApiError::from_backend(e, &GET_FEATURE))?;

    cache.attempt_cache(&request, &feature).await;

    Ok(Json(feature))
}

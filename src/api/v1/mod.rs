//! v1 API endpoints

pub mod bookmarks;
pub mod features;
pub mod saved_searches;
pub mod stats;
pub mod subscriptions;
pub mod users;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/features", get(features::search_features))
        .route("/features/{feature_id}", get(features::get_feature))
        .route(
            "/features/{feature_id}/stats/wpt/browsers/{browser}/channels/{channel}/{metric_view}",
            get(stats::list_feature_wpt_metrics),
        )
        .route(
            "/stats/wpt/browsers/{browser}/channels/{channel}/{metric_view}",
            get(stats::list_aggregated_wpt_metrics),
        )
        .route(
            "/stats/features/browsers/{browser}/feature_counts",
            get(stats::list_browser_feature_counts),
        )
        .route("/saved-searches", post(saved_searches::create_saved_search))
        .route(
            "/saved-searches/{search_id}",
            get(saved_searches::get_saved_search)
                .patch(saved_searches::update_saved_search)
                .delete(saved_searches::delete_saved_search),
        )
        .route(
            "/users/me/saved-searches",
            get(saved_searches::list_user_saved_searches),
        )
        .route(
            "/users/me/saved-searches/{search_id}/bookmark",
            put(bookmarks::put_bookmark).delete(bookmarks::remove_bookmark),
        )
        .route(
            "/users/me/subscriptions/{subscription_id}",
            delete(subscriptions::delete_subscription),
        )
        .route("/users/me/ping", post(users::ping_user))
}

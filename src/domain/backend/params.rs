//! Normalized arguments passed to the backend

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::model::WptMetricView;
use crate::domain::query::SearchNode;

/// Arguments for a feature search, after the query string has been parsed
///
/// Also the cache key of the search, so equivalent query strings share an
/// entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchFeaturesParams {
    pub search: Option<SearchNode>,
    pub sort: Option<String>,
    pub page_token: Option<String>,
    pub page_size: u32,
    pub metric_view: WptMetricView,
}

/// Identifies one WPT time series
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WptSeries {
    pub browser: String,
    pub channel: String,
    pub metric_view: WptMetricView,
}

/// Inclusive date window plus pagination for metric listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsRange {
    pub start_at: NaiveDate,
    pub end_at: NaiveDate,
    pub page_token: Option<String>,
    pub page_size: u32,
}

impl MetricsRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_at && date <= self.end_at
    }
}

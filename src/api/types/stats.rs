//! Metric time series parameters

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::pagination::normalize_page_size;
use super::request::OperationRequest;
use crate::domain::backend::{MetricsRange, WptSeries};
use crate::domain::model::WptMetricView;

/// Date window and pagination shared by every metric listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsQuery {
    #[serde(rename = "startAt")]
    pub start_at: NaiveDate,
    #[serde(rename = "endAt")]
    pub end_at: NaiveDate,
    #[serde(default)]
    pub page_token: Option<String>,
    #[serde(default)]
    pub page_size: Option<u32>,
}

impl MetricsQuery {
    /// Validates the window and applies pagination defaults
    pub fn to_range(&self) -> Result<MetricsRange, ApiError> {
        if self.start_at > self.end_at {
            return Err(ApiError::bad_request("startAt must not be after endAt"));
        }

        Ok(MetricsRange {
            start_at: self.start_at,
            end_at: self.end_at,
            page_token: self.page_token.clone(),
            page_size: normalize_page_size(self.page_size),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WptSeriesPath {
    pub browser: String,
    pub channel: String,
    pub metric_view: WptMetricView,
}

impl WptSeriesPath {
    pub fn series(&self) -> WptSeries {
        WptSeries {
            browser: self.browser.clone(),
            channel: self.channel.clone(),
            metric_view: self.metric_view,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureWptSeriesPath {
    pub feature_id: String,
    pub browser: String,
    pub channel: String,
    pub metric_view: WptMetricView,
}

impl FeatureWptSeriesPath {
    pub fn series(&self) -> WptSeries {
        WptSeries {
            browser: self.browser.clone(),
            channel: self.channel.clone(),
            metric_view: self.metric_view,
        }
    }
}

pub type FeatureWptMetricsRequest = OperationRequest<FeatureWptSeriesPath, MetricsRange>;
pub type AggregatedWptMetricsRequest = OperationRequest<WptSeriesPath, MetricsRange>;
pub type BrowserFeatureCountsRequest = OperationRequest<String, MetricsRange>;

//! Feature search and lookup parameters

use serde::{Deserialize, Serialize};

use super::request::OperationRequest;
use crate::domain::model::WptMetricView;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFeaturesQuery {
    /// Search expression, escaped once more on top of URL encoding
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub page_token: Option<String>,
    #[serde(default)]
    pub page_size: Option<u32>,
    #[serde(default)]
    pub wpt_metric_view: Option<WptMetricView>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetFeatureQuery {
    #[serde(default)]
    pub wpt_metric_view: Option<WptMetricView>,
}

pub type GetFeatureRequest = OperationRequest<String, WptMetricView>;

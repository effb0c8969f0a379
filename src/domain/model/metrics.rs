//! Time series metric points

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// WPT pass counts for a single test run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WptRunMetric {
    pub run_timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_tests_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_pass_count: Option<i64>,
}

/// Number of features supported by a browser at a given release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserReleaseFeatureMetric {
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

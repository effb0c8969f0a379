//! Seed data for the in-memory backend

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::domain::model::{BrowserReleaseFeatureMetric, Feature, WptMetricView, WptRunMetric};

/// WPT runs of one series, optionally scoped to a feature
#[derive(Debug, Clone, Deserialize)]
pub struct SeriesRuns {
    #[serde(default)]
    pub feature_id: Option<String>,
    pub browser: String,
    pub channel: String,
    #[serde(default)]
    pub metric_view: WptMetricView,
    pub runs: Vec<WptRunMetric>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BrowserCounts {
    pub browser: String,
    pub metrics: Vec<BrowserReleaseFeatureMetric>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedSubscription {
    pub id: String,
    pub user_id: String,
}

/// Contents of a seed file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub wpt_runs: Vec<SeriesRuns>,
    #[serde(default)]
    pub browser_feature_counts: Vec<BrowserCounts>,
    #[serde(default)]
    pub subscriptions: Vec<SeedSubscription>,
}

impl SeedData {
    pub async fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read seed file {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse seed file {}", path.display()))
    }
}

//! Web feature entities

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which WPT count a metric is computed from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WptMetricView {
    #[default]
    SubtestCounts,
    TestCounts,
}

impl std::fmt::Display for WptMetricView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SubtestCounts => write!(f, "subtest_counts"),
            Self::TestCounts => write!(f, "test_counts"),
        }
    }
}

/// Baseline status of a feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaselineStatus {
    Limited,
    Newly,
    Widely,
}

impl std::fmt::Display for BaselineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Limited => write!(f, "limited"),
            Self::Newly => write!(f, "newly"),
            Self::Widely => write!(f, "widely"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineInfo {
    pub status: BaselineStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImplementationStatus {
    Available,
    Unavailable,
}

/// Implementation state of a feature in one browser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowserImplementation {
    pub status: ImplementationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WptFeatureData {
    pub score: f64,
}

/// Latest WPT scores per browser, split by channel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureWptSnapshots {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub stable: BTreeMap<String, WptFeatureData>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub experimental: BTreeMap<String, WptFeatureData>,
}

/// A web platform feature as returned by search and lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub feature_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline: Option<BaselineInfo>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub browser_implementations: BTreeMap<String, BrowserImplementation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wpt: Option<FeatureWptSnapshots>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub spec_links: Vec<String>,
}

impl Feature {
    pub fn new(feature_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            feature_id: feature_id.into(),
            name: name.into(),
            baseline: None,
            browser_implementations: BTreeMap::new(),
            wpt: None,
            spec_links: Vec::new(),
        }
    }

    pub fn with_baseline(mut self, status: BaselineStatus) -> Self {
        self.baseline = Some(BaselineInfo {
            status,
            low_date: None,
            high_date: None,
        });
        self
    }

    pub fn with_implementation(
        mut self,
        browser: impl Into<String>,
        implementation: BrowserImplementation,
    ) -> Self {
        self.browser_implementations
            .insert(browser.into(), implementation);
        self
    }
}

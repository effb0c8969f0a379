//! Data types exchanged between the handlers and the storage backend

mod feature;
mod metrics;
mod page;
mod saved_search;

pub use feature::{
    BaselineInfo, BaselineStatus, BrowserImplementation, Feature, FeatureWptSnapshots,
    ImplementationStatus, WptFeatureData, WptMetricView,
};
pub use metrics::{BrowserReleaseFeatureMetric, WptRunMetric};
pub use page::{Page, PageMetadata};
pub use saved_search::{
    BookmarkState, BookmarkStatus, NewSavedSearch, SavedSearch, SavedSearchPermissions,
    SavedSearchRole, SavedSearchUpdate,
};

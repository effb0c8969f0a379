//! Saved searches and bookmarks

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookmarkState {
    BookmarkActive,
    BookmarkNone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkStatus {
    pub status: BookmarkState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavedSearchRole {
    SavedSearchOwner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSearchPermissions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<SavedSearchRole>,
}

/// A named feature search shared by its owner
///
/// `bookmark_status` and `permissions` are only populated when the request is
/// made by an authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSearch {
    pub id: String,
    pub name: String,
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bookmark_status: Option<BookmarkStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<SavedSearchPermissions>,
}

/// Fields required to create a saved search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSavedSearch {
    pub name: String,
    pub query: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Partial update of a saved search; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSearchUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl SavedSearchUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.query.is_none() && self.description.is_none()
    }
}

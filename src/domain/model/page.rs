//! Paginated result pages

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
}

/// One page of a list result plus the token to continue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub metadata: PageMetadata,
    pub data: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, next_page_token: Option<String>) -> Self {
        Self {
            metadata: PageMetadata {
                next_page_token,
                total: None,
            },
            data,
        }
    }

    pub fn with_total(mut self, total: i64) -> Self {
        self.metadata.total = Some(total);
        self
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::new(Vec::new(), None)
    }
}

//! Tab data structure
//!
//! The overview surface only needs a display title and a stable identity;
//! everything else about a browsing tab (URL, history, scroll state) lives
//! with the host.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabInfo {
    /// Page title shown in the overview
    pub title: String,
    /// Unique identifier, immutable for the tab's lifetime.
    /// Used for identity comparisons only, never for ordering.
    pub tag: String,
}

impl TabInfo {
    /// Create a tab with a freshly minted tag.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tag: Uuid::new_v4().to_string(),
        }
    }

    /// Rebuild a tab with a known tag, e.g. when the host restores saved tabs.
    pub fn with_tag(title: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tag: tag.into(),
        }
    }
}

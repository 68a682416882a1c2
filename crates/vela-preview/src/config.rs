//! Preview panel configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Localized title given to tabs created from the add affordance
    pub new_tab_title: String,
}

impl PreviewConfig {
    pub fn new(new_tab_title: impl Into<String>) -> Self {
        Self {
            new_tab_title: new_tab_title.into(),
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self::new("New tab")
    }
}

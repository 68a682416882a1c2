//! Tab Manager
//!
//! Reference host implementation of [`TabController`], backing a shared
//! [`TabSubject`]. Keeps track of which tab currently has the foreground
//! and falls back to a neighbouring tab when the active one closes.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::controller::TabController;
use crate::subject::TabSubject;
use crate::tab::TabInfo;
use crate::Result;

pub struct TabManager {
    /// Collection shared with any attached overview surfaces
    subject: TabSubject,
    /// Tag of the tab currently in the foreground
    active_tag: Arc<RwLock<Option<String>>>,
}

impl TabManager {
    pub fn new() -> Self {
        Self::with_subject(TabSubject::new())
    }

    /// Manage an existing collection, e.g. one restored by the host.
    pub fn with_subject(subject: TabSubject) -> Self {
        Self {
            subject,
            active_tag: Arc::new(RwLock::new(None)),
        }
    }

    /// The observable collection this manager mutates. Overview surfaces
    /// attach to this.
    pub fn subject(&self) -> &TabSubject {
        &self.subject
    }

    /// The tab currently in the foreground, if any.
    pub fn active_tab(&self) -> Option<TabInfo> {
        let tag = self.active_tag.read().clone()?;
        self.subject.find_tab(&tag).ok()
    }

    /// Look up a tab by tag.
    pub fn get_tab(&self, tag: &str) -> Result<TabInfo> {
        self.subject.find_tab(tag)
    }
}

impl TabController for TabManager {
    fn select_tab(&self, info: &TabInfo) {
        if self.subject.find_tab(&info.tag).is_err() {
            tracing::warn!(tag = %info.tag, "Select requested for unknown tab");
            return;
        }

        *self.active_tag.write() = Some(info.tag.clone());
        tracing::info!(tag = %info.tag, "Selected tab");
    }

    fn close_tab(&self, info: &TabInfo) {
        let tabs = self.subject.current_tabs();
        let index = match tabs.iter().position(|t| t.tag == info.tag) {
            Some(index) => index,
            None => {
                tracing::warn!(tag = %info.tag, "Close requested for unknown tab");
                return;
            }
        };

        let was_active = self.active_tag.read().as_deref() == Some(info.tag.as_str());

        // Infallible: the position lookup above pinned the tab down.
        let _ = self.subject.remove_tab(&info.tag);

        // If we closed the active tab, promote a neighbour.
        if was_active {
            let remaining = self.subject.current_tabs();
            let next_tag = remaining
                .get(index.min(remaining.len().saturating_sub(1)))
                .map(|t| t.tag.clone());
            *self.active_tag.write() = next_tag;
        }

        tracing::info!(tag = %info.tag, "Closed tab");
    }

    fn create_tab(&self, info: TabInfo, switch_to: bool) {
        let tag = info.tag.clone();
        self.subject.push_tab(info);

        if switch_to {
            *self.active_tag.write() = Some(tag.clone());
        }

        tracing::info!(tag = %tag, switch_to, "Created new tab");
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TabManager {
    fn clone(&self) -> Self {
        Self {
            subject: self.subject.clone(),
            active_tag: Arc::clone(&self.active_tag),
        }
    }
}

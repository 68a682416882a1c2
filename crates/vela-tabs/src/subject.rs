//! Observable tab collection
//!
//! `TabSubject` is the long-lived, shared source of the ordered tab
//! sequence. It outlives any overview surface attached to it; observers
//! come and go independently without affecting each other or the
//! underlying collection.
//!
//! Change notifications carry no diff payload. Observers re-pull
//! [`TabSubject::current_tabs`] on every notification; callbacks run with
//! no internal lock held, so re-reading the subject from inside one is
//! safe.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::error::TabError;
use crate::tab::TabInfo;
use crate::Result;

/// Handle returned by [`TabSubject::subscribe`], used to unsubscribe.
///
/// Ids are allocated from a monotonically increasing counter and never
/// reused, so a stale handle can never detach a later observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type ChangeCallback = Arc<dyn Fn() + Send + Sync>;

struct SubjectInner {
    /// Ordered tab sequence
    tabs: Vec<TabInfo>,
    /// Observers in registration order
    observers: Vec<(SubscriptionId, ChangeCallback)>,
    next_observer_id: u64,
}

/// Shared handle to the tab collection. Cloning shares the same state.
pub struct TabSubject {
    inner: Arc<RwLock<SubjectInner>>,
}

impl TabSubject {
    pub fn new() -> Self {
        Self::with_tabs(Vec::new())
    }

    pub fn with_tabs(tabs: Vec<TabInfo>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SubjectInner {
                tabs,
                observers: Vec::new(),
                next_observer_id: 0,
            })),
        }
    }

    /// Snapshot of the current ordered tab sequence.
    pub fn current_tabs(&self) -> Vec<TabInfo> {
        self.inner.read().tabs.clone()
    }

    pub fn tab_count(&self) -> usize {
        self.inner.read().tabs.len()
    }

    /// Look up a tab by its tag.
    pub fn find_tab(&self, tag: &str) -> Result<TabInfo> {
        self.inner
            .read()
            .tabs
            .iter()
            .find(|t| t.tag == tag)
            .cloned()
            .ok_or_else(|| TabError::NotFound(tag.to_string()))
    }

    /// Register a change observer. The callback fires after every mutation
    /// of the collection, in registration order, until unsubscribed.
    pub fn subscribe(&self, callback: impl Fn() + Send + Sync + 'static) -> SubscriptionId {
        let mut inner = self.inner.write();
        let id = SubscriptionId(inner.next_observer_id);
        inner.next_observer_id += 1;
        inner.observers.push((id, Arc::new(callback)));

        tracing::debug!(subscription = id.0, "Observer subscribed to tab subject");

        id
    }

    /// Remove an observer. Unknown or already-removed ids are a no-op.
    ///
    /// Once this returns, the observer receives no further notifications.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        let removed = {
            let mut inner = self.inner.write();
            let before = inner.observers.len();
            inner.observers.retain(|(sid, _)| *sid != id);
            before != inner.observers.len()
        };

        if removed {
            tracing::debug!(subscription = id.0, "Observer unsubscribed from tab subject");
        }
    }

    /// Number of currently registered observers.
    pub fn observer_count(&self) -> usize {
        self.inner.read().observers.len()
    }

    // === Host-side mutators ===

    /// Replace the whole collection and notify observers.
    pub fn set_tabs(&self, tabs: Vec<TabInfo>) {
        self.inner.write().tabs = tabs;
        self.notify();
    }

    /// Append a tab and notify observers.
    pub fn push_tab(&self, tab: TabInfo) {
        self.inner.write().tabs.push(tab);
        self.notify();
    }

    /// Remove the tab with the given tag and notify observers.
    pub fn remove_tab(&self, tag: &str) -> Result<TabInfo> {
        let removed = {
            let mut inner = self.inner.write();
            let index = inner
                .tabs
                .iter()
                .position(|t| t.tag == tag)
                .ok_or_else(|| TabError::NotFound(tag.to_string()))?;
            inner.tabs.remove(index)
        };

        self.notify();
        Ok(removed)
    }

    /// Fire the change notification to every observer, in registration
    /// order. Callbacks are collected first so none runs under the lock.
    fn notify(&self) {
        let callbacks: Vec<ChangeCallback> = {
            let inner = self.inner.read();
            inner.observers.iter().map(|(_, cb)| Arc::clone(cb)).collect()
        };

        for callback in callbacks {
            callback();
        }
    }
}

impl Default for TabSubject {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TabSubject {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl std::fmt::Debug for TabSubject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("TabSubject")
            .field("tabs", &inner.tabs)
            .field("observer_count", &inner.observers.len())
            .finish()
    }
}

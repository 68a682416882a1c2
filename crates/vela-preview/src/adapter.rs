//! Tab list adapter
//!
//! Binds a snapshot of the tab collection to a renderable row list and
//! translates taps on those rows into semantic intents. The adapter does
//! not own tab data: it holds a live subscription to a [`TabSubject`] for
//! exactly as long as it is attached, and every notification triggers a
//! full re-read of the collection (the list is small; no diffing).

use parking_lot::RwLock;
use std::sync::Arc;

use vela_tabs::{SubscriptionId, TabInfo, TabSubject};

/// One entry in the rendered overview list.
///
/// The tab rows appear in collection order, followed by exactly one
/// trailing [`ListRow::AddTab`] affordance — present even when the
/// collection is empty. The add row has no close control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRow {
    Tab(TabInfo),
    AddTab,
}

/// Receiver for the three semantic intents a tap can produce.
///
/// Exactly one method fires per tap, synchronously on the tapping thread.
pub trait TabIntentListener: Send + Sync {
    /// The body of a tab row was tapped.
    fn on_tab_click(&self, info: TabInfo);
    /// The close control of a tab row was tapped.
    fn on_tab_close(&self, info: TabInfo);
    /// The trailing add affordance was tapped.
    fn on_add_tab(&self);
}

struct AdapterInner {
    /// Currently attached subject, if any
    subject: Option<TabSubject>,
    /// Live subscription into that subject
    subscription: Option<SubscriptionId>,
    /// Rendered row snapshot, trailing add row included
    rows: Vec<ListRow>,
    /// Single-slot intent listener; `None` swallows taps
    listener: Option<Arc<dyn TabIntentListener>>,
    refresh_count: u64,
}

/// Shared handle to the adapter. Cloning shares the same state; the
/// subscription callback holds such a clone for the lifetime of the
/// subscription.
pub struct TabListAdapter {
    inner: Arc<RwLock<AdapterInner>>,
}

impl TabListAdapter {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(AdapterInner {
                subject: None,
                subscription: None,
                rows: vec![ListRow::AddTab],
                listener: None,
                refresh_count: 0,
            })),
        }
    }

    /// Attach to a subject, implicitly detaching from any prior one first,
    /// so re-attachment never duplicates notification delivery. The row
    /// snapshot reflects the subject immediately, then follows every
    /// subsequent change notification until detached.
    pub fn attach_to_subject(&self, subject: &TabSubject) {
        self.detach_subject();

        self.inner.write().subject = Some(subject.clone());

        let handle = self.clone();
        let subscription = subject.subscribe(move || handle.refresh());
        self.inner.write().subscription = Some(subscription);

        tracing::debug!("Adapter attached to tab subject");

        self.refresh();
    }

    /// Drop the subscription and the subject reference. Safe to call when
    /// already detached; after this returns the adapter receives no
    /// further notifications and never reads the subject again.
    pub fn detach_subject(&self) {
        let (subject, subscription) = {
            let mut inner = self.inner.write();
            (inner.subject.take(), inner.subscription.take())
        };

        if let (Some(subject), Some(subscription)) = (subject, subscription) {
            subject.unsubscribe(subscription);
            tracing::debug!("Adapter detached from tab subject");
        }
    }

    /// Re-read the whole collection and rebuild the row snapshot.
    ///
    /// No-op when detached.
    pub fn refresh(&self) {
        let subject = self.inner.read().subject.clone();
        let Some(subject) = subject else { return };

        let tabs = subject.current_tabs();

        let mut inner = self.inner.write();
        inner.rows = tabs
            .into_iter()
            .map(ListRow::Tab)
            .chain(std::iter::once(ListRow::AddTab))
            .collect();
        inner.refresh_count += 1;

        tracing::debug!(rows = inner.rows.len(), "Adapter rows refreshed");
    }

    /// Current row snapshot, in render order.
    pub fn rows(&self) -> Vec<ListRow> {
        self.inner.read().rows.clone()
    }

    pub fn row_count(&self) -> usize {
        self.inner.read().rows.len()
    }

    /// How many times the row snapshot has been rebuilt.
    pub fn refresh_count(&self) -> u64 {
        self.inner.read().refresh_count
    }

    /// Replace the intent listener. `None` disables dispatch: subsequent
    /// taps are silently swallowed.
    pub fn set_listener(&self, listener: Option<Arc<dyn TabIntentListener>>) {
        self.inner.write().listener = listener;
    }

    /// A tap on the body of the row at `index`. Tab rows emit
    /// `on_tab_click`, the trailing add row emits `on_add_tab`,
    /// out-of-range indices are ignored.
    pub fn click(&self, index: usize) {
        // Snapshot row and listener first; the listener may re-enter the
        // adapter (e.g. to clear this very slot during panel teardown).
        let (row, listener) = {
            let inner = self.inner.read();
            (inner.rows.get(index).cloned(), inner.listener.clone())
        };

        let Some(listener) = listener else { return };

        match row {
            Some(ListRow::Tab(info)) => listener.on_tab_click(info),
            Some(ListRow::AddTab) => listener.on_add_tab(),
            None => {}
        }
    }

    /// A tap on the close control of the row at `index`. Only tab rows
    /// carry a close control; the add row and out-of-range indices are
    /// ignored.
    pub fn click_close(&self, index: usize) {
        let (row, listener) = {
            let inner = self.inner.read();
            (inner.rows.get(index).cloned(), inner.listener.clone())
        };

        let Some(listener) = listener else { return };

        if let Some(ListRow::Tab(info)) = row {
            listener.on_tab_close(info);
        }
    }
}

impl Default for TabListAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TabListAdapter {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl std::fmt::Debug for TabListAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("TabListAdapter")
            .field("attached", &inner.subject.is_some())
            .field("rows", &inner.rows.len())
            .field("refresh_count", &inner.refresh_count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Intent {
        Click(String),
        Close(String),
        Add,
    }

    #[derive(Default)]
    struct RecordingListener {
        intents: Mutex<Vec<Intent>>,
    }

    impl RecordingListener {
        fn intents(&self) -> Vec<Intent> {
            self.intents.lock().clone()
        }
    }

    impl TabIntentListener for RecordingListener {
        fn on_tab_click(&self, info: TabInfo) {
            self.intents.lock().push(Intent::Click(info.tag));
        }

        fn on_tab_close(&self, info: TabInfo) {
            self.intents.lock().push(Intent::Close(info.tag));
        }

        fn on_add_tab(&self) {
            self.intents.lock().push(Intent::Add);
        }
    }

    fn two_tab_subject() -> TabSubject {
        TabSubject::with_tabs(vec![
            TabInfo::with_tag("A", "1"),
            TabInfo::with_tag("B", "2"),
        ])
    }

    #[test]
    fn test_detached_adapter_renders_lone_add_row() {
        let adapter = TabListAdapter::new();
        assert_eq!(adapter.rows(), vec![ListRow::AddTab]);
    }

    #[test]
    fn test_attach_reflects_subject_immediately() {
        let adapter = TabListAdapter::new();
        adapter.attach_to_subject(&two_tab_subject());

        let rows = adapter.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], ListRow::Tab(TabInfo::with_tag("A", "1")));
        assert_eq!(rows[1], ListRow::Tab(TabInfo::with_tag("B", "2")));
        assert_eq!(rows[2], ListRow::AddTab);
    }

    #[test]
    fn test_notification_rebuilds_rows() {
        let subject = two_tab_subject();
        let adapter = TabListAdapter::new();
        adapter.attach_to_subject(&subject);

        subject.push_tab(TabInfo::with_tag("C", "3"));
        assert_eq!(adapter.row_count(), 4);

        // Empty collection still renders the trailing add row.
        subject.set_tabs(vec![]);
        assert_eq!(adapter.rows(), vec![ListRow::AddTab]);
    }

    #[test]
    fn test_detach_stops_notifications() {
        let subject = two_tab_subject();
        let adapter = TabListAdapter::new();
        adapter.attach_to_subject(&subject);
        let refreshes = adapter.refresh_count();

        adapter.detach_subject();
        subject.push_tab(TabInfo::with_tag("C", "3"));

        assert_eq!(adapter.refresh_count(), refreshes);
        assert_eq!(subject.observer_count(), 0);
    }

    #[test]
    fn test_detach_is_idempotent() {
        let adapter = TabListAdapter::new();
        // Never attached.
        adapter.detach_subject();

        adapter.attach_to_subject(&two_tab_subject());
        adapter.detach_subject();
        adapter.detach_subject();
    }

    #[test]
    fn test_no_delivery_during_detach_gap() {
        let subject = two_tab_subject();
        let adapter = TabListAdapter::new();
        adapter.attach_to_subject(&subject);
        adapter.detach_subject();

        // Mutations during the gap are not delivered...
        let refreshes = adapter.refresh_count();
        subject.push_tab(TabInfo::with_tag("C", "3"));
        assert_eq!(adapter.refresh_count(), refreshes);

        // ...but the re-attach refresh catches the adapter up.
        adapter.attach_to_subject(&subject);
        assert_eq!(adapter.row_count(), 4);

        subject.push_tab(TabInfo::with_tag("D", "4"));
        assert_eq!(adapter.row_count(), 5);
    }

    #[test]
    fn test_reattach_replaces_subject() {
        let first = two_tab_subject();
        let second = TabSubject::with_tabs(vec![TabInfo::with_tag("X", "9")]);

        let adapter = TabListAdapter::new();
        adapter.attach_to_subject(&first);
        adapter.attach_to_subject(&second);

        assert_eq!(first.observer_count(), 0);
        assert_eq!(adapter.row_count(), 2);

        // Mutating the replaced subject must not reach the adapter.
        let refreshes = adapter.refresh_count();
        first.push_tab(TabInfo::with_tag("C", "3"));
        assert_eq!(adapter.refresh_count(), refreshes);
        assert_eq!(adapter.row_count(), 2);
    }

    #[test]
    fn test_reattach_same_subject_does_not_duplicate_delivery() {
        let subject = two_tab_subject();
        let adapter = TabListAdapter::new();
        adapter.attach_to_subject(&subject);
        adapter.attach_to_subject(&subject);
        assert_eq!(subject.observer_count(), 1);

        let refreshes = adapter.refresh_count();
        subject.push_tab(TabInfo::with_tag("C", "3"));
        assert_eq!(adapter.refresh_count(), refreshes + 1);
    }

    #[test]
    fn test_click_dispatch() {
        let adapter = TabListAdapter::new();
        adapter.attach_to_subject(&two_tab_subject());

        let listener = Arc::new(RecordingListener::default());
        adapter.set_listener(Some(listener.clone()));

        adapter.click(0);
        adapter.click(2);
        assert_eq!(
            listener.intents(),
            vec![Intent::Click("1".to_string()), Intent::Add]
        );
    }

    #[test]
    fn test_close_tap_emits_only_close() {
        let adapter = TabListAdapter::new();
        adapter.attach_to_subject(&two_tab_subject());

        let listener = Arc::new(RecordingListener::default());
        adapter.set_listener(Some(listener.clone()));

        adapter.click_close(1);
        assert_eq!(listener.intents(), vec![Intent::Close("2".to_string())]);
    }

    #[test]
    fn test_add_row_has_no_close_control() {
        let adapter = TabListAdapter::new();
        adapter.attach_to_subject(&two_tab_subject());

        let listener = Arc::new(RecordingListener::default());
        adapter.set_listener(Some(listener.clone()));

        adapter.click_close(2); // the add row
        adapter.click_close(7); // out of range
        adapter.click(7);
        assert!(listener.intents().is_empty());
    }

    #[test]
    fn test_taps_without_listener_are_swallowed() {
        let adapter = TabListAdapter::new();
        adapter.attach_to_subject(&two_tab_subject());

        // No listener set: nothing to observe, and no panic.
        adapter.click(0);
        adapter.click_close(0);

        let listener = Arc::new(RecordingListener::default());
        adapter.set_listener(Some(listener.clone()));
        adapter.set_listener(None);

        adapter.click(0);
        assert!(listener.intents().is_empty());
    }

    #[test]
    fn test_listener_replacement_takes_over_dispatch() {
        let adapter = TabListAdapter::new();
        adapter.attach_to_subject(&two_tab_subject());

        let first = Arc::new(RecordingListener::default());
        let second = Arc::new(RecordingListener::default());
        adapter.set_listener(Some(first.clone()));
        adapter.set_listener(Some(second.clone()));

        adapter.click(0);
        assert!(first.intents().is_empty());
        assert_eq!(second.intents(), vec![Intent::Click("1".to_string())]);
    }
}

//! Tab control seam
//!
//! Transient UI surfaces never mutate the tab collection themselves; they
//! forward user intent through this trait to whichever component the host
//! wires in. All three operations are fire-and-forget from the caller's
//! perspective.

use crate::tab::TabInfo;

pub trait TabController: Send + Sync {
    /// Bring the given tab to the foreground.
    fn select_tab(&self, info: &TabInfo);

    /// Close the given tab.
    fn close_tab(&self, info: &TabInfo);

    /// Open a new tab. When `switch_to` is false the current tab keeps
    /// the foreground.
    fn create_tab(&self, info: TabInfo, switch_to: bool);
}

//! Tab preview panel
//!
//! A one-shot, dismissible overview of the open tabs. The panel owns its
//! adapter for the duration of its visible lifetime, wires the adapter's
//! intents to an external [`TabController`], and guarantees symmetric
//! setup/teardown: every cross-reference established in [`bind_view`] is
//! released in [`dismiss`], with the subject detach happening while the
//! adapter reference is still held.
//!
//! Every intent dismisses the panel. The overview is an action sheet, not
//! a persistent control surface; dismissing on first action prevents the
//! user acting twice against a stale snapshot.
//!
//! [`bind_view`]: TabPreviewPanel::bind_view
//! [`dismiss`]: TabPreviewPanel::dismiss

use parking_lot::RwLock;
use std::sync::Arc;

use vela_tabs::{TabController, TabInfo, TabSubject};

use crate::adapter::{TabIntentListener, TabListAdapter};
use crate::config::PreviewConfig;
use crate::error::PreviewError;
use crate::state::PanelState;
use crate::Result;

struct PanelInner {
    state: PanelState,
    config: PreviewConfig,
    /// Supplied by the host at construction, released at teardown
    subject: Option<TabSubject>,
    /// Absent when the host exposes no tab control; intents then degrade
    /// to dismissal only
    controller: Option<Arc<dyn TabController>>,
    /// Exclusively owned between bind_view and dismiss
    adapter: Option<TabListAdapter>,
}

/// Shared handle to the panel. Cloning shares the same state; the intent
/// listener installed on the adapter holds such a clone so that user taps
/// can drive dismissal. That cycle is broken when [`TabPreviewPanel::dismiss`]
/// clears the listener slot.
pub struct TabPreviewPanel {
    inner: Arc<RwLock<PanelInner>>,
}

impl TabPreviewPanel {
    /// Create a panel over the host's tab subject.
    ///
    /// The controller is injected here rather than resolved from the host
    /// at runtime; passing `None` degrades every intent to a no-op
    /// forward followed by dismissal.
    pub fn new(subject: TabSubject, controller: Option<Arc<dyn TabController>>) -> Self {
        Self::with_config(subject, controller, PreviewConfig::default())
    }

    pub fn with_config(
        subject: TabSubject,
        controller: Option<Arc<dyn TabController>>,
        config: PreviewConfig,
    ) -> Self {
        Self {
            inner: Arc::new(RwLock::new(PanelInner {
                state: PanelState::Created,
                config,
                subject: Some(subject),
                controller,
                adapter: None,
            })),
        }
    }

    pub fn state(&self) -> PanelState {
        self.inner.read().state
    }

    /// The adapter, once the view is bound. Hosts use this handle to
    /// drive rendering and forward taps.
    pub fn adapter(&self) -> Option<TabListAdapter> {
        self.inner.read().adapter.clone()
    }

    /// Construct the view: create the adapter, attach it to the subject,
    /// and install the intent listener. Valid exactly once, from
    /// `Created`.
    pub fn bind_view(&self) -> Result<()> {
        let subject = {
            let mut inner = self.inner.write();
            Self::transition(&mut inner, PanelState::ViewBound)?;
            // The subject is only taken at teardown, and the transition
            // above rejected TornDown, so it is present here.
            match inner.subject.clone() {
                Some(subject) => subject,
                None => {
                    return Err(PreviewError::InvalidTransition {
                        from: PanelState::TornDown.to_string(),
                        to: PanelState::ViewBound.to_string(),
                    })
                }
            }
        };

        let adapter = TabListAdapter::new();
        adapter.attach_to_subject(&subject);
        adapter.set_listener(Some(Arc::new(PanelIntentBridge {
            panel: self.clone(),
        })));

        self.inner.write().adapter = Some(adapter);

        Ok(())
    }

    /// Bring the panel on screen. Also valid while already visible:
    /// returning to the foreground re-enters `Visible`, and every entry
    /// forces a full re-render because the subscription delivers no
    /// replay of changes that happened while hidden.
    pub fn show(&self) -> Result<()> {
        let adapter = {
            let mut inner = self.inner.write();
            Self::transition(&mut inner, PanelState::Visible)?;
            inner.adapter.clone()
        };

        if let Some(adapter) = adapter {
            adapter.refresh();
        }

        Ok(())
    }

    /// Move the panel off screen without tearing it down.
    pub fn hide(&self) -> Result<()> {
        let mut inner = self.inner.write();
        Self::transition(&mut inner, PanelState::ViewBound)
    }

    /// Tear the panel down. Idempotent once torn down; the instance is
    /// not reusable afterwards.
    ///
    /// Order matters: the listener slot is cleared and the subject
    /// detached while the adapter reference is still held, so no
    /// notification or intent can arrive once teardown has begun.
    pub fn dismiss(&self) {
        let (adapter, _controller, _subject) = {
            let mut inner = self.inner.write();
            if inner.state.is_torn_down() {
                return;
            }

            tracing::debug!(from = %inner.state, "Panel dismissed");
            inner.state = PanelState::TornDown;

            (
                inner.adapter.take(),
                inner.controller.take(),
                inner.subject.take(),
            )
        };

        if let Some(adapter) = adapter {
            adapter.set_listener(None);
            adapter.detach_subject();
        }
        // Adapter, controller and subject references all drop here.
    }

    fn transition(inner: &mut PanelInner, target: PanelState) -> Result<()> {
        if !inner.state.can_transition_to(target) {
            return Err(PreviewError::InvalidTransition {
                from: inner.state.to_string(),
                to: target.to_string(),
            });
        }

        tracing::debug!(from = %inner.state, to = %target, "Panel state transition");
        inner.state = target;
        Ok(())
    }

    // === Intent handling ===

    /// Controller snapshot for an inbound intent, or `None` when teardown
    /// has already begun and the intent must be dropped.
    fn controller_for_intent(&self) -> Option<Option<Arc<dyn TabController>>> {
        let inner = self.inner.read();
        if inner.state.is_torn_down() {
            return None;
        }
        Some(inner.controller.clone())
    }

    fn handle_tab_click(&self, info: TabInfo) {
        let Some(controller) = self.controller_for_intent() else {
            return;
        };

        tracing::debug!(tag = %info.tag, "Tab selected from overview");
        if let Some(controller) = controller {
            controller.select_tab(&info);
        }
        self.dismiss();
    }

    fn handle_tab_close(&self, info: TabInfo) {
        let Some(controller) = self.controller_for_intent() else {
            return;
        };

        tracing::debug!(tag = %info.tag, "Tab closed from overview");
        if let Some(controller) = controller {
            controller.close_tab(&info);
        }
        self.dismiss();
    }

    fn handle_add_tab(&self) {
        let Some(controller) = self.controller_for_intent() else {
            return;
        };

        let title = self.inner.read().config.new_tab_title.clone();
        let info = TabInfo::new(title);

        tracing::debug!(tag = %info.tag, "Tab created from overview");
        if let Some(controller) = controller {
            controller.create_tab(info, false);
        }
        self.dismiss();
    }
}

impl Clone for TabPreviewPanel {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl std::fmt::Debug for TabPreviewPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("TabPreviewPanel")
            .field("state", &inner.state)
            .field("has_controller", &inner.controller.is_some())
            .finish()
    }
}

/// The three-way listener installed on the adapter at view bind: forward
/// the intent to the controller, then dismiss the panel.
struct PanelIntentBridge {
    panel: TabPreviewPanel,
}

impl TabIntentListener for PanelIntentBridge {
    fn on_tab_click(&self, info: TabInfo) {
        self.panel.handle_tab_click(info);
    }

    fn on_tab_close(&self, info: TabInfo) {
        self.panel.handle_tab_close(info);
    }

    fn on_add_tab(&self) {
        self.panel.handle_add_tab();
    }
}

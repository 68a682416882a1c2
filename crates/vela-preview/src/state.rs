//! Panel Lifecycle State Machine
//!
//! ```text
//! Created
//!   ↓ bind_view
//! ViewBound
//!   ↓ show        ↑ hide
//! Visible ⟲ show (foreground re-entry forces a refresh)
//!   ↓ dismiss
//! TornDown (terminal)
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelState {
    /// Panel instantiated, no view constructed yet
    Created,
    /// View constructed, adapter attached and listener installed
    ViewBound,
    /// Panel is shown on screen
    Visible,
    /// Panel dismissed and all cross-references released
    TornDown,
}

impl PanelState {
    /// Check if transition to another state is valid
    pub fn can_transition_to(&self, target: PanelState) -> bool {
        match (self, target) {
            // View construction happens exactly once
            (PanelState::Created, PanelState::ViewBound) => true,
            // Showing, hiding, and re-entering the foreground
            (PanelState::ViewBound, PanelState::Visible) => true,
            (PanelState::Visible, PanelState::ViewBound) => true,
            (PanelState::Visible, PanelState::Visible) => true,
            // Teardown is reachable from every live state
            (PanelState::Created, PanelState::TornDown) => true,
            (PanelState::ViewBound, PanelState::TornDown) => true,
            (PanelState::Visible, PanelState::TornDown) => true,
            // TornDown is terminal; everything else is invalid
            _ => false,
        }
    }

    /// Returns true if the panel can no longer be used
    pub fn is_torn_down(&self) -> bool {
        matches!(self, PanelState::TornDown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PanelState::Created => "created",
            PanelState::ViewBound => "viewbound",
            PanelState::Visible => "visible",
            PanelState::TornDown => "torndown",
        }
    }
}

impl std::fmt::Display for PanelState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! Vela Tab Overview
//!
//! A transient, dismissible panel listing the open tabs. The panel
//! attaches to a host-owned [`TabSubject`] for its visible lifetime,
//! forwards select/close/create intents to the host's [`TabController`],
//! and detaches deterministically on teardown.

mod adapter;
mod config;
mod error;
mod panel;
mod state;

pub use adapter::{ListRow, TabIntentListener, TabListAdapter};
pub use config::PreviewConfig;
pub use error::PreviewError;
pub use panel::TabPreviewPanel;
pub use state::PanelState;

// Re-export the tab-state side of the contract
pub use vela_tabs::{SubscriptionId, TabController, TabError, TabInfo, TabManager, TabSubject};

pub type Result<T> = std::result::Result<T, PreviewError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}

//! Vela Tab State
//!
//! The long-lived side of the tab overview contract: the observable tab
//! collection ([`TabSubject`]), the mutation seam transient UI forwards
//! intents to ([`TabController`]), and a reference host implementation
//! ([`TabManager`]).

mod controller;
mod error;
mod manager;
mod subject;
mod tab;

pub use controller::TabController;
pub use error::TabError;
pub use manager::TabManager;
pub use subject::{SubscriptionId, TabSubject};
pub use tab::TabInfo;

pub type Result<T> = std::result::Result<T, TabError>;

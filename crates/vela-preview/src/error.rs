//! Preview panel error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("Invalid panel transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },
}

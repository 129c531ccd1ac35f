//! Core state for the folio portfolio page
//!
//! Holds the settings record, the page configuration and the controller that
//! maps UI events to view updates. Nothing here touches the DOM directly; the
//! browser side implements [`View`] over `web-sys`.

pub mod config;
pub mod controller;
pub mod nav;
pub mod settings;
pub mod view;

pub use config::{FeedbackConfig, PageConfig, RevealConfig};
pub use controller::{ClickOrigin, Controller, Deferred, DeferredAction, KeyChord, PanelState};
pub use nav::anchor_selector;
pub use settings::{AnimationSpeed, Settings, Theme};
pub use view::{DisplayTarget, LinkTarget, ProfileField, View};

/// Errors raised while parsing settings values or page configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown animation speed: {0}")]
    UnknownSpeed(String),
    #[error("Invalid page config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

//! Page configuration
//!
//! Read from `window.FOLIO_CONFIG` by the browser crate. Every section falls
//! back to its defaults, so a page may override a single key.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::Result;

/// Save-button confirmation shown after `saveSettings`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeedbackConfig {
    pub saved_text: String,
    pub saved_background: String,
    pub revert_after_ms: u32,
    pub close_after_ms: u32,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            saved_text: "\u{2713} Saved!".to_string(),
            saved_background: "#3fb950".to_string(),
            revert_after_ms: 2000,
            close_after_ms: 1000,
        }
    }
}

/// Entrance animation for cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealConfig {
    pub card_selector: String,
    pub threshold: f64,
    pub root_margin: String,
    pub hidden_transform: String,
    pub shown_transform: String,
    pub transition: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            card_selector: ".stat-card, .project-card".to_string(),
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            hidden_transform: "translateY(20px)".to_string(),
            shown_transform: "translateY(0)".to_string(),
            transition: "opacity 0.6s ease, transform 0.6s ease".to_string(),
        }
    }
}

/// Full page configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Settings record the page starts with
    pub initial: Settings,
    pub feedback: FeedbackConfig,
    pub reveal: RevealConfig,
}

impl PageConfig {
    /// Parse a JSON config object
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

//! Window and toolbar geometry.

use serde::{Deserialize, Serialize};

/// Top-level window configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial inner width in logical pixels (valid range: 320-7680).
    pub width: u32,
    /// Initial inner height in logical pixels (valid range: 240-4320).
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Mini Browser".into(),
            width: 1200,
            height: 800,
        }
    }
}

/// Toolbar strip above the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarConfig {
    /// Height in logical pixels (valid range: 24-120).
    pub height: u32,
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self { height: 44 }
    }
}

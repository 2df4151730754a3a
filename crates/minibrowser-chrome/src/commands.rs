//! Typed user commands coming from the toolbar.

use serde::Deserialize;

/// A user intent bound to one toolbar control.
///
/// Deserializes from the toolbar's IPC envelope, e.g.
/// `{"kind": "submit_address", "payload": "example.com"}` or
/// `{"kind": "refresh"}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum ChromeCommand {
    /// Enter pressed in the address field.
    SubmitAddress(String),
    /// Address field text changed.
    EditAddress(String),
    Back,
    Forward,
    Refresh,
    Capture,
    CopyLink,
    OpenExternal,
}

impl ChromeCommand {
    /// Parse a raw IPC body.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

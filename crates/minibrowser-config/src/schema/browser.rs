//! Hosted page settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowsingConfig {
    /// Page loaded when no URL is given on the command line.
    pub home_url: String,
    /// Custom user agent; `None` keeps the engine default.
    pub user_agent: Option<String>,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
}

impl Default for BrowsingConfig {
    fn default() -> Self {
        Self {
            home_url: "about:blank".into(),
            user_agent: None,
            devtools: cfg!(debug_assertions),
        }
    }
}

//! Configuration schema types for the minibrowser shell.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod browser;
mod capture;
mod system;
mod window;

pub use browser::*;
pub use capture::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    pub window: WindowConfig,
    pub browser: BrowsingConfig,
    pub toolbar: ToolbarConfig,
    pub capture: CaptureConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

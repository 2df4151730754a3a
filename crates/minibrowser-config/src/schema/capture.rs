//! Page capture settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// JPEG quality (valid range: 1-100).
    pub jpeg_quality: u8,
    /// File name suggested in the save dialog.
    pub file_name: String,
    /// Directory suggested in the save dialog. Defaults to the user's
    /// downloads directory.
    pub directory: Option<PathBuf>,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            jpeg_quality: 80,
            file_name: "mini-browser.jpg".into(),
            directory: None,
        }
    }
}

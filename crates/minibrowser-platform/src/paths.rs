use std::path::PathBuf;

use minibrowser_common::DownloadsDirectory;

/// The user's downloads folder, falling back to the home directory when
/// the platform does not define one (headless Linux, minimal containers).
pub fn downloads_dir() -> Option<PathBuf> {
    dirs::download_dir().or_else(dirs::home_dir)
}

/// Default save location for captures. An explicit directory from config
/// wins over the platform downloads folder.
#[derive(Debug, Default, Clone)]
pub struct SystemDownloads {
    override_dir: Option<PathBuf>,
}

impl SystemDownloads {
    pub fn new(override_dir: Option<PathBuf>) -> Self {
        Self { override_dir }
    }
}

impl DownloadsDirectory for SystemDownloads {
    fn downloads_dir(&self) -> Option<PathBuf> {
        self.override_dir.clone().or_else(downloads_dir)
    }
}

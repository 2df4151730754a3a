//! Host services the browser chrome consumes but does not own.
//!
//! Each trait is a narrow capability: the platform crate provides the real
//! implementations, tests provide recording doubles.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::PlatformError;
use crate::notifications::NotificationLevel;

/// System clipboard, write side only.
pub trait ClipboardWriter: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), PlatformError>;
}

/// Surface for non-blocking, user-visible messages.
pub trait NotificationSurface: Send + Sync {
    fn show_message(&self, level: NotificationLevel, title: &str, text: &str);
}

/// Hands a URL to the operating system's default handler.
pub trait ExternalOpener: Send + Sync {
    fn open_external(&self, url: &str) -> Result<(), PlatformError>;
}

/// Resolves the default directory for saved captures.
pub trait DownloadsDirectory: Send + Sync {
    fn downloads_dir(&self) -> Option<PathBuf>;
}

/// Asks the user where to save a file. `None` means the dialog was cancelled.
#[async_trait]
pub trait FileSaveDialog: Send + Sync {
    async fn prompt_save_path(&self, suggested: &Path) -> Result<Option<PathBuf>, PlatformError>;
}

/// Writes a byte buffer to disk.
#[async_trait]
pub trait FileWriter: Send + Sync {
    async fn write(&self, path: &Path, bytes: &[u8]) -> std::io::Result<()>;
}

/// The full set of collaborators handed to the chrome controller.
#[derive(Clone)]
pub struct ChromeServices {
    pub clipboard: Arc<dyn ClipboardWriter>,
    pub notifier: Arc<dyn NotificationSurface>,
    pub opener: Arc<dyn ExternalOpener>,
    pub downloads: Arc<dyn DownloadsDirectory>,
    pub save_dialog: Arc<dyn FileSaveDialog>,
    pub file_writer: Arc<dyn FileWriter>,
}

impl ChromeServices {
    /// Shows a message through the notification surface.
    pub fn notify(&self, level: NotificationLevel, title: &str, text: &str) {
        tracing::debug!(?level, title, "notification");
        self.notifier.show_message(level, title, text);
    }
}

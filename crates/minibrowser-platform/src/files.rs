//! Save dialog and file writing for page captures.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use minibrowser_common::{FileSaveDialog, FileWriter, PlatformError};
use tracing::debug;

/// Native save dialog via `rfd`.
pub struct RfdSaveDialog {
    button_label: String,
}

impl RfdSaveDialog {
    pub fn new() -> Self {
        Self {
            button_label: "Save Screenshot".into(),
        }
    }
}

impl Default for RfdSaveDialog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FileSaveDialog for RfdSaveDialog {
    async fn prompt_save_path(&self, suggested: &Path) -> Result<Option<PathBuf>, PlatformError> {
        let mut dialog = rfd::AsyncFileDialog::new()
            .set_title(&self.button_label)
            .add_filter("JPEG image", &["jpg", "jpeg"]);

        if let Some(dir) = suggested.parent() {
            dialog = dialog.set_directory(dir);
        }
        if let Some(name) = suggested.file_name() {
            dialog = dialog.set_file_name(name.to_string_lossy());
        }

        let chosen = dialog.save_file().await.map(|h| h.path().to_path_buf());
        debug!(?chosen, "save dialog closed");
        Ok(chosen)
    }
}

/// Writes files with `tokio::fs` so the UI thread never blocks on disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioFileWriter;

#[async_trait]
impl FileWriter for TokioFileWriter {
    async fn write(&self, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
        tokio::fs::write(path, bytes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn tokio_writer_writes_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shot.jpg");

        TokioFileWriter.write(&path, &[0xFF, 0xD8, 0xFF]).await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), vec![0xFF, 0xD8, 0xFF]);
    }

    #[tokio::test]
    async fn tokio_writer_reports_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("shot.jpg");

        let err = TokioFileWriter.write(&path, b"x").await.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}

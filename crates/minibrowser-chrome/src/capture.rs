//! Page capture: encode the snapshot as JPEG, ask where to save it, write it.
//!
//! The snapshot is taken synchronously when the user clicks; everything
//! after that runs as a detached [`CaptureTask`] so navigation keeps working
//! while the save dialog is open. The task never reads navigation state.

use std::path::{Path, PathBuf};

use image::buffer::ConvertBuffer;
use image::codecs::jpeg::JpegEncoder;
use image::{RgbImage, RgbaImage};
use minibrowser_common::{ChromeServices, NotificationLevel, ShellError};
use tracing::{info, warn};

/// Capture output settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureSettings {
    /// JPEG quality, 1-100.
    pub jpeg_quality: u8,
    /// File name suggested in the save dialog.
    pub file_name: String,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            jpeg_quality: 80,
            file_name: "mini-browser.jpg".into(),
        }
    }
}

impl CaptureSettings {
    /// Where the save dialog starts: `<downloads>/<file_name>`, or the bare
    /// file name when no downloads directory is known.
    pub fn suggested_path(&self, downloads: Option<PathBuf>) -> PathBuf {
        match downloads {
            Some(dir) => dir.join(&self.file_name),
            None => PathBuf::from(&self.file_name),
        }
    }
}

/// How a capture ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    Saved(PathBuf),
    Cancelled,
    Failed(String),
}

/// Encode an RGBA snapshot as JPEG. Alpha is dropped.
pub fn encode_jpeg(image: &RgbaImage, quality: u8) -> Result<Vec<u8>, ShellError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(ShellError::Image("snapshot is empty".into()));
    }

    let rgb: RgbImage = image.convert();
    let mut out = Vec::new();
    JpegEncoder::new_with_quality(&mut out, quality.clamp(1, 100))
        .encode_image(&rgb)
        .map_err(|e| ShellError::Image(e.to_string()))?;
    Ok(out)
}

/// The asynchronous half of a capture.
pub struct CaptureTask {
    image: RgbaImage,
    suggested: PathBuf,
    quality: u8,
    services: ChromeServices,
}

impl CaptureTask {
    pub(crate) fn new(
        image: RgbaImage,
        settings: &CaptureSettings,
        services: ChromeServices,
    ) -> Self {
        let suggested = settings.suggested_path(services.downloads.downloads_dir());
        Self {
            image,
            suggested,
            quality: settings.jpeg_quality,
            services,
        }
    }

    pub fn suggested_path(&self) -> &Path {
        &self.suggested
    }

    /// Encode, prompt, write. Every ending is reported to the user; none of
    /// them is an error for the caller.
    pub async fn run(self) -> CaptureOutcome {
        let bytes = match encode_jpeg(&self.image, self.quality) {
            Ok(bytes) => bytes,
            Err(e) => return self.fail("could not encode screenshot", e.to_string()),
        };

        let path = match self
            .services
            .save_dialog
            .prompt_save_path(&self.suggested)
            .await
        {
            Ok(Some(path)) => path,
            Ok(None) => {
                info!("capture save cancelled");
                self.services.notify(
                    NotificationLevel::Warning,
                    "Screenshot not saved",
                    "The save dialog was cancelled.",
                );
                return CaptureOutcome::Cancelled;
            }
            Err(e) => return self.fail("could not open save dialog", e.to_string()),
        };

        if let Err(e) = self.services.file_writer.write(&path, &bytes).await {
            return self.fail("could not write screenshot", format!("{}: {e}", path.display()));
        }

        info!(path = %path.display(), bytes = bytes.len(), "screenshot saved");
        self.services.notify(
            NotificationLevel::Info,
            "Screenshot saved",
            &path.display().to_string(),
        );
        CaptureOutcome::Saved(path)
    }

    fn fail(&self, what: &str, reason: String) -> CaptureOutcome {
        warn!(error = %reason, "{what}");
        self.services
            .notify(NotificationLevel::Error, "Screenshot failed", &reason);
        CaptureOutcome::Failed(reason)
    }
}

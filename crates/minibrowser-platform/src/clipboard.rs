use std::sync::Mutex;

use minibrowser_common::{ClipboardWriter, PlatformError};

/// System clipboard backed by `arboard`.
///
/// The handle is opened on first use and then kept alive: on X11/Wayland the
/// copied text disappears when the owning handle is dropped.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Mutex<Option<arboard::Clipboard>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes text to the system clipboard.
    pub fn set_text(&self, text: &str) -> Result<(), PlatformError> {
        self.with_clipboard(|cb| cb.set_text(text.to_owned()))
    }

    fn with_clipboard<T>(
        &self,
        f: impl FnOnce(&mut arboard::Clipboard) -> Result<T, arboard::Error>,
    ) -> Result<T, PlatformError> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| PlatformError::ClipboardError("clipboard lock poisoned".into()))?;
        if guard.is_none() {
            let cb = arboard::Clipboard::new()
                .map_err(|e| PlatformError::ClipboardError(e.to_string()))?;
            *guard = Some(cb);
        }
        match guard.as_mut() {
            Some(cb) => f(cb).map_err(|e| PlatformError::ClipboardError(e.to_string())),
            None => Err(PlatformError::ClipboardError("clipboard unavailable".into())),
        }
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), PlatformError> {
        self.set_text(text)
    }
}

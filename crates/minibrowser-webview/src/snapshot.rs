//! Native page snapshots.
//!
//! On Linux the page is rendered by WebKitGTK, which can snapshot the visible
//! region into a cairo image surface. Other platforms report `NotSupported`.

use image::RgbaImage;

/// Convert cairo `ARGB32` pixels (premultiplied, native-endian words) into
/// straight-alpha RGBA. `stride` is the byte length of one source row. With
/// `has_alpha` false the data is `RGB24` and the top byte is ignored.
///
/// Returns `None` if `data` is too short for the given geometry.
pub fn argb32_to_rgba(
    data: &[u8],
    width: u32,
    height: u32,
    stride: usize,
    has_alpha: bool,
) -> Option<RgbaImage> {
    let row_bytes = width as usize * 4;
    if stride < row_bytes {
        return None;
    }
    let needed = match height as usize {
        0 => 0,
        h => stride * (h - 1) + row_bytes,
    };
    if data.len() < needed {
        return None;
    }

    let mut out = Vec::with_capacity(row_bytes * height as usize);
    for row in data.chunks(stride).take(height as usize) {
        for px in row[..row_bytes].chunks_exact(4) {
            let word = u32::from_ne_bytes([px[0], px[1], px[2], px[3]]);
            let a = if has_alpha { (word >> 24) as u8 } else { 255 };
            let r = (word >> 16) as u8;
            let g = (word >> 8) as u8;
            let b = word as u8;
            out.extend_from_slice(&[unpremultiply(r, a), unpremultiply(g, a), unpremultiply(b, a), a]);
        }
    }
    RgbaImage::from_raw(width, height, out)
}

fn unpremultiply(channel: u8, alpha: u8) -> u8 {
    match alpha {
        0 => 0,
        255 => channel,
        a => ((u32::from(channel) * 255 + u32::from(a) / 2) / u32::from(a)).min(255) as u8,
    }
}

#[cfg(target_os = "linux")]
pub(crate) use gtk_impl::capture_visible;

#[cfg(target_os = "linux")]
mod gtk_impl {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::{Duration, Instant};

    use gtk::cairo;
    use image::RgbaImage;
    use minibrowser_common::ShellError;
    use tracing::debug;
    use webkit2gtk::{SnapshotOptions, SnapshotRegion, WebViewExt};
    use wry::{WebView, WebViewExtUnix};

    use super::argb32_to_rgba;

    const SNAPSHOT_TIMEOUT: Duration = Duration::from_secs(5);

    type Slot = Rc<RefCell<Option<Result<RgbaImage, String>>>>;

    /// Snapshot the visible part of the page. Blocks the UI thread, pumping
    /// GTK until WebKit delivers the surface.
    pub(crate) fn capture_visible(webview: &WebView) -> Result<RgbaImage, ShellError> {
        let slot: Slot = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&slot);

        webview.webview().snapshot(
            SnapshotRegion::Visible,
            SnapshotOptions::empty(),
            None::<&gtk::gio::Cancellable>,
            move |result| {
                let converted = result
                    .map_err(|e| e.to_string())
                    .and_then(surface_to_rgba);
                *sink.borrow_mut() = Some(converted);
            },
        );

        let deadline = Instant::now() + SNAPSHOT_TIMEOUT;
        loop {
            if let Some(result) = slot.borrow_mut().take() {
                return result.map_err(ShellError::WebView);
            }
            if Instant::now() >= deadline {
                return Err(ShellError::WebView("page snapshot timed out".into()));
            }
            if gtk::events_pending() {
                gtk::main_iteration_do(false);
            } else {
                std::thread::sleep(Duration::from_millis(2));
            }
        }
    }

    fn surface_to_rgba(surface: cairo::Surface) -> Result<RgbaImage, String> {
        let image = cairo::ImageSurface::try_from(surface)
            .map_err(|_| "snapshot is not an image surface".to_string())?;
        if image.format() != cairo::Format::ARgb32 && image.format() != cairo::Format::Rgb24 {
            return Err(format!("unsupported snapshot format {:?}", image.format()));
        }
        image.flush();

        let width = u32::try_from(image.width()).map_err(|e| e.to_string())?;
        let height = u32::try_from(image.height()).map_err(|e| e.to_string())?;
        let stride = usize::try_from(image.stride()).map_err(|e| e.to_string())?;
        let has_alpha = image.format() == cairo::Format::ARgb32;
        debug!(width, height, stride, "page snapshot received");

        let mut converted = None;
        image
            .with_data(|data| {
                converted = argb32_to_rgba(data, width, height, stride, has_alpha);
            })
            .map_err(|e| e.to_string())?;
        converted.ok_or_else(|| "snapshot buffer is truncated".to_string())
    }
}

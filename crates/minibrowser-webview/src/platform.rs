//! Toolkit setup required before any webview is built.
//!
//! On Linux wry renders through WebKitGTK: GTK must be initialized on the UI
//! thread and its main context pumped from the winit loop. Child webviews
//! there need an X11 window; Wayland sessions should run under XWayland
//! (`WINIT_UNIX_BACKEND=x11` / `GDK_BACKEND=x11`). Elsewhere both calls are
//! no-ops.

use minibrowser_common::ShellError;

/// Initialize the native toolkit. Call once, on the UI thread, before the
/// event loop starts.
pub fn init_platform() -> Result<(), ShellError> {
    #[cfg(target_os = "linux")]
    {
        gtk::init().map_err(|e| ShellError::WebView(format!("GTK init failed: {e}")))?;
        tracing::debug!("GTK initialized");
    }
    Ok(())
}

/// Dispatch pending toolkit events without blocking. Returns how many
/// iterations ran.
pub fn pump_platform_events() -> usize {
    #[cfg(target_os = "linux")]
    {
        let mut iterations = 0;
        while gtk::events_pending() {
            gtk::main_iteration_do(false);
            iterations += 1;
        }
        iterations
    }
    #[cfg(not(target_os = "linux"))]
    {
        0
    }
}

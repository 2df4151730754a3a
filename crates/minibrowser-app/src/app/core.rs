//! BrowserApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use minibrowser_chrome::{CaptureSettings, ChromeController, NavigationState};
use minibrowser_common::{ChromeServices, NotificationQueue};
use minibrowser_config::BrowserConfig;
use minibrowser_platform::{
    RfdSaveDialog, SystemClipboard, SystemDownloads, SystemOpener, TokioFileWriter,
};
use minibrowser_webview::{ToolbarView, WryHostedView};
use tokio::sync::watch;
use winit::window::Window;

use super::notifier::{self, NotificationInbox};

/// Top-level application state.
///
/// Field order matters: the webviews are children of the window and must be
/// dropped before it.
pub struct BrowserApp {
    pub(super) config: BrowserConfig,
    pub(super) start_url: String,
    pub(super) services: ChromeServices,
    pub(super) inbox: NotificationInbox,
    pub(super) notifications: NotificationQueue,

    // Capture tasks run here, off the UI thread
    pub(super) runtime: Option<tokio::runtime::Runtime>,

    // Chrome
    pub(super) toolbar: Option<ToolbarView>,
    pub(super) controller: Option<ChromeController<WryHostedView>>,
    pub(super) state_rx: Option<watch::Receiver<NavigationState>>,

    pub(super) last_poll: Instant,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
}

impl BrowserApp {
    pub fn new(config: BrowserConfig, start_url: String) -> Self {
        let (notifier, inbox) = notifier::channel();
        let services = ChromeServices {
            clipboard: Arc::new(SystemClipboard::new()),
            notifier: Arc::new(notifier),
            opener: Arc::new(SystemOpener),
            downloads: Arc::new(SystemDownloads::new(config.capture.directory.clone())),
            save_dialog: Arc::new(RfdSaveDialog::new()),
            file_writer: Arc::new(TokioFileWriter),
        };

        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("minibrowser-capture")
            .enable_all()
            .build()
        {
            Ok(rt) => Some(rt),
            Err(e) => {
                tracing::warn!("Failed to start capture runtime, capture disabled: {e}");
                None
            }
        };

        Self {
            config,
            start_url,
            services,
            inbox,
            notifications: NotificationQueue::default(),
            runtime,
            toolbar: None,
            controller: None,
            state_rx: None,
            last_poll: Instant::now(),
            window: None,
        }
    }

    pub(super) fn capture_settings(&self) -> CaptureSettings {
        CaptureSettings {
            jpeg_quality: self.config.capture.jpeg_quality,
            file_name: self.config.capture.file_name.clone(),
        }
    }

    /// Tear down in dependency order: chrome first, then the window.
    pub(super) fn shutdown(&mut self) {
        if let Some(controller) = self.controller.take() {
            drop(controller.detach());
        }
        self.state_rx = None;
        self.toolbar = None;
        if let Some(rt) = self.runtime.take() {
            rt.shutdown_background();
        }
        tracing::info!("Chrome shut down");
    }
}

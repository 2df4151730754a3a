//! The toolbar strip: a second webview rendering the bundled toolbar page.

use std::sync::{Arc, Mutex};

use minibrowser_chrome::{ChromeCommand, ChromeSnapshot};
use minibrowser_common::{Notification, ShellError};
use serde_json::json;
use tracing::{debug, info, warn};
use wry::raw_window_handle;
use wry::{WebView, WebViewBuilder};

use crate::ipc::{js_dispatch_message, parse_command, IPC_INIT_SCRIPT};
use crate::types::ViewConfig;

/// Bundled toolbar markup.
pub const TOOLBAR_HTML: &str = include_str!("../assets/toolbar.html");

pub struct ToolbarView {
    webview: WebView,
    commands: Arc<Mutex<Vec<ChromeCommand>>>,
}

impl ToolbarView {
    pub fn build<W: raw_window_handle::HasWindowHandle>(
        window: &W,
        bounds: wry::Rect,
        devtools: bool,
    ) -> Result<Self, ShellError> {
        let commands = Arc::new(Mutex::new(Vec::new()));
        let queue = Arc::clone(&commands);

        let config = ViewConfig {
            devtools,
            ..ViewConfig::with_html(TOOLBAR_HTML)
        };
        let builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_focused(false)
            .with_initialization_script(IPC_INIT_SCRIPT)
            .with_ipc_handler(move |request| {
                let Some(cmd) = parse_command(request.body()) else {
                    return;
                };
                debug!(?cmd, "toolbar command");
                if let Ok(mut pending) = queue.lock() {
                    pending.push(cmd);
                }
            });

        let webview = config
            .apply(builder)
            .build_as_child(window)
            .map_err(|e| ShellError::WebView(e.to_string()))?;

        info!("toolbar view created");
        Ok(Self { webview, commands })
    }

    /// Take every command the toolbar sent since the last call.
    pub fn drain_commands(&self) -> Vec<ChromeCommand> {
        match self.commands.lock() {
            Ok(mut pending) => std::mem::take(&mut *pending),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    /// Push navigation state to the page.
    pub fn render(&self, snapshot: &ChromeSnapshot) {
        match serde_json::to_value(snapshot) {
            Ok(payload) => self.send("state", &payload),
            Err(e) => warn!(error = %e, "failed to serialize toolbar state"),
        }
    }

    /// Show a transient message in the toolbar.
    pub fn notify(&self, notification: &Notification) {
        self.send("notify", &notification_payload(notification));
    }

    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), ShellError> {
        self.webview
            .set_bounds(bounds)
            .map_err(|e| ShellError::WebView(e.to_string()))
    }

    fn send(&self, kind: &str, payload: &serde_json::Value) {
        if let Err(e) = self.webview.evaluate_script(&js_dispatch_message(kind, payload)) {
            warn!(error = %e, kind, "toolbar script failed");
        }
    }
}

fn notification_payload(notification: &Notification) -> serde_json::Value {
    json!({
        "level": notification.level,
        "title": notification.title,
        "body": notification.body,
        "ttl_ms": notification.ttl.as_millis() as u64,
    })
}

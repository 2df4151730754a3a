//! IPC between the toolbar page and Rust.
//!
//! - **JS -> Rust**: the page calls `window.minibrowser.ipc.send(kind, payload)`,
//!   which posts `{kind, payload}` JSON to the webview's IPC handler.
//! - **Rust -> JS**: Rust evaluates a `_dispatch(kind, payload)` call in the
//!   page; handlers registered with `window.minibrowser.ipc.on` receive it.

use minibrowser_chrome::ChromeCommand;
use tracing::warn;

/// Injected into the toolbar page before its own scripts run.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    window.minibrowser = window.minibrowser || {};
    window.minibrowser.ipc = {
        send: function(kind, payload) {
            var msg = { kind: kind };
            if (payload !== undefined && payload !== null) {
                msg.payload = payload;
            }
            window.ipc.postMessage(JSON.stringify(msg));
        },
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
})();
"#;

/// JS snippet that dispatches a message to the page's IPC handlers.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.minibrowser.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}

/// Parse a toolbar IPC body. Malformed bodies are logged and dropped.
pub fn parse_command(body: &str) -> Option<ChromeCommand> {
    match ChromeCommand::from_json(body) {
        Ok(cmd) => Some(cmd),
        Err(e) => {
            warn!(error = %e, body_len = body.len(), "toolbar IPC message rejected");
            None
        }
    }
}

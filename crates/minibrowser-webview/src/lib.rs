//! WebView layer for the mini browser.
//!
//! Wraps the `wry` crate to provide:
//! - The hosted page view, adapted to the chrome's `HostedView` contract
//! - Session history tracking (wry exposes no history getters)
//! - The toolbar webview and its IPC bridge (Rust <-> JavaScript)
//! - Native page snapshots and toolkit setup
//!
//! On Linux the engine is WebKitGTK: call [`init_platform`] before creating
//! the event loop and [`pump_platform_events`] from it. Child webviews need
//! X11 (XWayland works). Page capture is implemented on Linux only; other
//! platforms report `NotSupported`.

pub mod events;
pub mod history;
pub mod ipc;
pub mod page;
pub mod platform;
pub mod snapshot;
pub mod toolbar;
pub mod types;
pub mod view;

pub use events::{PageLoadState, RawViewEvent};
pub use history::{SessionHistory, Traversal};
pub use page::PageState;
pub use platform::{init_platform, pump_platform_events};
pub use toolbar::ToolbarView;
pub use types::ViewConfig;
pub use view::WryHostedView;

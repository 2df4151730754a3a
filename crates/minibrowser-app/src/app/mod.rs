//! Application shell: window, webviews, chrome controller and the polling
//! loop that ties them together.

mod core;
mod event_handler;
mod init;
mod layout;
mod notifier;
mod polling;
mod title;

pub use self::core::BrowserApp;

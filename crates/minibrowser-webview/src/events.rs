//! Raw events pushed by wry handlers before translation.

use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded.
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Engine callbacks as recorded on the wry side. Handlers only push these;
/// the UI thread translates them during `pump()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawViewEvent {
    PageLoad { state: PageLoadState, url: String },
    TitleChanged { title: String },
    NewWindowRequested { url: String },
}

//! Translation of raw wry events into typed hosted-view events.

use minibrowser_chrome::HostedViewEvent;
use tracing::debug;

use crate::events::{PageLoadState, RawViewEvent};
use crate::history::{SessionHistory, Traversal};

/// What the shell knows about the page: last title, last committed URL and
/// session history.
#[derive(Debug)]
pub struct PageState {
    title: String,
    url: String,
    history: SessionHistory,
}

impl PageState {
    pub fn new(initial_url: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            url: initial_url.into(),
            history: SessionHistory::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    pub fn begin_traversal(&mut self, traversal: Traversal) {
        self.history.mark_pending(traversal);
    }

    pub fn begin_load(&mut self) {
        self.history.clear_pending();
    }

    /// Fold one raw event into the page state. Returns the typed event to
    /// publish, if any.
    pub fn apply(&mut self, raw: RawViewEvent) -> Option<HostedViewEvent> {
        match raw {
            RawViewEvent::PageLoad {
                state: PageLoadState::Started,
                url,
            } => {
                debug!(url = %url, "page load started");
                self.history.load_started();
                None
            }
            RawViewEvent::PageLoad {
                state: PageLoadState::Finished,
                url,
            } => {
                self.history.commit(&url);
                self.url = url.clone();
                Some(HostedViewEvent::NavigationCompleted {
                    url,
                    can_go_back: self.history.can_go_back(),
                    can_go_forward: self.history.can_go_forward(),
                })
            }
            RawViewEvent::TitleChanged { title } => {
                if title == self.title {
                    return None;
                }
                self.title = title.clone();
                Some(HostedViewEvent::TitleChanged { title })
            }
            RawViewEvent::NewWindowRequested { url } => {
                Some(HostedViewEvent::NewWindowRequested { url })
            }
        }
    }
}

//! Back/forward model for a webview that exposes no history getters.
//!
//! Entries are committed when a page finishes loading. A traversal issued by
//! the shell is marked pending; the next load that starts claims it, and the
//! finished load only moves the cursor when it lands on the neighbouring
//! entry. Anything else is a fresh navigation.

use tracing::debug;

/// A history move requested through the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    Back,
    Forward,
    Reload,
}

#[derive(Debug, Default)]
pub struct SessionHistory {
    entries: Vec<String>,
    cursor: usize,
    /// Requested but no load has started for it yet.
    pending: Option<Traversal>,
    /// Claimed by the load currently in flight.
    in_flight: Option<Traversal>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Note that the next load to start is the result of `traversal`.
    pub fn mark_pending(&mut self, traversal: Traversal) {
        self.pending = Some(traversal);
    }

    /// Forget any pending traversal; the next load is a fresh navigation.
    pub fn clear_pending(&mut self) {
        self.pending = None;
    }

    /// A load started. It claims the pending traversal, if any, and
    /// replaces whatever an earlier unfinished load had claimed.
    pub fn load_started(&mut self) {
        self.in_flight = self.pending.take();
    }

    /// Record a finished load of `url`.
    pub fn commit(&mut self, url: &str) {
        match self.in_flight.take() {
            Some(Traversal::Back) if self.neighbour(-1) == Some(url) => self.cursor -= 1,
            Some(Traversal::Forward) if self.neighbour(1) == Some(url) => self.cursor += 1,
            Some(Traversal::Reload) if self.current() == Some(url) => {}
            _ => self.push(url),
        }
        debug!(
            url,
            cursor = self.cursor,
            entries = self.entries.len(),
            "history committed"
        );
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.cursor).map(String::as_str)
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn neighbour(&self, offset: isize) -> Option<&str> {
        let index = self.cursor.checked_add_signed(offset)?;
        self.entries.get(index).map(String::as_str)
    }

    fn push(&mut self, url: &str) {
        if self.current() == Some(url) {
            // Same document finished again (in-page reload, repeated load).
            return;
        }
        if self.entries.is_empty() {
            self.entries.push(url.to_string());
            self.cursor = 0;
            return;
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(url.to_string());
        self.cursor = self.entries.len() - 1;
    }
}

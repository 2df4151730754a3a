//! Navigation state store.
//!
//! The toolbar renders from [`NavigationState`]; only the chrome controller
//! writes it. The address field is modelled as an explicit phase so that a
//! user draft and the authoritative URL can never be shown at once, and a
//! completed navigation always wins over a stale draft.

use serde::Serialize;
use tokio::sync::watch;

/// What the address field currently represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressPhase {
    /// Showing the hosted view's URL.
    Idle { url: String },
    /// Showing unconfirmed user input. `url` is the last confirmed URL.
    Editing { draft: String, url: String },
    /// A navigation was issued and has not completed yet. `shown` is the
    /// text the field held when it started; `target` is the requested URL
    /// when known (history traversal and reload have none).
    Loading {
        shown: String,
        target: Option<String>,
        url: String,
    },
}

/// Tag-only view of [`AddressPhase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseKind {
    Idle,
    Editing,
    Loading,
}

impl AddressPhase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            AddressPhase::Idle { .. } => PhaseKind::Idle,
            AddressPhase::Editing { .. } => PhaseKind::Editing,
            AddressPhase::Loading { .. } => PhaseKind::Loading,
        }
    }

    /// Text displayed in the address field.
    pub fn address_text(&self) -> &str {
        match self {
            AddressPhase::Idle { url } => url,
            AddressPhase::Editing { draft, .. } => draft,
            AddressPhase::Loading { shown, .. } => shown,
        }
    }

    /// Last URL confirmed by a completed navigation.
    pub fn committed_url(&self) -> &str {
        match self {
            AddressPhase::Idle { url }
            | AddressPhase::Editing { url, .. }
            | AddressPhase::Loading { url, .. } => url,
        }
    }
}

/// UI-visible projection of the hosted view's navigation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    title: String,
    phase: AddressPhase,
    can_go_back: bool,
    can_go_forward: bool,
}

impl NavigationState {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn phase(&self) -> &AddressPhase {
        &self.phase
    }

    pub fn address_text(&self) -> &str {
        self.phase.address_text()
    }

    pub fn can_go_back(&self) -> bool {
        self.can_go_back
    }

    pub fn can_go_forward(&self) -> bool {
        self.can_go_forward
    }

    pub fn snapshot(&self) -> ChromeSnapshot {
        ChromeSnapshot {
            title: self.title.clone(),
            address: self.address_text().to_string(),
            can_go_back: self.can_go_back,
            can_go_forward: self.can_go_forward,
            phase: self.phase.kind(),
        }
    }
}

/// Serializable state pushed to the toolbar page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChromeSnapshot {
    pub title: String,
    pub address: String,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub phase: PhaseKind,
}

/// Single source of truth for the chrome-visible navigation state.
///
/// Each mutation is one `watch` update, so observers see it as a single
/// change; writes that change nothing notify nobody.
pub struct NavigationStore {
    state: watch::Sender<NavigationState>,
}

impl NavigationStore {
    /// Build the store from the hosted view's state at attach time.
    pub fn initialize(
        title: impl Into<String>,
        address: impl Into<String>,
        can_go_back: bool,
        can_go_forward: bool,
    ) -> Self {
        let (state, _) = watch::channel(NavigationState {
            title: title.into(),
            phase: AddressPhase::Idle {
                url: address.into(),
            },
            can_go_back,
            can_go_forward,
        });
        Self { state }
    }

    /// Borrow the current state. Do not hold the guard across a write.
    pub fn state(&self) -> watch::Ref<'_, NavigationState> {
        self.state.borrow()
    }

    pub fn snapshot(&self) -> ChromeSnapshot {
        self.state.borrow().snapshot()
    }

    /// Observe changes. Each receiver sees every write that changed state.
    pub fn subscribe(&self) -> watch::Receiver<NavigationState> {
        self.state.subscribe()
    }

    pub(crate) fn set_title(&self, title: &str) -> bool {
        self.state.send_if_modified(|s| {
            if s.title == title {
                return false;
            }
            s.title = title.to_string();
            true
        })
    }

    /// Force the address back to the authoritative URL, discarding any draft.
    pub(crate) fn set_address_from_navigation(&self, url: &str) -> bool {
        self.state.send_if_modified(|s| {
            let next = AddressPhase::Idle {
                url: url.to_string(),
            };
            if s.phase == next {
                return false;
            }
            s.phase = next;
            true
        })
    }

    /// Record a keystroke in the address field.
    pub(crate) fn set_address_from_user_input(&self, text: &str) -> bool {
        self.state.send_if_modified(|s| {
            let next = AddressPhase::Editing {
                draft: text.to_string(),
                url: s.phase.committed_url().to_string(),
            };
            if s.phase == next {
                return false;
            }
            s.phase = next;
            true
        })
    }

    /// Mark a navigation as issued. The field keeps whatever it showed.
    pub(crate) fn begin_loading(&self, target: Option<&str>) -> bool {
        self.state.send_if_modified(|s| {
            let next = AddressPhase::Loading {
                shown: s.phase.address_text().to_string(),
                target: target.map(str::to_string),
                url: s.phase.committed_url().to_string(),
            };
            if s.phase == next {
                return false;
            }
            s.phase = next;
            true
        })
    }

    /// Update both history flags as one change.
    pub(crate) fn set_history_flags(&self, can_go_back: bool, can_go_forward: bool) -> bool {
        self.state.send_if_modified(|s| {
            if s.can_go_back == can_go_back && s.can_go_forward == can_go_forward {
                return false;
            }
            s.can_go_back = can_go_back;
            s.can_go_forward = can_go_forward;
            true
        })
    }
}

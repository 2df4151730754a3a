//! The hosted view contract and its event stream.

use image::RgbaImage;
use minibrowser_common::ShellError;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::TryRecvError;
use tracing::warn;

/// Events the chrome reacts to. Raw engine callbacks are translated into
/// this closed set at the hosted-view boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostedViewEvent {
    /// The document title changed.
    TitleChanged { title: String },
    /// The page asked for a new window or tab.
    NewWindowRequested { url: String },
    /// A navigation finished. Carries the view's state at that instant.
    NavigationCompleted {
        url: String,
        can_go_back: bool,
        can_go_forward: bool,
    },
}

/// The single browser view the chrome controls.
///
/// The chrome never creates or destroys the view; it only reads its state,
/// issues commands, and listens to its events. Commands are non-blocking:
/// their effect shows up later as a [`HostedViewEvent::NavigationCompleted`].
pub trait HostedView {
    fn title(&self) -> String;
    fn url(&self) -> String;
    fn can_go_back(&self) -> bool;
    fn can_go_forward(&self) -> bool;

    fn go_back(&self) -> Result<(), ShellError>;
    fn go_forward(&self) -> Result<(), ShellError>;
    fn reload(&self) -> Result<(), ShellError>;
    fn load_url(&self, url: &str) -> Result<(), ShellError>;

    /// Render the current page into an image.
    fn capture_page(&self) -> Result<RgbaImage, ShellError>;

    /// Register a listener. The listener lives exactly as long as the
    /// returned [`Subscription`].
    fn subscribe(&self) -> Subscription;
}

/// Broadcast fan-out for hosted view events.
pub struct ViewEventBus {
    sender: broadcast::Sender<HostedViewEvent>,
}

impl ViewEventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> Subscription {
        Subscription {
            receiver: self.sender.subscribe(),
        }
    }

    /// Publish to every live subscription; returns how many received it.
    pub fn publish(&self, event: HostedViewEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ViewEventBus {
    fn default() -> Self {
        Self::new(64)
    }
}

/// A registered listener on a hosted view. Dropping it unregisters.
pub struct Subscription {
    receiver: broadcast::Receiver<HostedViewEvent>,
}

impl Subscription {
    /// Take every pending event without blocking.
    ///
    /// If the listener fell behind, the oldest events are lost; the newest
    /// ones are still delivered.
    pub fn drain(&mut self) -> Vec<HostedViewEvent> {
        let mut events = Vec::new();
        loop {
            match self.receiver.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!(skipped, "hosted view subscription lagged");
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
        events
    }
}

//! Channel-backed notification surface.
//!
//! Capture tasks run on the tokio runtime; their messages are sent here and
//! drained on the UI thread.

use std::sync::mpsc;

use minibrowser_common::{Notification, NotificationLevel, NotificationSurface};

pub struct ChannelNotifier {
    tx: mpsc::Sender<Notification>,
}

pub struct NotificationInbox {
    rx: mpsc::Receiver<Notification>,
}

pub fn channel() -> (ChannelNotifier, NotificationInbox) {
    let (tx, rx) = mpsc::channel();
    (
        ChannelNotifier { tx },
        NotificationInbox { rx },
    )
}

impl NotificationSurface for ChannelNotifier {
    fn show_message(&self, level: NotificationLevel, title: &str, text: &str) {
        let notification = Notification::new(level, title, text);
        if self.tx.send(notification).is_err() {
            tracing::debug!(title, "notification dropped: inbox closed");
        }
    }
}

impl NotificationInbox {
    /// Every notification received since the last call, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        self.rx.try_iter().collect()
    }
}

//! Fixed-interval polling of the page view, toolbar and notification inbox.

use std::time::{Duration, Instant};

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::BrowserApp;
use super::title::window_title;

pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);

impl BrowserApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        // GTK has no loop of its own under winit; drive it every wake-up.
        minibrowser_webview::pump_platform_events();

        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_page_events();
            self.poll_toolbar_commands();
            self.poll_notifications();
            self.sync_toolbar_state();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    /// Translate engine callbacks and let the controller reconcile them.
    fn poll_page_events(&mut self) {
        let Some(controller) = self.controller.as_mut() else {
            return;
        };
        if controller.view().pump() > 0 {
            let handled = controller.process_events();
            tracing::trace!(handled, "page events processed");
        }
    }

    fn poll_toolbar_commands(&mut self) {
        let (Some(toolbar), Some(controller)) = (&self.toolbar, self.controller.as_mut()) else {
            return;
        };

        for command in toolbar.drain_commands() {
            let Some(task) = controller.dispatch(command) else {
                continue;
            };
            match &self.runtime {
                Some(rt) => {
                    let suggested = task.suggested_path().display().to_string();
                    rt.spawn(async move {
                        let outcome = task.run().await;
                        tracing::debug!(?outcome, suggested = %suggested, "capture finished");
                    });
                }
                None => tracing::warn!("Capture requested but the capture runtime is not running"),
            }
        }
    }

    fn poll_notifications(&mut self) {
        let incoming = self.inbox.drain();
        if incoming.is_empty() {
            return;
        }
        for notification in incoming {
            self.notifications.push(notification);
        }
        if let (Some(toolbar), Some(latest)) = (&self.toolbar, self.notifications.latest()) {
            toolbar.notify(latest);
        }
    }

    /// Re-render the toolbar and window title when the store changed.
    fn sync_toolbar_state(&mut self) {
        let Some(rx) = self.state_rx.as_mut() else {
            return;
        };
        if !rx.has_changed().unwrap_or(false) {
            return;
        }
        let snapshot = rx.borrow_and_update().snapshot();

        if let Some(toolbar) = &self.toolbar {
            toolbar.render(&snapshot);
        }
        if let Some(window) = &self.window {
            window.set_title(&window_title(&snapshot.title, &self.config.window.title));
        }
    }

    pub(super) fn update_window_title(&self) {
        let (Some(window), Some(controller)) = (&self.window, &self.controller) else {
            return;
        };
        let title = controller.store().state().title().to_string();
        window.set_title(&window_title(&title, &self.config.window.title));
    }
}

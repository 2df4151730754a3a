//! Chrome controller: user intents in, hosted-view commands out, hosted-view
//! events reconciled into the navigation store.
//!
//! The controller is single-threaded and never blocks. Navigation commands
//! only *request* a change; the store is brought back in line with the view
//! by the `NavigationCompleted` handler, which is the one reconciliation
//! point for every navigation regardless of cause.

use std::rc::Rc;

use minibrowser_common::{ChromeServices, NotificationLevel, ShellError};
use tracing::{debug, info, warn};

use crate::address::normalize_address;
use crate::capture::{CaptureSettings, CaptureTask};
use crate::commands::ChromeCommand;
use crate::host::{HostedView, HostedViewEvent, Subscription};
use crate::state::NavigationStore;

pub struct ChromeController<V: HostedView> {
    view: Rc<V>,
    store: NavigationStore,
    subscription: Subscription,
    services: ChromeServices,
    capture: CaptureSettings,
}

impl<V: HostedView> ChromeController<V> {
    /// Attach to a hosted view: subscribe to its events and seed the store
    /// from its current state.
    pub fn attach(view: Rc<V>, services: ChromeServices, capture: CaptureSettings) -> Self {
        // Subscribe before reading so nothing between the two is missed.
        let subscription = view.subscribe();
        let store = NavigationStore::initialize(
            view.title(),
            view.url(),
            view.can_go_back(),
            view.can_go_forward(),
        );
        info!(url = %store.state().address_text(), "chrome attached to hosted view");

        Self {
            view,
            store,
            subscription,
            services,
            capture,
        }
    }

    /// Release the event subscription and hand the view back.
    pub fn detach(self) -> Rc<V> {
        debug!("chrome detached from hosted view");
        self.view
    }

    pub fn store(&self) -> &NavigationStore {
        &self.store
    }

    pub fn view(&self) -> &Rc<V> {
        &self.view
    }

    // =========================================================================
    // EVENTS
    // =========================================================================

    /// Handle every pending hosted-view event. Returns how many ran.
    pub fn process_events(&mut self) -> usize {
        let events = self.subscription.drain();
        let count = events.len();
        for event in events {
            self.handle_event(event);
        }
        count
    }

    pub fn handle_event(&mut self, event: HostedViewEvent) {
        match event {
            HostedViewEvent::TitleChanged { title } => {
                debug!(title = %title, "title changed");
                self.store.set_title(&title);
            }
            HostedViewEvent::NewWindowRequested { url } => {
                // Single-view shell: load the target here instead.
                debug!(url = %url, "new window redirected into hosted view");
                self.navigate(Some(&url), |view| view.load_url(&url));
            }
            HostedViewEvent::NavigationCompleted {
                url,
                can_go_back,
                can_go_forward,
            } => {
                debug!(url = %url, can_go_back, can_go_forward, "navigation completed");
                self.store.set_address_from_navigation(&url);
                self.store.set_history_flags(can_go_back, can_go_forward);
            }
        }
    }

    // =========================================================================
    // COMMANDS
    // =========================================================================

    /// Route a toolbar command. Only `Capture` yields follow-up work.
    pub fn dispatch(&mut self, command: ChromeCommand) -> Option<CaptureTask> {
        match command {
            ChromeCommand::SubmitAddress(text) => self.submit_address(&text),
            ChromeCommand::EditAddress(text) => self.edit_address(&text),
            ChromeCommand::Back => {
                self.go_back();
            }
            ChromeCommand::Forward => {
                self.go_forward();
            }
            ChromeCommand::Refresh => self.refresh(),
            ChromeCommand::Capture => return self.capture_page(),
            ChromeCommand::CopyLink => self.copy_current_link(),
            ChromeCommand::OpenExternal => self.open_in_external_browser(),
        }
        None
    }

    /// Enter pressed in the address field.
    pub fn submit_address(&mut self, raw: &str) {
        let url = normalize_address(raw);
        info!(url = %url, "address submitted");
        self.navigate(Some(&url), |view| view.load_url(&url));
    }

    /// Keystroke in the address field. No normalization yet.
    pub fn edit_address(&mut self, raw: &str) {
        self.store.set_address_from_user_input(raw);
    }

    /// Go back if history allows it. Returns whether a command was issued.
    pub fn go_back(&mut self) -> bool {
        if !self.store.state().can_go_back() {
            debug!("back suppressed: no back entry");
            return false;
        }
        self.navigate(None, |view| view.go_back())
    }

    /// Go forward if history allows it. Returns whether a command was issued.
    pub fn go_forward(&mut self) -> bool {
        if !self.store.state().can_go_forward() {
            debug!("forward suppressed: no forward entry");
            return false;
        }
        self.navigate(None, |view| view.go_forward())
    }

    pub fn refresh(&mut self) {
        self.navigate(None, |view| view.reload());
    }

    /// Snapshot the page now and return the save flow to run off the UI
    /// thread. Snapshot failure is reported here and yields no task.
    pub fn capture_page(&self) -> Option<CaptureTask> {
        match self.view.capture_page() {
            Ok(image) => {
                debug!(
                    width = image.width(),
                    height = image.height(),
                    "page captured"
                );
                Some(CaptureTask::new(image, &self.capture, self.services.clone()))
            }
            Err(e) => {
                warn!(error = %e, "page capture failed");
                self.services.notify(
                    NotificationLevel::Error,
                    "Screenshot failed",
                    &e.to_string(),
                );
                None
            }
        }
    }

    /// Put the page URL on the clipboard and confirm.
    pub fn copy_current_link(&self) {
        let url = self.view.url();
        match self.services.clipboard.write_text(&url) {
            Ok(()) => {
                info!(url = %url, "link copied");
                self.services
                    .notify(NotificationLevel::Info, "Link copied", &url);
            }
            Err(e) => {
                warn!(error = %e, "copy link failed");
                self.services
                    .notify(NotificationLevel::Error, "Copy failed", &e.to_string());
            }
        }
    }

    /// Hand the page URL to the system browser.
    pub fn open_in_external_browser(&self) {
        let url = self.view.url();
        if let Err(e) = self.services.opener.open_external(&url) {
            warn!(error = %e, url = %url, "open in external browser failed");
            self.services.notify(
                NotificationLevel::Error,
                "Could not open browser",
                &e.to_string(),
            );
        }
    }

    /// Issue a navigation command; enter `Loading` only if the view took it.
    fn navigate(
        &self,
        target: Option<&str>,
        command: impl FnOnce(&V) -> Result<(), ShellError>,
    ) -> bool {
        match command(&*self.view) {
            Ok(()) => {
                self.store.begin_loading(target);
                true
            }
            Err(e) => {
                warn!(error = %e, requested = ?target, "navigation command failed");
                self.services.notify(
                    NotificationLevel::Error,
                    "Navigation failed",
                    &e.to_string(),
                );
                false
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::CaptureOutcome;
    use crate::state::{AddressPhase, PhaseKind};
    use crate::testing::{FakeServices, FakeView, SaveResponse, ViewCall};

    fn attach(view: FakeView) -> (Rc<FakeView>, FakeServices, ChromeController<FakeView>) {
        let view = Rc::new(view);
        let fakes = FakeServices::new(SaveResponse::Accept);
        let controller =
            ChromeController::attach(view.clone(), fakes.services(), CaptureSettings::default());
        (view, fakes, controller)
    }

    // -- attach --

    #[test]
    fn attach_seeds_store_from_view() {
        let (view, _, controller) = attach(FakeView::new("Docs", "https://a.test/", true, false));
        let state = controller.store().state();
        assert_eq!(state.title(), "Docs");
        assert_eq!(state.address_text(), "https://a.test/");
        assert!(state.can_go_back());
        assert!(!state.can_go_forward());
        assert_eq!(view.subscriber_count(), 1);
    }

    #[test]
    fn detach_releases_subscription() {
        let (view, _, controller) = attach(FakeView::blank());
        assert_eq!(view.subscriber_count(), 1);

        let returned = controller.detach();
        assert!(Rc::ptr_eq(&returned, &view));
        assert_eq!(view.subscriber_count(), 0);
    }

    #[test]
    fn reattach_does_not_accumulate_listeners() {
        let (view, fakes, controller) = attach(FakeView::blank());
        drop(controller);
        assert_eq!(view.subscriber_count(), 0);

        for _ in 0..3 {
            let c = ChromeController::attach(
                view.clone(),
                fakes.services(),
                CaptureSettings::default(),
            );
            assert_eq!(view.subscriber_count(), 1);
            c.detach();
        }
        assert_eq!(view.subscriber_count(), 0);
    }

    // -- submit / edit --

    #[test]
    fn submit_prefixes_https() {
        let (view, _, mut controller) = attach(FakeView::blank());
        controller.submit_address("example.com");
        assert_eq!(view.calls(), vec![ViewCall::Load("https://example.com".into())]);
    }

    #[test]
    fn submit_passes_http_and_https_through() {
        let (view, _, mut controller) = attach(FakeView::blank());
        controller.submit_address("http://plain.test");
        controller.submit_address("https://secure.test/x");
        assert_eq!(
            view.calls(),
            vec![
                ViewCall::Load("http://plain.test".into()),
                ViewCall::Load("https://secure.test/x".into()),
            ]
        );
    }

    #[test]
    fn submit_enters_loading_with_target() {
        let (_, _, mut controller) = attach(FakeView::blank());
        controller.edit_address("example.com");
        controller.submit_address("example.com");

        assert_eq!(
            controller.store().state().phase(),
            &AddressPhase::Loading {
                shown: "example.com".into(),
                target: Some("https://example.com".into()),
                url: "about:blank".into(),
            }
        );
    }

    #[test]
    fn rejected_load_leaves_state_untouched() {
        let (view, fakes, mut controller) = attach(FakeView::blank());
        view.fail_commands();
        controller.edit_address("bad");
        let before = controller.store().state().clone();

        controller.submit_address("bad");

        assert_eq!(*controller.store().state(), before);
        assert_eq!(
            fakes.last_notification().unwrap().1,
            "Navigation failed"
        );
    }

    #[test]
    fn edit_never_touches_history_flags() {
        let (view, _, mut controller) = attach(FakeView::new("", "https://a.test/", true, true));
        controller.edit_address("x");
        controller.edit_address("xy");

        let state = controller.store().state();
        assert_eq!(state.address_text(), "xy");
        assert!(state.can_go_back());
        assert!(state.can_go_forward());
        assert!(view.calls().is_empty());
    }

    // -- back / forward gating --

    #[test]
    fn back_and_forward_gated_on_flags() {
        let (view, _, mut controller) = attach(FakeView::blank());
        let before = controller.store().state().clone();

        assert!(!controller.go_back());
        assert!(!controller.go_forward());

        assert!(view.calls().is_empty());
        assert_eq!(*controller.store().state(), before);
    }

    #[test]
    fn back_issued_when_allowed() {
        let (view, _, mut controller) = attach(FakeView::new("", "https://b.test/", true, false));
        assert!(controller.go_back());
        assert!(!controller.go_forward());
        assert_eq!(view.calls(), vec![ViewCall::Back]);
        assert_eq!(controller.store().state().phase().kind(), PhaseKind::Loading);
    }

    #[test]
    fn gating_uses_store_flags_not_live_view() {
        let (view, _, mut controller) = attach(FakeView::blank());
        // The view moved on but the completion event has not been handled yet.
        view.complete_navigation("https://a.test/", true, false);

        assert!(!controller.go_back());
        controller.process_events();
        assert!(controller.go_back());
    }

    // -- refresh --

    #[test]
    fn refresh_twice_issues_two_reloads_and_converges() {
        let (view, _, mut controller) = attach(FakeView::new("", "https://a.test/", true, false));
        controller.edit_address("ignored");
        view.clear_calls();
        controller.refresh();
        controller.refresh();
        assert_eq!(view.calls(), vec![ViewCall::Reload, ViewCall::Reload]);

        view.complete_navigation("https://a.test/", true, false);
        controller.process_events();
        let first = controller.store().state().clone();

        view.complete_navigation("https://a.test/", true, false);
        controller.process_events();
        assert_eq!(*controller.store().state(), first);
        assert_eq!(first.phase(), &AddressPhase::Idle { url: "https://a.test/".into() });
    }

    // -- events --

    #[test]
    fn title_event_updates_store() {
        let (view, _, mut controller) = attach(FakeView::blank());
        view.change_title("Example Domain");
        assert_eq!(controller.process_events(), 1);
        assert_eq!(controller.store().state().title(), "Example Domain");
    }

    #[test]
    fn new_window_loads_in_same_view() {
        let (view, _, mut controller) = attach(FakeView::new("", "https://a.test/", false, false));
        view.request_new_window("https://popup.test/");
        controller.process_events();

        assert_eq!(view.calls(), vec![ViewCall::Load("https://popup.test/".into())]);
        assert_eq!(controller.store().state().phase().kind(), PhaseKind::Loading);
    }

    #[test]
    fn completion_discards_any_edit() {
        let (view, _, mut controller) = attach(FakeView::new("", "https://a.test/", false, false));
        controller.edit_address("something else entirely");

        view.complete_navigation("https://b.test/", true, false);
        controller.process_events();

        let state = controller.store().state();
        assert_eq!(state.address_text(), "https://b.test/");
        assert!(state.can_go_back());
        assert!(!state.can_go_forward());
        assert_eq!(state.phase().kind(), PhaseKind::Idle);
    }

    #[test]
    fn redirect_chain_settles_on_last_completion() {
        let (view, _, mut controller) = attach(FakeView::blank());
        controller.submit_address("short.test");
        view.complete_navigation("https://short.test/", true, false);
        view.complete_navigation("https://www.short.test/", true, false);
        view.complete_navigation("https://www.short.test/home", true, false);

        assert_eq!(controller.process_events(), 3);
        assert_eq!(
            controller.store().state().address_text(),
            "https://www.short.test/home"
        );
    }

    #[test]
    fn end_to_end_submit_scenario() {
        let (view, _, mut controller) = attach(FakeView::blank());

        controller.edit_address("example.com");
        {
            let state = controller.store().state();
            assert_eq!(state.address_text(), "example.com");
            assert!(!state.can_go_back());
            assert!(!state.can_go_forward());
        }

        controller.submit_address("example.com");
        assert_eq!(view.calls(), vec![ViewCall::Load("https://example.com".into())]);

        view.complete_navigation("https://example.com/", true, false);
        controller.process_events();

        let snap = controller.store().snapshot();
        assert_eq!(snap.address, "https://example.com/");
        assert!(snap.can_go_back);
        assert!(!snap.can_go_forward);
        assert_eq!(snap.phase, PhaseKind::Idle);
    }

    #[test]
    fn forward_without_entry_is_noop() {
        let (view, fakes, mut controller) = attach(FakeView::new("", "https://a.test/", true, false));
        let before = controller.store().state().clone();

        controller.dispatch(ChromeCommand::Forward);

        assert!(view.calls().is_empty());
        assert_eq!(*controller.store().state(), before);
        assert!(fakes.notifications().is_empty());
    }

    // -- copy / open --

    #[test]
    fn copy_link_writes_clipboard_and_confirms() {
        let (_, fakes, controller) = attach(FakeView::new("", "https://a.test/page", false, false));
        controller.copy_current_link();

        assert_eq!(fakes.clipboard(), vec!["https://a.test/page".to_string()]);
        let (level, title, text) = fakes.last_notification().unwrap();
        assert_eq!(level, NotificationLevel::Info);
        assert_eq!(title, "Link copied");
        assert_eq!(text, "https://a.test/page");
    }

    #[test]
    fn copy_link_failure_is_notified() {
        let (_, fakes, controller) = attach(FakeView::blank());
        fakes.fail_clipboard();
        let before = controller.store().state().clone();

        controller.copy_current_link();

        assert_eq!(fakes.last_notification().unwrap().0, NotificationLevel::Error);
        assert_eq!(*controller.store().state(), before);
    }

    #[test]
    fn open_external_uses_live_url() {
        let (view, fakes, mut controller) = attach(FakeView::blank());
        view.complete_navigation("https://live.test/", false, false);

        controller.dispatch(ChromeCommand::OpenExternal);

        assert_eq!(fakes.opened(), vec!["https://live.test/".to_string()]);
        assert!(fakes.notifications().is_empty());
    }

    #[test]
    fn open_external_failure_is_notified() {
        let (_, fakes, controller) = attach(FakeView::blank());
        fakes.fail_open();
        controller.open_in_external_browser();
        assert_eq!(
            fakes.last_notification().unwrap().1,
            "Could not open browser"
        );
    }

    // -- capture --

    #[test]
    fn capture_without_snapshot_notifies_and_yields_nothing() {
        let (view, fakes, controller) = attach(FakeView::blank());
        view.without_snapshot();

        assert!(controller.capture_page().is_none());
        assert_eq!(fakes.last_notification().unwrap().0, NotificationLevel::Error);
    }

    #[tokio::test]
    async fn capture_survives_navigation_while_pending() {
        let (view, fakes, mut controller) = attach(FakeView::blank());

        let task = controller
            .dispatch(ChromeCommand::Capture)
            .expect("capture task");

        // Navigate while the save flow is still pending.
        controller.submit_address("example.com");
        view.complete_navigation("https://example.com/", true, false);
        controller.process_events();

        let outcome = task.run().await;
        assert_eq!(
            outcome,
            CaptureOutcome::Saved("/downloads/mini-browser.jpg".into())
        );
        assert_eq!(fakes.written().len(), 1);
        assert_eq!(
            controller.store().state().address_text(),
            "https://example.com/"
        );
    }

    #[test]
    fn dispatch_routes_edit_and_submit() {
        let (view, _, mut controller) = attach(FakeView::blank());
        assert!(controller
            .dispatch(ChromeCommand::EditAddress("rust-lang.org".into()))
            .is_none());
        assert_eq!(controller.store().state().address_text(), "rust-lang.org");

        controller.dispatch(ChromeCommand::SubmitAddress("rust-lang.org".into()));
        assert_eq!(
            view.calls(),
            vec![ViewCall::Load("https://rust-lang.org".into())]
        );
    }
}

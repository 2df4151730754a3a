//! The hosted page view: a child `wry::WebView` behind the `HostedView`
//! contract.

use std::cell::RefCell;
use std::sync::{Arc, Mutex};

use image::RgbaImage;
use minibrowser_chrome::{HostedView, Subscription, ViewEventBus};
#[cfg(not(target_os = "linux"))]
use minibrowser_common::PlatformError;
use minibrowser_common::ShellError;
use tracing::{debug, info};
use wry::raw_window_handle;
use wry::{WebView, WebViewBuilder};

use crate::events::{PageLoadState, RawViewEvent};
use crate::history::Traversal;
use crate::page::PageState;
use crate::types::ViewConfig;

type RawQueue = Arc<Mutex<Vec<RawViewEvent>>>;

pub struct WryHostedView {
    webview: WebView,
    raw: RawQueue,
    page: RefCell<PageState>,
    bus: ViewEventBus,
}

impl WryHostedView {
    /// Create the page view as a child of `window`, positioned at `bounds`.
    pub fn build<W: raw_window_handle::HasWindowHandle>(
        window: &W,
        bounds: wry::Rect,
        config: &ViewConfig,
    ) -> Result<Self, ShellError> {
        let raw: RawQueue = Arc::new(Mutex::new(Vec::new()));

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_clipboard(true)
            .with_focused(true);
        builder = config.apply(builder);
        builder = attach_page_load_handler(builder, Arc::clone(&raw));
        builder = attach_title_handler(builder, Arc::clone(&raw));
        builder = attach_new_window_handler(builder, Arc::clone(&raw));

        let webview = builder
            .build_as_child(window)
            .map_err(|e| ShellError::WebView(e.to_string()))?;

        info!(url = %config.initial_url(), "page view created");

        Ok(Self {
            webview,
            raw,
            page: RefCell::new(PageState::new(config.initial_url())),
            bus: ViewEventBus::default(),
        })
    }

    /// Translate queued engine callbacks into typed events and publish them.
    /// Returns the number of events published.
    pub fn pump(&self) -> usize {
        let raw = match self.raw.lock() {
            Ok(mut queue) => std::mem::take(&mut *queue),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        };
        if raw.is_empty() {
            return 0;
        }

        let mut published = 0;
        for event in raw {
            let typed = self.page.borrow_mut().apply(event);
            if let Some(typed) = typed {
                self.bus.publish(typed);
                published += 1;
            }
        }
        published
    }

    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), ShellError> {
        self.webview.set_bounds(bounds).map_err(webview_error)
    }

    pub fn focus(&self) -> Result<(), ShellError> {
        self.webview.focus().map_err(webview_error)
    }

    fn traverse(&self, traversal: Traversal, script: &str) -> Result<(), ShellError> {
        self.page.borrow_mut().begin_traversal(traversal);
        debug!(?traversal, "history traversal issued");
        self.webview.evaluate_script(script).map_err(webview_error)
    }
}

fn webview_error(e: wry::Error) -> ShellError {
    ShellError::WebView(e.to_string())
}

impl HostedView for WryHostedView {
    fn title(&self) -> String {
        self.page.borrow().title().to_string()
    }

    fn url(&self) -> String {
        self.page.borrow().url().to_string()
    }

    fn can_go_back(&self) -> bool {
        self.page.borrow().history().can_go_back()
    }

    fn can_go_forward(&self) -> bool {
        self.page.borrow().history().can_go_forward()
    }

    fn go_back(&self) -> Result<(), ShellError> {
        self.traverse(Traversal::Back, "history.back();")
    }

    fn go_forward(&self) -> Result<(), ShellError> {
        self.traverse(Traversal::Forward, "history.forward();")
    }

    fn reload(&self) -> Result<(), ShellError> {
        self.page.borrow_mut().begin_traversal(Traversal::Reload);
        self.webview.reload().map_err(webview_error)
    }

    fn load_url(&self, url: &str) -> Result<(), ShellError> {
        self.page.borrow_mut().begin_load();
        self.webview.load_url(url).map_err(webview_error)
    }

    #[cfg(target_os = "linux")]
    fn capture_page(&self) -> Result<RgbaImage, ShellError> {
        crate::snapshot::capture_visible(&self.webview)
    }

    #[cfg(not(target_os = "linux"))]
    fn capture_page(&self) -> Result<RgbaImage, ShellError> {
        Err(PlatformError::NotSupported("page capture needs the WebKitGTK backend".into()).into())
    }

    fn subscribe(&self) -> Subscription {
        self.bus.subscribe()
    }
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

fn push(queue: &RawQueue, event: RawViewEvent) {
    if let Ok(mut events) = queue.lock() {
        events.push(event);
    }
}

fn attach_page_load_handler(builder: WebViewBuilder<'_>, raw: RawQueue) -> WebViewBuilder<'_> {
    builder.with_on_page_load_handler(move |event, url| {
        let state = PageLoadState::from(event);
        debug!(?state, url = %url, "page load");
        push(&raw, RawViewEvent::PageLoad { state, url });
    })
}

fn attach_title_handler(builder: WebViewBuilder<'_>, raw: RawQueue) -> WebViewBuilder<'_> {
    builder.with_document_title_changed_handler(move |title| {
        debug!(title = %title, "title changed");
        push(&raw, RawViewEvent::TitleChanged { title });
    })
}

/// Popups are always denied; the request is re-emitted so the chrome can
/// load the target in the single page view.
fn attach_new_window_handler(builder: WebViewBuilder<'_>, raw: RawQueue) -> WebViewBuilder<'_> {
    builder.with_new_window_req_handler(move |url| {
        debug!(url = %url, "new window request intercepted");
        push(&raw, RawViewEvent::NewWindowRequested { url });
        false
    })
}

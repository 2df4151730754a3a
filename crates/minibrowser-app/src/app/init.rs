//! Window and webview creation.

use std::rc::Rc;
use std::sync::Arc;

use minibrowser_chrome::ChromeController;
use minibrowser_common::ShellError;
use minibrowser_webview::{ToolbarView, ViewConfig, WryHostedView};
use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use super::core::BrowserApp;
use super::layout::ChromeLayout;

impl BrowserApp {
    /// Create the window, the toolbar, the page view and the controller.
    /// Returns `false` if any of them could not be created.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = Window::default_attributes()
            .with_title(self.config.window.title.clone())
            .with_inner_size(LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        if let Err(e) = self.build_chrome(&window) {
            tracing::error!("Failed to create webviews: {e}");
            return false;
        }

        self.window = Some(window);
        self.update_window_title();
        tracing::info!("Window initialized");
        true
    }

    fn build_chrome(&mut self, window: &Window) -> Result<(), ShellError> {
        let layout = self.layout_for(window);

        let toolbar =
            ToolbarView::build(window, layout.toolbar.to_wry(), self.config.browser.devtools)?;

        let page_config = ViewConfig {
            devtools: self.config.browser.devtools,
            user_agent: self.config.browser.user_agent.clone(),
            ..ViewConfig::with_url(self.start_url.clone())
        };
        let page = WryHostedView::build(window, layout.page.to_wry(), &page_config)?;
        if let Err(e) = page.focus() {
            tracing::debug!("Could not focus page view: {e}");
        }

        let controller =
            ChromeController::attach(Rc::new(page), self.services.clone(), self.capture_settings());
        let state_rx = controller.store().subscribe();
        toolbar.render(&controller.store().snapshot());

        self.toolbar = Some(toolbar);
        self.controller = Some(controller);
        self.state_rx = Some(state_rx);
        Ok(())
    }

    pub(super) fn layout_for(&self, window: &Window) -> ChromeLayout {
        let size = window.inner_size().to_logical::<f64>(window.scale_factor());
        ChromeLayout::compute(
            size.width,
            size.height,
            f64::from(self.config.toolbar.height),
        )
    }

    /// Re-apply the layout after a resize.
    pub(super) fn sync_webview_bounds(&self) {
        let Some(window) = &self.window else {
            return;
        };
        let layout = self.layout_for(window);

        if let Some(toolbar) = &self.toolbar {
            if let Err(e) = toolbar.set_bounds(layout.toolbar.to_wry()) {
                tracing::warn!("Failed to resize toolbar: {e}");
            }
        }
        if let Some(controller) = &self.controller {
            if let Err(e) = controller.view().set_bounds(layout.page.to_wry()) {
                tracing::warn!("Failed to resize page view: {e}");
            }
        }
    }
}

//! Mini Browser: a single-window browser with a webview toolbar.
//!
//! Linux builds render through WebKitGTK and need an X11 display (XWayland is
//! fine); GTK is initialized here before the event loop starts.

mod app;
mod cli;

use std::path::Path;

use minibrowser_chrome::normalize_address;
use minibrowser_config::BrowserConfig;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

fn main() {
    let args = cli::parse();

    // Config first: its [logging] level feeds the subscriber.
    let loaded = match &args.config {
        Some(path) => minibrowser_config::load_config_from(Path::new(path)),
        None => minibrowser_config::load_config(),
    };

    let directive = cli::log_directive(
        args.log_level.as_deref(),
        loaded.as_ref().ok().map(|c| c.logging.level),
    );
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|e| {
        eprintln!("invalid log directive {directive:?}: {e}");
        EnvFilter::new(cli::DEFAULT_LOG_DIRECTIVE)
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Mini Browser v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        BrowserConfig::default()
    });

    let start_url = match args.url.as_deref() {
        Some(raw) => normalize_address(raw),
        None => config.browser.home_url.clone(),
    };
    tracing::info!(url = %start_url, "start page");

    if let Err(e) = minibrowser_webview::init_platform() {
        tracing::error!("Failed to initialize webview toolkit: {e}");
        std::process::exit(1);
    }

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut browser = app::BrowserApp::new(config, start_url);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut browser) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}

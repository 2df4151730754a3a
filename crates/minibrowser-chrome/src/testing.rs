//! Recording doubles for the hosted view and host services.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use image::{Rgba, RgbaImage};
use minibrowser_common::{
    ChromeServices, ClipboardWriter, DownloadsDirectory, ExternalOpener, FileSaveDialog,
    FileWriter, NotificationLevel, NotificationSurface, PlatformError, ShellError,
};

use crate::host::{HostedView, HostedViewEvent, Subscription, ViewEventBus};

// =============================================================================
// HOSTED VIEW
// =============================================================================

/// A command the controller issued to the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCall {
    Load(String),
    Back,
    Forward,
    Reload,
    Capture,
}

struct FakeViewState {
    title: String,
    url: String,
    can_go_back: bool,
    can_go_forward: bool,
    calls: Vec<ViewCall>,
    fail_commands: bool,
    snapshot: Option<RgbaImage>,
}

pub struct FakeView {
    state: RefCell<FakeViewState>,
    bus: ViewEventBus,
}

impl FakeView {
    pub fn new(title: &str, url: &str, can_go_back: bool, can_go_forward: bool) -> Self {
        Self {
            state: RefCell::new(FakeViewState {
                title: title.into(),
                url: url.into(),
                can_go_back,
                can_go_forward,
                calls: Vec::new(),
                fail_commands: false,
                snapshot: Some(RgbaImage::from_pixel(4, 4, Rgba([0, 128, 255, 255]))),
            }),
            bus: ViewEventBus::default(),
        }
    }

    pub fn blank() -> Self {
        Self::new("", "about:blank", false, false)
    }

    pub fn calls(&self) -> Vec<ViewCall> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    pub fn fail_commands(&self) {
        self.state.borrow_mut().fail_commands = true;
    }

    pub fn without_snapshot(&self) {
        self.state.borrow_mut().snapshot = None;
    }

    pub fn subscriber_count(&self) -> usize {
        self.bus.subscriber_count()
    }

    /// Simulate the engine finishing a navigation.
    pub fn complete_navigation(&self, url: &str, can_go_back: bool, can_go_forward: bool) {
        {
            let mut s = self.state.borrow_mut();
            s.url = url.into();
            s.can_go_back = can_go_back;
            s.can_go_forward = can_go_forward;
        }
        self.bus.publish(HostedViewEvent::NavigationCompleted {
            url: url.into(),
            can_go_back,
            can_go_forward,
        });
    }

    pub fn change_title(&self, title: &str) {
        self.state.borrow_mut().title = title.into();
        self.bus.publish(HostedViewEvent::TitleChanged {
            title: title.into(),
        });
    }

    pub fn request_new_window(&self, url: &str) {
        self.bus
            .publish(HostedViewEvent::NewWindowRequested { url: url.into() });
    }

    fn record(&self, call: ViewCall) -> Result<(), ShellError> {
        let mut s = self.state.borrow_mut();
        s.calls.push(call);
        if s.fail_commands {
            Err(ShellError::WebView("engine refused".into()))
        } else {
            Ok(())
        }
    }
}

impl HostedView for FakeView {
    fn title(&self) -> String {
        self.state.borrow().title.clone()
    }

    fn url(&self) -> String {
        self.state.borrow().url.clone()
    }

    fn can_go_back(&self) -> bool {
        self.state.borrow().can_go_back
    }

    fn can_go_forward(&self) -> bool {
        self.state.borrow().can_go_forward
    }

    fn go_back(&self) -> Result<(), ShellError> {
        self.record(ViewCall::Back)
    }

    fn go_forward(&self) -> Result<(), ShellError> {
        self.record(ViewCall::Forward)
    }

    fn reload(&self) -> Result<(), ShellError> {
        self.record(ViewCall::Reload)
    }

    fn load_url(&self, url: &str) -> Result<(), ShellError> {
        self.record(ViewCall::Load(url.into()))
    }

    fn capture_page(&self) -> Result<RgbaImage, ShellError> {
        self.state.borrow_mut().calls.push(ViewCall::Capture);
        self.state
            .borrow()
            .snapshot
            .clone()
            .ok_or_else(|| PlatformError::NotSupported("page capture".into()).into())
    }

    fn subscribe(&self) -> Subscription {
        self.bus.subscribe()
    }
}

// =============================================================================
// SERVICES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveResponse {
    Accept,
    Cancel,
    Error,
}

#[derive(Default)]
struct Recorded {
    clipboard: Mutex<Vec<String>>,
    opened: Mutex<Vec<String>>,
    notifications: Mutex<Vec<(NotificationLevel, String, String)>>,
    written: Mutex<Vec<(PathBuf, Vec<u8>)>>,
    fail_clipboard: AtomicBool,
    fail_open: AtomicBool,
    fail_writes: AtomicBool,
}

struct Fake {
    recorded: Arc<Recorded>,
    save: SaveResponse,
}

impl ClipboardWriter for Fake {
    fn write_text(&self, text: &str) -> Result<(), PlatformError> {
        if self.recorded.fail_clipboard.load(Ordering::SeqCst) {
            return Err(PlatformError::ClipboardError("no display".into()));
        }
        self.recorded.clipboard.lock().unwrap().push(text.into());
        Ok(())
    }
}

impl ExternalOpener for Fake {
    fn open_external(&self, url: &str) -> Result<(), PlatformError> {
        if self.recorded.fail_open.load(Ordering::SeqCst) {
            return Err(PlatformError::OpenError("no handler".into()));
        }
        self.recorded.opened.lock().unwrap().push(url.into());
        Ok(())
    }
}

impl NotificationSurface for Fake {
    fn show_message(&self, level: NotificationLevel, title: &str, text: &str) {
        self.recorded
            .notifications
            .lock()
            .unwrap()
            .push((level, title.into(), text.into()));
    }
}

impl DownloadsDirectory for Fake {
    fn downloads_dir(&self) -> Option<PathBuf> {
        Some(PathBuf::from("/downloads"))
    }
}

#[async_trait]
impl FileSaveDialog for Fake {
    async fn prompt_save_path(&self, suggested: &Path) -> Result<Option<PathBuf>, PlatformError> {
        match self.save {
            SaveResponse::Accept => Ok(Some(suggested.to_path_buf())),
            SaveResponse::Cancel => Ok(None),
            SaveResponse::Error => Err(PlatformError::DialogError("no display".into())),
        }
    }
}

#[async_trait]
impl FileWriter for Fake {
    async fn write(&self, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
        if self.recorded.fail_writes.load(Ordering::SeqCst) {
            return Err(std::io::Error::other("disk full"));
        }
        self.recorded
            .written
            .lock()
            .unwrap()
            .push((path.to_path_buf(), bytes.to_vec()));
        Ok(())
    }
}

/// Handle over the recording service doubles.
pub struct FakeServices {
    fake: Arc<Fake>,
}

impl FakeServices {
    pub fn new(save: SaveResponse) -> Self {
        Self {
            fake: Arc::new(Fake {
                recorded: Arc::new(Recorded::default()),
                save,
            }),
        }
    }

    pub fn services(&self) -> ChromeServices {
        ChromeServices {
            clipboard: self.fake.clone(),
            notifier: self.fake.clone(),
            opener: self.fake.clone(),
            downloads: self.fake.clone(),
            save_dialog: self.fake.clone(),
            file_writer: self.fake.clone(),
        }
    }

    pub fn clipboard(&self) -> Vec<String> {
        self.fake.recorded.clipboard.lock().unwrap().clone()
    }

    pub fn opened(&self) -> Vec<String> {
        self.fake.recorded.opened.lock().unwrap().clone()
    }

    pub fn written(&self) -> Vec<(PathBuf, Vec<u8>)> {
        self.fake.recorded.written.lock().unwrap().clone()
    }

    pub fn notifications(&self) -> Vec<(NotificationLevel, String, String)> {
        self.fake.recorded.notifications.lock().unwrap().clone()
    }

    pub fn last_notification(&self) -> Option<(NotificationLevel, String, String)> {
        self.notifications().last().cloned()
    }

    pub fn fail_clipboard(&self) {
        self.fake.recorded.fail_clipboard.store(true, Ordering::SeqCst);
    }

    pub fn fail_open(&self) {
        self.fake.recorded.fail_open.store(true, Ordering::SeqCst);
    }

    pub fn fail_writes(&self) {
        self.fake.recorded.fail_writes.store(true, Ordering::SeqCst);
    }
}

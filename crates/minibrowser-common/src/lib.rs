pub mod errors;
pub mod notifications;
pub mod services;

pub use errors::{ConfigError, PlatformError, ShellError};
pub use notifications::{Notification, NotificationLevel, NotificationQueue};
pub use services::{
    ChromeServices, ClipboardWriter, DownloadsDirectory, ExternalOpener, FileSaveDialog,
    FileWriter, NotificationSurface,
};

pub type Result<T> = std::result::Result<T, ShellError>;

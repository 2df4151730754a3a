//! Host-service adapters backing the chrome's collaborator traits.

pub mod clipboard;
pub mod files;
pub mod opener;
pub mod paths;

pub use clipboard::SystemClipboard;
pub use files::{RfdSaveDialog, TokioFileWriter};
pub use opener::SystemOpener;
pub use paths::{downloads_dir, SystemDownloads};

use std::io;
use std::process::{Command, ExitStatus};
use std::thread::{self, JoinHandle};

use minibrowser_common::{ExternalOpener, PlatformError};
use tracing::{debug, info, warn};

/// Opens URLs with the OS default handler (`open`, `xdg-open`,
/// `url.dll,FileProtocolHandler`).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

/// Build the platform command that opens `url` externally.
///
/// The URL is always a single argv entry handed straight to the handler; no
/// shell parses it.
pub(crate) fn open_command(url: &str) -> Command {
    #[cfg(target_os = "windows")]
    let cmd = {
        let mut c = Command::new("rundll32");
        c.args(["url.dll,FileProtocolHandler", url]);
        c
    };

    #[cfg(target_os = "macos")]
    let cmd = {
        let mut c = Command::new("open");
        c.arg(url);
        c
    };

    #[cfg(all(unix, not(target_os = "macos")))]
    let cmd = {
        let mut c = Command::new("xdg-open");
        c.arg(url);
        c
    };

    cmd
}

/// Spawn `cmd` and wait for it on a background thread so the child is reaped.
///
/// Returns the waiter's handle, or `None` if the waiter thread could not be
/// started (the child still runs).
pub(crate) fn spawn_reaped(
    mut cmd: Command,
) -> Result<Option<JoinHandle<io::Result<ExitStatus>>>, PlatformError> {
    let mut child = cmd
        .spawn()
        .map_err(|e| PlatformError::OpenError(e.to_string()))?;
    let pid = child.id();

    let waiter = thread::Builder::new()
        .name("opener-reaper".to_string())
        .spawn(move || {
            let status = child.wait();
            match &status {
                Ok(s) => debug!(pid, status = %s, "opener exited"),
                Err(e) => debug!(pid, "opener wait failed: {e}"),
            }
            status
        });

    match waiter {
        Ok(handle) => Ok(Some(handle)),
        Err(e) => {
            warn!(pid, "Failed to spawn opener reaper thread: {e}");
            Ok(None)
        }
    }
}

impl ExternalOpener for SystemOpener {
    fn open_external(&self, url: &str) -> Result<(), PlatformError> {
        let cmd = open_command(url);
        let program = cmd.get_program().to_string_lossy().into_owned();
        // Detached: the reaper thread outlives this call.
        spawn_reaped(cmd)?;
        info!(program, url, "opened in external browser");
        Ok(())
    }
}

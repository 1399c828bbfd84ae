//! Image-to-clipboard support.
//!
//! Only macOS is supported: `osascript` reads the PNG as a TIFF picture and
//! places it on the pasteboard. Every other platform reports
//! `UnsupportedPlatform`.

use std::path::Path;

use async_trait::async_trait;
use imgncli_core::{ClipboardPort, DesktopError};
use tokio::process::Command;
use tracing::debug;

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub const fn new() -> Self {
        Self
    }
}

/// AppleScript that loads `path` onto the clipboard.
fn applescript_for(path: &Path) -> String {
    let escaped = path
        .to_string_lossy()
        .replace('\\', "\\\\")
        .replace('"', "\\\"");
    format!("set the clipboard to (read (POSIX file \"{escaped}\") as TIFF picture)")
}

async fn copy_with_osascript(path: &Path) -> Result<(), DesktopError> {
    let output = Command::new("osascript")
        .arg("-e")
        .arg(applescript_for(path))
        .output()
        .await
        .map_err(|e| DesktopError::CommandFailed {
            command: "osascript".to_string(),
            reason: e.to_string(),
        })?;

    if output.status.success() {
        debug!(path = %path.display(), "Image copied to clipboard");
        Ok(())
    } else {
        Err(DesktopError::CommandFailed {
            command: "osascript".to_string(),
            reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

#[async_trait]
impl ClipboardPort for SystemClipboard {
    async fn copy_image(&self, path: &Path) -> Result<(), DesktopError> {
        if !path.is_file() {
            return Err(DesktopError::Io {
                path: path.to_path_buf(),
                reason: "file not found".to_string(),
            });
        }
        if cfg!(target_os = "macos") {
            copy_with_osascript(path).await
        } else {
            Err(DesktopError::UnsupportedPlatform(
                std::env::consts::OS.to_string(),
            ))
        }
    }
}

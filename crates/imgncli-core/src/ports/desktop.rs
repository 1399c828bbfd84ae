//! Desktop collaborators: clipboard and save-a-copy.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

/// Errors from host desktop integrations.
#[derive(Debug, Error)]
pub enum DesktopError {
    /// The host platform has no supported implementation.
    #[error("Clipboard image copy is not supported on {0}")]
    UnsupportedPlatform(String),

    /// An external command ran but reported failure.
    #[error("{command} failed: {reason}")]
    CommandFailed { command: String, reason: String },

    /// Filesystem error.
    #[error("I/O error on {path}: {reason}")]
    Io { path: PathBuf, reason: String },
}

/// Copies an image file to the system clipboard.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClipboardPort: Send + Sync {
    async fn copy_image(&self, path: &Path) -> Result<(), DesktopError>;
}

/// Saves a copy of an image file somewhere the user chose.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageExporter: Send + Sync {
    /// Copy `source` and return the path of the copy.
    async fn save_copy(&self, source: &Path) -> Result<PathBuf, DesktopError>;
}

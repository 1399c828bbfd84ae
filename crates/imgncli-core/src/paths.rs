//! Application directory layout.
//!
//! Everything the client persists lives under one directory:
//!
//! ```text
//! <root>/
//!   config.json
//!   history.json
//!   images/<uuid>.png
//!   logs/
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Default directory name under the user's home directory.
pub const APP_DIR_NAME: &str = ".aiascii";

const CONFIG_FILE: &str = "config.json";
const HISTORY_FILE: &str = "history.json";
const IMAGES_DIR: &str = "images";
const LOGS_DIR: &str = "logs";

/// Errors that can occur while resolving the application directory.
#[derive(Debug, Error)]
pub enum PathError {
    /// Could not determine the user's home directory.
    #[error("Cannot determine home directory")]
    NoHomeDir,

    /// An empty path was provided.
    #[error("Path cannot be empty")]
    EmptyPath,

    /// Failed to get the current working directory.
    #[error("Cannot determine current directory: {0}")]
    CurrentDirError(String),
}

/// Resolved locations of every persisted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    root: PathBuf,
}

impl AppPaths {
    /// Use `root` as the application directory as-is.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the application directory.
    ///
    /// Resolution order:
    /// 1. `explicit` (command-line flag or its environment variable)
    /// 2. `~/.aiascii`
    ///
    /// Relative paths are made absolute against the current directory so
    /// that blob paths recorded in history stay valid.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, PathError> {
        let root = match explicit {
            Some(path) if path.as_os_str().is_empty() => return Err(PathError::EmptyPath),
            Some(path) => path.to_path_buf(),
            None => dirs::home_dir()
                .ok_or(PathError::NoHomeDir)?
                .join(APP_DIR_NAME),
        };
        Ok(Self::new(absolutize(root)?))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    pub fn history_file(&self) -> PathBuf {
        self.root.join(HISTORY_FILE)
    }

    /// Directory holding generated image blobs.
    pub fn images_dir(&self) -> PathBuf {
        self.root.join(IMAGES_DIR)
    }

    /// Directory for rolling log files.
    pub fn logs_dir(&self) -> PathBuf {
        self.root.join(LOGS_DIR)
    }
}

fn absolutize(path: PathBuf) -> Result<PathBuf, PathError> {
    if path.is_absolute() {
        return Ok(path);
    }
    let cwd = std::env::current_dir().map_err(|e| PathError::CurrentDirError(e.to_string()))?;
    Ok(cwd.join(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let paths = AppPaths::new("/data/imgncli");
        assert_eq!(paths.config_file(), PathBuf::from("/data/imgncli/config.json"));
        assert_eq!(paths.history_file(), PathBuf::from("/data/imgncli/history.json"));
        assert_eq!(paths.images_dir(), PathBuf::from("/data/imgncli/images"));
        assert_eq!(paths.logs_dir(), PathBuf::from("/data/imgncli/logs"));
    }

    #[test]
    fn test_explicit_wins() {
        let paths = AppPaths::resolve(Some(Path::new("/srv/store"))).unwrap();
        assert_eq!(paths.root(), Path::new("/srv/store"));
    }

    #[test]
    fn test_relative_becomes_absolute() {
        let paths = AppPaths::resolve(Some(Path::new("rel/store"))).unwrap();
        assert!(paths.root().is_absolute());
        assert!(paths.root().ends_with("rel/store"));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(
            AppPaths::resolve(Some(Path::new(""))),
            Err(PathError::EmptyPath)
        ));
    }

    #[test]
    fn test_default_under_home() {
        if let Ok(paths) = AppPaths::resolve(None) {
            assert!(paths.root().ends_with(APP_DIR_NAME));
        }
    }
}

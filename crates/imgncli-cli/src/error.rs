//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from `CoreError` to exit codes.

use imgncli_core::{CoreError, PathError};
use imgncli_store::StoreError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// IO error (terminal, file not found, permission denied).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Persistent storage error.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Core(_) => 1,
            Self::Io(_) => 74,      // EX_IOERR
            Self::Config(_) => 78,  // EX_CONFIG
            Self::Storage(_) => 73, // EX_CANTCREAT
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => Self::Storage(repo_err.to_string()),
            CoreError::Validation(msg) => Self::Config(msg),
            other => Self::Core(other.to_string()),
        }
    }
}

impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imgncli_core::RepositoryError;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::Core(String::new()).exit_code(), 1);
        assert_eq!(CliError::Io(String::new()).exit_code(), 74);
        assert_eq!(CliError::Config(String::new()).exit_code(), 78);
        assert_eq!(CliError::Storage(String::new()).exit_code(), 73);
    }

    #[test]
    fn test_repository_errors_map_to_storage() {
        let err = CliError::from(CoreError::Repository(RepositoryError::Storage(
            "disk full".to_string(),
        )));
        assert!(matches!(err, CliError::Storage(ref m) if m.contains("disk full")));
    }

    #[test]
    fn test_path_errors_map_to_config() {
        let err = CliError::from(PathError::NoHomeDir);
        assert_eq!(err.exit_code(), 78);
    }
}

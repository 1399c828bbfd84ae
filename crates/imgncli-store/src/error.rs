//! Store error types.

use std::io;
use std::path::PathBuf;

use imgncli_core::RepositoryError;
use thiserror::Error;

/// Errors raised inside the store. Mapped to `RepositoryError` at the port
/// boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem operation failed.
    #[error("{op} {path}: {source}")]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Document could not be serialized.
    #[error("Failed to encode {document}: {source}")]
    Encode {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }
}

impl From<StoreError> for RepositoryError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Io { .. } => Self::Storage(err.to_string()),
            StoreError::Encode { .. } => Self::Serialization(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_maps_to_storage() {
        let err = StoreError::io(
            "write",
            "/data/config.json",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let mapped = RepositoryError::from(err);
        assert!(matches!(mapped, RepositoryError::Storage(ref m) if m.contains("/data/config.json")));
    }
}

//! Image blob repository trait definition.

use std::path::PathBuf;

use async_trait::async_trait;

use super::RepositoryError;

/// Write-once storage for generated images.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageBlobRepository: Send + Sync {
    /// Store `bytes` under a freshly generated name and return its absolute
    /// path. Never overwrites an existing blob.
    async fn write_blob(&self, bytes: &[u8]) -> Result<PathBuf, RepositoryError>;
}

//! History repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::HistoryEntry;

/// Newest-first persisted history.
///
/// # Design Rules
///
/// - `list` never fails on a malformed document; it returns what it can read
/// - `prepend` must leave either the old or the new document on disk, never
///   a torn one
/// - `clear` removes records only; image blobs stay on disk
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// All entries, newest first.
    async fn list(&self) -> Result<Vec<HistoryEntry>, RepositoryError>;

    /// Insert `entry` at the head and persist the whole document.
    async fn prepend(&self, entry: &HistoryEntry) -> Result<(), RepositoryError>;

    /// Replace the persisted sequence with an empty one.
    async fn clear(&self) -> Result<(), RepositoryError>;
}

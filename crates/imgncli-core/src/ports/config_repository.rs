//! Config repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::Config;

/// Whole-document access to the persisted `Config`.
///
/// # Design Rules
///
/// - `load` treats a missing or corrupt document as the empty default
/// - `save` replaces the whole document; callers read-modify-write
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConfigRepository: Send + Sync {
    /// Load the current config, or `Config::default()` if none is stored.
    async fn load(&self) -> Result<Config, RepositoryError>;

    /// Replace the stored config.
    async fn save(&self, config: &Config) -> Result<(), RepositoryError>;
}

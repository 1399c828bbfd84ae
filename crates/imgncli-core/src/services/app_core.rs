//! `AppCore` - the primary application facade.
//!
//! Adapters receive an `AppCore` instance built at their composition root
//! and reach every service through it.

use crate::ports::Repos;

use super::{ConfigService, HistoryService};

/// The core application facade.
///
/// # Example
///
/// ```ignore
/// let repos = imgncli_store::build_repos(store);
/// let core = AppCore::new(repos);
///
/// let model = core.config().get_selected_model().await?;
/// ```
pub struct AppCore {
    config: ConfigService,
    history: HistoryService,
}

impl AppCore {
    /// Create a new `AppCore` with the given repositories.
    pub fn new(repos: Repos) -> Self {
        Self {
            config: ConfigService::new(repos.config),
            history: HistoryService::new(repos.history, repos.blobs),
        }
    }

    /// Access the config service.
    pub const fn config(&self) -> &ConfigService {
        &self.config
    }

    /// Access the history service.
    pub const fn history(&self) -> &HistoryService {
        &self.history
    }
}

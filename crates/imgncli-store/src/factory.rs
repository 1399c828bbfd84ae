//! Composition utilities for building `AppCore` over a `JsonStore`.
//!
//! Construction only; no domain logic lives here.

use std::sync::Arc;

use imgncli_core::{AppCore, AppPaths, Repos};

use crate::error::StoreError;
use crate::repositories::{FsImageBlobRepository, JsonConfigRepository, JsonHistoryRepository};
use crate::store::JsonStore;

/// Factory for store-backed repositories.
pub struct StoreFactory;

impl StoreFactory {
    /// Create a store rooted at `paths` and make sure its directories exist.
    pub async fn open(paths: AppPaths) -> Result<Arc<JsonStore>, StoreError> {
        let store = Arc::new(JsonStore::new(paths));
        store.initialize().await?;
        Ok(store)
    }

    /// Build all repositories over one shared store.
    pub fn build_repos(store: &Arc<JsonStore>) -> Repos {
        Repos::new(
            Arc::new(JsonConfigRepository::new(Arc::clone(store))),
            Arc::new(JsonHistoryRepository::new(Arc::clone(store))),
            Arc::new(FsImageBlobRepository::new(Arc::clone(store))),
        )
    }

    /// Build a complete `AppCore` over one shared store. Equivalent to:
    ///
    /// ```ignore
    /// let repos = StoreFactory::build_repos(&store);
    /// let core = AppCore::new(repos);
    /// ```
    pub fn build_app_core(store: &Arc<JsonStore>) -> AppCore {
        AppCore::new(Self::build_repos(store))
    }
}

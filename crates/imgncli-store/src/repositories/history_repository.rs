//! `history.json` implementation of the `HistoryRepository` trait.

use std::sync::Arc;

use async_trait::async_trait;
use imgncli_core::{HistoryEntry, HistoryRepository, RepositoryError};

use crate::store::JsonStore;

pub struct JsonHistoryRepository {
    store: Arc<JsonStore>,
}

impl JsonHistoryRepository {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl HistoryRepository for JsonHistoryRepository {
    async fn list(&self) -> Result<Vec<HistoryEntry>, RepositoryError> {
        Ok(self.store.read_history().await?)
    }

    async fn prepend(&self, entry: &HistoryEntry) -> Result<(), RepositoryError> {
        Ok(self.store.append_history(entry).await?)
    }

    async fn clear(&self) -> Result<(), RepositoryError> {
        Ok(self.store.clear_history().await?)
    }
}

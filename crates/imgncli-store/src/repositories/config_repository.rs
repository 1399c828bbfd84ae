//! `config.json` implementation of the `ConfigRepository` trait.

use std::sync::Arc;

use async_trait::async_trait;
use imgncli_core::{Config, ConfigRepository, RepositoryError};

use crate::store::JsonStore;

pub struct JsonConfigRepository {
    store: Arc<JsonStore>,
}

impl JsonConfigRepository {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ConfigRepository for JsonConfigRepository {
    async fn load(&self) -> Result<Config, RepositoryError> {
        Ok(self.store.read_config().await?)
    }

    async fn save(&self, config: &Config) -> Result<(), RepositoryError> {
        Ok(self.store.write_config(config).await?)
    }
}

//! Config service - read-modify-write over the persisted `Config`.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{Config, Model};
use crate::ports::{ConfigRepository, CoreError};

/// Service for API key and model preferences.
pub struct ConfigService {
    repo: Arc<dyn ConfigRepository>,
}

impl ConfigService {
    /// Create a new config service.
    pub fn new(repo: Arc<dyn ConfigRepository>) -> Self {
        Self { repo }
    }

    /// Get the whole config document.
    pub async fn get(&self) -> Result<Config, CoreError> {
        self.repo.load().await.map_err(CoreError::from)
    }

    /// The stored API key, if any.
    pub async fn get_api_key(&self) -> Result<Option<String>, CoreError> {
        Ok(self.get().await?.api_key().map(str::to_owned))
    }

    /// Persist `key` without touching the other fields.
    pub async fn save_api_key(&self, key: &str) -> Result<(), CoreError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(CoreError::Validation("API key cannot be empty".to_string()));
        }
        let mut config = self.get().await?;
        config.api_key = Some(key.to_string());
        self.repo.save(&config).await?;
        debug!("API key updated");
        Ok(())
    }

    /// The selected model, falling back to the catalog default when the
    /// stored id is missing or unknown.
    pub async fn get_selected_model(&self) -> Result<Model, CoreError> {
        Ok(self.get().await?.selected_model())
    }

    /// Persist `model` as the selection without touching the other fields.
    pub async fn save_selected_model(&self, model: Model) -> Result<(), CoreError> {
        let mut config = self.get().await?;
        config.selected_model_id = Some(model.id.to_string());
        self.repo.save(&config).await?;
        debug!(model_id = model.id, "Selected model updated");
        Ok(())
    }
}

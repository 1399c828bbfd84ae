//! Filesystem implementation of the `ImageBlobRepository` trait.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use imgncli_core::{ImageBlobRepository, RepositoryError};

use crate::store::JsonStore;

pub struct FsImageBlobRepository {
    store: Arc<JsonStore>,
}

impl FsImageBlobRepository {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ImageBlobRepository for FsImageBlobRepository {
    async fn write_blob(&self, bytes: &[u8]) -> Result<PathBuf, RepositoryError> {
        Ok(self.store.write_image_blob(bytes).await?)
    }
}

//! In-memory port fakes shared by service and session tests.

use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{Config, HistoryEntry};
use crate::ports::{ConfigRepository, HistoryRepository, ImageBlobRepository, RepositoryError};

#[derive(Default)]
pub struct MemoryConfigRepo {
    config: Mutex<Config>,
}

impl MemoryConfigRepo {
    pub fn with(config: Config) -> Self {
        Self {
            config: Mutex::new(config),
        }
    }

    pub fn snapshot(&self) -> Config {
        self.config.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConfigRepository for MemoryConfigRepo {
    async fn load(&self) -> Result<Config, RepositoryError> {
        Ok(self.config.lock().unwrap().clone())
    }

    async fn save(&self, config: &Config) -> Result<(), RepositoryError> {
        *self.config.lock().unwrap() = config.clone();
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryHistoryRepo {
    entries: Mutex<Vec<HistoryEntry>>,
}

impl MemoryHistoryRepo {
    pub fn snapshot(&self) -> Vec<HistoryEntry> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl HistoryRepository for MemoryHistoryRepo {
    async fn list(&self) -> Result<Vec<HistoryEntry>, RepositoryError> {
        Ok(self.entries.lock().unwrap().clone())
    }

    async fn prepend(&self, entry: &HistoryEntry) -> Result<(), RepositoryError> {
        self.entries.lock().unwrap().insert(0, entry.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), RepositoryError> {
        self.entries.lock().unwrap().clear();
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryBlobRepo {
    written: Mutex<Vec<PathBuf>>,
}

impl MemoryBlobRepo {
    pub fn written(&self) -> Vec<PathBuf> {
        self.written.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageBlobRepository for MemoryBlobRepo {
    async fn write_blob(&self, _bytes: &[u8]) -> Result<PathBuf, RepositoryError> {
        let mut written = self.written.lock().unwrap();
        let path = PathBuf::from(format!("/data/images/blob-{}.png", written.len()));
        written.push(path.clone());
        Ok(path)
    }
}

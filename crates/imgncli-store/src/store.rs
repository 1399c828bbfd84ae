//! The JSON document store.

use std::io;
use std::path::{Path, PathBuf};

use imgncli_core::{AppPaths, Config, HistoryEntry};
use serde::Serialize;
use serde_json::Value;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::{Mutex, OnceCell};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::atomic::write_atomic;
use crate::error::StoreError;

/// Serialized shape of `history.json`.
#[derive(Serialize)]
struct HistoryDocument<'a> {
    entries: &'a [HistoryEntry],
}

/// File-backed store for config, history and image blobs.
///
/// Constructed once at startup and shared by reference. Directory creation
/// happens lazily on first use, at most once. Read-modify-write cycles on
/// each document are serialized in-process; no cross-process lock is taken.
pub struct JsonStore {
    paths: AppPaths,
    init: OnceCell<()>,
    config_lock: Mutex<()>,
    history_lock: Mutex<()>,
}

impl JsonStore {
    pub fn new(paths: AppPaths) -> Self {
        Self {
            paths,
            init: OnceCell::new(),
            config_lock: Mutex::new(()),
            history_lock: Mutex::new(()),
        }
    }

    pub const fn paths(&self) -> &AppPaths {
        &self.paths
    }

    /// Ensure the application and image directories exist. Idempotent.
    pub async fn initialize(&self) -> Result<(), StoreError> {
        self.init
            .get_or_try_init(|| async {
                let images = self.paths.images_dir();
                fs::create_dir_all(&images)
                    .await
                    .map_err(|e| StoreError::io("create", &images, e))?;
                debug!(root = %self.paths.root().display(), "Store initialized");
                Ok::<(), StoreError>(())
            })
            .await
            .map(|_| ())
    }

    /// The stored config, or the empty default if the document is missing,
    /// unreadable or corrupt.
    pub async fn read_config(&self) -> Result<Config, StoreError> {
        self.initialize().await?;
        let _guard = self.config_lock.lock().await;
        Ok(self.load_config().await)
    }

    /// Replace the config document.
    pub async fn write_config(&self, config: &Config) -> Result<(), StoreError> {
        self.initialize().await?;
        let _guard = self.config_lock.lock().await;
        let json = encode("config", config)?;
        write_atomic(&self.paths.config_file(), &json).await?;
        debug!("Config written");
        Ok(())
    }

    /// History entries, newest first. Never fails on a malformed document:
    /// invalid JSON or a missing `entries` array yields an empty list, and
    /// individual malformed entries are skipped.
    pub async fn read_history(&self) -> Result<Vec<HistoryEntry>, StoreError> {
        self.initialize().await?;
        let _guard = self.history_lock.lock().await;
        Ok(self.load_history().await)
    }

    /// Insert `entry` at the head of the history and persist the document.
    pub async fn append_history(&self, entry: &HistoryEntry) -> Result<(), StoreError> {
        self.initialize().await?;
        let _guard = self.history_lock.lock().await;
        let mut entries = self.load_history().await;
        entries.insert(0, entry.clone());
        self.store_history(&entries).await?;
        debug!(id = %entry.id, total = entries.len(), "History entry appended");
        Ok(())
    }

    /// Replace the history with an empty list. Blobs are not touched.
    pub async fn clear_history(&self) -> Result<(), StoreError> {
        self.initialize().await?;
        let _guard = self.history_lock.lock().await;
        self.store_history(&[]).await
    }

    /// Write `bytes` to `images/<uuid>.png` and return the absolute path.
    pub async fn write_image_blob(&self, bytes: &[u8]) -> Result<PathBuf, StoreError> {
        self.initialize().await?;
        let path = self
            .paths
            .images_dir()
            .join(format!("{}.png", Uuid::new_v4()));

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| StoreError::io("create", &path, e))?;
        file.write_all(bytes)
            .await
            .map_err(|e| StoreError::io("write", &path, e))?;
        file.sync_all()
            .await
            .map_err(|e| StoreError::io("sync", &path, e))?;

        debug!(path = %path.display(), size = bytes.len(), "Image blob written");
        Ok(path)
    }

    async fn load_config(&self) -> Config {
        let path = self.paths.config_file();
        let Some(raw) = read_document(&path).await else {
            return Config::default();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "Ignoring corrupt config");
            Config::default()
        })
    }

    async fn load_history(&self) -> Vec<HistoryEntry> {
        let path = self.paths.history_file();
        let Some(raw) = read_document(&path).await else {
            return Vec::new();
        };
        parse_history(&raw)
    }

    async fn store_history(&self, entries: &[HistoryEntry]) -> Result<(), StoreError> {
        let json = encode("history", &HistoryDocument { entries })?;
        write_atomic(&self.paths.history_file(), &json).await
    }
}

/// Read a document, treating any failure as "absent".
async fn read_document(path: &Path) -> Option<String> {
    match fs::read_to_string(path).await {
        Ok(raw) => Some(raw),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Unreadable document treated as empty");
            None
        }
    }
}

fn parse_history(raw: &str) -> Vec<HistoryEntry> {
    let document: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "Ignoring corrupt history");
            return Vec::new();
        }
    };
    let Some(Value::Array(items)) = document.get("entries") else {
        warn!("History document has no entries array");
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            serde_json::from_value(item.clone())
                .map_err(|e| warn!(index, error = %e, "Skipping malformed history entry"))
                .ok()
        })
        .collect()
}

fn encode<T: Serialize>(document: &'static str, value: &T) -> Result<Vec<u8>, StoreError> {
    serde_json::to_vec_pretty(value).map_err(|source| StoreError::Encode { document, source })
}

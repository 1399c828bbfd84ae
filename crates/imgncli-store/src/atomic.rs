//! Crash-safe whole-file replacement.

use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::error::StoreError;

/// Replace `target` with `contents` atomically.
///
/// # Atomicity
/// 1. Write to a unique sibling `<name>.<uuid>.tmp`
/// 2. `sync_all` the temp file
/// 3. Rename over `target` (atomic on the same filesystem)
///
/// A reader sees either the old or the new document, never a torn one.
pub async fn write_atomic(target: &Path, contents: &[u8]) -> Result<(), StoreError> {
    let temp = temp_path(target);

    let result = write_and_rename(&temp, target, contents).await;
    if result.is_err() {
        let _ = fs::remove_file(&temp).await;
    }
    result
}

async fn write_and_rename(temp: &Path, target: &Path, contents: &[u8]) -> Result<(), StoreError> {
    let mut file = fs::File::create(temp)
        .await
        .map_err(|e| StoreError::io("create", temp, e))?;
    file.write_all(contents)
        .await
        .map_err(|e| StoreError::io("write", temp, e))?;
    file.sync_all()
        .await
        .map_err(|e| StoreError::io("sync", temp, e))?;
    drop(file);

    fs::rename(temp, target)
        .await
        .map_err(|e| StoreError::io("rename", target, e))
}

fn temp_path(target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .map_or_else(|| "document".into(), |n| n.to_string_lossy().into_owned());
    target.with_file_name(format!(".{name}.{}.tmp", Uuid::new_v4().simple()))
}

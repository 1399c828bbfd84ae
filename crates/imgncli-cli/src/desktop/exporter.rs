//! "Save a copy" support.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use imgncli_core::{DesktopError, ImageExporter};
use tokio::fs;
use tracing::debug;

/// Copies images into a fixed directory as `generated-<timestamp>.png`.
#[derive(Debug, Clone)]
pub struct DirectoryExporter {
    dir: PathBuf,
}

impl DirectoryExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// `generated-<ISO timestamp>.png` with `:` and `.` replaced by `-`.
pub fn copy_file_name(at: DateTime<Utc>) -> String {
    format!("generated-{}.png", at.format("%Y-%m-%dT%H-%M-%S-%3fZ"))
}

fn io_error(path: &Path, e: &io::Error) -> DesktopError {
    DesktopError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}

impl DirectoryExporter {
    /// Copy `source` under the name derived from `at`. Existing files are
    /// never overwritten; a `-N` suffix is added until a name is free.
    async fn copy_at(&self, source: &Path, at: DateTime<Utc>) -> Result<PathBuf, DesktopError> {
        let mut input = fs::File::open(source)
            .await
            .map_err(|e| io_error(source, &e))?;
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| io_error(&self.dir, &e))?;

        let name = copy_file_name(at);
        let stem = name.trim_end_matches(".png");
        let mut target = self.dir.join(&name);
        let mut suffix = 1u32;
        let mut output = loop {
            match fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&target)
                .await
            {
                Ok(file) => break file,
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    target = self.dir.join(format!("{stem}-{suffix}.png"));
                    suffix += 1;
                }
                Err(e) => return Err(io_error(&target, &e)),
            }
        };

        let copied = async {
            tokio::io::copy(&mut input, &mut output).await?;
            output.sync_all().await
        }
        .await;
        if let Err(e) = copied {
            let _ = fs::remove_file(&target).await;
            return Err(io_error(&target, &e));
        }

        debug!(from = %source.display(), to = %target.display(), "Saved image copy");
        Ok(target)
    }
}

#[async_trait]
impl ImageExporter for DirectoryExporter {
    async fn save_copy(&self, source: &Path) -> Result<PathBuf, DesktopError> {
        self.copy_at(source, Utc::now()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_copy_file_name() {
        let at = Utc
            .with_ymd_and_hms(2025, 11, 3, 14, 5, 9)
            .unwrap()
            + chrono::Duration::milliseconds(42);
        assert_eq!(copy_file_name(at), "generated-2025-11-03T14-05-09-042Z.png");
    }

    #[tokio::test]
    async fn test_save_copy_into_directory() {
        let src_dir = tempfile::tempdir().unwrap();
        let source = src_dir.path().join("blob.png");
        std::fs::write(&source, b"png-bytes").unwrap();
        let out = tempfile::tempdir().unwrap();
        let exporter = DirectoryExporter::new(out.path().join("copies"));

        let first = exporter.save_copy(&source).await.unwrap();
        let second = exporter.save_copy(&source).await.unwrap();

        assert_ne!(first, second);
        assert!(first.starts_with(exporter.dir()));
        assert_eq!(std::fs::read(&first).unwrap(), b"png-bytes");
        let name = first.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("generated-") && name.ends_with(".png"));
    }

    #[tokio::test]
    async fn test_missing_source_is_io_error() {
        let out = tempfile::tempdir().unwrap();
        let exporter = DirectoryExporter::new(out.path());

        let err = exporter
            .save_copy(Path::new("/no/such/blob.png"))
            .await
            .unwrap_err();
        assert!(matches!(err, DesktopError::Io { .. }));
    }

    #[tokio::test]
    async fn test_existing_copy_is_never_overwritten() {
        let src_dir = tempfile::tempdir().unwrap();
        let source = src_dir.path().join("blob.png");
        std::fs::write(&source, b"new-bytes").unwrap();
        let out = tempfile::tempdir().unwrap();
        let exporter = DirectoryExporter::new(out.path());

        let at = Utc::now();
        let taken = out.path().join(copy_file_name(at));
        std::fs::write(&taken, b"old-bytes").unwrap();

        let saved = exporter.copy_at(&source, at).await.unwrap();

        assert_ne!(saved, taken);
        assert!(saved.to_string_lossy().ends_with("-1.png"));
        assert_eq!(std::fs::read(&taken).unwrap(), b"old-bytes");
        assert_eq!(std::fs::read(&saved).unwrap(), b"new-bytes");
    }

    #[tokio::test]
    async fn test_missing_source_creates_nothing() {
        let out = tempfile::tempdir().unwrap();
        let exporter = DirectoryExporter::new(out.path().join("copies"));

        assert!(exporter.save_copy(Path::new("/no/such/blob.png")).await.is_err());
        assert!(!exporter.dir().exists());
    }
}

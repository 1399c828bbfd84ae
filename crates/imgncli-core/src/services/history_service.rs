//! History service - blob storage plus history records.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::HistoryEntry;
use crate::ports::{CoreError, HistoryRepository, ImageBlobRepository};

/// Service for the generation history.
///
/// Hides the two-step nature of saving a generation: the blob is written
/// first, then the record referencing it is prepended.
pub struct HistoryService {
    history: Arc<dyn HistoryRepository>,
    blobs: Arc<dyn ImageBlobRepository>,
}

impl HistoryService {
    /// Create a new history service.
    pub fn new(history: Arc<dyn HistoryRepository>, blobs: Arc<dyn ImageBlobRepository>) -> Self {
        Self { history, blobs }
    }

    /// All entries, newest first.
    pub async fn get_history(&self) -> Result<Vec<HistoryEntry>, CoreError> {
        self.history.list().await.map_err(CoreError::from)
    }

    /// Persist a freshly generated image and record it.
    ///
    /// If the record cannot be appended the blob is left on disk and the
    /// error is returned.
    pub async fn save_generation(
        &self,
        image_bytes: &[u8],
        prompt: &str,
        model_id: Option<&str>,
    ) -> Result<HistoryEntry, CoreError> {
        let image_path = self.blobs.write_blob(image_bytes).await?;
        let entry = HistoryEntry::new(prompt, image_path, model_id.map(str::to_owned));

        if let Err(e) = self.history.prepend(&entry).await {
            warn!(
                orphan = %entry.image_path.display(),
                error = %e,
                "History append failed after blob write"
            );
            return Err(e.into());
        }

        debug!(id = %entry.id, path = %entry.image_path.display(), "Generation saved");
        Ok(entry)
    }

    /// Remove all history records. Image blobs are kept.
    pub async fn clear_history(&self) -> Result<(), CoreError> {
        self.history.clear().await?;
        debug!("History cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::RepositoryError;
    use crate::ports::blob_repository::MockImageBlobRepository;
    use crate::ports::history_repository::MockHistoryRepository;
    use crate::services::testing::{MemoryBlobRepo, MemoryHistoryRepo};
    use std::path::PathBuf;

    fn service() -> (HistoryService, Arc<MemoryHistoryRepo>, Arc<MemoryBlobRepo>) {
        let history = Arc::new(MemoryHistoryRepo::default());
        let blobs = Arc::new(MemoryBlobRepo::default());
        (
            HistoryService::new(history.clone(), blobs.clone()),
            history,
            blobs,
        )
    }

    #[tokio::test]
    async fn test_save_then_get_round_trip() {
        let (service, _, blobs) = service();

        let saved = service
            .save_generation(b"png", "a red bicycle", Some("openai/gpt-5-image"))
            .await
            .unwrap();
        let history = service.get_history().await.unwrap();

        assert_eq!(history.first(), Some(&saved));
        assert_eq!(saved.prompt, "a red bicycle");
        assert_eq!(saved.model_id.as_deref(), Some("openai/gpt-5-image"));
        assert_eq!(blobs.written(), vec![saved.image_path.clone()]);
    }

    #[tokio::test]
    async fn test_newest_first_ordering() {
        let (service, _, _) = service();

        let mut saved = Vec::new();
        for prompt in ["one", "two", "three"] {
            saved.push(service.save_generation(b"x", prompt, None).await.unwrap());
        }
        let history = service.get_history().await.unwrap();

        assert_eq!(history.len(), 3);
        assert_eq!(history[0], saved[2]);
        assert_eq!(history[2], saved[0]);
    }

    #[tokio::test]
    async fn test_clear_keeps_blobs() {
        let (service, history, blobs) = service();
        service.save_generation(b"x", "cat", None).await.unwrap();

        service.clear_history().await.unwrap();

        assert!(service.get_history().await.unwrap().is_empty());
        assert!(history.snapshot().is_empty());
        assert_eq!(blobs.written().len(), 1);
    }

    #[tokio::test]
    async fn test_append_failure_surfaces_after_blob_write() {
        let mut blobs = MockImageBlobRepository::new();
        blobs
            .expect_write_blob()
            .times(1)
            .returning(|_| Ok(PathBuf::from("/data/images/orphan.png")));
        let mut history = MockHistoryRepository::new();
        history
            .expect_prepend()
            .times(1)
            .returning(|_| Err(RepositoryError::Storage("read-only fs".to_string())));

        let service = HistoryService::new(Arc::new(history), Arc::new(blobs));
        let err = service.save_generation(b"x", "cat", None).await.unwrap_err();

        assert!(matches!(err, CoreError::Repository(RepositoryError::Storage(_))));
    }

    #[tokio::test]
    async fn test_blob_failure_skips_append() {
        let mut blobs = MockImageBlobRepository::new();
        blobs
            .expect_write_blob()
            .returning(|_| Err(RepositoryError::Storage("no space".to_string())));
        let mut history = MockHistoryRepository::new();
        history.expect_prepend().never();

        let service = HistoryService::new(Arc::new(history), Arc::new(blobs));
        assert!(service.save_generation(b"x", "cat", None).await.is_err());
    }
}

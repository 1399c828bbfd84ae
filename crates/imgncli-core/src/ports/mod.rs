//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `serde_json`, `reqwest` or filesystem types in any signature
//! - Repository traits operate on whole documents
//! - The generator never fails at the signature level; every failure is a
//!   `GenerationOutcome::Failure`

pub mod blob_repository;
pub mod config_repository;
pub mod desktop;
pub mod history_repository;
pub mod image_generator;

use std::sync::Arc;
use thiserror::Error;

pub use blob_repository::ImageBlobRepository;
pub use config_repository::ConfigRepository;
pub use desktop::{ClipboardPort, DesktopError, ImageExporter};
pub use history_repository::HistoryRepository;
pub use image_generator::ImageGenerator;

/// Container for all repository trait objects.
///
/// Built once by the store adapter and handed to `AppCore`, so the core never
/// depends on the concrete store.
#[derive(Clone)]
pub struct Repos {
    /// Whole-document access to `config.json`.
    pub config: Arc<dyn ConfigRepository>,
    /// Newest-first access to `history.json`.
    pub history: Arc<dyn HistoryRepository>,
    /// Image blob area.
    pub blobs: Arc<dyn ImageBlobRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(
        config: Arc<dyn ConfigRepository>,
        history: Arc<dyn HistoryRepository>,
        blobs: Arc<dyn ImageBlobRepository>,
    ) -> Self {
        Self {
            config,
            history,
            blobs,
        }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (I/O and
/// JSON errors) and provides a clean interface for services.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Storage backend error (filesystem, permissions, disk full).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own presentation (an `Error` screen message,
/// a CLI exit code).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Desktop collaborator failed.
    #[error(transparent)]
    Desktop(#[from] DesktopError),

    /// The generated image payload could not be decoded.
    #[error("Invalid image data: {0}")]
    InvalidImageData(String),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),
}

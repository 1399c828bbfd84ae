//! Generation history records.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Durable record of one successful generation.
///
/// Entries are immutable once created and own the image blob at
/// `image_path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Unique identifier generated at creation.
    pub id: Uuid,
    /// The prompt exactly as submitted.
    pub prompt: String,
    /// Absolute path to the stored PNG.
    pub image_path: PathBuf,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Model that produced the image, if recorded.
    #[serde(default, alias = "model", skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
}

impl HistoryEntry {
    /// Create an entry with a fresh id and the current timestamp.
    pub fn new(
        prompt: impl Into<String>,
        image_path: impl Into<PathBuf>,
        model_id: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            prompt: prompt.into(),
            image_path: image_path.into(),
            created_at: Utc::now(),
            model_id,
        }
    }

    /// Prompt shortened to `max_chars` characters, with `...` appended when
    /// anything was cut.
    pub fn prompt_preview(&self, max_chars: usize) -> String {
        if self.prompt.chars().count() <= max_chars {
            return self.prompt.clone();
        }
        let mut preview: String = self.prompt.chars().take(max_chars).collect();
        preview.push_str("...");
        preview
    }
}

/// The image currently shown on the `Displaying` or `Viewing` screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResult {
    pub filepath: PathBuf,
    pub prompt: String,
    pub model_id: Option<String>,
    /// Free text returned alongside a fresh generation. `None` when viewing
    /// a history entry.
    pub text_content: Option<String>,
}

impl From<&HistoryEntry> for ImageResult {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            filepath: entry.image_path.clone(),
            prompt: entry.prompt.clone(),
            model_id: entry.model_id.clone(),
            text_content: None,
        }
    }
}

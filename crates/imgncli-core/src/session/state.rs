//! Session state and the intents the render surface reports.

use crate::domain::{HistoryEntry, ImageResult, Model};
use crate::router::Route;

/// In-memory state for one process lifetime.
///
/// Rehydrated from storage at startup and never persisted directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub route: Route,
    pub selected_model: Model,
    pub api_key: Option<String>,
    /// Image shown on `Displaying` or `Viewing`.
    pub last_image_result: Option<ImageResult>,
    /// Message shown on `Error`.
    pub last_error: Option<String>,
    /// History as of the last load, newest first.
    pub history: Vec<HistoryEntry>,
    /// Prompt waiting to be generated while in `Loading`.
    pub pending_prompt: Option<String>,
    /// Transient status line (clipboard, save-a-copy). Cleared on every
    /// route change.
    pub notice: Option<String>,
}

impl SessionState {
    /// `<first 10>...<last 4>` rendering of the configured key.
    pub fn masked_api_key(&self) -> Option<String> {
        let key = self.api_key.as_deref()?;
        let chars: Vec<char> = key.chars().collect();
        if chars.len() <= 14 {
            return Some("*".repeat(chars.len()));
        }
        let head: String = chars[..10].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        Some(format!("{head}...{tail}"))
    }
}

/// A user action reported by the render surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// A line submitted on the `Input` screen.
    Submit(String),
    /// Index into the history snapshot, on `History`.
    SelectHistory(usize),
    /// Index into the model catalog, on `Models`.
    SelectModel(usize),
    /// Key typed on `Setup`.
    SubmitApiKey(String),
    Back,
    CopyToClipboard,
    SaveCopy,
}

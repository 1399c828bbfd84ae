//! Session controller.
//!
//! Owns the `SessionState`, applies `Intent`s through the router and runs
//! the side effects each transition implies. Generation is split in two so
//! the UI can draw the loading screen in between: `handle(Submit)` enters
//! `Loading`, then `run_pending_generation` resolves it.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::state::{Intent, SessionState};
use crate::domain::{
    AVAILABLE_MODELS, GenerationOutcome, HistoryEntry, ImageResult, decode_image_base64,
};
use crate::ports::{ClipboardPort, CoreError, ImageExporter, ImageGenerator};
use crate::router::{CommandAction, ParsedInput, Route, Router, Trigger, parse_input};
use crate::services::AppCore;

pub struct SessionController {
    core: AppCore,
    generator: Arc<dyn ImageGenerator>,
    clipboard: Arc<dyn ClipboardPort>,
    exporter: Arc<dyn ImageExporter>,
    state: SessionState,
}

impl SessionController {
    /// Build a controller with an explicit initial state.
    pub fn new(
        core: AppCore,
        generator: Arc<dyn ImageGenerator>,
        clipboard: Arc<dyn ClipboardPort>,
        exporter: Arc<dyn ImageExporter>,
        state: SessionState,
    ) -> Self {
        Self {
            core,
            generator,
            clipboard,
            exporter,
            state,
        }
    }

    /// Build a controller rehydrated from storage: API key, selected model
    /// and history snapshot.
    pub async fn bootstrap(
        core: AppCore,
        generator: Arc<dyn ImageGenerator>,
        clipboard: Arc<dyn ClipboardPort>,
        exporter: Arc<dyn ImageExporter>,
    ) -> Result<Self, CoreError> {
        let config = core.config().get().await?;
        let history = core.history().get_history().await?;
        let state = SessionState {
            selected_model: config.selected_model(),
            api_key: config.api_key().map(str::to_owned),
            history,
            ..SessionState::default()
        };
        info!(
            model = state.selected_model.id,
            has_api_key = state.api_key.is_some(),
            history = state.history.len(),
            "Session restored"
        );
        Ok(Self::new(core, generator, clipboard, exporter, state))
    }

    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    pub const fn route(&self) -> Route {
        self.state.route
    }

    /// Whether a generation is waiting for `run_pending_generation`.
    pub const fn has_pending_generation(&self) -> bool {
        matches!(self.state.route, Route::Loading) && self.state.pending_prompt.is_some()
    }

    /// Apply one user intent. Intents that make no sense on the current
    /// screen are ignored.
    pub async fn handle(&mut self, intent: Intent) {
        match (self.state.route, intent) {
            (Route::Input, Intent::Submit(text)) => self.submit(&text).await,
            (Route::History, Intent::SelectHistory(index)) => self.select_history(index),
            (Route::Models, Intent::SelectModel(index)) => self.select_model(index).await,
            (Route::Setup, Intent::SubmitApiKey(key)) => self.submit_api_key(&key).await,
            (Route::Displaying | Route::Viewing, Intent::CopyToClipboard) => {
                self.copy_to_clipboard().await;
            }
            (Route::Displaying | Route::Viewing, Intent::SaveCopy) => self.save_copy().await,
            (Route::Error, Intent::Back) => {
                self.state.last_error = None;
                self.state.last_image_result = None;
                self.transition(Trigger::Back);
            }
            (_, Intent::Back) => self.transition(Trigger::Back),
            (route, intent) => debug!(?route, ?intent, "Intent ignored"),
        }
    }

    /// Perform the generation queued by a prompt submission and resolve
    /// `Loading` to `Displaying` or `Error`. Does nothing outside `Loading`.
    pub async fn run_pending_generation(&mut self) {
        if self.state.route != Route::Loading {
            return;
        }
        let Some(prompt) = self.state.pending_prompt.take() else {
            self.fail_generation("No prompt to generate".to_string());
            return;
        };

        let model = self.state.selected_model;
        let api_key = self.state.api_key.clone().unwrap_or_default();
        info!(model = model.id, "Generating image");

        let outcome = self.generator.generate(&prompt, &api_key, model.id).await;
        let (image_base64, text_content) = match outcome {
            GenerationOutcome::Success {
                image_base64,
                text_content,
            } => (image_base64, text_content),
            GenerationOutcome::Failure { kind, error } => {
                warn!(?kind, %error, "Generation failed");
                self.fail_generation(error);
                return;
            }
        };

        match self.persist(&image_base64, &prompt, model.id).await {
            Ok(entry) => {
                let mut result = ImageResult::from(&entry);
                result.text_content = Some(text_content).filter(|t| !t.is_empty());
                self.state.last_image_result = Some(result);
                self.state.history.insert(0, entry);
                self.transition(Trigger::GenerationSucceeded);
            }
            Err(e) => self.fail_generation(format!("Failed to save image: {e}")),
        }
    }

    /// Decode the payload and record it as a new history entry.
    async fn persist(
        &self,
        image_base64: &str,
        prompt: &str,
        model_id: &str,
    ) -> Result<HistoryEntry, CoreError> {
        let bytes = decode_image_base64(image_base64)
            .map_err(|e| CoreError::InvalidImageData(e.to_string()))?;
        self.core
            .history()
            .save_generation(&bytes, prompt, Some(model_id))
            .await
    }

    async fn submit(&mut self, text: &str) {
        match parse_input(text) {
            ParsedInput::Empty => {}
            ParsedInput::UnknownCommand(token) => debug!(%token, "Unknown command ignored"),
            ParsedInput::Prompt(prompt) => {
                self.state.pending_prompt = Some(prompt);
                self.state.last_error = None;
                self.transition(Trigger::SubmitPrompt);
            }
            ParsedInput::Command(cmd) => {
                match cmd.action() {
                    CommandAction::Navigate(Route::History) => {
                        match self.core.history().get_history().await {
                            Ok(history) => self.state.history = history,
                            Err(e) => {
                                self.fail(format!("Failed to load history: {e}"));
                                return;
                            }
                        }
                    }
                    CommandAction::Navigate(_) => {}
                    CommandAction::ClearHistory => {
                        if let Err(e) = self.core.history().clear_history().await {
                            self.fail(format!("Failed to clear history: {e}"));
                            return;
                        }
                        self.state.history.clear();
                    }
                }
                self.transition(Trigger::Command(cmd));
            }
        }
    }

    fn select_history(&mut self, index: usize) {
        let Some(entry) = self.state.history.get(index) else {
            return;
        };
        self.state.last_image_result = Some(ImageResult::from(entry));
        self.transition(Trigger::SelectHistoryEntry);
    }

    async fn select_model(&mut self, index: usize) {
        let Some(model) = AVAILABLE_MODELS.get(index).copied() else {
            return;
        };
        if let Err(e) = self.core.config().save_selected_model(model).await {
            self.fail(format!("Failed to save model selection: {e}"));
            return;
        }
        self.state.selected_model = model;
        self.transition(Trigger::SelectModel);
    }

    async fn submit_api_key(&mut self, key: &str) {
        let key = key.trim();
        if key.is_empty() {
            return;
        }
        if let Err(e) = self.core.config().save_api_key(key).await {
            self.fail(format!("Failed to save API key: {e}"));
            return;
        }
        self.state.api_key = Some(key.to_string());
        self.transition(Trigger::SubmitApiKey);
    }

    async fn copy_to_clipboard(&mut self) {
        let Some(path) = self.state.last_image_result.as_ref().map(|r| r.filepath.clone()) else {
            return;
        };
        self.state.notice = Some(match self.clipboard.copy_image(&path).await {
            Ok(()) => "Copied to clipboard!".to_string(),
            Err(e) => format!("Failed to copy: {e}"),
        });
    }

    async fn save_copy(&mut self) {
        let Some(path) = self.state.last_image_result.as_ref().map(|r| r.filepath.clone()) else {
            return;
        };
        self.state.notice = Some(match self.exporter.save_copy(&path).await {
            Ok(dest) => format!("Saved copy to {}", dest.display()),
            Err(e) => format!("Failed to save copy: {e}"),
        });
    }

    fn fail_generation(&mut self, message: String) {
        self.state.last_error = Some(message);
        self.transition(Trigger::GenerationFailed);
    }

    fn fail(&mut self, message: String) {
        warn!(%message, "Operation failed");
        self.state.last_error = Some(message);
        self.transition(Trigger::OperationFailed);
    }

    fn transition(&mut self, trigger: Trigger) {
        let from = self.state.route;
        let to = Router::next(from, trigger);
        if from != to {
            debug!(?from, ?to, ?trigger, "Route change");
            self.state.route = to;
            self.state.notice = None;
        }
    }
}

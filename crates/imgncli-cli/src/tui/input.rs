//! Key handling.
//!
//! Translates key presses into buffer edits, cursor moves and controller
//! intents. Pure apart from the `UiState` it mutates, so it is tested
//! without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use imgncli_core::{AVAILABLE_MODELS, Intent, Route, SessionState, SlashCommand};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    /// UI-only change; redraw.
    Redraw,
    Quit,
    Dispatch(Intent),
}

/// Renderer-owned state: text buffers and list cursors.
#[derive(Debug, Default)]
pub struct UiState {
    pub prompt: String,
    pub command_cursor: usize,
    pub history_cursor: usize,
    pub model_cursor: usize,
    pub api_key_input: String,
    pub spinner_frame: usize,
    /// Shown in place of the session notice while a collaborator call runs.
    pub busy_notice: Option<&'static str>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands matching the prompt buffer while it starts with `/`.
    pub fn command_suggestions(&self) -> Vec<SlashCommand> {
        if self.prompt.starts_with('/') {
            SlashCommand::matching(&self.prompt)
        } else {
            Vec::new()
        }
    }

    /// Reset per-screen state after the route changed.
    pub fn on_route_entered(&mut self, session: &SessionState) {
        match session.route {
            Route::History => self.history_cursor = 0,
            Route::Models => self.model_cursor = session.selected_model.catalog_index(),
            Route::Setup => self.api_key_input.clear(),
            _ => {}
        }
    }

    /// Append pasted text to the active text buffer.
    pub fn handle_paste(&mut self, text: &str, route: Route) {
        let text: String = text.chars().filter(|c| !c.is_control()).collect();
        match route {
            Route::Input => {
                self.prompt.push_str(&text);
                self.command_cursor = 0;
            }
            Route::Setup => self.api_key_input.push_str(text.trim()),
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, session: &SessionState) -> KeyOutcome {
        if key.kind != KeyEventKind::Press {
            return KeyOutcome::Ignored;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return if key.code == KeyCode::Char('c') {
                KeyOutcome::Quit
            } else {
                KeyOutcome::Ignored
            };
        }

        match session.route {
            Route::Input => self.input_key(key.code),
            Route::Loading => KeyOutcome::Ignored,
            Route::Displaying | Route::Viewing => match key.code {
                KeyCode::Char('c') => KeyOutcome::Dispatch(Intent::CopyToClipboard),
                KeyCode::Char('s') => KeyOutcome::Dispatch(Intent::SaveCopy),
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => {
                    KeyOutcome::Dispatch(Intent::Back)
                }
                _ => KeyOutcome::Ignored,
            },
            Route::Error => match key.code {
                KeyCode::Enter | KeyCode::Esc => KeyOutcome::Dispatch(Intent::Back),
                _ => KeyOutcome::Ignored,
            },
            Route::History => {
                let len = session.history.len();
                match key.code {
                    KeyCode::Up | KeyCode::Char('k') => {
                        self.history_cursor = self.history_cursor.saturating_sub(1);
                        KeyOutcome::Redraw
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        if self.history_cursor + 1 < len {
                            self.history_cursor += 1;
                        }
                        KeyOutcome::Redraw
                    }
                    KeyCode::Enter if len > 0 => {
                        KeyOutcome::Dispatch(Intent::SelectHistory(self.history_cursor))
                    }
                    KeyCode::Esc | KeyCode::Char('q') => KeyOutcome::Dispatch(Intent::Back),
                    _ => KeyOutcome::Ignored,
                }
            }
            Route::Models => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.model_cursor = self.model_cursor.saturating_sub(1);
                    KeyOutcome::Redraw
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if self.model_cursor + 1 < AVAILABLE_MODELS.len() {
                        self.model_cursor += 1;
                    }
                    KeyOutcome::Redraw
                }
                KeyCode::Enter => KeyOutcome::Dispatch(Intent::SelectModel(self.model_cursor)),
                KeyCode::Esc | KeyCode::Char('q') => KeyOutcome::Dispatch(Intent::Back),
                _ => KeyOutcome::Ignored,
            },
            Route::Setup => match key.code {
                KeyCode::Char(c) => {
                    self.api_key_input.push(c);
                    KeyOutcome::Redraw
                }
                KeyCode::Backspace => {
                    self.api_key_input.pop();
                    KeyOutcome::Redraw
                }
                KeyCode::Enter => {
                    let key = self.api_key_input.trim().to_string();
                    if key.is_empty() {
                        return KeyOutcome::Ignored;
                    }
                    self.api_key_input.clear();
                    KeyOutcome::Dispatch(Intent::SubmitApiKey(key))
                }
                KeyCode::Esc => {
                    self.api_key_input.clear();
                    KeyOutcome::Dispatch(Intent::Back)
                }
                _ => KeyOutcome::Ignored,
            },
        }
    }

    fn input_key(&mut self, code: KeyCode) -> KeyOutcome {
        match code {
            KeyCode::Char(c) => {
                self.prompt.push(c);
                self.command_cursor = 0;
                KeyOutcome::Redraw
            }
            KeyCode::Backspace => {
                self.prompt.pop();
                self.command_cursor = 0;
                KeyOutcome::Redraw
            }
            KeyCode::Esc => {
                self.prompt.clear();
                self.command_cursor = 0;
                KeyOutcome::Redraw
            }
            KeyCode::Up => {
                self.command_cursor = self.command_cursor.saturating_sub(1);
                KeyOutcome::Redraw
            }
            KeyCode::Down => {
                let count = self.command_suggestions().len();
                if self.command_cursor + 1 < count {
                    self.command_cursor += 1;
                }
                KeyOutcome::Redraw
            }
            KeyCode::Enter => {
                let text = self.submission();
                self.prompt.clear();
                self.command_cursor = 0;
                KeyOutcome::Dispatch(Intent::Submit(text))
            }
            _ => KeyOutcome::Ignored,
        }
    }

    /// Text to submit: an exact command wins, then the highlighted
    /// suggestion, then the raw buffer.
    fn submission(&self) -> String {
        let trimmed = self.prompt.trim();
        if !trimmed.starts_with('/') || SlashCommand::parse(trimmed).is_some() {
            return self.prompt.clone();
        }
        self.command_suggestions()
            .get(self.command_cursor)
            .map_or_else(|| self.prompt.clone(), |cmd| cmd.token().to_string())
    }
}

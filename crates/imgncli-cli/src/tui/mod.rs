//! Terminal front end.
//!
//! Owns the terminal and the UI-only state (text buffers, list cursors,
//! spinner). Session state lives in the `SessionController`; this module
//! draws it and forwards intents.
//!
//! ## Event loop:
//! - Draw the current route
//! - If a generation is pending, await it while ticking the spinner
//! - Otherwise poll for one key or paste event and dispatch it

mod image_view;
mod input;
mod screens;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use imgncli_core::{Intent, SessionController};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

pub use image_view::{ImageCache, halfblock_lines};
pub use input::{KeyOutcome, UiState};

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const SPINNER_INTERVAL: Duration = Duration::from_millis(80);

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Run the interactive session until the user quits.
///
/// The terminal is restored on return, whether the loop ended normally or
/// with an error.
pub async fn run(controller: &mut SessionController) -> Result<()> {
    install_panic_hook();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = App::new().event_loop(&mut terminal, controller).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

/// Leave raw mode before the default hook prints the panic message.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        previous(info);
    }));
}

struct App {
    ui: UiState,
    images: ImageCache,
}

impl App {
    fn new() -> Self {
        Self {
            ui: UiState::new(),
            images: ImageCache::new(),
        }
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Term,
        controller: &mut SessionController,
    ) -> Result<()> {
        loop {
            terminal.draw(|f| {
                screens::draw(f, controller.state(), &self.ui, &mut self.images);
            })?;

            if controller.has_pending_generation() {
                self.generate(terminal, controller).await?;
                self.ui.on_route_entered(controller.state());
                continue;
            }

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }

            match event::read()? {
                Event::Key(key) => match self.ui.handle_key(key, controller.state()) {
                    KeyOutcome::Quit => return Ok(()),
                    KeyOutcome::Dispatch(intent) => {
                        if intent == Intent::CopyToClipboard {
                            self.ui.busy_notice = Some("Copying...");
                            terminal.draw(|f| {
                                screens::draw(f, controller.state(), &self.ui, &mut self.images);
                            })?;
                        }
                        let before = controller.route();
                        controller.handle(intent).await;
                        self.ui.busy_notice = None;
                        if controller.route() != before {
                            self.ui.on_route_entered(controller.state());
                        }
                    }
                    KeyOutcome::Redraw | KeyOutcome::Ignored => {}
                },
                Event::Paste(text) => self.ui.handle_paste(&text, controller.route()),
                // Resize and focus events just trigger the next redraw
                _ => {}
            }
        }
    }

    /// Await the pending generation, animating the loading screen. Input is
    /// drained and discarded until the request settles.
    async fn generate(
        &mut self,
        terminal: &mut Term,
        controller: &mut SessionController,
    ) -> Result<()> {
        let prompt = controller.state().pending_prompt.clone().unwrap_or_default();
        let mut ticker = tokio::time::interval(SPINNER_INTERVAL);

        let generation = controller.run_pending_generation();
        tokio::pin!(generation);

        loop {
            tokio::select! {
                () = &mut generation => return Ok(()),
                _ = ticker.tick() => {
                    self.ui.spinner_frame = self.ui.spinner_frame.wrapping_add(1);
                    terminal.draw(|f| screens::draw_loading(f, &prompt, self.ui.spinner_frame))?;
                    while event::poll(Duration::ZERO)? {
                        let _ = event::read()?;
                    }
                }
            }
        }
    }
}

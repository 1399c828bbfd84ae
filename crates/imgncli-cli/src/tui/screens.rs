//! One draw function per route.

use chrono::Local;
use imgncli_core::{AVAILABLE_MODELS, Route, SessionState};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::image_view::ImageCache;
use super::input::UiState;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const PROMPT_PLACEHOLDER: &str = "Type your prompt or / for commands...";
const API_KEY_PLACEHOLDER: &str = "sk-or-...";
const HISTORY_PREVIEW_CHARS: usize = 60;

/// Draw the screen for the current route.
pub fn draw(frame: &mut Frame, session: &SessionState, ui: &UiState, images: &mut ImageCache) {
    match session.route {
        Route::Input => draw_input(frame, session, ui),
        Route::Loading => draw_loading(
            frame,
            session.pending_prompt.as_deref().unwrap_or_default(),
            ui.spinner_frame,
        ),
        Route::Displaying => draw_image(frame, session, images, ui.busy_notice, true),
        Route::Viewing => draw_image(frame, session, images, ui.busy_notice, false),
        Route::Error => draw_error(frame, session),
        Route::History => draw_history(frame, session, ui),
        Route::Setup => draw_setup(frame, session, ui),
        Route::Models => draw_models(frame, session, ui),
    }
}

fn hints(text: &str) -> Paragraph<'_> {
    Paragraph::new(text).style(Style::default().fg(Color::DarkGray))
}

fn title(text: &str, color: Color) -> Paragraph<'_> {
    Paragraph::new(text).style(Style::default().fg(color).add_modifier(Modifier::BOLD))
}

fn draw_input(frame: &mut Frame, session: &SessionState, ui: &UiState) {
    let suggestions = ui.command_suggestions();
    let [banner, prompt, list, notice, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(u16::try_from(suggestions.len()).unwrap_or(u16::MAX)),
        Constraint::Min(1),
        Constraint::Length(2),
    ])
    .areas(frame.area());

    let banner_text = vec![
        Line::from("imgncli".bold().magenta()),
        Line::from("AI image generation in your terminal".dark_gray()),
    ];
    frame.render_widget(Paragraph::new(banner_text), banner);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let content = if ui.prompt.is_empty() {
        Line::from(PROMPT_PLACEHOLDER.dark_gray())
    } else {
        Line::from(ui.prompt.as_str())
    };
    frame.render_widget(Paragraph::new(content).block(block), prompt);
    let typed = u16::try_from(ui.prompt.chars().count()).unwrap_or(u16::MAX);
    let max_x = prompt.right().saturating_sub(2);
    frame.set_cursor_position(Position::new(
        (prompt.x + 1).saturating_add(typed).min(max_x),
        prompt.y + 1,
    ));

    let items: Vec<ListItem> = suggestions
        .iter()
        .enumerate()
        .map(|(i, cmd)| {
            let style = if i == ui.command_cursor {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("  {:<10}", cmd.token()), style),
                Span::styled(cmd.description(), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();
    frame.render_widget(List::new(items), list);

    if session.api_key.is_none() {
        frame.render_widget(
            Paragraph::new("No API key configured. Run /setup to add one.".yellow()),
            notice,
        );
    }

    let footer_text = vec![
        Line::from(format!("Model: {}", session.selected_model.name)),
        Line::from("Enter: generate · /: commands · Ctrl+C: quit".dark_gray()),
    ];
    frame.render_widget(Paragraph::new(footer_text), footer);
}

/// Loading screen; also drawn by the event loop while a generation runs.
pub fn draw_loading(frame: &mut Frame, prompt: &str, spinner_frame: usize) {
    let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
    let lines = vec![
        Line::from(vec![
            Span::styled(spinner, Style::default().fg(Color::Green)),
            Span::raw(" Generating image..."),
        ]),
        Line::from(""),
        Line::from(format!("Prompt: {prompt}").dark_gray()),
    ];
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        frame.area(),
    );
}

fn draw_image(
    frame: &mut Frame,
    session: &SessionState,
    images: &mut ImageCache,
    busy_notice: Option<&str>,
    fresh: bool,
) {
    let Some(result) = session.last_image_result.as_ref() else {
        frame.render_widget(hints("No image to show. Press Esc to go back."), frame.area());
        return;
    };

    let mut header = Vec::new();
    if fresh {
        header.push(Line::from("Image generated and saved!".bold().green()));
        header.push(Line::from(
            format!("Saved to: {}", result.filepath.display()).dark_gray(),
        ));
    } else {
        header.push(Line::from("Viewing Image".bold().cyan()));
    }
    header.push(Line::from(format!("Prompt: {}", result.prompt)));
    if let Some(text) = &result.text_content {
        header.push(Line::from(text.as_str().italic().dark_gray()));
    }

    let [head, picture, notice, footer] = Layout::vertical([
        Constraint::Length(u16::try_from(header.len()).unwrap_or(u16::MAX)),
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(Paragraph::new(header), head);

    let lines = images.lines(&result.filepath, picture.width, picture.height);
    frame.render_widget(
        Paragraph::new(lines.to_vec()).alignment(Alignment::Center),
        picture,
    );

    if let Some(text) = busy_notice.or(session.notice.as_deref()) {
        frame.render_widget(Paragraph::new(text.yellow()), notice);
    }
    frame.render_widget(hints("c: copy · s: save copy · Enter/Esc/q: back"), footer);
}

fn draw_error(frame: &mut Frame, session: &SessionState) {
    let message = session.last_error.as_deref().unwrap_or("Unknown error");
    let lines = vec![
        Line::from(format!("Error: {message}").bold().red()),
        Line::from(""),
        Line::from("Press Enter to try again...".dark_gray()),
    ];
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        frame.area(),
    );
}

fn history_label(entry: &imgncli_core::HistoryEntry) -> String {
    let created = entry.created_at.with_timezone(&Local);
    format!(
        "{}  ({})",
        entry.prompt_preview(HISTORY_PREVIEW_CHARS),
        created.format("%Y-%m-%d %H:%M")
    )
}

fn draw_history(frame: &mut Frame, session: &SessionState, ui: &UiState) {
    let [head, body, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(title("History", Color::Cyan), head);

    if session.history.is_empty() {
        frame.render_widget(hints("No history found"), body);
    } else {
        let items: Vec<ListItem> = session
            .history
            .iter()
            .map(|entry| ListItem::new(history_label(entry)))
            .collect();
        let list = List::new(items)
            .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");
        let mut state = ListState::default().with_selected(Some(ui.history_cursor));
        frame.render_stateful_widget(list, body, &mut state);
    }

    frame.render_widget(hints("↑/↓: navigate · Enter: view · Esc: back"), footer);
}

fn draw_setup(frame: &mut Frame, session: &SessionState, ui: &UiState) {
    let [head, info, input, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(1),
    ])
    .areas(frame.area());

    frame.render_widget(title("API Key Setup", Color::Cyan), head);

    let current = session
        .masked_api_key()
        .unwrap_or_else(|| "(not set)".to_string());
    let info_lines = vec![
        Line::from("Get your API key at https://openrouter.ai/keys"),
        Line::from(format!("Current key: {current}").dark_gray()),
    ];
    frame.render_widget(Paragraph::new(info_lines), info);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("OpenRouter API key")
        .border_style(Style::default().fg(Color::Cyan));
    let content = if ui.api_key_input.is_empty() {
        Line::from(API_KEY_PLACEHOLDER.dark_gray())
    } else {
        Line::from(ui.api_key_input.as_str())
    };
    frame.render_widget(Paragraph::new(content).block(block), input);

    frame.render_widget(hints("Enter: save · Esc: cancel"), footer);
}

fn draw_models(frame: &mut Frame, session: &SessionState, ui: &UiState) {
    let [head, body, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(title("Select Model", Color::Cyan), head);

    let items: Vec<ListItem> = AVAILABLE_MODELS
        .iter()
        .map(|model| {
            let mark = if model.id == session.selected_model.id {
                "✓ "
            } else {
                "  "
            };
            ListItem::new(Line::from(vec![
                Span::styled(mark, Style::default().fg(Color::Green)),
                Span::raw(model.name),
                Span::styled(format!("  {}", model.id), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();
    let list = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(ui.model_cursor));
    frame.render_stateful_widget(list, body, &mut state);

    frame.render_widget(hints("↑/↓: navigate · Enter: select · Esc: back"), footer);
}

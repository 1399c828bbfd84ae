//! Screen routing.
//!
//! `Route` names the screen currently shown. Slash commands typed at the
//! prompt map to routes through an exhaustive `match`, and `Router::next`
//! is the complete transition table.

use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

/// One screen of the interactive session. `Input` is initial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Route {
    #[default]
    Input,
    Loading,
    Displaying,
    Error,
    History,
    Viewing,
    Setup,
    Models,
}

/// Commands recognized at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum SlashCommand {
    History,
    Clear,
    Setup,
    Models,
}

/// What a slash command does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    /// Switch to a screen.
    Navigate(Route),
    /// Clear the history in place without leaving `Input`.
    ClearHistory,
}

impl SlashCommand {
    /// The token typed at the prompt, including the leading `/`.
    pub const fn token(self) -> &'static str {
        match self {
            Self::History => "/history",
            Self::Clear => "/clear",
            Self::Setup => "/setup",
            Self::Models => "/models",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::History => "View previously generated images",
            Self::Clear => "Clear image history",
            Self::Setup => "Configure your OpenRouter API key",
            Self::Models => "Select the image generation model",
        }
    }

    pub const fn action(self) -> CommandAction {
        match self {
            Self::History => CommandAction::Navigate(Route::History),
            Self::Clear => CommandAction::ClearHistory,
            Self::Setup => CommandAction::Navigate(Route::Setup),
            Self::Models => CommandAction::Navigate(Route::Models),
        }
    }

    /// Exact, case-insensitive token match.
    pub fn parse(token: &str) -> Option<Self> {
        Self::iter().find(|c| c.token().eq_ignore_ascii_case(token))
    }

    /// Commands whose token starts with `prefix`, in declaration order.
    pub fn matching(prefix: &str) -> Vec<Self> {
        let prefix = prefix.trim().to_ascii_lowercase();
        Self::iter()
            .filter(|c| c.token().starts_with(&prefix))
            .collect()
    }
}

/// Classification of a submitted prompt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedInput {
    /// Blank line; ignored.
    Empty,
    /// A known slash command.
    Command(SlashCommand),
    /// Starts with `/` but names no command; ignored.
    UnknownCommand(String),
    /// Text to generate an image from, trimmed.
    Prompt(String),
}

/// Classify a submitted line.
pub fn parse_input(raw: &str) -> ParsedInput {
    let text = raw.trim();
    if text.is_empty() {
        return ParsedInput::Empty;
    }
    if text.starts_with('/') {
        return SlashCommand::parse(text).map_or_else(
            || ParsedInput::UnknownCommand(text.to_string()),
            ParsedInput::Command,
        );
    }
    ParsedInput::Prompt(text.to_string())
}

/// Events that can move the session between screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    SubmitPrompt,
    Command(SlashCommand),
    GenerationSucceeded,
    GenerationFailed,
    SelectHistoryEntry,
    SelectModel,
    SubmitApiKey,
    Back,
    /// A storage or collaborator failure outside of generation.
    OperationFailed,
}

/// The session state machine.
pub struct Router;

impl Router {
    /// Route reached from `from` on `trigger`. Pairs without a transition
    /// leave the route unchanged; in particular nothing but a generation
    /// result leaves `Loading`.
    pub const fn next(from: Route, trigger: Trigger) -> Route {
        match (from, trigger) {
            (Route::Input, Trigger::SubmitPrompt) => Route::Loading,
            (Route::Input, Trigger::Command(cmd)) => match cmd.action() {
                CommandAction::Navigate(route) => route,
                CommandAction::ClearHistory => Route::Input,
            },
            (Route::Loading, Trigger::GenerationSucceeded) => Route::Displaying,
            (Route::Loading, Trigger::GenerationFailed) => Route::Error,
            (Route::History, Trigger::SelectHistoryEntry) => Route::Viewing,
            (Route::Models, Trigger::SelectModel) | (Route::Setup, Trigger::SubmitApiKey) => {
                Route::Input
            }
            (
                Route::History
                | Route::Models
                | Route::Viewing
                | Route::Displaying
                | Route::Error
                | Route::Setup,
                Trigger::Back,
            ) => Route::Input,
            (Route::Loading, Trigger::OperationFailed) => Route::Loading,
            (_, Trigger::OperationFailed) => Route::Error,
            (route, _) => route,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ROUTES: [Route; 8] = [
        Route::Input,
        Route::Loading,
        Route::Displaying,
        Route::Error,
        Route::History,
        Route::Viewing,
        Route::Setup,
        Route::Models,
    ];

    #[test]
    fn test_commands_navigate_to_matching_routes() {
        assert_eq!(
            Router::next(Route::Input, Trigger::Command(SlashCommand::History)),
            Route::History
        );
        assert_eq!(
            Router::next(Route::Input, Trigger::Command(SlashCommand::Setup)),
            Route::Setup
        );
        assert_eq!(
            Router::next(Route::Input, Trigger::Command(SlashCommand::Models)),
            Route::Models
        );
        assert_eq!(
            Router::next(Route::Input, Trigger::Command(SlashCommand::Clear)),
            Route::Input
        );
    }

    #[test]
    fn test_command_tokens_name_their_routes() {
        for cmd in SlashCommand::iter() {
            if let CommandAction::Navigate(route) = cmd.action() {
                let name: &'static str = route.into();
                assert_eq!(cmd.token(), format!("/{name}"));
            }
        }
    }

    #[test]
    fn test_loading_only_resolves_via_generation() {
        assert_eq!(Router::next(Route::Loading, Trigger::Back), Route::Loading);
        assert_eq!(
            Router::next(Route::Loading, Trigger::SubmitPrompt),
            Route::Loading
        );
        assert_eq!(
            Router::next(Route::Loading, Trigger::OperationFailed),
            Route::Loading
        );
        assert_eq!(
            Router::next(Route::Loading, Trigger::GenerationSucceeded),
            Route::Displaying
        );
        assert_eq!(
            Router::next(Route::Loading, Trigger::GenerationFailed),
            Route::Error
        );
    }

    #[test]
    fn test_loading_reachable_only_from_input() {
        for route in ALL_ROUTES {
            for trigger in [
                Trigger::SubmitPrompt,
                Trigger::Back,
                Trigger::SelectModel,
                Trigger::SelectHistoryEntry,
                Trigger::SubmitApiKey,
            ] {
                let to = Router::next(route, trigger);
                if to == Route::Loading && route != Route::Loading {
                    assert_eq!(route, Route::Input);
                }
            }
        }
    }

    #[test]
    fn test_back_returns_to_input() {
        for route in ALL_ROUTES {
            let expected = if route == Route::Loading {
                Route::Loading
            } else {
                Route::Input
            };
            assert_eq!(Router::next(route, Trigger::Back), expected);
        }
    }

    #[test]
    fn test_screen_specific_triggers() {
        assert_eq!(
            Router::next(Route::History, Trigger::SelectHistoryEntry),
            Route::Viewing
        );
        assert_eq!(Router::next(Route::Models, Trigger::SelectModel), Route::Input);
        assert_eq!(Router::next(Route::Setup, Trigger::SubmitApiKey), Route::Input);
        // Out-of-place triggers are no-ops.
        assert_eq!(
            Router::next(Route::Input, Trigger::SelectModel),
            Route::Input
        );
        assert_eq!(
            Router::next(Route::Displaying, Trigger::SubmitPrompt),
            Route::Displaying
        );
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("   "), ParsedInput::Empty);
        assert_eq!(
            parse_input(" /history "),
            ParsedInput::Command(SlashCommand::History)
        );
        assert_eq!(
            parse_input("/CLEAR"),
            ParsedInput::Command(SlashCommand::Clear)
        );
        assert_eq!(
            parse_input("/unknown"),
            ParsedInput::UnknownCommand("/unknown".to_string())
        );
        assert_eq!(
            parse_input("  a red bicycle "),
            ParsedInput::Prompt("a red bicycle".to_string())
        );
    }

    #[test]
    fn test_prefix_matching() {
        assert_eq!(SlashCommand::matching("/").len(), 4);
        assert_eq!(SlashCommand::matching("/h"), vec![SlashCommand::History]);
        assert_eq!(SlashCommand::matching("/s"), vec![SlashCommand::Setup]);
        assert!(SlashCommand::matching("/x").is_empty());
    }
}

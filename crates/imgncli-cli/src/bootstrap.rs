//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. All concrete implementations are instantiated here:
//! - JSON store and repositories (via imgncli-store)
//! - Image generator (via imgncli-openrouter)
//! - Clipboard and save-a-copy helpers (via `crate::desktop`)
//! - Session controller (via imgncli-core)

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use imgncli_core::ports::{ClipboardPort, ImageExporter, ImageGenerator};
use imgncli_core::{AppPaths, SessionController};
use imgncli_openrouter::{DefaultOpenRouterClient, OpenRouterConfig};
use imgncli_store::StoreFactory;
use tracing::info;

use crate::desktop::{DirectoryExporter, SystemClipboard};
use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Resolved application directory.
    pub paths: AppPaths,
    /// Where "save a copy" writes.
    pub save_dir: PathBuf,
    /// Chat-completions endpoint override.
    pub api_url: Option<String>,
    /// Generation request timeout.
    pub timeout: Duration,
}

impl CliConfig {
    /// Resolve configuration from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let paths = AppPaths::resolve(cli.data_dir.as_deref())?;
        let save_dir = match &cli.save_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };
        Ok(Self {
            paths,
            save_dir,
            api_url: cli.api_url.clone(),
            timeout: Duration::from_secs(cli.timeout_secs),
        })
    }

    /// Client configuration derived from the CLI options.
    pub fn openrouter_config(&self) -> OpenRouterConfig {
        let config = OpenRouterConfig::new().with_timeout(self.timeout);
        match &self.api_url {
            Some(url) => config.with_endpoint(url.clone()),
            None => config,
        }
    }
}

/// Fully composed application context.
pub struct CliContext {
    /// Session controller driving the UI.
    pub controller: SessionController,
}

/// Bootstrap the CLI application.
///
/// This is the composition root. It:
/// 1. Opens the store and creates its directories
/// 2. Assembles the AppCore from store-backed repositories
/// 3. Creates the `OpenRouter` client and desktop helpers
/// 4. Restores the session from persisted config and history
pub async fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    let generator: Arc<dyn ImageGenerator> = Arc::new(
        DefaultOpenRouterClient::new(config.openrouter_config())
            .map_err(|e| CliError::Config(e.to_string()))?,
    );
    let clipboard: Arc<dyn ClipboardPort> = Arc::new(SystemClipboard::new());
    let exporter: Arc<dyn ImageExporter> = Arc::new(DirectoryExporter::new(&config.save_dir));

    bootstrap_with(config, generator, clipboard, exporter).await
}

/// Bootstrap with injected collaborators (for testing).
pub async fn bootstrap_with(
    config: &CliConfig,
    generator: Arc<dyn ImageGenerator>,
    clipboard: Arc<dyn ClipboardPort>,
    exporter: Arc<dyn ImageExporter>,
) -> Result<CliContext, CliError> {
    let store = StoreFactory::open(config.paths.clone()).await?;
    let app = StoreFactory::build_app_core(&store);
    let controller = SessionController::bootstrap(app, generator, clipboard, exporter).await?;

    info!(root = %config.paths.root().display(), "Bootstrap complete");
    Ok(CliContext { controller })
}

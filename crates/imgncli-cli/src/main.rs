//! imgncli binary entry point.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use imgncli_cli::{Cli, CliConfig, CliError, bootstrap, logging, tui};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before clap reads environment-backed options
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err
                .downcast_ref::<CliError>()
                .map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::from_cli(&cli)?;
    let _log_guard = logging::init_tracing(&config.paths.logs_dir(), cli.verbose);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting imgncli");

    let mut ctx = bootstrap(&config)
        .await
        .context("Failed to initialize imgncli")?;
    tui::run(&mut ctx.controller)
        .await
        .context("Terminal session failed")?;

    tracing::info!("Session ended");
    Ok(())
}

//! Command-line arguments.
//!
//! Every flag can also be set through an `IMGNCLI_*` environment variable,
//! including from a `.env` file in the working directory.

use std::path::PathBuf;

use clap::Parser;

/// Generate images from text prompts in your terminal.
#[derive(Debug, Parser)]
#[command(name = "imgncli")]
#[command(about = "Generate images from text prompts using OpenRouter")]
#[command(version)]
pub struct Cli {
    /// Directory for config, history and generated images [default: ~/.aiascii]
    #[arg(long = "data-dir", env = "IMGNCLI_DATA_DIR", value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Directory where `s` saves copies of images [default: current directory]
    #[arg(long = "save-dir", env = "IMGNCLI_SAVE_DIR", value_name = "PATH")]
    pub save_dir: Option<PathBuf>,

    /// Override the chat-completions endpoint
    #[arg(long = "api-url", env = "IMGNCLI_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(
        long = "timeout-secs",
        env = "IMGNCLI_TIMEOUT_SECS",
        value_name = "SECS",
        default_value_t = 120,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,

    /// Enable verbose/debug logging to the log file
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "imgncli",
            "-v",
            "--data-dir",
            "/tmp/imgn",
            "--save-dir",
            "/tmp/out",
            "--api-url",
            "http://localhost:9000/v1/chat/completions",
            "--timeout-secs",
            "30",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/imgn")));
        assert_eq!(cli.save_dir, Some(PathBuf::from("/tmp/out")));
        assert_eq!(
            cli.api_url.as_deref(),
            Some("http://localhost:9000/v1/chat/completions")
        );
        assert_eq!(cli.timeout_secs, 30);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(Cli::try_parse_from(["imgncli", "--timeout-secs", "0"]).is_err());
    }
}

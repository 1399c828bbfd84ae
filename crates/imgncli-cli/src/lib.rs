//! Terminal adapter for `imgncli`.
//!
//! Wires the JSON store, the `OpenRouter` client and the desktop helpers
//! into a `SessionController`, and drives it from a ratatui front end.
#![deny(unused_crate_dependencies)]

// Used only by the binary target
use dotenvy as _;

pub mod bootstrap;
pub mod desktop;
pub mod error;
pub mod logging;
pub mod parser;
pub mod tui;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use error::CliError;
pub use parser::Cli;

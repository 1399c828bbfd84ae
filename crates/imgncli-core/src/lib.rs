//! Core of the `imgncli` image generation client.
//!
//! This crate holds the pure domain model, the port traits the adapters
//! implement, the services composed over those ports and the session state
//! machine that drives the terminal UI. It performs no I/O of its own.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod router;
pub mod services;
pub mod session;

pub use domain::{
    AVAILABLE_MODELS, Config, FailureKind, GenerationOutcome, HistoryEntry, ImageResult, Model,
    decode_image_base64,
};
pub use paths::{APP_DIR_NAME, AppPaths, PathError};
pub use ports::{
    ClipboardPort, ConfigRepository, CoreError, DesktopError, HistoryRepository,
    ImageBlobRepository, ImageExporter, ImageGenerator, Repos, RepositoryError,
};
pub use router::{CommandAction, ParsedInput, Route, Router, SlashCommand, Trigger, parse_input};
pub use services::{AppCore, ConfigService, HistoryService};
pub use session::{Intent, SessionController, SessionState};

#[cfg(test)]
use serde_json as _;

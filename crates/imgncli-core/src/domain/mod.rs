//! Core domain types.
//!
//! These types represent the pure domain model, independent of the JSON
//! documents and HTTP payloads that carry them.
//!
//! # Structure
//!
//! - `model` - The compile-time catalog of image models
//! - `config` - Persisted user preferences
//! - `history` - Records of past generations
//! - `generation` - Outcome of one remote generation call

mod config;
mod generation;
mod history;
mod model;

pub use config::Config;
pub use generation::{
    FailureKind, GenerationOutcome, INVALID_IMAGE_FORMAT_MESSAGE, MISSING_API_KEY_MESSAGE,
    NO_IMAGE_MESSAGE, decode_image_base64,
};
pub use history::{HistoryEntry, ImageResult};
pub use model::{AVAILABLE_MODELS, Model};

//! `OpenRouter` chat-completions client that asks a model for an image.
//!
//! External code should use `OpenRouterClient` through the
//! `imgncli_core::ImageGenerator` port; every failure is folded into a
//! `GenerationOutcome::Failure` at that boundary.
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod parsing;

// ============================================================================
// Public API
// ============================================================================

pub use client::{DefaultOpenRouterClient, GeneratedImage, OpenRouterClient};
pub use config::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, OpenRouterConfig};
pub use error::ClientError;
pub use http::{HttpBackend, HttpRequest, HttpResponse, ReqwestBackend};

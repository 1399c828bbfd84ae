//! Image generator port.
//!
//! Abstracts the remote text-to-image API so the session controller can be
//! driven without a network.

use async_trait::async_trait;

use crate::domain::GenerationOutcome;

/// Turns a prompt into an image.
///
/// Implementations recover every failure (missing key, transport, non-2xx,
/// unusable response) into `GenerationOutcome::Failure`. An empty `api_key`
/// must short-circuit without any network I/O.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, api_key: &str, model_id: &str) -> GenerationOutcome;
}

//! Internal error types for generation requests.
//!
//! These errors are internal to `imgncli-openrouter` and are folded into
//! `GenerationOutcome::Failure` at the port boundary. Their `Display` text
//! is what the user sees.

use imgncli_core::FailureKind;
use imgncli_core::domain::{INVALID_IMAGE_FORMAT_MESSAGE, MISSING_API_KEY_MESSAGE, NO_IMAGE_MESSAGE};
use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// No API key; detected before any I/O.
    #[error("{}", MISSING_API_KEY_MESSAGE)]
    MissingApiKey,

    /// The request produced no HTTP response, or its body was unreadable.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status.
    #[error("API request failed ({status}): {body}")]
    Api { status: u16, body: String },

    /// Success response without an image attachment.
    #[error("{}", NO_IMAGE_MESSAGE)]
    NoImage,

    /// Image attachment is not a base64 data URI.
    #[error("{}", INVALID_IMAGE_FORMAT_MESSAGE)]
    InvalidImageFormat,

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

impl ClientError {
    /// Failure category for the generation outcome.
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::MissingApiKey | Self::ClientBuild(_) => FailureKind::Configuration,
            Self::Network(_) => FailureKind::Transport,
            Self::Api { .. } => FailureKind::Remote,
            Self::NoImage | Self::InvalidImageFormat => FailureKind::Semantic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ClientError::MissingApiKey.to_string(),
            "API key is not configured. Use /setup to add your OpenRouter API key."
        );
        assert_eq!(
            ClientError::Api {
                status: 401,
                body: "{\"error\":\"bad key\"}".to_string()
            }
            .to_string(),
            "API request failed (401): {\"error\":\"bad key\"}"
        );
        assert_eq!(
            ClientError::Network("connection reset".to_string()).to_string(),
            "Network error: connection reset"
        );
        assert_eq!(
            ClientError::NoImage.to_string(),
            "No image was generated. The model may not have understood the prompt."
        );
        assert_eq!(
            ClientError::InvalidImageFormat.to_string(),
            "Invalid image format returned from API"
        );
    }

    #[test]
    fn test_kinds() {
        assert_eq!(ClientError::MissingApiKey.kind(), FailureKind::Configuration);
        assert_eq!(
            ClientError::Network(String::new()).kind(),
            FailureKind::Transport
        );
        assert_eq!(
            ClientError::Api {
                status: 500,
                body: String::new()
            }
            .kind(),
            FailureKind::Remote
        );
        assert_eq!(ClientError::NoImage.kind(), FailureKind::Semantic);
    }
}

//! Result of a single remote generation call.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Shown when generation is attempted without an API key.
pub const MISSING_API_KEY_MESSAGE: &str =
    "API key is not configured. Use /setup to add your OpenRouter API key.";

/// Shown when a successful response carries no image.
pub const NO_IMAGE_MESSAGE: &str =
    "No image was generated. The model may not have understood the prompt.";

/// Shown when the returned image is not a base64 data URI.
pub const INVALID_IMAGE_FORMAT_MESSAGE: &str = "Invalid image format returned from API";

/// Which stage of a generation call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Detected locally before any I/O (missing API key).
    Configuration,
    /// The request never produced an HTTP response.
    Transport,
    /// The API answered with a non-success status.
    Remote,
    /// A success response without a usable image.
    Semantic,
}

/// Discriminated outcome of a generation call. Never both an image and an
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Success {
        /// Base64 payload extracted from the data URI.
        image_base64: String,
        /// Accompanying text, empty when the response had none.
        text_content: String,
    },
    Failure {
        kind: FailureKind,
        error: String,
    },
}

impl GenerationOutcome {
    pub fn failure(kind: FailureKind, error: impl Into<String>) -> Self {
        Self::Failure {
            kind,
            error: error.into(),
        }
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Decode a standard base64 image payload into raw bytes.
pub fn decode_image_base64(payload: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(payload.trim())
}

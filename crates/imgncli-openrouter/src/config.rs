//! Public configuration for the `OpenRouter` client.

use std::time::Duration;

/// Default chat-completions endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Default request timeout. Image models routinely take tens of seconds.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Configuration for the `OpenRouter` client.
///
/// # Example
///
/// ```
/// use imgncli_openrouter::OpenRouterConfig;
/// use std::time::Duration;
///
/// let config = OpenRouterConfig::new()
///     .with_endpoint("http://localhost:8080/v1/chat/completions")
///     .with_timeout(Duration::from_secs(30));
/// ```
#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    pub(crate) endpoint: String,
    pub(crate) timeout: Duration,
    /// Sent as `HTTP-Referer` for app attribution.
    pub(crate) referer: String,
    /// Sent as `X-Title` for app attribution.
    pub(crate) title: String,
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            referer: "https://github.com/aiascii".to_string(),
            title: "AI ASCII Image Generator".to_string(),
        }
    }
}

impl OpenRouterConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 120 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = referer.into();
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

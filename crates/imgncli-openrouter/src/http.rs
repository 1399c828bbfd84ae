//! HTTP backend abstraction for the `OpenRouter` API.
//!
//! The client builds the request; a backend only moves bytes. Tests swap in
//! a scripted backend that records what would have been sent.

use async_trait::async_trait;
use serde_json::Value;

use crate::config::OpenRouterConfig;
use crate::error::{ClientError, ClientResult};

/// A fully built JSON POST.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Value,
}

impl HttpRequest {
    /// First header value with the given name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status and raw body of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Trait for HTTP backends that can POST JSON.
///
/// Any failure to obtain a response is a `ClientError::Network`. Non-success
/// statuses are returned as responses, not errors.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    async fn post_json(&self, request: HttpRequest) -> ClientResult<HttpResponse>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest. No retries.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the configured timeout.
    pub fn new(config: &OpenRouterConfig) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::ClientBuild(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn post_json(&self, request: HttpRequest) -> ClientResult<HttpResponse> {
        let mut builder = self.client.post(&request.url).json(&request.body);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// A fake backend that replays scripted results and records requests.
    #[derive(Default)]
    pub struct FakeBackend {
        script: Mutex<VecDeque<ClientResult<HttpResponse>>>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl FakeBackend {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue a response with the given status and JSON body.
        pub fn with_json(self, status: u16, body: &Value) -> Self {
            self.with_body(status, body.to_string())
        }

        /// Queue a response with a raw body.
        pub fn with_body(self, status: u16, body: impl Into<String>) -> Self {
            self.script.lock().unwrap().push_back(Ok(HttpResponse {
                status,
                body: body.into(),
            }));
            self
        }

        /// Queue a transport failure.
        pub fn with_network_error(self, reason: &str) -> Self {
            self.script
                .lock()
                .unwrap()
                .push_back(Err(ClientError::Network(reason.to_string())));
            self
        }

        pub fn requests(&self) -> Vec<HttpRequest> {
            self.requests.lock().unwrap().clone()
        }

        pub fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn post_json(&self, request: HttpRequest) -> ClientResult<HttpResponse> {
            self.requests.lock().unwrap().push(request);
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(ClientError::Network("no scripted response".to_string())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reqwest_backend_creation() {
        assert!(ReqwestBackend::new(&OpenRouterConfig::default()).is_ok());
    }

    #[test]
    fn test_status_classification() {
        let ok = HttpResponse {
            status: 200,
            body: String::new(),
        };
        let created = HttpResponse {
            status: 204,
            body: String::new(),
        };
        let redirect = HttpResponse {
            status: 302,
            body: String::new(),
        };
        assert!(ok.is_success());
        assert!(created.is_success());
        assert!(!redirect.is_success());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let request = HttpRequest {
            url: "http://x".to_string(),
            headers: vec![("X-Title", "t".to_string())],
            body: Value::Null,
        };
        assert_eq!(request.header("x-title"), Some("t"));
        assert_eq!(request.header("missing"), None);
    }
}

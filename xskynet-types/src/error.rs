//! Error types for all xskynet crates.

use std::fmt;
use std::time::Duration;

/// Number of response-body characters shown when an [`ApiError`] is displayed.
const DISPLAY_BODY_CHARS: usize = 200;

/// Status codes the transport treats as transient.
pub const RETRYABLE_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];

/// The server answered with a non-2xx status.
///
/// `response_body` always holds the full raw text; only [`Display`](fmt::Display)
/// shortens it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code returned by the server.
    pub status_code: u16,
    /// Raw response text.
    pub response_body: String,
}

impl ApiError {
    /// Create an API error from a status code and raw body.
    pub fn new(status_code: u16, response_body: impl Into<String>) -> Self {
        Self {
            status_code,
            response_body: response_body.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown: String = self.response_body.chars().take(DISPLAY_BODY_CHARS).collect();
        write!(f, "API error {}: {}", self.status_code, shown)
    }
}

impl std::error::Error for ApiError {}

/// Errors from SDK operations.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// Non-2xx response, after any transport-level retries.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// Connection-level failure (DNS, refused, reset, TLS).
    #[error("network error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// The configured request timeout elapsed.
    #[error("timeout after {0:?}")]
    Timeout(Duration),
    /// A 2xx response body was not valid JSON.
    #[error("invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),
    /// A payload did not have the expected shape.
    #[error("unexpected payload shape: {0}")]
    Shape(String),
    /// The client was misconfigured.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl SdkError {
    /// HTTP status code, when this is an [`SdkError::Api`].
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(err) => Some(err.status_code),
            _ => None,
        }
    }

    /// Whether this error is likely transient and the request can be retried.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Api(err) => RETRYABLE_STATUSES.contains(&err.status_code),
            Self::Transport(_) | Self::Timeout(_) => true,
            Self::Decode(_) | Self::Shape(_) | Self::Config(_) => false,
        }
    }
}

/// Result alias used throughout the SDK.
pub type Result<T, E = SdkError> = std::result::Result<T, E>;

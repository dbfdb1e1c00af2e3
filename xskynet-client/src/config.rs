//! Client configuration and its builder.

use std::fmt;
use std::time::Duration;

use xskynet_types::Result;

use crate::client::XSkynetClient;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default number of automatic retries on transient statuses.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default base delay for exponential backoff between retries.
pub const DEFAULT_BACKOFF_FACTOR: Duration = Duration::from_millis(500);

/// User-agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("xskynet-sdk-rust/", env!("CARGO_PKG_VERSION"));

/// Configuration for an [`XSkynetClient`].
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use xskynet_client::ClientConfig;
///
/// let client = ClientConfig::new("https://your-deployment.vercel.app", "your-api-key")
///     .timeout(Duration::from_secs(10))
///     .max_retries(5)
///     .build()?;
/// # Ok::<(), xskynet_client::SdkError>(())
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    /// Root URL of the deployment, without a trailing slash.
    pub(crate) base_url: String,
    /// Bearer token sent in the `Authorization` header.
    pub(crate) api_key: String,
    /// Applied to every request, including each retry.
    pub(crate) timeout: Duration,
    /// Re-issues allowed for 429/500/502/503/504 responses.
    pub(crate) max_retries: u32,
    /// Delay before the first retry; doubles on each subsequent one.
    pub(crate) backoff_factor: Duration,
    pub(crate) user_agent: String,
}

impl ClientConfig {
    /// Create a configuration with the default timeout (30 s) and retry
    /// count (3).
    ///
    /// One trailing slash is stripped from `base_url`.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: strip_trailing_slash(base_url.into()),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_factor: DEFAULT_BACKOFF_FACTOR,
            user_agent: DEFAULT_USER_AGENT.into(),
        }
    }

    /// Override the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the number of automatic retries. `0` disables retrying.
    #[must_use]
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Override the backoff base delay.
    #[must_use]
    pub fn backoff_factor(mut self, backoff_factor: Duration) -> Self {
        self.backoff_factor = backoff_factor;
        self
    }

    /// Override the user-agent string.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// The normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the client.
    pub fn build(self) -> Result<XSkynetClient> {
        XSkynetClient::with_config(self)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .field("backoff_factor", &self.backoff_factor)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn strip_trailing_slash(url: String) -> String {
    match url.strip_suffix('/') {
        Some(stripped) => stripped.to_owned(),
        None => url,
    }
}

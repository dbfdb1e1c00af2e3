//! X-Skynet API client.

use std::fmt;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use serde_json::{Value, json};
use xskynet_types::{Agent, Mission, NewProposal, Proposal, Result, SdkError};

use crate::config::ClientConfig;
use crate::error::{map_http_status, map_reqwest_error};
use crate::query::ProposalFilter;
use crate::retry::RetryPolicy;
use crate::shape;

/// Status reported by [`XSkynetClient::send_heartbeat`].
pub const DEFAULT_HEARTBEAT_STATUS: &str = "healthy";

const AGENTS_PATH: &str = "/api/ops/agents";
const PROPOSALS_PATH: &str = "/api/ops/proposals";
const MISSIONS_PATH: &str = "/api/ops/missions";

/// Synchronous client for the X-Skynet orchestration API.
///
/// Holds one connection pool for its whole life. Dropping the client
/// releases it, so a client scoped to a block is cleaned up on every exit
/// path; [`close`](Self::close) does the same explicitly.
///
/// Every operation blocks until the exchange, including retries, finishes
/// or the timeout elapses. Do not call it from an async runtime's worker
/// thread.
///
/// # Example
///
/// ```no_run
/// use xskynet_client::XSkynetClient;
///
/// let client = XSkynetClient::new("https://your-deployment.vercel.app", "your-api-key")?;
/// for agent in client.list_agents()? {
///     println!("{} {}", agent.id, agent.status);
/// }
/// # Ok::<(), xskynet_client::SdkError>(())
/// ```
pub struct XSkynetClient {
    base_url: String,
    timeout: Duration,
    retry: RetryPolicy,
    http: reqwest::blocking::Client,
}

impl XSkynetClient {
    /// Create a client with the default timeout and retry settings.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(base_url, api_key))
    }

    /// Create a client from an explicit configuration.
    ///
    /// Fails with [`SdkError::Config`] when the API key or user agent is not
    /// a valid header value.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| SdkError::Config("API key is not a valid header value".into()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| SdkError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: config.base_url,
            timeout: config.timeout,
            retry: RetryPolicy::new(config.max_retries, config.backoff_factor),
            http,
        })
    }

    /// Root URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Automatic retries on transient statuses.
    pub fn max_retries(&self) -> u32 {
        self.retry.max_retries()
    }

    /// Release the underlying connections.
    pub fn close(self) {}

    // ─── Agents ──────────────────────────────────────────────────────────────

    /// List all registered agents visible to the caller.
    pub fn list_agents(&self) -> Result<Vec<Agent>> {
        let body = self.request(Method::GET, AGENTS_PATH, None, &[])?;
        shape::decode_all(shape::list(body, &["agents", "data"])?, Agent::from_json)
    }

    /// Fetch a single agent by id.
    pub fn get_agent(&self, agent_id: impl AsRef<str>) -> Result<Agent> {
        let path = format!("{AGENTS_PATH}/{}", agent_id.as_ref());
        let body = self.request(Method::GET, &path, None, &[])?;
        Agent::from_json(&shape::record(body, "agent")?)
    }

    /// Send a `"healthy"` heartbeat on behalf of an agent.
    ///
    /// Returns the raw response body, or `None` for an empty response.
    pub fn send_heartbeat(&self, agent_id: impl AsRef<str>) -> Result<Option<Value>> {
        self.send_heartbeat_with_status(agent_id, DEFAULT_HEARTBEAT_STATUS)
    }

    /// Send a heartbeat reporting `status`.
    pub fn send_heartbeat_with_status(
        &self,
        agent_id: impl AsRef<str>,
        status: &str,
    ) -> Result<Option<Value>> {
        let path = format!("{AGENTS_PATH}/{}/heartbeat", agent_id.as_ref());
        self.request(Method::POST, &path, Some(&json!({ "status": status })), &[])
    }

    // ─── Proposals ───────────────────────────────────────────────────────────

    /// Create a multi-step proposal.
    ///
    /// Steps are sent in order in their narrow wire shape. A raw step that
    /// is not a JSON object fails before any request is made.
    pub fn create_proposal(&self, proposal: &NewProposal) -> Result<Proposal> {
        let payload = proposal.to_wire()?;
        let body = self.request(Method::POST, PROPOSALS_PATH, Some(&payload), &[])?;
        Proposal::from_json(&shape::record(body, "proposal")?)
    }

    /// List proposals, optionally filtered by status.
    pub fn list_proposals(&self, filter: &ProposalFilter) -> Result<Vec<Proposal>> {
        let body = self.request(Method::GET, PROPOSALS_PATH, None, &filter.to_query())?;
        shape::decode_all(shape::list(body, &["proposals", "data"])?, Proposal::from_json)
    }

    /// Fetch a single proposal by id.
    pub fn get_proposal(&self, proposal_id: impl AsRef<str>) -> Result<Proposal> {
        let path = format!("{PROPOSALS_PATH}/{}", proposal_id.as_ref());
        let body = self.request(Method::GET, &path, None, &[])?;
        Proposal::from_json(&shape::record(body, "proposal")?)
    }

    // ─── Missions ────────────────────────────────────────────────────────────

    /// Fetch a mission, with its proposals when the server expands them.
    pub fn get_mission(&self, mission_id: impl AsRef<str>) -> Result<Mission> {
        let path = format!("{MISSIONS_PATH}/{}", mission_id.as_ref());
        let body = self.request(Method::GET, &path, None, &[])?;
        Mission::from_json(&shape::record(body, "mission")?)
    }

    /// List up to `limit` missions. See [`DEFAULT_MISSION_LIMIT`](crate::DEFAULT_MISSION_LIMIT).
    pub fn list_missions(&self, limit: u32) -> Result<Vec<Mission>> {
        let query = [("limit", limit.to_string())];
        let body = self.request(Method::GET, MISSIONS_PATH, None, &query)?;
        shape::decode_all(shape::list(body, &["missions", "data"])?, Mission::from_json)
    }

    // ─── Transport ───────────────────────────────────────────────────────────

    /// Send one request through the retry policy.
    ///
    /// Returns `None` for 204 or an empty body, the parsed JSON otherwise.
    /// Any non-2xx status left after retries becomes [`SdkError::Api`].
    fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        query: &[(&str, String)],
    ) -> Result<Option<Value>> {
        let url = join_url(&self.base_url, path);
        let mut retries = 0;

        loop {
            tracing::debug!(method = %method, url = %url, "sending request");

            let mut builder = self
                .http
                .request(method.clone(), &url)
                .timeout(self.timeout);
            if !query.is_empty() {
                builder = builder.query(query);
            }
            if let Some(body) = body {
                builder = builder.json(body);
            }

            let response = builder
                .send()
                .map_err(|e| map_reqwest_error(e, self.timeout))?;
            let status = response.status();

            if self.retry.should_retry(&method, status, retries) {
                retries += 1;
                let delay = self.retry.delay(retries, status, response.headers());
                tracing::warn!(status = status.as_u16(), attempt = retries, ?delay, "retrying request");
                drop(response);
                std::thread::sleep(delay);
                continue;
            }

            let text = response
                .text()
                .map_err(|e| map_reqwest_error(e, self.timeout))?;

            if !status.is_success() {
                tracing::debug!(status = status.as_u16(), "request failed");
                return Err(map_http_status(status, text));
            }
            if status == StatusCode::NO_CONTENT || text.is_empty() {
                return Ok(None);
            }
            return Ok(Some(serde_json::from_str(&text)?));
        }
    }
}

impl fmt::Debug for XSkynetClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XSkynetClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("max_retries", &self.retry.max_retries())
            .finish_non_exhaustive()
    }
}

/// Join `path` onto `base` with exactly one slash between them.
fn join_url(base: &str, path: &str) -> String {
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{base}/{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_handles_leading_slash() {
        assert_eq!(
            join_url("https://x.ai", "/api/ops/agents"),
            "https://x.ai/api/ops/agents"
        );
    }

    #[test]
    fn join_handles_missing_slash() {
        assert_eq!(
            join_url("https://x.ai", "api/ops/agents"),
            "https://x.ai/api/ops/agents"
        );
    }

    #[test]
    fn new_strips_trailing_slash() {
        let client = XSkynetClient::new("https://example.com/", "k").unwrap();
        assert_eq!(client.base_url(), "https://example.com");
    }

    #[test]
    fn defaults_are_exposed() {
        let client = XSkynetClient::new("https://example.com", "k").unwrap();
        assert_eq!(client.timeout(), Duration::from_secs(30));
        assert_eq!(client.max_retries(), 3);
    }

    #[test]
    fn debug_shows_base_url_not_key() {
        let client = XSkynetClient::new("https://test.x-skynet.ai", "test-api-key-12345").unwrap();
        let shown = format!("{client:?}");
        assert!(shown.contains("https://test.x-skynet.ai"));
        assert!(!shown.contains("test-api-key-12345"));
    }

    #[test]
    fn api_key_with_newline_is_rejected() {
        let err = XSkynetClient::new("https://example.com", "bad\nkey").unwrap_err();
        assert!(matches!(err, SdkError::Config(_)));
    }

    #[test]
    fn independent_clients_keep_their_own_config() {
        let a = XSkynetClient::new("https://a.example", "ka").unwrap();
        let b = ClientConfig::new("https://b.example", "kb")
            .max_retries(0)
            .build()
            .unwrap();
        assert_eq!(a.base_url(), "https://a.example");
        assert_eq!(b.base_url(), "https://b.example");
        assert_eq!(a.max_retries(), 3);
        assert_eq!(b.max_retries(), 0);
        a.close();
        b.close();
    }
}

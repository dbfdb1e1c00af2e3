//! Transport-level retry policy.
//!
//! Transient statuses are retried with exponential backoff before the
//! response ever reaches an operation. Connection errors and timeouts are
//! not retried.

use std::time::Duration;

use reqwest::Method;
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use xskynet_types::RETRYABLE_STATUSES;

/// Upper bound on any single backoff sleep.
pub(crate) const MAX_BACKOFF: Duration = Duration::from_secs(120);

/// Methods the policy may re-issue.
const RETRY_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::PATCH,
    Method::DELETE,
];

#[derive(Debug, Clone)]
pub(crate) struct RetryPolicy {
    max_retries: u32,
    backoff_factor: Duration,
}

impl RetryPolicy {
    pub(crate) fn new(max_retries: u32, backoff_factor: Duration) -> Self {
        Self {
            max_retries,
            backoff_factor,
        }
    }

    pub(crate) fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Whether a response with `status` should be re-issued, given that
    /// `retries_done` retries have already happened.
    pub(crate) fn should_retry(&self, method: &Method, status: StatusCode, retries_done: u32) -> bool {
        retries_done < self.max_retries
            && RETRY_METHODS.contains(method)
            && RETRYABLE_STATUSES.contains(&status.as_u16())
    }

    /// Sleep before retry number `retry` (1-based): `factor * 2^(retry-1)`.
    pub(crate) fn backoff(&self, retry: u32) -> Duration {
        let multiplier = 2u32.saturating_pow(retry.saturating_sub(1));
        self.backoff_factor.saturating_mul(multiplier).min(MAX_BACKOFF)
    }

    /// The delay before retry number `retry`, honoring `Retry-After` on
    /// 429 and 503 responses.
    pub(crate) fn delay(&self, retry: u32, status: StatusCode, headers: &HeaderMap) -> Duration {
        let honors_header =
            status == StatusCode::TOO_MANY_REQUESTS || status == StatusCode::SERVICE_UNAVAILABLE;
        match retry_after(headers) {
            Some(wait) if honors_header => wait.min(MAX_BACKOFF),
            _ => self.backoff(retry),
        }
    }
}

/// `Retry-After` in whole seconds. HTTP-date values are ignored.
fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

//! Internal error helpers for mapping HTTP/reqwest errors to [`SdkError`].

use std::time::Duration;

use xskynet_types::{ApiError, SdkError};

/// Map a non-2xx response to [`SdkError::Api`], keeping the whole body.
pub(crate) fn map_http_status(status: reqwest::StatusCode, body: String) -> SdkError {
    SdkError::Api(ApiError::new(status.as_u16(), body))
}

/// Map a [`reqwest::Error`] to an [`SdkError`].
///
/// Timeouts report the configured duration; everything else is passed
/// through unwrapped as the transport error's source.
pub(crate) fn map_reqwest_error(err: reqwest::Error, timeout: Duration) -> SdkError {
    if err.is_timeout() {
        SdkError::Timeout(timeout)
    } else {
        SdkError::Transport(Box::new(err))
    }
}

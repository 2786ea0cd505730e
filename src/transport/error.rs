use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised at the HTTP boundary, before any decoding starts.
///
/// Every variant except [`TransportError::Rejected`] is retryable: the caller
/// may reissue the request with its own backoff policy. A rejection carries
/// the server-supplied reason and retrying the same request cannot help.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request never produced a response (DNS, connect, TLS, ...).
    #[error("Network request failed for {0}")]
    Network(String, #[source] reqwest::Error),

    /// The response body could not be read to completion.
    #[error("Failed to read response body from {0}")]
    Body(String, #[source] reqwest::Error),

    /// A status outside both `200` and `4xx`; the server is likely in a
    /// transient state.
    #[error("Received unexpected status {status} from {url}")]
    UnexpectedStatus { url: String, status: StatusCode },

    /// HTTP 4xx. The request itself is invalid; `reason` is the server's
    /// explanation, or `"unknown"` when the body carried none.
    #[error("Request rejected ({status}): {reason}")]
    Rejected { status: StatusCode, reason: String },
}

impl TransportError {
    /// Whether the caller may reasonably reissue the request.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Self::Rejected { .. })
    }
}

//! HTTP boundary: a single GET per invocation, status classification, and the
//! raw payload handed to the decoder unchanged.
//!
//! No retry loop and no timeout policy live here; both belong to the caller,
//! which can configure its own [`reqwest::Client`] on the
//! [`crate::OpenMeteo`] builder.

pub(crate) mod error;

pub use error::TransportError;

use log::{debug, info, warn};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

/// Default endpoint of the forecast API.
pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// JSON body the server attaches to a 4xx rejection.
#[derive(Debug, Deserialize)]
struct RejectionBody {
    reason: Option<String>,
}

/// Performs the GET and classifies the outcome per status code:
/// 200 yields the raw bytes, 4xx a non-retryable rejection, anything else a
/// retryable failure.
pub(crate) async fn fetch_payload(
    client: &Client,
    base_url: &str,
    query: &[(&'static str, String)],
) -> Result<Vec<u8>, TransportError> {
    let response = client
        .get(base_url)
        .query(query)
        .send()
        .await
        .map_err(|e| TransportError::Network(base_url.to_string(), e))?;

    let url = response.url().to_string();
    let status = response.status();
    debug!("GET {url} -> {status}");

    if status.is_client_error() {
        let body = response.bytes().await.unwrap_or_default();
        return Err(TransportError::Rejected {
            status,
            reason: rejection_reason(&body),
        });
    }
    if status != StatusCode::OK {
        warn!("Unexpected status {status} from {url}");
        return Err(TransportError::UnexpectedStatus { url, status });
    }

    let payload = response
        .bytes()
        .await
        .map_err(|e| TransportError::Body(url.clone(), e))?;
    info!("Received {} byte payload from {}", payload.len(), url);
    Ok(payload.to_vec())
}

/// The rejection body is expected to be `{"error":true,"reason":"..."}`; an
/// unparsable or empty body degrades to `"unknown"` instead of masking the
/// status error.
fn rejection_reason(body: &[u8]) -> String {
    serde_json::from_slice::<RejectionBody>(body)
        .ok()
        .and_then(|body| body.reason)
        .unwrap_or_else(|| "unknown".to_string())
}

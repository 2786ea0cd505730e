use crate::forecast::error::DecodeError;
use crate::transport::TransportError;
use thiserror::Error;

/// Top-level error returned by [`crate::OpenMeteo`].
///
/// The taxonomy mirrors how a caller should react:
/// - retryable transport failures (network errors, unexpected statuses) may
///   be reissued with the caller's own backoff policy,
/// - a 4xx rejection carries the server's reason and retrying cannot help,
/// - a decode failure means the client and server disagree on the wire
///   schema; reissuing the same request cannot help either.
#[derive(Debug, Error)]
pub enum OpenMeteoError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl OpenMeteoError {
    /// Whether reissuing the request can reasonably succeed. No retry loop is
    /// built in; this only classifies the failure for the caller.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_retryable(),
            Self::Decode(_) => false,
        }
    }
}

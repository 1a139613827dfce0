//! Fetch error types.

use thiserror::Error;

/// Errors that can occur while requesting the status record.
///
/// All of them are transport failures from the viewer's point of view and
/// collapse into the same user-facing message.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent or the body could not be read.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body was not a status record.
    #[error("Malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The endpoint could not be reached.
    #[error("Endpoint unreachable: {0}")]
    Unreachable(String),
}

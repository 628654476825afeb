//! Fetch error types.

use thiserror::Error;

/// Errors that can occur while retrieving a remote image.
///
/// Fatal for the reference photo, isolated per candidate photo.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The network request failed or timed out.
    #[error("request for {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The remote host answered with a non-success status.
    #[error("fetch of {url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The fetched bytes could not be written to local temporary storage.
    #[error("failed to materialize fetched bytes: {0}")]
    Io(#[from] std::io::Error),

    /// The blocking temp-file write task was cancelled or panicked.
    #[error("temp file task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

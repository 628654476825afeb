//! Raw comparator boundary errors.

use thiserror::Error;

/// Failure reported by (or while reaching) the comparison backend.
///
/// These never cross the adapter boundary: the adapter classifies them into
/// a [`ComparisonFailure`](super::ComparisonFailure) and returns the sentinel
/// outcome instead.
#[derive(Debug, Error)]
pub enum ComparatorError {
    /// The request to the backend failed or timed out.
    #[error("comparison request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a failure; `message` is its own description
    /// of what went wrong (used for failure classification).
    #[error("{message}")]
    Upstream { message: String },

    /// The backend answered 2xx but the body was not a comparison verdict.
    #[error("malformed comparator response: {reason}")]
    InvalidResponse { reason: String },

    /// Image bytes could not be read back from local storage.
    #[error("failed to read image bytes: {0}")]
    Io(#[from] std::io::Error),
}

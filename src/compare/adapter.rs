//! Isolation layer between the external primitive and the policy core.

use tracing::{debug, warn};

use crate::fetch::ImageResource;

use super::error::ComparatorError;
use super::types::{ComparisonFailure, PairwiseOutcome, RawComparison};

/// Seam for the external pairwise face-comparison primitive.
///
/// The primitive, its model weights, and its detector are entirely
/// substitutable behind this single method.
pub trait FaceComparator: Send + Sync {
    /// Compares `source` against `target` and reports the raw verdict.
    fn compare(
        &self,
        source: &ImageResource,
        target: &ImageResource,
    ) -> impl std::future::Future<Output = Result<RawComparison, ComparatorError>> + Send;
}

/// Wraps a [`FaceComparator`] and normalizes every outcome.
///
/// This is the single point of isolation between the unpredictable backend
/// and the deterministic policy above it: `compare` never returns an error,
/// only a well-formed [`PairwiseOutcome`]. Failures are classified by message
/// substring (the backend reports free text, not structured kinds) and
/// collapsed into the worst-case sentinel.
#[derive(Debug, Clone)]
pub struct ComparatorAdapter<C> {
    comparator: C,
}

impl<C: FaceComparator> ComparatorAdapter<C> {
    /// Creates an adapter over `comparator`.
    pub fn new(comparator: C) -> Self {
        Self { comparator }
    }

    /// Runs one comparison, absorbing any backend failure.
    pub async fn compare(
        &self,
        source: &ImageResource,
        target: &ImageResource,
    ) -> PairwiseOutcome {
        match self.comparator.compare(source, target).await {
            Ok(raw) => {
                debug!(
                    distance = raw.distance,
                    threshold = raw.threshold,
                    verified = raw.verified,
                    "comparison completed"
                );
                PairwiseOutcome::from_raw(&raw)
            }
            Err(err) => {
                let failure = classify_failure(&err.to_string());
                warn!(error = %err, category = ?failure_category(&failure), "comparison failed");
                PairwiseOutcome::failure(failure)
            }
        }
    }
}

/// Classifies a raw failure message into a [`ComparisonFailure`].
///
/// The substrings are the backend's own wording and are externally observable
/// through the response `error` field, so they must not drift.
pub(crate) fn classify_failure(message: &str) -> ComparisonFailure {
    if message.contains("Face could not be detected") {
        ComparisonFailure::FaceNotDetected
    } else if message.contains("Confirm that the picture is a face") {
        ComparisonFailure::NotAFace
    } else {
        ComparisonFailure::ComparisonFailed(message.to_string())
    }
}

fn failure_category(failure: &ComparisonFailure) -> &'static str {
    match failure {
        ComparisonFailure::FaceNotDetected => "face_not_detected",
        ComparisonFailure::NotAFace => "not_a_face",
        ComparisonFailure::ComparisonFailed(_) => "comparison_failed",
    }
}

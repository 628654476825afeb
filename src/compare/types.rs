//! Normalized comparison outcomes.

use crate::constants::WORST_CASE_DISTANCE;

/// Raw result reported by the external comparison primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawComparison {
    /// Non-negative dissimilarity score; lower means more similar.
    pub distance: f64,
    /// Model-specific distance cutoff for a same-identity verdict.
    pub threshold: f64,
    /// Same-identity verdict computed by the primitive.
    pub verified: bool,
}

/// Categorized comparison failure, surfaced to the caller as data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComparisonFailure {
    /// The backend could not detect a face in one of the images.
    FaceNotDetected,
    /// The backend decided an image does not contain a face at all.
    NotAFace,
    /// Any other failure, carrying the original message text.
    ComparisonFailed(String),
}

impl ComparisonFailure {
    /// User-facing message for this failure category.
    pub fn message(&self) -> &str {
        match self {
            ComparisonFailure::FaceNotDetected => "No face could be detected in the image",
            ComparisonFailure::NotAFace => "The image does not appear to contain a face",
            ComparisonFailure::ComparisonFailed(message) => message,
        }
    }
}

impl std::fmt::Display for ComparisonFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Normalized, bounded result of comparing two images.
///
/// Invariant: when `error` is present the outcome is the worst-case sentinel —
/// `matched == false`, `similarity_percent == 0.0`, `distance == 1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct PairwiseOutcome {
    /// Same-identity verdict.
    pub matched: bool,
    /// Distance rounded to 4 decimal places.
    pub distance: f64,
    /// Similarity percentage in `[0, 100]`, rounded to 2 decimal places.
    pub similarity_percent: f64,
    /// Categorized failure, if the comparison did not complete.
    pub error: Option<ComparisonFailure>,
}

impl PairwiseOutcome {
    /// Normalizes a raw primitive result.
    pub fn from_raw(raw: &RawComparison) -> Self {
        Self {
            matched: raw.verified,
            distance: round_to(raw.distance, 4),
            similarity_percent: similarity_percent(raw.distance, raw.threshold),
            error: None,
        }
    }

    /// Worst-case sentinel outcome for a failed comparison.
    pub fn failure(failure: ComparisonFailure) -> Self {
        Self {
            matched: false,
            distance: WORST_CASE_DISTANCE,
            similarity_percent: 0.0,
            error: Some(failure),
        }
    }

    /// Returns `true` when this outcome carries a failure.
    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

/// Maps a raw distance onto a bounded similarity percentage.
///
/// Distance 0 is 100% similar; any distance at or beyond the threshold is 0%.
pub fn similarity_percent(distance: f64, threshold: f64) -> f64 {
    let scaled = (1.0 - distance / threshold) * 100.0;
    round_to(scaled.clamp(0.0, 100.0), 2)
}

pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

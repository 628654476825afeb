//! Consensus result types.

use crate::compare::{ComparisonFailure, PairwiseOutcome};

/// A [`PairwiseOutcome`] bound to its position in the candidate list.
///
/// Ordering is significant: results are always reported in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateResult {
    /// 0-based index into the submitted candidate list.
    pub photo_index: usize,
    /// Normalized outcome for this candidate.
    pub outcome: PairwiseOutcome,
}

impl CandidateResult {
    /// Binds an outcome to its candidate index.
    pub fn new(photo_index: usize, outcome: PairwiseOutcome) -> Self {
        Self {
            photo_index,
            outcome,
        }
    }

    /// Sentinel result for a candidate that failed before comparison.
    pub fn failed(photo_index: usize, failure: ComparisonFailure) -> Self {
        Self {
            photo_index,
            outcome: PairwiseOutcome::failure(failure),
        }
    }
}

/// Aggregate decision over all candidate results.
///
/// Created once per request and immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationDecision {
    /// Whether enough candidates matched the reference.
    pub verified: bool,
    /// Mean similarity percentage across all candidates, rounded to 2 decimals.
    pub confidence: f64,
    /// Number of candidates the primitive matched against the reference.
    pub matched_photos: usize,
    /// Number of candidates submitted.
    pub total_photos: usize,
}

impl VerificationDecision {
    /// Decision for a request that failed before any candidate was processed.
    pub fn empty() -> Self {
        Self {
            verified: false,
            confidence: 0.0,
            matched_photos: 0,
            total_photos: 0,
        }
    }
}

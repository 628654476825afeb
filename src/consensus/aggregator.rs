//! The consensus policy function.

use crate::compare::types::round_to;

use super::types::{CandidateResult, VerificationDecision};

/// Folds ordered candidate results into one verification decision.
///
/// `verified` requires at least `min_matching` matched candidates — an
/// absolute count, independent of how many candidates were submitted.
/// Submitting fewer than `min_matching` candidates therefore can never
/// verify, regardless of match quality; that is deliberate policy, not a
/// degenerate case. `confidence` is the mean similarity over all results
/// (matched and unmatched alike), `0.0` for an empty input.
///
/// Pure function of its input: no I/O, deterministic, idempotent.
pub fn aggregate(results: &[CandidateResult], min_matching: usize) -> VerificationDecision {
    let matched_photos = results.iter().filter(|r| r.outcome.matched).count();

    let confidence = if results.is_empty() {
        0.0
    } else {
        let total: f64 = results.iter().map(|r| r.outcome.similarity_percent).sum();
        round_to(total / results.len() as f64, 2)
    };

    VerificationDecision {
        verified: matched_photos >= min_matching,
        confidence,
        matched_photos,
        total_photos: results.len(),
    }
}

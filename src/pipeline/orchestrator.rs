//! Per-request orchestration of fetch, compare, and aggregate.

use futures_util::future::join_all;
use tracing::{debug, info, warn};

use crate::compare::{ComparatorAdapter, ComparisonFailure, FaceComparator, PairwiseOutcome};
use crate::consensus::{CandidateResult, VerificationDecision, aggregate};
use crate::fetch::{FetchError, ImageResource, ResourceFetcher};

/// A full verification run: the aggregate decision plus per-candidate detail.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationReport {
    /// The consensus decision.
    pub decision: VerificationDecision,
    /// Per-candidate outcomes in input order.
    pub details: Vec<CandidateResult>,
}

/// Composes the fetcher, the comparator adapter, and the aggregator.
///
/// The reference fetch is a hard prerequisite: if it fails, the request
/// fails and no candidate work starts. Everything after that is isolated
/// per candidate — one unreachable URL or faceless photo degrades that one
/// data point, never the batch. All fetched resources are released by RAII
/// on every exit path.
pub struct VerificationPipeline<F, C> {
    fetcher: F,
    adapter: ComparatorAdapter<C>,
    min_matching: usize,
}

impl<F, C> VerificationPipeline<F, C>
where
    F: ResourceFetcher,
    C: FaceComparator,
{
    /// Builds a pipeline with the given policy threshold.
    pub fn new(fetcher: F, comparator: C, min_matching: usize) -> Self {
        Self {
            fetcher,
            adapter: ComparatorAdapter::new(comparator),
            min_matching,
        }
    }

    /// Minimum matching candidates required for a verified decision.
    pub fn min_matching(&self) -> usize {
        self.min_matching
    }

    /// Verifies `candidate_urls` against the reference at `profile_url`.
    ///
    /// Returns `Err` only when the reference itself cannot be fetched.
    /// Candidate-level failures are captured in the report as sentinel
    /// outcomes. Candidates run concurrently; results are collected by
    /// input index, not completion order.
    pub async fn verify(
        &self,
        profile_url: &str,
        candidate_urls: &[String],
    ) -> Result<VerificationReport, FetchError> {
        let reference = self.fetcher.fetch(profile_url).await?;
        debug!(candidates = candidate_urls.len(), "reference fetched, comparing candidates");

        let details: Vec<CandidateResult> = join_all(
            candidate_urls
                .iter()
                .enumerate()
                .map(|(index, url)| self.process_candidate(index, url, &reference)),
        )
        .await;

        let decision = aggregate(&details, self.min_matching);
        info!(
            verified = decision.verified,
            matched = decision.matched_photos,
            total = decision.total_photos,
            confidence = decision.confidence,
            "verification complete"
        );

        Ok(VerificationReport { decision, details })
    }

    /// Compares two images directly, bypassing aggregation.
    ///
    /// Unlike candidate processing, fetch failures propagate here: with a
    /// single pair there is no batch to isolate them from.
    pub async fn compare_single(
        &self,
        source_url: &str,
        target_url: &str,
    ) -> Result<PairwiseOutcome, FetchError> {
        let source = self.fetcher.fetch(source_url).await?;
        let target = self.fetcher.fetch(target_url).await?;

        Ok(self.adapter.compare(&source, &target).await)
    }

    async fn process_candidate(
        &self,
        index: usize,
        url: &str,
        reference: &ImageResource,
    ) -> CandidateResult {
        let candidate = match self.fetcher.fetch(url).await {
            Ok(resource) => resource,
            Err(err) => {
                warn!(photo_index = index, error = %err, "candidate fetch failed");
                return CandidateResult::failed(
                    index,
                    ComparisonFailure::ComparisonFailed(err.to_string()),
                );
            }
        };

        let outcome = self.adapter.compare(reference, &candidate).await;
        debug!(
            photo_index = index,
            matched = outcome.matched,
            similarity = outcome.similarity_percent,
            "candidate processed"
        );

        CandidateResult::new(index, outcome)
    }
}

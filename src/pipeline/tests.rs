use super::*;

use crate::compare::{ComparisonFailure, MockFaceComparator};
use crate::constants::MIN_MATCHING_PHOTOS;
use crate::fetch::MockResourceFetcher;

fn test_pipeline() -> (
    MockResourceFetcher,
    MockFaceComparator,
    VerificationPipeline<MockResourceFetcher, MockFaceComparator>,
) {
    let fetcher = MockResourceFetcher::new();
    let comparator = MockFaceComparator::new();
    let pipeline =
        VerificationPipeline::new(fetcher.clone(), comparator.clone(), MIN_MATCHING_PHOTOS);
    (fetcher, comparator, pipeline)
}

fn urls(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| format!("https://photos.example.com/candidate-{i}.jpg"))
        .collect()
}

const PROFILE_URL: &str = "https://photos.example.com/profile.jpg";

#[tokio::test]
async fn test_reference_failure_aborts_before_candidates() {
    let (fetcher, comparator, pipeline) = test_pipeline();
    fetcher.fail_with(PROFILE_URL, "dns lookup failed");

    let err = pipeline
        .verify(PROFILE_URL, &urls(3))
        .await
        .expect_err("reference fetch should fail the request");

    assert!(err.to_string().contains("dns lookup failed"));
    // Only the reference fetch was attempted; no candidate work started.
    assert_eq!(fetcher.fetch_count(), 1);
    assert_eq!(comparator.compare_count(), 0);
}

#[tokio::test]
async fn test_one_bad_candidate_degrades_one_data_point() {
    let (fetcher, comparator, pipeline) = test_pipeline();
    let candidate_urls = urls(3);
    fetcher.fail_with(&candidate_urls[1], "connection reset");
    // Two comparisons run (candidates 0 and 2); candidate 1 never reaches
    // the comparator.
    comparator.push_result(0.1, 1.0, true);
    comparator.push_result(0.15, 1.0, true);

    let report = pipeline
        .verify(PROFILE_URL, &candidate_urls)
        .await
        .expect("batch survives one bad candidate");

    assert_eq!(report.details.len(), 3);
    for (i, result) in report.details.iter().enumerate() {
        assert_eq!(result.photo_index, i);
    }

    let failed = &report.details[1];
    assert!(!failed.outcome.matched);
    assert_eq!(failed.outcome.distance, 1.0);
    assert_eq!(failed.outcome.similarity_percent, 0.0);
    match &failed.outcome.error {
        Some(ComparisonFailure::ComparisonFailed(message)) => {
            assert!(message.contains("connection reset"));
        }
        other => panic!("expected fetch failure to be captured, got {other:?}"),
    }

    assert!(report.decision.verified);
    assert_eq!(report.decision.matched_photos, 2);
    assert_eq!(report.decision.total_photos, 3);
    // (90 + 85 + 0) / 3
    assert_eq!(report.decision.confidence, 58.33);
}

#[tokio::test]
async fn test_comparator_failure_is_isolated_too() {
    let (_fetcher, comparator, pipeline) = test_pipeline();
    comparator.push_result(0.2, 1.0, true);
    comparator.push_failure("Face could not be detected in img2_path");
    comparator.push_result(0.3, 1.0, true);

    let report = pipeline
        .verify(PROFILE_URL, &urls(3))
        .await
        .expect("comparator failures never abort the batch");

    assert_eq!(report.details.len(), 3);
    assert_eq!(
        report.details[1].outcome.error,
        Some(ComparisonFailure::FaceNotDetected)
    );
    assert!(report.decision.verified);
    assert_eq!(report.decision.matched_photos, 2);
}

#[tokio::test]
async fn test_empty_candidate_list() {
    let (fetcher, _comparator, pipeline) = test_pipeline();

    let report = pipeline
        .verify(PROFILE_URL, &[])
        .await
        .expect("empty candidate list is not an error");

    assert!(report.details.is_empty());
    assert!(!report.decision.verified);
    assert_eq!(report.decision.confidence, 0.0);
    assert_eq!(report.decision.total_photos, 0);
    // The reference is still fetched first.
    assert_eq!(fetcher.fetch_count(), 1);
}

#[tokio::test]
async fn test_results_preserve_input_order() {
    let (_fetcher, comparator, pipeline) = test_pipeline();
    comparator.push_result(0.1, 1.0, true); // candidate 0 -> 90
    comparator.push_result(0.5, 1.0, false); // candidate 1 -> 50
    comparator.push_result(0.25, 1.0, true); // candidate 2 -> 75

    let report = pipeline.verify(PROFILE_URL, &urls(3)).await.expect("ok");

    let similarities: Vec<f64> = report
        .details
        .iter()
        .map(|r| r.outcome.similarity_percent)
        .collect();
    assert_eq!(similarities, vec![90.0, 50.0, 75.0]);
}

#[tokio::test]
async fn test_single_match_is_not_verified() {
    let (_fetcher, comparator, pipeline) = test_pipeline();
    comparator.push_result(0.0, 1.0, true);

    let report = pipeline.verify(PROFILE_URL, &urls(1)).await.expect("ok");

    assert!(!report.decision.verified);
    assert_eq!(report.decision.matched_photos, 1);
    assert_eq!(report.decision.confidence, 100.0);
}

#[tokio::test]
async fn test_compare_single_happy_path() {
    let (_fetcher, comparator, pipeline) = test_pipeline();
    comparator.push_result(0.34, 0.68, true);

    let outcome = pipeline
        .compare_single(
            "https://photos.example.com/a.jpg",
            "https://photos.example.com/b.jpg",
        )
        .await
        .expect("both fetches succeed");

    assert!(outcome.matched);
    assert_eq!(outcome.similarity_percent, 50.0);
}

#[tokio::test]
async fn test_compare_single_propagates_fetch_failure() {
    let (fetcher, _comparator, pipeline) = test_pipeline();
    fetcher.fail_with("https://photos.example.com/b.jpg", "410 gone");

    let err = pipeline
        .compare_single(
            "https://photos.example.com/a.jpg",
            "https://photos.example.com/b.jpg",
        )
        .await
        .expect_err("single comparison has no batch to hide failures in");

    assert!(err.to_string().contains("410 gone"));
}

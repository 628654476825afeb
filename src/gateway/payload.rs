//! Request/response payloads for the HTTP surface.

use serde::{Deserialize, Serialize};

use crate::compare::PairwiseOutcome;
use crate::consensus::CandidateResult;
use crate::pipeline::VerificationReport;

/// Body of `POST /verify`.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyRequest {
    pub profile_photo_url: String,
    pub verification_photo_urls: Vec<String>,
    pub user_id: String,
    pub api_secret: String,
}

/// Per-candidate detail in the `/verify` response.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonDetail {
    pub photo_index: usize,
    pub matched: bool,
    pub distance: f64,
    pub similarity_percent: f64,
    pub error: Option<String>,
}

impl From<&CandidateResult> for ComparisonDetail {
    fn from(result: &CandidateResult) -> Self {
        Self {
            photo_index: result.photo_index,
            matched: result.outcome.matched,
            distance: result.outcome.distance,
            similarity_percent: result.outcome.similarity_percent,
            error: result.outcome.error.as_ref().map(|e| e.message().to_string()),
        }
    }
}

/// Body of the `/verify` response.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyResponse {
    pub verified: bool,
    pub confidence: f64,
    pub matched_photos: usize,
    pub total_photos: usize,
    pub details: Vec<ComparisonDetail>,
    pub error: Option<String>,
}

impl VerifyResponse {
    /// Success-path response carrying the full report.
    pub fn from_report(report: &VerificationReport) -> Self {
        Self {
            verified: report.decision.verified,
            confidence: report.decision.confidence,
            matched_photos: report.decision.matched_photos,
            total_photos: report.decision.total_photos,
            details: report.details.iter().map(ComparisonDetail::from).collect(),
            error: None,
        }
    }

    /// Total-failure response: empty decision data plus the error text.
    pub fn failed(error: String) -> Self {
        Self {
            verified: false,
            confidence: 0.0,
            matched_photos: 0,
            total_photos: 0,
            details: Vec::new(),
            error: Some(error),
        }
    }
}

/// Body of `POST /compare-single`.
#[derive(Debug, Clone, Deserialize)]
pub struct CompareSingleRequest {
    pub source_url: String,
    pub target_url: String,
    pub api_secret: String,
}

/// Body of the `/compare-single` response.
#[derive(Debug, Clone, Serialize)]
pub struct CompareSingleResponse {
    pub matched: bool,
    pub distance: f64,
    pub similarity_percent: f64,
    pub error: Option<String>,
}

impl From<PairwiseOutcome> for CompareSingleResponse {
    fn from(outcome: PairwiseOutcome) -> Self {
        Self {
            matched: outcome.matched,
            distance: outcome.distance,
            similarity_percent: outcome.similarity_percent,
            error: outcome.error.map(|e| e.message().to_string()),
        }
    }
}

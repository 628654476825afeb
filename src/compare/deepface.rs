//! DeepFace sidecar client.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::fetch::ImageResource;

use super::adapter::FaceComparator;
use super::error::ComparatorError;
use super::types::RawComparison;

/// Model inference on the sidecar can be slow on first use (weights load lazily).
const COMPARE_TIMEOUT: Duration = Duration::from_secs(120);

/// [`FaceComparator`] backed by a DeepFace HTTP sidecar.
///
/// Both images are shipped as base64 data URIs to the sidecar's `/verify`
/// endpoint, with face detection enforced and alignment requested. The model
/// and detector identities are fixed at construction.
#[derive(Debug, Clone)]
pub struct DeepFaceClient {
    http: Client,
    base_url: String,
    model_name: String,
    detector_backend: String,
}

#[derive(Debug, Deserialize)]
struct VerifyVerdict {
    verified: bool,
    distance: f64,
    threshold: f64,
}

impl DeepFaceClient {
    /// Creates a client for the sidecar at `base_url`.
    pub fn new(
        base_url: impl Into<String>,
        model_name: impl Into<String>,
        detector_backend: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::builder()
                .timeout(COMPARE_TIMEOUT)
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url,
            model_name: model_name.into(),
            detector_backend: detector_backend.into(),
        }
    }

    /// Model identity this client requests from the sidecar.
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    async fn encode(resource: &ImageResource) -> Result<String, ComparatorError> {
        let bytes = tokio::fs::read(resource.path()).await?;
        let encoded = base64::Engine::encode(&base64::engine::general_purpose::STANDARD, &bytes);
        Ok(format!("data:{};base64,{}", resource.format().mime(), encoded))
    }
}

impl FaceComparator for DeepFaceClient {
    async fn compare(
        &self,
        source: &ImageResource,
        target: &ImageResource,
    ) -> Result<RawComparison, ComparatorError> {
        let img1 = Self::encode(source).await?;
        let img2 = Self::encode(target).await?;

        let body = serde_json::json!({
            "img1_path": img1,
            "img2_path": img2,
            "model_name": self.model_name,
            "detector_backend": self.detector_backend,
            "enforce_detection": true,
            "align": true,
        });

        let response = self
            .http
            .post(format!("{}/verify", self.base_url))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // The sidecar reports detection failures as free text in the body;
            // surface it verbatim so the adapter can classify it.
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| format!("comparison backend returned status {status}"));
            return Err(ComparatorError::Upstream { message });
        }

        let verdict: VerifyVerdict =
            response
                .json()
                .await
                .map_err(|e| ComparatorError::InvalidResponse {
                    reason: e.to_string(),
                })?;

        Ok(RawComparison {
            distance: verdict.distance,
            threshold: verdict.threshold,
            verified: verdict.verified,
        })
    }
}

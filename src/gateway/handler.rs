use axum::{Json, extract::State};
use tracing::{info, instrument, warn};

use crate::compare::FaceComparator;
use crate::fetch::ResourceFetcher;

use super::error::GatewayError;
use super::payload::{
    CompareSingleRequest, CompareSingleResponse, VerifyRequest, VerifyResponse,
};
use super::state::HandlerState;

/// `POST /verify` — multi-sample verification against a reference photo.
///
/// Auth and validation failures abort with 401/400 before any fetch. A
/// reference fetch failure is a total failure but still a 200: the decision
/// data is empty and `error` carries the cause. Candidate failures are data.
#[instrument(skip(state, request), fields(user_id = %request.user_id))]
pub async fn verify_handler<F, C>(
    State(state): State<HandlerState<F, C>>,
    Json(request): Json<VerifyRequest>,
) -> Result<Json<VerifyResponse>, GatewayError>
where
    F: ResourceFetcher + Clone + Send + Sync + 'static,
    C: FaceComparator + Clone + Send + Sync + 'static,
{
    if request.api_secret != state.api_secret {
        return Err(GatewayError::Unauthorized);
    }

    if request.profile_photo_url.is_empty() || request.verification_photo_urls.is_empty() {
        return Err(GatewayError::InvalidRequest(
            "profile_photo_url and verification_photo_urls are required".to_string(),
        ));
    }

    info!(
        photos = request.verification_photo_urls.len(),
        "starting verification"
    );

    match state
        .pipeline
        .verify(
            &request.profile_photo_url,
            &request.verification_photo_urls,
        )
        .await
    {
        Ok(report) => Ok(Json(VerifyResponse::from_report(&report))),
        Err(err) => {
            warn!(error = %err, "reference fetch failed, aborting request");
            Ok(Json(VerifyResponse::failed(err.to_string())))
        }
    }
}

/// `POST /compare-single` — one direct pairwise comparison, no aggregation.
#[instrument(skip(state, request))]
pub async fn compare_single_handler<F, C>(
    State(state): State<HandlerState<F, C>>,
    Json(request): Json<CompareSingleRequest>,
) -> Result<Json<CompareSingleResponse>, GatewayError>
where
    F: ResourceFetcher + Clone + Send + Sync + 'static,
    C: FaceComparator + Clone + Send + Sync + 'static,
{
    if request.api_secret != state.api_secret {
        return Err(GatewayError::Unauthorized);
    }

    let outcome = state
        .pipeline
        .compare_single(&request.source_url, &request.target_url)
        .await
        .map_err(|e| GatewayError::Upstream(e.to_string()))?;

    Ok(Json(outcome.into()))
}

//! HTTP gateway layer (Axum).
//!
//! Transport glue only: routing, auth, validation, and payload mapping.
//! The verification policy lives below the [`HandlerState`] seams.

#![allow(missing_docs)]

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use handler::{compare_single_handler, verify_handler};
pub use state::HandlerState;

use crate::compare::FaceComparator;
use crate::fetch::ResourceFetcher;

pub fn create_router_with_state<F, C>(state: HandlerState<F, C>) -> Router
where
    F: ResourceFetcher + Clone + Send + Sync + 'static,
    C: FaceComparator + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_handler))
        .route("/verify", post(verify_handler))
        .route("/compare-single", post(compare_single_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model: String,
}

#[tracing::instrument(skip(state))]
pub async fn health_handler<F, C>(State(state): State<HandlerState<F, C>>) -> Json<HealthResponse>
where
    F: ResourceFetcher + Clone + Send + Sync + 'static,
    C: FaceComparator + Clone + Send + Sync + 'static,
{
    Json(HealthResponse {
        status: "healthy",
        model: state.model_name.clone(),
    })
}

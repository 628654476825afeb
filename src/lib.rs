//! Veriface library crate (used by the server binary and integration tests).
//!
//! Decides whether a set of candidate photographs depict the same person as a
//! trusted reference photograph. The biometric comparison itself is treated as
//! an untrusted, noisy external primitive; everything above it is deterministic
//! policy.
//!
//! # Pipeline
//!
//! ```text
//! gateway -> pipeline -> fetch (reference)
//!                     -> per candidate: fetch -> compare (adapter)
//!                     -> consensus -> response
//! ```
//!
//! - [`fetch`] — remote images into scoped temp-file handles ([`HttpFetcher`]).
//! - [`compare`] — the comparison seam ([`FaceComparator`], [`DeepFaceClient`])
//!   and the normalization boundary ([`ComparatorAdapter`]).
//! - [`consensus`] — the pure aggregation policy ([`aggregate`]).
//! - [`pipeline`] — per-request orchestration with per-candidate isolation.
//! - [`gateway`] — the Axum HTTP surface.
//! - [`config`] — `VERIFACE_*` environment configuration.
//!
//! Mock implementations of both seams are available behind
//! `#[cfg(any(test, feature = "mock"))]`.

pub mod compare;
pub mod config;
pub mod consensus;
pub mod constants;
pub mod fetch;
pub mod gateway;
pub mod pipeline;

#[cfg(any(test, feature = "mock"))]
pub use compare::MockFaceComparator;
pub use compare::{
    ComparatorAdapter, ComparatorError, ComparisonFailure, DeepFaceClient, FaceComparator,
    PairwiseOutcome, RawComparison, similarity_percent,
};
pub use config::{Config, ConfigError, DEFAULT_API_SECRET};
pub use consensus::{CandidateResult, VerificationDecision, aggregate};
pub use constants::{
    DEFAULT_COMPARATOR_URL, DEFAULT_DETECTOR_BACKEND, DEFAULT_MODEL_NAME, FETCH_TIMEOUT,
    MIN_MATCHING_PHOTOS, WORST_CASE_DISTANCE,
};
#[cfg(any(test, feature = "mock"))]
pub use fetch::MockResourceFetcher;
pub use fetch::{FetchError, HttpFetcher, ImageFormat, ImageResource, ResourceFetcher};
pub use gateway::{HandlerState, create_router_with_state};
pub use pipeline::{VerificationPipeline, VerificationReport};

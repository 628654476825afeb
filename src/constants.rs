//! Policy constants shared across the verification pipeline.

use std::time::Duration;

/// Biometric model identity requested from the comparison backend.
pub const DEFAULT_MODEL_NAME: &str = "ArcFace";

/// Face detector identity requested from the comparison backend.
pub const DEFAULT_DETECTOR_BACKEND: &str = "retinaface";

/// Minimum number of matching candidate photos required for a verified
/// decision. An absolute count, not a fraction of submitted candidates.
pub const MIN_MATCHING_PHOTOS: usize = 2;

/// Per-fetch network timeout for remote image downloads.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Distance recorded for a failed comparison (worst-case sentinel).
pub const WORST_CASE_DISTANCE: f64 = 1.0;

/// Default base URL of the face comparison sidecar.
pub const DEFAULT_COMPARATOR_URL: &str = "http://localhost:5000";

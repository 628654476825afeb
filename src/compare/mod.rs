//! Pairwise face comparison behind an isolation boundary.
//!
//! The external biometric primitive is untrusted and noisy: it can time out,
//! reject an image, or fail to find a face, and it reports failures as free
//! text. [`FaceComparator`] is the substitution seam for the primitive itself;
//! [`ComparatorAdapter`] is the normalization boundary that the policy layer
//! sees — it never surfaces a raw error, only a bounded [`PairwiseOutcome`]
//! (worst-case sentinel on failure, categorized via message substrings).

pub mod adapter;
pub mod deepface;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod types;


pub use adapter::{ComparatorAdapter, FaceComparator};
pub use deepface::DeepFaceClient;
pub use error::ComparatorError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockFaceComparator;
pub use types::{ComparisonFailure, PairwiseOutcome, RawComparison, similarity_percent};

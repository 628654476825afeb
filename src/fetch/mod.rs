//! Remote resource fetching into scoped temp-file handles.
//!
//! Pure I/O, no decision logic. The [`ResourceFetcher`] trait is the seam the
//! orchestrator depends on; [`HttpFetcher`] is the production implementation.

pub mod error;
pub mod fetcher;
pub mod resource;


pub use error::FetchError;
#[cfg(any(test, feature = "mock"))]
pub use fetcher::MockResourceFetcher;
pub use fetcher::{HttpFetcher, ResourceFetcher};
pub use resource::{ImageFormat, ImageResource};

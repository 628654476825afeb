//! Remote image retrieval.

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::constants::FETCH_TIMEOUT;

use super::error::FetchError;
use super::resource::{ImageFormat, ImageResource};

/// Seam for retrieving a remote resource into a scoped local handle.
pub trait ResourceFetcher: Send + Sync {
    /// Downloads `url` and materializes it as an [`ImageResource`].
    fn fetch(
        &self,
        url: &str,
    ) -> impl std::future::Future<Output = Result<ImageResource, FetchError>> + Send;
}

/// Production fetcher backed by a shared `reqwest` client.
///
/// Each request is bounded by [`FETCH_TIMEOUT`]; there are no retries.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher with the standard per-request timeout.
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(FETCH_TIMEOUT)
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<ImageResource, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Request {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let format = ImageFormat::infer(url, content_type.as_deref());

        let bytes = response.bytes().await.map_err(|e| FetchError::Request {
            url: url.to_string(),
            source: e,
        })?;

        debug!(url, bytes = bytes.len(), format = ?format, "fetched image");

        let resource =
            tokio::task::spawn_blocking(move || ImageResource::from_bytes(&bytes, format))
                .await??;

        Ok(resource)
    }
}

/// In-memory fetcher with scripted failures for tests.
#[cfg(any(test, feature = "mock"))]
#[derive(Default, Clone)]
pub struct MockResourceFetcher {
    inner: std::sync::Arc<std::sync::Mutex<MockFetcherInner>>,
}

#[cfg(any(test, feature = "mock"))]
#[derive(Default)]
struct MockFetcherInner {
    failures: std::collections::HashMap<String, String>,
    calls: usize,
}

#[cfg(any(test, feature = "mock"))]
impl MockResourceFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every fetch of `url` fail with `message`.
    pub fn fail_with(&self, url: &str, message: &str) {
        self.inner
            .lock()
            .expect("lock poisoned")
            .failures
            .insert(url.to_string(), message.to_string());
    }

    /// Number of fetches attempted so far (including failed ones).
    pub fn fetch_count(&self) -> usize {
        self.inner.lock().expect("lock poisoned").calls
    }
}

#[cfg(any(test, feature = "mock"))]
impl ResourceFetcher for MockResourceFetcher {
    async fn fetch(&self, url: &str) -> Result<ImageResource, FetchError> {
        let failure = {
            let mut inner = self.inner.lock().expect("lock poisoned");
            inner.calls += 1;
            inner.failures.get(url).cloned()
        };

        if let Some(message) = failure {
            return Err(FetchError::Io(std::io::Error::other(message)));
        }

        let format = ImageFormat::infer(url, None);
        ImageResource::from_bytes(url.as_bytes(), format)
    }
}

//! Scoped handles over fetched image bytes.

use std::io::Write;
use std::path::Path;

use tempfile::TempPath;

use super::error::FetchError;

/// Raster format tag inferred for a fetched image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// JPEG (the default when nothing indicates otherwise).
    Jpeg,
    /// PNG.
    Png,
}

impl ImageFormat {
    /// Infers the format from the source URL and the response content type.
    ///
    /// A `png` marker in either wins; everything else is treated as JPEG.
    pub fn infer(url: &str, content_type: Option<&str>) -> Self {
        let url_is_png = url.to_ascii_lowercase().contains("png");
        let header_is_png = content_type.is_some_and(|ct| ct.to_ascii_lowercase().contains("png"));

        if url_is_png || header_is_png {
            ImageFormat::Png
        } else {
            ImageFormat::Jpeg
        }
    }

    /// File suffix used for the backing temp file.
    pub fn suffix(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => ".jpg",
            ImageFormat::Png => ".png",
        }
    }

    /// MIME type for data-URI encoding.
    pub fn mime(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
        }
    }
}

/// An owned handle to fetched image bytes materialized in a temp file.
///
/// The backing file is removed when the resource is dropped; removal happens
/// once per resource and removal failures are swallowed, never propagated.
#[derive(Debug)]
pub struct ImageResource {
    path: TempPath,
    format: ImageFormat,
}

impl ImageResource {
    /// Writes `bytes` to a fresh temp file with the format's suffix.
    ///
    /// Blocking I/O; call from a blocking context (see `HttpFetcher`).
    pub fn from_bytes(bytes: &[u8], format: ImageFormat) -> Result<Self, FetchError> {
        let mut file = tempfile::Builder::new()
            .prefix("veriface-")
            .suffix(format.suffix())
            .tempfile()?;
        file.write_all(bytes)?;
        file.flush()?;

        Ok(Self {
            path: file.into_temp_path(),
            format,
        })
    }

    /// Local path of the materialized image.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Inferred format tag.
    pub fn format(&self) -> ImageFormat {
        self.format
    }
}

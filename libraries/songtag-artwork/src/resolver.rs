use crate::error::{ArtworkError, Result};
use reqwest::Client;
use songtag_core::CoverImage;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

/// Timeout applied by [`CoverArtResolver::new`]
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Largest image accepted from either source (10 MiB)
pub const MAX_COVER_BYTES: usize = 10 * 1024 * 1024;

/// Turns cover URLs and user-selected files into image buffers.
///
/// Remote downloads are best-effort and fail silently; local reads report
/// their errors so they can be shown to the user.
#[derive(Clone)]
pub struct CoverArtResolver {
    http: Client,
    max_size: usize,
}

impl CoverArtResolver {
    /// Create a resolver with its own HTTP client and the default timeout
    pub fn new() -> Result<Self> {
        let http = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Ok(Self::with_client(http))
    }

    /// Create a resolver sharing an existing HTTP client (and its timeout)
    pub fn with_client(http: Client) -> Self {
        Self {
            http,
            max_size: MAX_COVER_BYTES,
        }
    }

    /// Override the size limit
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    /// Download a cover image.
    ///
    /// A single GET; any transport error, non-200 status or oversized body
    /// yields `None`.
    pub async fn download(&self, url: &str) -> Option<CoverImage> {
        match self.fetch(url).await {
            Ok(image) => Some(image),
            Err(e) => {
                warn!(url = %url, error = %e, "Cover download failed");
                None
            }
        }
    }

    async fn fetch(&self, url: &str) -> Result<CoverImage> {
        debug!(url = %url, "Downloading cover");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(ArtworkError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        self.check_size(bytes.len())?;

        debug!(url = %url, size = bytes.len(), "Cover downloaded");
        Ok(CoverImage::jpeg(bytes.to_vec()))
    }

    /// Read a user-selected image file whole
    pub fn load_local(&self, path: impl AsRef<Path>) -> Result<CoverImage> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| ArtworkError::LocalImageRead {
            path: path.to_path_buf(),
            source,
        })?;
        self.check_size(data.len())?;

        debug!(path = %path.display(), size = data.len(), "Loaded local cover");
        Ok(CoverImage::jpeg(data))
    }

    fn check_size(&self, size: usize) -> Result<()> {
        if size > self.max_size {
            return Err(ArtworkError::TooLarge(size, self.max_size));
        }
        Ok(())
    }
}

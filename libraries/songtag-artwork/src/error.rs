use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving cover images
#[derive(Debug, Error)]
pub enum ArtworkError {
    /// A user-selected image file could not be read
    #[error("Failed to read image {}: {source}", path.display())]
    LocalImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Image server answered with a non-success status
    #[error("Image download returned status {0}")]
    Status(u16),

    /// Image exceeds the size limit
    #[error("Image too large: {0} bytes (max {1} bytes)")]
    TooLarge(usize, usize),
}

/// Result type for artwork operations
pub type Result<T> = std::result::Result<T, ArtworkError>;

impl From<ArtworkError> for songtag_core::SongTagError {
    fn from(err: ArtworkError) -> Self {
        match err {
            ArtworkError::LocalImageRead { .. } | ArtworkError::TooLarge(..) => {
                songtag_core::SongTagError::LocalImageRead(err.to_string())
            }
            other => songtag_core::SongTagError::Network(other.to_string()),
        }
    }
}

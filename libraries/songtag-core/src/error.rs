/// Core error types for SongTag
use thiserror::Error;

/// Result type alias using `SongTagError`
pub type Result<T> = std::result::Result<T, SongTagError>;

/// Core error type for SongTag
///
/// Provider failures never reach this type: adapters degrade them to an
/// empty result list.
#[derive(Error, Debug)]
pub enum SongTagError {
    /// File extension has no tag codec
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Existing tags could not be loaded
    #[error("Error loading file: {0}")]
    TagRead(String),

    /// Tags could not be applied or saved
    #[error("Failed to write tags: {0}")]
    TagWrite(String),

    /// A user-selected image could not be read
    #[error("Failed to read image: {0}")]
    LocalImageRead(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The same kind of operation is already running
    #[error("Operation already in progress: {0}")]
    Busy(String),

    /// Network error outside of provider searches
    #[error("Network error: {0}")]
    Network(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl SongTagError {
    /// Create a tag read error
    pub fn tag_read(msg: impl Into<String>) -> Self {
        Self::TagRead(msg.into())
    }

    /// Create a tag write error
    pub fn tag_write(msg: impl Into<String>) -> Self {
        Self::TagWrite(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a busy error
    pub fn busy(operation: impl Into<String>) -> Self {
        Self::Busy(operation.into())
    }
}

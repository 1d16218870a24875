/// Tag codec errors
use thiserror::Error;

/// Result type alias using `TagError`
pub type Result<T> = std::result::Result<T, TagError>;

/// Tag codec error types
#[derive(Error, Debug)]
pub enum TagError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// No codec for this file extension
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Existing tag container could not be parsed
    #[error("Tag read error: {0}")]
    Read(String),

    /// Tag container could not be saved
    #[error("Tag write error: {0}")]
    Write(String),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<TagError> for songtag_core::SongTagError {
    fn from(err: TagError) -> Self {
        use songtag_core::SongTagError;

        match err {
            TagError::UnsupportedFormat(ext) => SongTagError::UnsupportedFormat(ext),
            TagError::FileNotFound(_) | TagError::Read(_) => SongTagError::tag_read(err.to_string()),
            TagError::Write(_) => SongTagError::tag_write(err.to_string()),
            TagError::Io(e) => SongTagError::Io(e),
        }
    }
}

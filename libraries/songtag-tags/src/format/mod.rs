//! Tag container variants, selected once per file by extension.

mod comment;
mod frame;

pub use comment::CommentMapTags;
pub use frame::FrameTags;

use crate::error::{Result, TagError};
use songtag_core::{CoverImage, MetadataRecord, NOT_AVAILABLE};
use std::path::Path;

/// Audio formats with a tag codec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagFormat {
    /// MPEG audio with an ID3v2 frame tag
    Mp3,
    /// Ogg Opus with a Vorbis comment block
    Opus,
}

impl TagFormat {
    /// Select the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "mp3" => Ok(Self::Mp3),
            "opus" => Ok(Self::Opus),
            _ => Err(TagError::UnsupportedFormat(if ext.is_empty() {
                path.display().to_string()
            } else {
                format!(".{ext}")
            })),
        }
    }
}

/// Capabilities shared by both tag containers.
///
/// Reads report missing values as `"N/A"`. Writes skip empty fields, leaving
/// whatever the container already holds for them.
pub trait TagContainer {
    /// Current tag values
    fn read_fields(&self) -> MetadataRecord;

    /// First embedded picture, if any
    fn read_cover(&self) -> Option<CoverImage>;

    /// Overwrite the tag fields that are non-empty in `record`
    fn apply_fields(&mut self, record: &MetadataRecord);

    /// Replace every embedded picture with a single front cover
    fn apply_cover(&mut self, cover: &CoverImage);

    /// Flush the container to `path`
    fn save(&self, path: &Path) -> Result<()>;
}

/// A file's tag container, opened for reading or editing
pub enum AudioTags {
    Frame(FrameTags),
    CommentMap(CommentMapTags),
}

impl AudioTags {
    /// Open the tag container of an existing audio file.
    ///
    /// A file without any tag block opens as an empty container.
    pub fn open(path: &Path) -> Result<Self> {
        let format = TagFormat::from_path(path)?;

        if !path.exists() {
            return Err(TagError::FileNotFound(path.display().to_string()));
        }

        Ok(match format {
            TagFormat::Mp3 => Self::Frame(FrameTags::open(path)?),
            TagFormat::Opus => Self::CommentMap(CommentMapTags::open(path)?),
        })
    }

    fn container(&self) -> &dyn TagContainer {
        match self {
            Self::Frame(tags) => tags,
            Self::CommentMap(tags) => tags,
        }
    }

    fn container_mut(&mut self) -> &mut dyn TagContainer {
        match self {
            Self::Frame(tags) => tags,
            Self::CommentMap(tags) => tags,
        }
    }
}

impl TagContainer for AudioTags {
    fn read_fields(&self) -> MetadataRecord {
        self.container().read_fields()
    }

    fn read_cover(&self) -> Option<CoverImage> {
        self.container().read_cover()
    }

    fn apply_fields(&mut self, record: &MetadataRecord) {
        self.container_mut().apply_fields(record);
    }

    fn apply_cover(&mut self, cover: &CoverImage) {
        self.container_mut().apply_cover(cover);
    }

    fn save(&self, path: &Path) -> Result<()> {
        self.container().save(path)
    }
}

/// Read value or the `"N/A"` sentinel
pub(crate) fn or_not_available(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// At most the first four characters of a year to be written
pub(crate) fn truncate_year(year: &str) -> String {
    year.chars().take(4).collect()
}

/// Tag-bearing fields of a record paired with their values, in write order
pub(crate) fn writable_fields(record: &MetadataRecord) -> [(Field, String); 6] {
    [
        (Field::Artist, record.artist.clone()),
        (Field::Title, record.title.clone()),
        (Field::Album, record.album.clone()),
        (Field::Year, truncate_year(&record.year)),
        (Field::Track, record.track.clone()),
        (Field::Genre, record.genre.clone()),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Artist,
    Title,
    Album,
    Year,
    Track,
    Genre,
}

/// Tag codec entry points
use crate::error::Result;
use crate::format::{AudioTags, TagContainer};
use crate::worker::WriteStage;
use songtag_core::{CoverImage, MetadataRecord};
use std::path::Path;
use tracing::{debug, info};

/// Tags and cover currently stored in a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSnapshot {
    /// Field values, `"N/A"` where the file has none
    pub record: MetadataRecord,
    /// First embedded picture
    pub cover: Option<CoverImage>,
}

/// Reads and writes tags, picking the container from the file extension
#[derive(Debug, Default, Clone, Copy)]
pub struct TagCodec;

impl TagCodec {
    pub fn new() -> Self {
        Self
    }

    /// Read the current tags and cover of a file
    pub fn read(&self, path: &Path) -> Result<TagSnapshot> {
        let tags = AudioTags::open(path)?;

        let snapshot = TagSnapshot {
            record: tags.read_fields(),
            cover: tags.read_cover(),
        };

        debug!(
            path = %path.display(),
            has_cover = snapshot.cover.is_some(),
            "Read tags"
        );

        Ok(snapshot)
    }

    /// Write a record (and optionally a cover) into a file.
    ///
    /// Empty fields of `record` leave the stored values untouched. The file is
    /// rewritten in place.
    pub fn write(
        &self,
        path: &Path,
        record: &MetadataRecord,
        cover: Option<&CoverImage>,
    ) -> Result<()> {
        self.write_with(path, record, cover, |_| {})
    }

    /// Like [`Self::write`], calling `on_stage` as each stage begins.
    ///
    /// `ProcessingCover` is only reported when a cover is given.
    pub fn write_with<F>(
        &self,
        path: &Path,
        record: &MetadataRecord,
        cover: Option<&CoverImage>,
        mut on_stage: F,
    ) -> Result<()>
    where
        F: FnMut(WriteStage),
    {
        on_stage(WriteStage::Starting);
        let mut tags = AudioTags::open(path)?;
        tags.apply_fields(record);

        if let Some(cover) = cover {
            on_stage(WriteStage::ProcessingCover);
            tags.apply_cover(cover);
        }

        on_stage(WriteStage::Saving);
        tags.save(path)?;

        info!(path = %path.display(), with_cover = cover.is_some(), "Tags written");
        Ok(())
    }
}

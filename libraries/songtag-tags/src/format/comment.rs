//! Vorbis comment tags for Ogg Opus files.

use super::{or_not_available, writable_fields, Field, TagContainer};
use crate::error::{Result, TagError};
use lofty::config::WriteOptions;
use lofty::file::TaggedFileExt;
use lofty::picture::{MimeType, Picture, PictureType};
use lofty::probe::Probe;
use lofty::tag::{ItemKey, Tag, TagExt, TagType};
use songtag_core::{CoverImage, MetadataRecord, JPEG_MIME_TYPE};
use std::path::Path;
use tracing::debug;

/// A file's Vorbis comment block.
///
/// Comment keys this codec does not map are kept as passthrough items and
/// saved back unchanged. Pictures live in the base64 `METADATA_BLOCK_PICTURE`
/// comment.
pub struct CommentMapTags {
    tag: Tag,
}

impl CommentMapTags {
    pub fn open(path: &Path) -> Result<Self> {
        let tagged_file = Probe::open(path)
            .and_then(|probe| probe.read())
            .map_err(|e| TagError::Read(format!("{}: {e}", path.display())))?;

        let tag = match tagged_file.tag(TagType::VorbisComments) {
            Some(tag) => tag.clone(),
            None => {
                debug!(path = %path.display(), "No comment block, starting empty");
                Tag::new(TagType::VorbisComments)
            }
        };

        Ok(Self { tag })
    }

    fn text(&self, key: &ItemKey) -> Option<String> {
        self.tag.get_string(key).map(str::to_string)
    }

    /// Track number in `N/M` form when a total is stored.
    ///
    /// A `TRACKNUMBER=N/M` comment is split into number and total on read, so
    /// the two halves are joined back here.
    fn track(&self) -> Option<String> {
        let number = self.text(&ItemKey::TrackNumber)?;
        match self.text(&ItemKey::TrackTotal) {
            Some(total) if !number.contains('/') => Some(format!("{number}/{total}")),
            _ => Some(number),
        }
    }

    fn set_track(&mut self, value: String) {
        let (number, total) = match value.split_once('/') {
            Some((number, total)) => (number.trim().to_string(), total.trim().to_string()),
            None => (value, String::new()),
        };

        self.tag.insert_text(ItemKey::TrackNumber, number);
        if total.is_empty() {
            self.tag.remove_key(&ItemKey::TrackTotal);
        } else {
            self.tag.insert_text(ItemKey::TrackTotal, total);
        }
    }
}

fn item_key(field: Field) -> ItemKey {
    match field {
        Field::Artist => ItemKey::TrackArtist,
        Field::Title => ItemKey::TrackTitle,
        Field::Album => ItemKey::AlbumTitle,
        Field::Year => ItemKey::RecordingDate,
        Field::Track => ItemKey::TrackNumber,
        Field::Genre => ItemKey::Genre,
    }
}

impl TagContainer for CommentMapTags {
    fn read_fields(&self) -> MetadataRecord {
        MetadataRecord {
            artist: or_not_available(self.text(&ItemKey::TrackArtist)),
            title: or_not_available(self.text(&ItemKey::TrackTitle)),
            album: or_not_available(self.text(&ItemKey::AlbumTitle)),
            // Stored dates are shown as-is
            year: or_not_available(self.text(&ItemKey::RecordingDate)),
            track: or_not_available(self.track()),
            genre: or_not_available(self.text(&ItemKey::Genre)),
            ..MetadataRecord::default()
        }
    }

    fn read_cover(&self) -> Option<CoverImage> {
        self.tag.pictures().first().map(|picture| {
            let mime_type = picture
                .mime_type()
                .map(|mime| mime.as_str().to_string())
                .unwrap_or_else(|| JPEG_MIME_TYPE.to_string());
            CoverImage::new(picture.data().to_vec(), mime_type)
        })
    }

    fn apply_fields(&mut self, record: &MetadataRecord) {
        for (field, value) in writable_fields(record) {
            if value.is_empty() {
                continue;
            }
            match field {
                Field::Track => self.set_track(value),
                _ => {
                    self.tag.insert_text(item_key(field), value);
                }
            }
        }
    }

    fn apply_cover(&mut self, cover: &CoverImage) {
        while !self.tag.pictures().is_empty() {
            self.tag.remove_picture(self.tag.pictures().len() - 1);
        }

        self.tag.push_picture(Picture::new_unchecked(
            PictureType::CoverFront,
            Some(MimeType::Jpeg),
            None,
            cover.data.clone(),
        ));
    }

    fn save(&self, path: &Path) -> Result<()> {
        self.tag
            .save_to_path(path, WriteOptions::default())
            .map_err(|e| TagError::Write(format!("{}: {e}", path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> CommentMapTags {
        CommentMapTags {
            tag: Tag::new(TagType::VorbisComments),
        }
    }

    #[test]
    fn empty_block_reads_not_available() {
        let tags = empty();
        assert_eq!(tags.read_fields(), MetadataRecord::not_available());
        assert!(tags.read_cover().is_none());
    }

    #[test]
    fn apply_sets_only_non_empty_fields() {
        let mut tags = empty();
        tags.tag
            .insert_text(ItemKey::AlbumTitle, "Kept Album".to_string());

        let record = MetadataRecord::new("Artist", "Title")
            .with_year("1975-10")
            .with_track("7");
        tags.apply_fields(&record);

        let read = tags.read_fields();
        assert_eq!(read.artist, "Artist");
        assert_eq!(read.title, "Title");
        assert_eq!(read.album, "Kept Album");
        assert_eq!(read.year, "1975");
        assert_eq!(read.track, "7");
        assert_eq!(read.genre, "N/A");
    }

    #[test]
    fn track_total_is_joined_and_split() {
        let mut tags = empty();
        tags.apply_fields(&MetadataRecord::default().with_track("5/10"));

        assert_eq!(tags.text(&ItemKey::TrackNumber).as_deref(), Some("5"));
        assert_eq!(tags.text(&ItemKey::TrackTotal).as_deref(), Some("10"));
        assert_eq!(tags.read_fields().track, "5/10");

        tags.apply_fields(&MetadataRecord::default().with_track("6"));
        assert!(tags.text(&ItemKey::TrackTotal).is_none());
        assert_eq!(tags.read_fields().track, "6");
    }

    #[test]
    fn cover_is_replaced_not_appended() {
        let mut tags = empty();
        tags.apply_cover(&CoverImage::jpeg(vec![1, 1]));
        tags.apply_cover(&CoverImage::jpeg(vec![2, 2]));

        assert_eq!(tags.tag.pictures().len(), 1);
        let cover = tags.read_cover().unwrap();
        assert_eq!(cover.data, vec![2, 2]);
        assert_eq!(cover.mime_type, "image/jpeg");
    }
}

//! ID3v2 frame tags for MP3 files.

use super::{or_not_available, writable_fields, Field, TagContainer};
use crate::error::{Result, TagError};
use id3::frame::{Picture, PictureType};
use id3::{ErrorKind, Tag, TagLike, Version};
use songtag_core::{CoverImage, MetadataRecord, JPEG_MIME_TYPE, NOT_AVAILABLE};
use std::path::Path;
use tracing::debug;

const ARTIST: &str = "TPE1";
const TITLE: &str = "TIT2";
const ALBUM: &str = "TALB";
const TRACK: &str = "TRCK";
const GENRE: &str = "TCON";
const RECORDING_TIME: &str = "TDRC";
/// ID3v2.3 year frame, read when no recording time frame exists
const YEAR: &str = "TYER";
const PICTURE: &str = "APIC";

/// A parsed ID3v2 tag.
///
/// The whole tag is kept, so frames this codec does not touch are written
/// back unchanged.
pub struct FrameTags {
    tag: Tag,
}

impl FrameTags {
    pub fn open(path: &Path) -> Result<Self> {
        match Tag::read_from_path(path) {
            Ok(tag) => Ok(Self { tag }),
            Err(e) if matches!(e.kind, ErrorKind::NoTag) => {
                debug!(path = %path.display(), "No ID3 tag, starting empty");
                Ok(Self { tag: Tag::new() })
            }
            Err(e) => Err(TagError::Read(format!("{}: {e}", path.display()))),
        }
    }

    fn text(&self, id: &str) -> Option<String> {
        self.tag
            .get(id)
            .and_then(|frame| frame.content().text())
            .map(str::to_string)
    }

    /// Year from the recording time frame, falling back to the v2.3 year
    /// frame. Valid only when its first four characters are digits.
    fn year(&self) -> String {
        let Some(date) = self.text(RECORDING_TIME).or_else(|| self.text(YEAR)) else {
            return NOT_AVAILABLE.to_string();
        };

        match date.get(..4) {
            Some(prefix) if prefix.bytes().all(|b| b.is_ascii_digit()) => prefix.to_string(),
            _ => NOT_AVAILABLE.to_string(),
        }
    }
}

fn frame_id(field: Field) -> &'static str {
    match field {
        Field::Artist => ARTIST,
        Field::Title => TITLE,
        Field::Album => ALBUM,
        Field::Year => RECORDING_TIME,
        Field::Track => TRACK,
        Field::Genre => GENRE,
    }
}

impl TagContainer for FrameTags {
    fn read_fields(&self) -> MetadataRecord {
        MetadataRecord {
            artist: or_not_available(self.text(ARTIST)),
            title: or_not_available(self.text(TITLE)),
            album: or_not_available(self.text(ALBUM)),
            year: self.year(),
            track: or_not_available(self.text(TRACK)),
            genre: or_not_available(self.text(GENRE)),
            ..MetadataRecord::default()
        }
    }

    fn read_cover(&self) -> Option<CoverImage> {
        self.tag
            .pictures()
            .next()
            .map(|picture| CoverImage::new(picture.data.clone(), picture.mime_type.clone()))
    }

    fn apply_fields(&mut self, record: &MetadataRecord) {
        for (field, value) in writable_fields(record) {
            if !value.is_empty() {
                self.tag.set_text(frame_id(field), value);
            }
        }
    }

    fn apply_cover(&mut self, cover: &CoverImage) {
        self.tag.remove(PICTURE);
        self.tag.add_frame(Picture {
            mime_type: JPEG_MIME_TYPE.to_string(),
            picture_type: PictureType::CoverFront,
            description: String::new(),
            data: cover.data.clone(),
        });
    }

    fn save(&self, path: &Path) -> Result<()> {
        self.tag
            .write_to_path(path, Version::Id3v24)
            .map_err(|e| TagError::Write(format!("{}: {e}", path.display())))
    }
}

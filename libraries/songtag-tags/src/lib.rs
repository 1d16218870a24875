//! SongTag Tags
//!
//! Reads and writes the tag containers of the two supported audio formats:
//! - **MP3**: ID3v2 frames (`TPE1`, `TIT2`, `TALB`, `TDRC`, `TRCK`, `TCON`, `APIC`)
//! - **Opus**: Vorbis comments (`ARTIST`, `TITLE`, `ALBUM`, `DATE`,
//!   `TRACKNUMBER`, `GENRE`, `METADATA_BLOCK_PICTURE`)
//!
//! Reads report absent fields as `"N/A"`. Writes treat an empty field as
//! "leave unchanged" and keep every frame or comment they do not touch.
//!
//! # Example
//!
//! ```rust,no_run
//! use songtag_core::MetadataRecord;
//! use songtag_tags::TagCodec;
//! use std::path::Path;
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let codec = TagCodec::new();
//! let path = Path::new("/music/Queen - Bohemian Rhapsody.mp3");
//!
//! let current = codec.read(path)?;
//! println!("{} - {}", current.record.artist, current.record.title);
//!
//! let record = MetadataRecord::new("Queen", "Bohemian Rhapsody").with_year("1975");
//! codec.write(path, &record, None)?;
//! # Ok(())
//! # }
//! ```

mod codec;
mod error;
mod format;
mod worker;

pub use codec::{TagCodec, TagSnapshot};
pub use error::{Result, TagError};
pub use format::{AudioTags, CommentMapTags, FrameTags, TagContainer, TagFormat};
pub use worker::{
    TagPersistenceWorker, WriteEvent, WriteOutcome, WriteRequest, WriteStage, SUCCESS_MESSAGE,
};

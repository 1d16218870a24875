mod cover;
mod record;

pub use cover::{CoverImage, JPEG_MIME_TYPE};
pub use record::{MetadataRecord, LYRICS_ONLY_SUFFIX, NOT_AVAILABLE};

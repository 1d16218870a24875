//! SongTag Core
//!
//! Shared data model and error handling for SongTag.
//!
//! This crate provides the types every other SongTag crate passes around:
//! - **Records**: `MetadataRecord`, the normalized candidate produced by a
//!   provider and consumed by the tag writer
//! - **Cover art**: `CoverImage`, a raw image buffer with an assumed MIME type
//! - **Ranking**: year-based ordering of candidate lists
//! - **Filename parsing**: `Artist - Title` extraction from audio file names
//! - **Error Handling**: unified `SongTagError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use songtag_core::{rank_by_year, MetadataRecord};
//!
//! let mut records = vec![
//!     MetadataRecord::new("Queen", "Bohemian Rhapsody").with_year(""),
//!     MetadataRecord::new("Queen", "Bohemian Rhapsody").with_year("1975"),
//! ];
//! rank_by_year(&mut records);
//! assert_eq!(records[0].year, "1975");
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod filename;
pub mod ranking;
pub mod types;

pub use error::{Result, SongTagError};
pub use filename::parse_artist_title;
pub use ranking::{rank_by_year, year_rank, UNKNOWN_YEAR_RANK};
pub use types::{CoverImage, MetadataRecord, JPEG_MIME_TYPE, LYRICS_ONLY_SUFFIX, NOT_AVAILABLE};
